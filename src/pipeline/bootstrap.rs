//! Bootstrap - Wires the page chrome to host events.
//!
//! Construction resolves every element handle once:
//!
//! ```text
//! 1. ScrollTracker + HeaderStateMachine + BodyScrollFlag + ScrollTopButton
//! 2. NavOverlayController
//! ```
//!
//! The first `load` then runs the one-shot steps in order, each isolated
//! from the others:
//!
//! ```text
//! header refresh → preloader → scroll top → animate → carousel → sliders → lightbox
//! ```
//!
//! A step whose element or library is absent is skipped; a step that fails
//! or panics is logged and recorded in the [`BootReport`], and the next
//! step still runs.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error, info, trace};

use super::events::{ClickOutcome, Handled, PageEvent};
use crate::collab::{generate_indicators, init_sliders, AnimateOptions, Collaborators, SliderReport};
use crate::dom::{Dom, NodeId};
use crate::error::{ChromeError, Result};
use crate::state::{
    BodyScrollFlag, HeaderConfig, HeaderStateMachine, NavOverlayController, ScrollTopButton,
    ScrollTracker,
};
use crate::types::{HeaderFrame, DEFAULT_SCROLL_TOP_THRESHOLD_PX, LIGHTBOX_SELECTOR, PRELOADER_SELECTOR};

// =============================================================================
// OPTIONS & REPORT
// =============================================================================

/// Page-level overrides. Defaults match the stock template.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapOptions {
    /// Replace the header config detected from the document.
    pub header: Option<HeaderConfig>,
    pub animate: AnimateOptions,
    pub scroll_top_threshold_px: u32,
    pub lightbox_selector: String,
}

impl Default for BootstrapOptions {
    fn default() -> Self {
        Self {
            header: None,
            animate: AnimateOptions::default(),
            scroll_top_threshold_px: DEFAULT_SCROLL_TOP_THRESHOLD_PX,
            lightbox_selector: LIGHTBOX_SELECTOR.to_string(),
        }
    }
}

bitflags::bitflags! {
    /// One-shot load steps.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BootSteps: u8 {
        const PRELOADER = 1 << 0;
        const SCROLL_TOP = 1 << 1;
        const ANIMATE = 1 << 2;
        const CAROUSEL = 1 << 3;
        const SLIDERS = 1 << 4;
        const LIGHTBOX = 1 << 5;
    }
}

/// What the load pass did.
#[derive(Debug, Default)]
pub struct BootReport {
    /// Steps that ran to completion.
    pub completed: BootSteps,
    /// Steps with nothing to do (element or library absent).
    pub skipped: BootSteps,
    /// Steps that failed or panicked.
    pub failed: BootSteps,
    /// Header state after the initial refresh.
    pub header: HeaderFrame,
    /// Per-instance slider outcome, when a slider library is present.
    pub sliders: Option<SliderReport>,
    pub faults: Vec<ChromeError>,
}

/// Outcome of a single step before it is folded into the report.
enum Step {
    Done,
    Skipped,
}

// =============================================================================
// RUNNER
// =============================================================================

pub struct BootstrapRunner {
    tracker: ScrollTracker,
    header: HeaderStateMachine,
    body_flag: BodyScrollFlag,
    scroll_top: ScrollTopButton,
    nav: NavOverlayController,
    collaborators: Collaborators,
    options: BootstrapOptions,
    loaded: bool,
}

impl BootstrapRunner {
    pub fn new<D: Dom + ?Sized>(dom: &D, collaborators: Collaborators) -> Self {
        Self::with_options(dom, collaborators, BootstrapOptions::default())
    }

    pub fn with_options<D: Dom + ?Sized>(
        dom: &D,
        collaborators: Collaborators,
        options: BootstrapOptions,
    ) -> Self {
        // 1. Scroll-driven parts
        let header = match options.header {
            Some(config) => {
                HeaderStateMachine::with_fixed_config(HeaderStateMachine::locate(dom), config)
            }
            None => HeaderStateMachine::new(dom),
        };
        let body_flag = BodyScrollFlag::new(dom);
        let scroll_top = ScrollTopButton::with_threshold(dom, options.scroll_top_threshold_px);

        // 2. Click-driven parts
        let nav = NavOverlayController::new(dom);

        debug!(
            header = ?header.config().mode,
            nav = nav.is_active(),
            "page chrome constructed"
        );

        Self {
            tracker: ScrollTracker::new(),
            header,
            body_flag,
            scroll_top,
            nav,
            collaborators,
            options,
            loaded: false,
        }
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    pub fn dispatch<D: Dom + ?Sized>(&mut self, dom: &mut D, event: PageEvent) -> Handled {
        match event {
            PageEvent::Scroll { offset } => Handled::Scroll(self.on_scroll(dom, offset)),
            PageEvent::Load { offset } => Handled::Load(self.on_load(dom, offset)),
            PageEvent::Click { target } => Handled::Click(self.on_click(dom, target)),
            PageEvent::Navigate => Handled::Navigate(self.on_navigate(dom)),
        }
    }

    /// Full synchronous pass: tracker → header → body flag → scroll top.
    pub fn on_scroll<D: Dom + ?Sized>(&mut self, dom: &mut D, offset: i64) -> HeaderFrame {
        let frame = self.refresh_header(dom, offset);
        self.scroll_top.update(dom, self.tracker.last_offset());
        frame
    }

    pub fn on_click<D: Dom + ?Sized>(&mut self, dom: &mut D, target: NodeId) -> ClickOutcome {
        let prevent_default = self.scroll_top.handle_click(dom, target);
        let nav = self.nav.handle_click(dom, target);
        ClickOutcome {
            prevent_default,
            nav,
        }
    }

    pub fn on_navigate<D: Dom + ?Sized>(&mut self, dom: &mut D) -> bool {
        self.nav.on_navigate(dom)
    }

    /// Run the one-shot load steps. Returns `None` on any load after the
    /// first.
    pub fn on_load<D: Dom + ?Sized>(&mut self, dom: &mut D, offset: i64) -> Option<BootReport> {
        if self.loaded {
            debug!("page already bootstrapped, load ignored");
            return None;
        }
        self.loaded = true;

        let mut report = BootReport {
            header: self.refresh_header(dom, offset),
            ..Default::default()
        };

        let scroll_offset = self.tracker.last_offset();
        let scroll_top = &mut self.scroll_top;
        let collaborators = &mut self.collaborators;
        let options = &self.options;

        run_step(&mut report, BootSteps::PRELOADER, "preloader", || {
            match dom.query(PRELOADER_SELECTOR) {
                Some(preloader) => {
                    dom.remove_node(preloader);
                    Ok(Step::Done)
                }
                None => Ok(Step::Skipped),
            }
        });

        run_step(&mut report, BootSteps::SCROLL_TOP, "scroll top", || {
            Ok(match scroll_top.update(dom, scroll_offset) {
                Some(_) => Step::Done,
                None => Step::Skipped,
            })
        });

        run_step(&mut report, BootSteps::ANIMATE, "animate", || {
            match collaborators.animator.as_mut() {
                Some(animator) => animator.init(&options.animate).map(|()| Step::Done),
                None => Ok(Step::Skipped),
            }
        });

        run_step(&mut report, BootSteps::CAROUSEL, "carousel", || {
            Ok(match generate_indicators(dom) {
                0 => Step::Skipped,
                _ => Step::Done,
            })
        });

        let mut sliders = None;
        run_step(&mut report, BootSteps::SLIDERS, "sliders", || {
            let Some(factory) = collaborators.sliders.as_mut() else {
                return Ok(Step::Skipped);
            };
            let slider_report = init_sliders(dom, &mut **factory);
            let step = if slider_report.initialized + slider_report.failed() == 0 {
                Step::Skipped
            } else {
                Step::Done
            };
            sliders = Some(slider_report);
            Ok(step)
        });
        report.sliders = sliders;

        run_step(&mut report, BootSteps::LIGHTBOX, "lightbox", || {
            match collaborators.lightbox.as_mut() {
                Some(lightbox) => lightbox.init(&options.lightbox_selector).map(|()| Step::Done),
                None => Ok(Step::Skipped),
            }
        });

        info!(
            completed = ?report.completed,
            skipped = ?report.skipped,
            failed = ?report.failed,
            "page chrome bootstrapped"
        );
        Some(report)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn header(&self) -> &HeaderStateMachine {
        &self.header
    }

    pub fn nav(&self) -> &NavOverlayController {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavOverlayController {
        &mut self.nav
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn scroll_top(&self) -> &ScrollTopButton {
        &self.scroll_top
    }

    pub fn body_flag(&self) -> &BodyScrollFlag {
        &self.body_flag
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn refresh_header<D: Dom + ?Sized>(&mut self, dom: &mut D, offset: i64) -> HeaderFrame {
        let sample = self.tracker.sample(offset);
        let frame = self.header.recompute(dom, &sample);
        self.body_flag.apply(dom, frame.scrolled);
        trace!(offset = sample.offset, direction = ?sample.direction(), state = ?frame.state, "scroll");
        frame
    }
}

/// Run one load step with panic isolation and fold it into the report.
fn run_step(
    report: &mut BootReport,
    flag: BootSteps,
    name: &'static str,
    step: impl FnOnce() -> Result<Step>,
) {
    let outcome = catch_unwind(AssertUnwindSafe(step)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(ChromeError::Fault {
            step: name,
            message,
        })
    });

    match outcome {
        Ok(Step::Done) => report.completed |= flag,
        Ok(Step::Skipped) => {
            debug!("{} skipped", name);
            report.skipped |= flag;
        }
        Err(e) => {
            error!("Failed to bootstrap {}: {}", name, e);
            report.failed |= flag;
            report.faults.push(e);
        }
    }
}
