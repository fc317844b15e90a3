//! Header State Module
//!
//! Scroll-driven header state machine:
//! - `scrolled` flag once the page is past the scrolled threshold
//! - Sticky pinning for `sticky-top` / `fixed-top` headers
//! - Hide-on-scroll-down / pin-on-scroll-up for `scroll-up-sticky` headers
//!
//! The computation is split in two pure steps so both can be tested
//! without a document:
//!
//! ```text
//! (ScrollSample, HeaderConfig) → compute_header_frame → HeaderFrame
//! (HeaderState, HeaderConfig)  → header_directives    → [Directive]
//! ```
//!
//! [`HeaderStateMachine`] glues them to a cached header element and applies
//! the directive list in one go, so the document never sees a half-applied
//! state.

use spark_signals::{signal, Signal};
use tracing::{debug, trace};

use super::scroll::ScrollSample;
use crate::dom::{apply_all, Directive, Dom, NodeId, StylePriority};
use crate::types::{
    HeaderFrame, HeaderMode, HeaderState, ScrollDirection, DEFAULT_HIDDEN_OFFSET_EXTRA_PX,
    DEFAULT_SCROLLED_THRESHOLD_PX, DEFAULT_STICKY_THRESHOLD_PX, HEADER_CLASS_SELECTOR,
    HEADER_ID_SELECTOR, STICKY_CLASS,
};

// =============================================================================
// CONFIG
// =============================================================================

/// Header behavior parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConfig {
    pub mode: HeaderMode,
    /// Measured header height in pixels.
    pub height_px: u32,
    /// Offset past which the page counts as scrolled (strictly greater).
    pub scrolled_threshold_px: u32,
    /// Offset past which sticky-top / fixed-top headers pin.
    pub sticky_threshold_px: u32,
    /// Extra distance a hidden header is pushed beyond its own height.
    pub hidden_offset_extra_px: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            mode: HeaderMode::None,
            height_px: 0,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            sticky_threshold_px: DEFAULT_STICKY_THRESHOLD_PX,
            hidden_offset_extra_px: DEFAULT_HIDDEN_OFFSET_EXTRA_PX,
        }
    }
}

impl HeaderConfig {
    pub fn new(mode: HeaderMode, height_px: u32) -> Self {
        Self {
            mode,
            height_px,
            ..Default::default()
        }
    }

    /// Read mode and height from a header element.
    pub fn detect<D: Dom + ?Sized>(dom: &D, header: NodeId) -> Self {
        let mode = HeaderMode::from_classes(|class| dom.has_class(header, class));
        Self::new(mode, dom.offset_height(header))
    }

    /// Same config with a re-measured height. A zero measurement (element
    /// not rendered) keeps the previous height.
    pub fn with_height(self, height_px: u32) -> Self {
        if height_px == 0 {
            return self;
        }
        Self { height_px, ..self }
    }

    /// Distance the header is pushed up while hidden.
    pub fn hidden_offset_px(&self) -> u32 {
        self.height_px.saturating_add(self.hidden_offset_extra_px)
    }
}

// =============================================================================
// PURE COMPUTATION
// =============================================================================

/// Compute the header frame for one scroll sample.
pub fn compute_header_frame(sample: &ScrollSample, config: &HeaderConfig) -> HeaderFrame {
    let offset = sample.offset;
    let scrolled = offset > config.scrolled_threshold_px;

    let state = match config.mode {
        HeaderMode::None => HeaderState::Normal,
        HeaderMode::StickyTop | HeaderMode::FixedTop => {
            if offset > config.sticky_threshold_px {
                HeaderState::Pinned
            } else {
                HeaderState::Normal
            }
        }
        HeaderMode::ScrollUpSticky => {
            if offset <= config.height_px {
                HeaderState::Normal
            } else if sample.direction() == ScrollDirection::Down {
                HeaderState::Hidden
            } else {
                HeaderState::Pinned
            }
        }
    };

    HeaderFrame { state, scrolled }
}

/// Map a header state to the directives that render it.
///
/// Every list fully determines the header's sticky-related presentation,
/// so applying one never leaves traces of another state behind.
pub fn header_directives(state: HeaderState, config: &HeaderConfig) -> Vec<Directive> {
    match config.mode {
        HeaderMode::None => Vec::new(),
        HeaderMode::StickyTop | HeaderMode::FixedTop => match state {
            HeaderState::Pinned => vec![Directive::AddClass(STICKY_CLASS)],
            _ => vec![Directive::RemoveClass(STICKY_CLASS)],
        },
        HeaderMode::ScrollUpSticky => match state {
            HeaderState::Normal => vec![
                Directive::RemoveStyle("top"),
                Directive::RemoveStyle("position"),
            ],
            HeaderState::Pinned => vec![
                sticky_position(),
                Directive::SetStyle {
                    property: "top",
                    value: "0".to_string(),
                    priority: StylePriority::Normal,
                },
            ],
            HeaderState::Hidden => vec![
                sticky_position(),
                Directive::SetStyle {
                    property: "top",
                    value: format!("-{}px", config.hidden_offset_px()),
                    priority: StylePriority::Normal,
                },
            ],
        },
    }
}

fn sticky_position() -> Directive {
    Directive::SetStyle {
        property: "position",
        value: "sticky".to_string(),
        priority: StylePriority::Important,
    }
}

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Owns the header's state and its cached element handle.
pub struct HeaderStateMachine {
    header: Option<NodeId>,
    config: HeaderConfig,
    state: Signal<HeaderState>,
    scrolled: Signal<bool>,
    /// Re-measure the header height on every recompute.
    remeasure: bool,
    /// Last (state, height) pushed to the document.
    applied: Option<(HeaderState, u32)>,
}

impl HeaderStateMachine {
    /// Locate the header (`#header`, then `.header`) and detect its config.
    pub fn new<D: Dom + ?Sized>(dom: &D) -> Self {
        let header = Self::locate(dom);
        let config = match header {
            Some(node) => HeaderConfig::detect(dom, node),
            None => {
                debug!("no header element, header behavior disabled");
                HeaderConfig::default()
            }
        };

        Self::with_config(header, config)
    }

    /// The header element: `#header`, falling back to `.header`.
    pub fn locate<D: Dom + ?Sized>(dom: &D) -> Option<NodeId> {
        dom.query(HEADER_ID_SELECTOR)
            .or_else(|| dom.query(HEADER_CLASS_SELECTOR))
    }

    pub fn with_config(header: Option<NodeId>, config: HeaderConfig) -> Self {
        Self {
            header,
            config,
            state: signal(HeaderState::Normal),
            scrolled: signal(false),
            remeasure: true,
            applied: None,
        }
    }

    /// Use `config` as given. The height is never re-measured.
    pub fn with_fixed_config(header: Option<NodeId>, config: HeaderConfig) -> Self {
        Self {
            remeasure: false,
            ..Self::with_config(header, config)
        }
    }

    /// Recompute from a sample and push the result to the document.
    ///
    /// Without a header element the positional state stays `Normal` and the
    /// document is left alone; the `scrolled` flag is still reported since
    /// it is independent of the header.
    pub fn recompute<D: Dom + ?Sized>(&mut self, dom: &mut D, sample: &ScrollSample) -> HeaderFrame {
        let Some(header) = self.header else {
            let frame = compute_header_frame(sample, &HeaderConfig { mode: HeaderMode::None, ..self.config });
            self.scrolled.set(frame.scrolled);
            return frame;
        };

        let config = if self.remeasure {
            self.config.with_height(dom.offset_height(header))
        } else {
            self.config
        };
        let frame = compute_header_frame(sample, &config);

        let key = (frame.state, config.height_px);
        if self.applied != Some(key) {
            apply_all(dom, header, &header_directives(frame.state, &config));
            self.applied = Some(key);
            trace!(state = ?frame.state, offset = sample.offset, "header state applied");
        }

        self.state.set(frame.state);
        self.scrolled.set(frame.scrolled);
        frame
    }

    pub fn state(&self) -> HeaderState {
        self.state.get()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    /// Reactive handle on the header state.
    pub fn state_signal(&self) -> Signal<HeaderState> {
        self.state.clone()
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn header(&self) -> Option<NodeId> {
        self.header
    }
}
