//! # site-chrome
//!
//! Scroll- and click-driven page chrome for template websites.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! observable controller state.
//!
//! ## Architecture
//!
//! The host document is a capability ([`dom::Dom`]) handed to each call;
//! controllers cache the element handles they need once and express every
//! change as a declarative [`dom::Directive`]. Third-party page libraries
//! (sliders, lightbox, animate-on-scroll) are injected through
//! [`collab::Collaborators`].
//!
//! ```text
//! scroll/load/click → BootstrapRunner → state machines → directives → Dom
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Visual states, modes, selectors and class names
//! - [`dom`] - Document capability, directives, in-memory document
//! - [`state`] - Scroll tracker, header, body flag, nav overlay, scroll top
//! - [`collab`] - Slider / lightbox / animator traits, carousel indicators
//! - [`pipeline`] - Page events and the bootstrap runner
//! - [`error`] - Error types

pub mod collab;
pub mod dom;
pub mod error;
pub mod pipeline;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{ChromeError, Result};

pub use dom::{Directive, Dom, ElementSpec, MemoryDocument, NodeId, ScrollBehavior, StylePriority};

pub use state::{
    compute_header_frame, header_directives, BodyScrollFlag, HeaderConfig, HeaderStateMachine,
    NavClick, NavOverlayController, ScrollSample, ScrollTopButton, ScrollTracker,
};

pub use collab::{AnimateOptions, Collaborators, Lightbox, ScrollAnimator, SliderFactory, SliderReport};

pub use pipeline::{
    BootReport, BootSteps, BootstrapOptions, BootstrapRunner, ClickOutcome, Handled, PageEvent,
};
