//! Event Pipeline
//!
//! Connects host events to the state machines and the state machines to
//! the document.
//!
//! # Pipeline Architecture
//!
//! ```text
//! PageEvent → BootstrapRunner → ScrollTracker → HeaderStateMachine → BodyScrollFlag
//!                             → NavOverlayController / ScrollTopButton
//!                             → Directives → Dom
//! ```
//!
//! ## Key Design Principles
//!
//! - **Run to completion**: every event is handled synchronously, in order
//! - **One-way flow**: state machines write to the document, never read back
//!   their own output
//! - **Isolation**: one-shot load steps cannot take each other down

pub mod bootstrap;
pub mod events;

// Re-exports
pub use bootstrap::{BootReport, BootSteps, BootstrapOptions, BootstrapRunner};
pub use events::{ClickOutcome, Handled, PageEvent};
