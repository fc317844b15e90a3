//! State Module - Page chrome state machines
//!
//! - **Scroll** - Last-known offset and scroll direction
//! - **Header** - Normal / pinned / hidden header, scrolled flag
//! - **Body flag** - `scrolled` marker on `<body>`
//! - **Nav** - Mobile navigation overlay open/closed
//! - **Scroll top** - Back-to-top button visibility and click

mod body_flag;
mod header;
mod nav;
mod scroll;
mod scroll_top;

pub use body_flag::*;
pub use header::*;
pub use nav::*;
pub use scroll::*;
pub use scroll_top::*;
