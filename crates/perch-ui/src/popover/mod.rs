//! Popovers and tooltips.
//!
//! A popover is assembled from nested pieces:
//!
//! ```text
//! PopoverAnchorWrapper          position cells, anchor + point layout
//! └─ point (zero-size, relative)
//!    └─ PopoverContentWrapper   backdrop, optional fixed positioning
//!       └─ PopoverBorder        measured panel: arrow, title, content
//! ```
//!
//! ```rust
//! use perch_core::*;
//! use perch_ui::*;
//!
//! fn Help(showing: &Signal<bool>) -> Result<View, ConfigError> {
//!     let cfg = AnchorWrapperConfig::new("help", showing.clone()).position(Position::RightCenter);
//!     let close = showing.clone();
//!     PopoverAnchorWrapper(cfg, Text("?"), |ctx| {
//!         PopoverContentWrapper(
//!             ContentWrapperConfig::new(ctx)
//!                 .title(PopoverTitleConfig::new("Help"))
//!                 .on_cancel(move || close.set(false))
//!                 .border(|b| b.width(250.0)),
//!             Text("Click outside to dismiss."),
//!         )
//!     })
//! }
//! # let _ = Help;
//! ```

mod anchor_wrapper;
mod arrow;
mod backdrop;
mod border;
mod content_wrapper;
pub mod geometry;
mod title;
mod tooltip;

pub use anchor_wrapper::*;
pub use arrow::*;
pub use backdrop::*;
pub use border::*;
pub use content_wrapper::*;
pub use title::*;
pub use tooltip::*;
