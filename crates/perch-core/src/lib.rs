//! # Views, signals and lifecycle
//!
//! Perch describes UI as data: a component is a plain function returning a
//! [`View`] (kind + [`Modifier`] + children). A host renders the tree, and
//! the [`Scheduler`] re-runs composition whenever state changes.
//!
//! There are three main pieces:
//!
//! - `Signal<T>`: observable, reactive value.
//! - `use_instance`: keyed, lifecycle‑aware state with mount/update/unmount hooks.
//! - `observe` / `effect`: reactive rules and side‑effects with cleanup.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use perch_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Reads participate in a dependency graph: a `get()` inside `observe` makes
//! the rule re-run on every later write.
//!
//! ```rust
//! use perch_core::*;
//!
//! let showing = signal(true);
//! let resets = signal(0);
//! let _rule = observe({
//!     let (showing, resets) = (showing.clone(), resets.clone());
//!     move || {
//!         if !showing.get() {
//!             resets.update(|n| *n += 1);
//!         }
//!     }
//! });
//! showing.set(false);
//! assert_eq!(resets.get_untracked(), 1);
//! ```
//!
//! ## Instances and hooks
//!
//! State that must survive across frames, and be dropped when the component
//! stops rendering, lives in an instance implementing [`Lifecycle`]:
//!
//! ```rust
//! use perch_core::*;
//!
//! struct Probe(Signal<f32>);
//!
//! impl Lifecycle for Probe {
//!     fn on_update(&self, host: &dyn Host) {
//!         if let Some(m) = host.measure("probe") {
//!             self.0.set_if_changed(m.rect.w);
//!         }
//!     }
//! }
//!
//! fn Measured() -> View {
//!     let probe = use_instance("probe", || Probe(signal(0.0)));
//!     View::new(ViewKind::Box)
//!         .key("probe")
//!         .modifier(Modifier::new().width(probe.0.get() + 10.0))
//! }
//! # let _ = Measured;
//! ```
//!
//! Hooks run after the host has presented the frame, so measurements always
//! reflect the tree just composed.

#![allow(non_snake_case)]

pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod host;
pub mod lifecycle;
pub mod locals;
pub mod modifier;
pub mod position;
pub mod prelude;
pub mod reactive;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod view;

pub use color::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use host::*;
pub use lifecycle::*;
pub use locals::*;
pub use modifier::*;
pub use position::*;
pub use prelude::*;
pub use reactive::*;
pub use runtime::*;
pub use signal::*;
pub use view::*;
