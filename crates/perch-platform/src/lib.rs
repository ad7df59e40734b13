//! Browser host for Perch.
//!
//! `DomHost` implements [`perch_core::Host`] over the DOM: every frame it
//! rebuilds the element tree from the presented `View`, gives keyed views
//! their key as element id, and measures them with `getBoundingClientRect`.
//! `run_web_app` wires logging and the `requestAnimationFrame` loop.
//!
//! ```rust,ignore
//! use perch_core::*;
//! use perch_ui::*;
//!
//! #[wasm_bindgen::prelude::wasm_bindgen(start)]
//! pub fn start() -> Result<(), wasm_bindgen::JsValue> {
//!     let showing = signal(false);
//!     perch_platform::run_web_app("app", move |_| {
//!         let toggle = showing.clone();
//!         PopoverTooltip(
//!             TooltipConfig::new("hint", "Saved to drafts", showing.clone()),
//!             Button("Save", move || toggle.update(|s| *s = !*s)),
//!         )
//!         .unwrap_or_else(|e| Text(e.to_string()))
//!     })
//! }
//! ```

pub mod dom;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;
