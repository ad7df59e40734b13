//! Capabilities the host environment lends to components.
//!
//! Components never touch the DOM directly. Whatever renders a `View` tree
//! (the wasm DOM host in `perch-platform`, or a test double) implements
//! [`Host`], and lifecycle hooks receive it to measure live nodes.

use crate::{Rect, Size, View};

/// Geometry of a live node, in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Border box as reported by the layout engine.
    pub rect: Rect,
    /// Content box (client width/height).
    pub client: Size,
}

pub trait Host {
    /// Reflect `root` in the host's node tree. Called after composition and
    /// before any lifecycle hook of the same frame.
    fn present(&mut self, root: &View) {
        let _ = root;
    }

    /// Current viewport size in pixels.
    fn viewport(&self) -> Size;

    /// Measure the node rendered from the `View` carrying `key`.
    /// `None` when no such node is attached.
    fn measure(&self, key: &str) -> Option<Measurement>;
}
