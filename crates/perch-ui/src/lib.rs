#![allow(non_snake_case)]
//! Layout primitives, text components, popovers and tooltips.
//!
//! ```rust
//! use perch_core::*;
//! use perch_ui::*;
//!
//! fn Greeting() -> View {
//!     Column(Modifier::new().padding(8.0)).child((
//!         Title("Hello", TitleLevel::Level2),
//!         Gap(4.0),
//!         P(Text("A short paragraph.")),
//!     ))
//! }
//! # let _ = Greeting;
//! ```

pub mod popover;
pub mod text;
pub mod tests;

use std::rc::Rc;

use perch_core::*;
use smallvec::SmallVec;

pub use popover::*;
pub use text::*;

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Stack(modifier: Modifier) -> View {
    View::new(ViewKind::Stack).modifier(modifier)
}

pub fn Spacer() -> View {
    Box(Modifier::new().flex_grow(1.0))
}

/// Fixed-size empty space between siblings.
pub fn Gap(size: f32) -> View {
    Box(Modifier::new().class("rc-gap").flex_none().size(size, size))
}

/// Thin rule, `size` thick.
pub fn Line(size: f32, color: Color) -> View {
    Box(Modifier::new()
        .class("rc-line")
        .flex_none()
        .flex_basis(size)
        .size(size, size)
        .background(color))
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: None,
        font_size: None,
    })
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Button {
        text: text.into(),
        on_click: Some(Rc::new(on_click)),
    })
}

/// Filled outline over `points`, used for arrows and other small glyphs.
pub fn Polygon(
    points: impl IntoIterator<Item = Vec2>,
    size: Size,
    fill: Color,
    stroke: Option<Color>,
) -> View {
    View::new(ViewKind::Polygon {
        points: points.into_iter().collect::<SmallVec<[Vec2; 4]>>(),
        width: size.width,
        height: size.height,
        fill,
        stroke,
        stroke_width: 1.0,
    })
}

pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, px: f32) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = Some(c);
        }
        self
    }
    fn size(mut self, px: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = Some(px);
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
