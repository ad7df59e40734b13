//! # Theming
//!
//! Perch uses a thread‑local “composition local” for the colors components
//! fall back to when their configuration leaves a color unset.
//!
//! Override it for a subtree with `with_theme`:
//!
//! ```rust
//! use perch_core::*;
//!
//! let dark = Theme {
//!     popover_background: Color::from_hex("#222222"),
//!     popover_border: Color::from_hex("#444444"),
//!     ..Theme::default()
//! };
//!
//! with_theme(dark, || {
//!     assert_eq!(theme().popover_background, Color::from_hex("#222222"));
//! });
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}

fn local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Default colors for popovers, tooltips and text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Panel fill when no popover color is configured.
    pub popover_background: Color,
    /// Panel outline and arrow stroke.
    pub popover_border: Color,
    /// Arrow fill next to a title bar.
    pub popover_title_background: Color,
    /// Text on the default panel.
    pub on_popover: Color,
    /// Backdrop fill; its opacity is configured per popover.
    pub backdrop: Color,

    pub tooltip_default: Color,
    pub tooltip_info: Color,
    pub tooltip_success: Color,
    pub tooltip_warning: Color,
    pub tooltip_error: Color,
    /// Text on tooltips of every status.
    pub on_tooltip: Color,

    /// Underline of titles.
    pub rule: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            popover_background: Color::WHITE,
            popover_border: Color(0, 0, 0, 51),
            popover_title_background: Color::from_hex("#f7f7f7"),
            on_popover: Color::from_hex("#333333"),
            backdrop: Color::BLACK,

            tooltip_default: Color::BLACK,
            tooltip_info: Color::from_hex("#333333"),
            tooltip_success: Color::from_hex("#13C200"),
            tooltip_warning: Color::from_hex("#f57c00"),
            tooltip_error: Color::from_hex("#d50000"),
            on_tooltip: Color::WHITE,

            rule: Color::from_hex("#cccccc"),
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn theme() -> Theme {
    local::<Theme>()
}
