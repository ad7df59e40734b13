use perch_core::*;

use crate::{Button, Row, Text, TextStyle, ViewExt};

#[derive(Clone)]
pub struct PopoverTitleConfig {
    pub title: String,
    pub close_button: bool,
    /// Runs on close instead of hiding the popover.
    pub on_close: Option<Callback>,
}

impl PopoverTitleConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            close_button: true,
            on_close: None,
        }
    }

    pub fn no_close_button(mut self) -> Self {
        self.close_button = false;
        self
    }

    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(std::rc::Rc::new(f));
        self
    }
}

impl std::fmt::Debug for PopoverTitleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PopoverTitleConfig")
            .field("title", &self.title)
            .field("close_button", &self.close_button)
            .field("on_close", &self.on_close.as_ref().map(|_| "..."))
            .finish()
    }
}

/// Header row of a popover panel.
pub fn PopoverTitle(cfg: &PopoverTitleConfig, showing: &Signal<bool>) -> View {
    let close = cfg.close_button.then(|| {
        let on_close = cfg.on_close.clone();
        let showing = showing.clone();
        Button("×", move || match &on_close {
            Some(f) => f(),
            None => showing.set(false),
        })
        .modifier(Modifier::new().class("close").class("rc-popover-title-close"))
    });

    Row(Modifier::new()
        .class("popover-title")
        .class("rc-popover-title")
        .font_size(18.0)
        .justify_content(JustifyContent::SpaceBetween)
        .align_items(AlignItems::Center))
    .child((Text(cfg.title.clone()).size(18.0), close))
}
