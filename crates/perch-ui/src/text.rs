//! Labels, titles and paragraphs.

use perch_core::*;

use crate::{Column, IntoChildren, Line, Row, Text, TextStyle, ViewExt};

pub fn Label(text: impl Into<String>) -> View {
    Row(Modifier::new()
        .class("rc-label-wrapper")
        .display(Display::InlineFlex)
        .align_items(AlignItems::FlexStart))
    .child(Text(text).modifier(Modifier::new().class("rc-label")))
}

pub fn ClickableLabel(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    let mut label = Label(text);
    label.modifier = label.modifier.on_click(on_click);
    label
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TitleLevel {
    Level1,
    Level2,
    #[default]
    Level3,
    Level4,
}

impl TitleLevel {
    pub fn font_size(self) -> f32 {
        match self {
            TitleLevel::Level1 => 42.0,
            TitleLevel::Level2 => 33.0,
            TitleLevel::Level3 => 24.0,
            TitleLevel::Level4 => 18.0,
        }
    }

    fn class(self) -> &'static str {
        match self {
            TitleLevel::Level1 => "level1",
            TitleLevel::Level2 => "level2",
            TitleLevel::Level3 => "level3",
            TitleLevel::Level4 => "level4",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TitleConfig {
    pub label: String,
    pub level: TitleLevel,
    /// Draw a 1px rule under the text.
    pub underline: bool,
    pub margin_top: Length,
    pub margin_bottom: Length,
    pub modifier: Modifier,
}

impl TitleConfig {
    pub fn new(label: impl Into<String>, level: TitleLevel) -> Self {
        Self {
            label: label.into(),
            level,
            underline: false,
            margin_top: Length::Px(10.0),
            margin_bottom: Length::Px(5.0),
            modifier: Modifier::new(),
        }
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }
}

pub fn Title(label: impl Into<String>, level: TitleLevel) -> View {
    StyledTitle(TitleConfig::new(label, level))
}

pub fn StyledTitle(cfg: TitleConfig) -> View {
    let text = Text(cfg.label)
        .size(cfg.level.font_size())
        .modifier(Modifier::new().class("rc-title").class(cfg.level.class()));

    let rule = cfg.underline.then(|| Line(1.0, theme().rule));

    Column(
        Modifier::new()
            .class("rc-title-wrapper")
            .flex_none()
            .margin_vertical(cfg.margin_top, cfg.margin_bottom)
            .merge(&cfg.modifier),
    )
    .child((text, rule))
}

/// Paragraph block with a fixed reading width.
pub fn P(children: impl IntoChildren) -> View {
    Column(
        Modifier::new()
            .class("rc-p")
            .flex_none()
            .width(450.0)
            .min_width(450.0)
            .font_size(14.0),
    )
    .child(children)
}
