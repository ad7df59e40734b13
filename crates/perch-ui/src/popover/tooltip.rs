use std::rc::Rc;

use perch_core::*;

use super::anchor_wrapper::{AnchorWrapperConfig, PopoverAnchorWrapper};
use super::content_wrapper::{ContentWrapperConfig, PopoverContentWrapper};
use crate::{Button, Column, Row, Text, ViewExt};

const COMPONENT: &str = "popover-tooltip";
const PARTS: &[&str] = &["body", "close"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipStatus {
    Warning,
    Error,
    Info,
    Success,
}

impl TooltipStatus {
    pub fn color(self, theme: &Theme) -> Color {
        match self {
            TooltipStatus::Warning => theme.tooltip_warning,
            TooltipStatus::Error => theme.tooltip_error,
            TooltipStatus::Info => theme.tooltip_info,
            TooltipStatus::Success => theme.tooltip_success,
        }
    }
}

#[derive(Clone)]
pub struct TooltipConfig {
    pub id: String,
    pub label: String,
    pub showing: Signal<bool>,
    pub position: Position,
    pub status: Option<TooltipStatus>,
    pub no_clip: bool,
    pub width: Option<Length>,
    pub padding: PaddingValues,
    pub close_button: bool,
    /// Runs on close and on backdrop clicks instead of hiding the tooltip.
    pub on_cancel: Option<Callback>,
    pub modifier: Modifier,
    pub parts: Parts,
}

impl TooltipConfig {
    pub fn new(id: impl Into<String>, label: impl Into<String>, showing: Signal<bool>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            showing,
            position: Position::BelowCenter,
            status: None,
            no_clip: true,
            width: None,
            padding: PaddingValues::symmetric(3.0, 8.0),
            close_button: false,
            on_cancel: None,
            modifier: Modifier::new(),
            parts: Parts::new(),
        }
    }

    pub fn position(mut self, p: Position) -> Self {
        self.position = p;
        self
    }

    pub fn status(mut self, s: TooltipStatus) -> Self {
        self.status = Some(s);
        self
    }

    pub fn no_clip(mut self, no_clip: bool) -> Self {
        self.no_clip = no_clip;
        self
    }

    pub fn width(mut self, w: impl Into<Length>) -> Self {
        self.width = Some(w.into());
        self
    }

    pub fn padding(mut self, p: PaddingValues) -> Self {
        self.padding = p;
        self
    }

    pub fn close_button(mut self) -> Self {
        self.close_button = true;
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Rc::new(f));
        self
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn parts(mut self, parts: Parts) -> Self {
        self.parts = parts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.is_empty() {
            return Err(ConfigError::EmptyKey {
                component: COMPONENT,
            });
        }
        if let Some(Length::Px(v)) = self.width
            && v < 0.0
        {
            return Err(ConfigError::NegativeDimension {
                component: COMPONENT,
                field: "width",
                value: v,
            });
        }
        self.parts.validate(COMPONENT, PARTS)
    }
}

fn body_style(status: Option<TooltipStatus>, theme: &Theme) -> Modifier {
    let m = Modifier::new().class("rc-popover-tooltip-body").text_color(theme.on_tooltip);
    if status == Some(TooltipStatus::Info) {
        m.font_size(14.0).padding(4.0)
    } else {
        m.font_size(12.0).font_weight(700).text_align(TextAlign::Center)
    }
}

/// Small colored popover with a text label.
pub fn PopoverTooltip(cfg: TooltipConfig, anchor: View) -> Result<View, ConfigError> {
    cfg.validate()?;

    let theme = theme();
    let color = cfg
        .status
        .map_or(theme.tooltip_default, |s| s.color(&theme));

    let close = cfg.close_button.then(|| {
        let (on_cancel, showing) = (cfg.on_cancel.clone(), cfg.showing.clone());
        Row(cfg.parts.apply(
            "close",
            Modifier::new()
                .class("rc-popover-tooltip-close")
                .justify_content(JustifyContent::FlexEnd),
        ))
        .child(Button("×", move || match &on_cancel {
            Some(f) => f(),
            None => showing.set(false),
        }))
    });
    let body = Column(cfg.parts.apply("body", body_style(cfg.status, &theme)))
        .child((close, Text(cfg.label.clone())));

    let anchor_cfg = AnchorWrapperConfig::new(cfg.id.clone(), cfg.showing.clone())
        .position(cfg.position)
        .modifier(Modifier::new().class("rc-popover-tooltip").merge(&cfg.modifier));

    PopoverAnchorWrapper(anchor_cfg, anchor, |ctx| {
        let mut content = ContentWrapperConfig::new(ctx)
            .no_clip(cfg.no_clip)
            .border(|b| {
                let b = b
                    .tooltip_style()
                    .popover_color(color)
                    .padding(cfg.padding)
                    .arrow(6.0, 12.0, 4.0);
                match cfg.width {
                    Some(w) => b.width(w),
                    None => b,
                }
            });
        content.on_cancel = cfg.on_cancel.clone();
        PopoverContentWrapper(content, body)
    })
}
