//! The floating panel: arrow, optional title and content.
//!
//! A border goes through three states per show-cycle:
//!
//! 1. **Unmeasured.** First frame. Rendered far off-screen and transparent so
//!    the host can lay it out. `on_mount` records its size.
//! 2. **Measuring.** Placed next to its point from the recorded size, still
//!    transparent. `on_update` checks the live rect against the viewport and,
//!    once per cycle, flips to a better position when it is clipped.
//! 3. **Placed.** Metrics re-measured, panel made visible.
//!
//! The state lives in a keyed instance, so hiding the popover (which stops
//! rendering the border) resets it.

use std::cell::RefCell;
use std::rc::Rc;

use bitflags::bitflags;
use perch_core::*;

use super::arrow::{ArrowParams, ArrowRenderer, TriangleArrow};
use super::geometry::{
    calc_pop_offset, calc_popover_offsets, calculate_optimal_position, element_midpoint,
    is_clipped, next_even_integer, PopoverOffsets,
};
use crate::{Column, IntoChildren, ViewExt};

const COMPONENT: &str = "popover-border";
const PARTS: &[&str] = &["content", "arrow"];
const OFF_SCREEN: f32 = -10000.0;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct BorderFlags: u8 {
        /// The host has laid the panel out at least once.
        const RENDERED_ONCE = 1;
        /// Metrics reflect the current placement; the panel may be shown.
        const READY_TO_SHOW = 1 << 1;
        /// The one correction allowed per show-cycle has happened.
        const FOUND_OPTIMAL = 1 << 2;
    }
}

/// Last measured panel size, rounded up to even pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderMetrics {
    pub width: f32,
    pub height: f32,
    pub pop_offset: Option<f32>,
}

#[derive(Clone)]
pub struct PopoverBorderConfig {
    /// Key of the panel node. Also keys the placement state.
    pub key: String,
    /// Node whose midpoint drives the optimal position, usually the anchor's
    /// point wrapper. Without it a clipped panel stays where it is.
    pub anchor_key: Option<String>,
    pub position: Signal<Position>,
    /// Shifts the arrow away from the panel corner.
    pub position_offset: Option<f32>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub popover_color: Option<Color>,
    pub popover_border_color: Option<Color>,
    pub padding: Option<PaddingValues>,
    pub margin_left: Option<Length>,
    pub margin_top: Option<Length>,
    /// Rounded, shadowless, borderless panel.
    pub tooltip_style: bool,
    pub arrow_length: f32,
    pub arrow_width: f32,
    /// Space between arrow tip and point. May be negative.
    pub arrow_gap: f32,
    pub arrow_renderer: Rc<dyn ArrowRenderer>,
    pub title: Option<View>,
    pub modifier: Modifier,
    pub parts: Parts,
}

impl PopoverBorderConfig {
    pub fn new(key: impl Into<String>, position: Signal<Position>) -> Self {
        Self {
            key: key.into(),
            anchor_key: None,
            position,
            position_offset: None,
            width: None,
            height: None,
            popover_color: None,
            popover_border_color: None,
            padding: None,
            margin_left: None,
            margin_top: None,
            tooltip_style: false,
            arrow_length: 11.0,
            arrow_width: 22.0,
            arrow_gap: -1.0,
            arrow_renderer: Rc::new(TriangleArrow),
            title: None,
            modifier: Modifier::new(),
            parts: Parts::new(),
        }
    }

    pub fn anchor_key(mut self, key: impl Into<String>) -> Self {
        self.anchor_key = Some(key.into());
        self
    }

    pub fn position_offset(mut self, px: f32) -> Self {
        self.position_offset = Some(px);
        self
    }

    pub fn width(mut self, w: impl Into<Length>) -> Self {
        self.width = Some(w.into());
        self
    }

    pub fn height(mut self, h: impl Into<Length>) -> Self {
        self.height = Some(h.into());
        self
    }

    pub fn popover_color(mut self, c: Color) -> Self {
        self.popover_color = Some(c);
        self
    }

    pub fn popover_border_color(mut self, c: Color) -> Self {
        self.popover_border_color = Some(c);
        self
    }

    pub fn padding(mut self, p: PaddingValues) -> Self {
        self.padding = Some(p);
        self
    }

    pub fn margins(mut self, left: impl Into<Length>, top: impl Into<Length>) -> Self {
        self.margin_left = Some(left.into());
        self.margin_top = Some(top.into());
        self
    }

    pub fn tooltip_style(mut self) -> Self {
        self.tooltip_style = true;
        self
    }

    pub fn arrow(mut self, length: f32, width: f32, gap: f32) -> Self {
        self.arrow_length = length;
        self.arrow_width = width;
        self.arrow_gap = gap;
        self
    }

    pub fn arrow_renderer(mut self, r: impl ArrowRenderer + 'static) -> Self {
        self.arrow_renderer = Rc::new(r);
        self
    }

    pub fn title(mut self, title: View) -> Self {
        self.title = Some(title);
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
        if self.key.is_empty() {
            return Err(ConfigError::EmptyKey {
                component: COMPONENT,
            });
        }
        for (field, value) in [
            ("arrow_length", self.arrow_length),
            ("arrow_width", self.arrow_width),
        ] {
            non_negative(field, value)?;
        }
        for (field, len) in [("width", self.width), ("height", self.height)] {
            if let Some(Length::Px(v) | Length::Percent(v)) = len {
                non_negative(field, v)?;
            }
        }
        self.parts.validate(COMPONENT, PARTS)
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::NegativeDimension {
            component: COMPONENT,
            field,
            value,
        });
    }
    Ok(())
}

struct Params {
    key: String,
    anchor_key: Option<String>,
    position: Signal<Position>,
    position_offset: Option<f32>,
}

/// Placement state of one mounted border.
pub struct BorderState {
    flags: Signal<BorderFlags>,
    metrics: Signal<BorderMetrics>,
    params: RefCell<Params>,
}

impl BorderState {
    fn new(cfg: &PopoverBorderConfig) -> Self {
        Self {
            flags: signal(BorderFlags::empty()),
            metrics: signal(BorderMetrics::default()),
            params: RefCell::new(Params {
                key: cfg.key.clone(),
                anchor_key: cfg.anchor_key.clone(),
                position: cfg.position.clone(),
                position_offset: cfg.position_offset,
            }),
        }
    }

    pub fn flags(&self) -> BorderFlags {
        self.flags.get_untracked()
    }

    pub fn metrics(&self) -> BorderMetrics {
        self.metrics.get_untracked()
    }

    fn insert_flag(&self, flag: BorderFlags) {
        self.flags.set_if_changed(self.flags.get_untracked() | flag);
    }

    /// Re-measures the panel. Returns false when the host could not measure
    /// it, in which case the metrics fall back to 0x0.
    fn calc_metrics(&self, host: &dyn Host) -> bool {
        let p = self.params.borrow();
        let measured = host.measure(&p.key);
        let client = measured.map(|m| m.client).unwrap_or_default();
        let width = next_even_integer(client.width);
        let height = next_even_integer(client.height);
        let alignment = p.position.get_untracked().alignment();
        self.metrics.set_if_changed(BorderMetrics {
            width,
            height,
            pop_offset: calc_pop_offset(alignment, p.position_offset, width, height),
        });
        measured.is_some()
    }

    /// Moves the panel to the side with more room, once per show-cycle.
    fn correct_if_clipped(&self, host: &dyn Host) {
        if self.flags().contains(BorderFlags::FOUND_OPTIMAL) {
            return;
        }
        let p = self.params.borrow();
        let Some(panel) = host.measure(&p.key) else {
            return;
        };
        let viewport = host.viewport();
        if !is_clipped(panel.rect, viewport) {
            return;
        }
        let Some(anchor) = p.anchor_key.as_deref().and_then(|k| host.measure(k)) else {
            log::debug!("{}: clipped but anchor not measurable", p.key);
            return;
        };
        let optimal = calculate_optimal_position(element_midpoint(anchor.rect), viewport);
        let position = p.position.clone();
        let key = p.key.clone();
        drop(p);

        log::debug!(
            "{key}: clipped at {}, moving to {optimal}",
            position.get_untracked()
        );
        position.set_if_changed(optimal);
        self.insert_flag(BorderFlags::FOUND_OPTIMAL);
    }
}

impl Lifecycle for BorderState {
    fn on_mount(&self, host: &dyn Host) {
        self.insert_flag(BorderFlags::RENDERED_ONCE);
        self.calc_metrics(host);
    }

    fn on_update(&self, host: &dyn Host) {
        self.correct_if_clipped(host);
        if self.calc_metrics(host) {
            self.insert_flag(BorderFlags::READY_TO_SHOW);
        }
    }

    fn on_unmount(&self) {
        log::debug!("{}: placement reset", self.params.borrow().key);
    }
}

pub fn PopoverBorder(
    cfg: PopoverBorderConfig,
    children: impl IntoChildren,
) -> Result<View, ConfigError> {
    cfg.validate()?;

    let state = use_instance(&cfg.key, || BorderState::new(&cfg));
    {
        let mut p = state.params.borrow_mut();
        p.anchor_key = cfg.anchor_key.clone();
        p.position = cfg.position.clone();
        p.position_offset = cfg.position_offset;
    }

    let flags = state.flags.get();
    let metrics = state.metrics.get();
    let (orientation, alignment) = cfg.position.get().split();

    let offsets = if flags.contains(BorderFlags::RENDERED_ONCE) {
        calc_popover_offsets(
            orientation,
            metrics.width,
            metrics.height,
            metrics.pop_offset,
            cfg.arrow_length,
            cfg.arrow_gap,
        )
    } else {
        PopoverOffsets {
            left: Some(Length::Px(OFF_SCREEN)),
            top: Some(Length::Px(OFF_SCREEN)),
            right: None,
            bottom: None,
        }
    };

    let theme = theme();
    let mut panel = Modifier::new()
        .class("rc-popover-border")
        .class("popover")
        .class(orientation.as_str())
        .absolute()
        .display(Display::Block)
        .offset(offsets.left, offsets.top, offsets.right, offsets.bottom)
        .max_width(Length::None)
        .padding(0.0)
        .background(cfg.popover_color.unwrap_or(theme.popover_background))
        .alpha(if flags.contains(BorderFlags::READY_TO_SHOW) { 1.0 } else { 0.0 });
    if let Some(w) = cfg.width {
        panel = panel.width(w);
    }
    if let Some(h) = cfg.height {
        panel = panel.height(h);
    }
    if let Some(c) = cfg.popover_border_color {
        panel = panel.border_color(c);
    }
    if cfg.tooltip_style {
        panel = panel.corner_radius(4.0).no_shadow().border_none();
    }
    if let Some(m) = cfg.margin_left {
        panel = panel.margin_left(m);
    }
    if let Some(m) = cfg.margin_top {
        panel = panel.margin_top(m);
    }
    let panel = panel.merge(&cfg.modifier);

    let grey = cfg.title.is_some()
        && (orientation == Orientation::Below || alignment == Alignment::Below);
    let mut arrow = cfg.arrow_renderer.render(&ArrowParams {
        orientation,
        pop_offset: metrics.pop_offset,
        length: cfg.arrow_length,
        width: cfg.arrow_width,
        color: cfg.popover_color,
        border_color: cfg.popover_border_color,
        grey,
        no_border: cfg.tooltip_style,
    });
    arrow.modifier = cfg.parts.apply("arrow", arrow.modifier);

    let mut content = Modifier::new().class("popover-content");
    if let Some(p) = cfg.padding {
        content = content.padding_values(p);
    }
    let content = Column(cfg.parts.apply("content", content)).child(children);

    Ok(View::new(ViewKind::Box)
        .key(cfg.key)
        .modifier(panel)
        .child((arrow, cfg.title, content)))
}
