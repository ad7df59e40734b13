//! Styling attached to a `View`.
//!
//! A [`Modifier`] is the typed equivalent of a class list plus an inline style
//! map. Components build their own and let callers layer overrides on top
//! with [`Modifier::merge`]; named sub-parts of a component take overrides
//! through [`Parts`].

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use smallvec::SmallVec;
use taffy::{AlignItems, AlignSelf, FlexDirection, JustifyContent};

use crate::{Color, ConfigError};

/// A CSS length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
    Auto,
    Initial,
    None,
}

impl From<f32> for Length {
    fn from(px: f32) -> Self {
        Length::Px(px)
    }
}

impl FromStr for Length {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let invalid = || ConfigError::InvalidLength(s.to_string());
        let number = |n: &str| n.trim().parse::<f32>().ok().filter(|v| v.is_finite());
        match t {
            "auto" => Ok(Length::Auto),
            "initial" => Ok(Length::Initial),
            "none" => Ok(Length::None),
            _ => {
                if let Some(n) = t.strip_suffix("px") {
                    number(n).map(Length::Px).ok_or_else(invalid)
                } else if let Some(n) = t.strip_suffix('%') {
                    number(n).map(Length::Percent).ok_or_else(invalid)
                } else {
                    number(t).map(Length::Px).ok_or_else(invalid)
                }
            }
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", normalize(*v)),
            Length::Percent(v) => write!(f, "{}%", normalize(*v)),
            Length::Auto => f.write_str("auto"),
            Length::Initial => f.write_str("initial"),
            Length::None => f.write_str("none"),
        }
    }
}

// -0 renders as "-0px"
fn normalize(v: f32) -> f32 {
    if v == 0.0 { 0.0 } else { v }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PaddingValues {
    pub fn all(v: f32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

/// CSS shorthand: one to four pixel lengths, `top right bottom left`.
impl FromStr for PaddingValues {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidPadding(s.to_string());
        let mut px: SmallVec<[f32; 4]> = SmallVec::new();
        for token in s.split_whitespace() {
            match token.parse::<Length>() {
                Ok(Length::Px(v)) if v >= 0.0 => px.push(v),
                _ => return Err(invalid()),
            }
        }
        let (top, right, bottom, left) = match px.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            _ => return Err(invalid()),
        };
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }
}

impl fmt::Display for PaddingValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let px = |v: f32| Length::Px(v).to_string();
        if self.top == self.bottom && self.left == self.right {
            if self.top == self.left {
                write!(f, "{}", px(self.top))
            } else {
                write!(f, "{} {}", px(self.top), px(self.left))
            }
        } else {
            write!(
                f,
                "{} {} {} {}",
                px(self.top),
                px(self.right),
                px(self.bottom),
                px(self.left)
            )
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub const NONE: Border = Border {
        width: 0.0,
        color: Color::TRANSPARENT,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    Relative,
    Absolute,
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
    InlineFlex,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

pub type ClickCallback = Rc<dyn Fn()>;

#[derive(Clone, Default)]
pub struct Modifier {
    pub classes: SmallVec<[String; 2]>,
    pub display: Option<Display>,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_width: Option<Length>,
    pub max_width: Option<Length>,
    pub padding: Option<PaddingValues>,
    pub margin_left: Option<Length>,
    pub margin_right: Option<Length>,
    pub margin_top: Option<Length>,
    pub margin_bottom: Option<Length>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub corner_radius: Option<f32>,
    pub no_shadow: bool,
    pub text_color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub text_align: Option<TextAlign>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<Length>,
    pub flex_dir: Option<FlexDirection>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    pub alpha: Option<f32>,
    pub position_type: Option<PositionType>,
    pub offset_left: Option<Length>,
    pub offset_right: Option<Length>,
    pub offset_top: Option<Length>,
    pub offset_bottom: Option<Length>,
    pub z_index: Option<i32>,
    pub on_click: Option<ClickCallback>,
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("classes", &self.classes)
            .field("css", &self.to_css())
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .finish()
    }
}

macro_rules! take_some {
    ($base:ident, $over:ident; $($field:ident),* $(,)?) => {
        $(
            if $over.$field.is_some() {
                $base.$field = $over.$field.clone();
            }
        )*
    };
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
    pub fn display(mut self, d: Display) -> Self {
        self.display = Some(d);
        self
    }
    pub fn size(mut self, w: impl Into<Length>, h: impl Into<Length>) -> Self {
        self.width = Some(w.into());
        self.height = Some(h.into());
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
    pub fn fill_max_size(mut self) -> Self {
        self.width = Some(Length::Percent(100.0));
        self.height = Some(Length::Percent(100.0));
        self
    }
    pub fn min_width(mut self, w: impl Into<Length>) -> Self {
        self.min_width = Some(w.into());
        self
    }
    pub fn max_width(mut self, w: impl Into<Length>) -> Self {
        self.max_width = Some(w.into());
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(PaddingValues::all(v));
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding = Some(padding);
        self
    }
    pub fn margin_left(mut self, v: impl Into<Length>) -> Self {
        self.margin_left = Some(v.into());
        self
    }
    pub fn margin_right(mut self, v: impl Into<Length>) -> Self {
        self.margin_right = Some(v.into());
        self
    }
    pub fn margin_top(mut self, v: impl Into<Length>) -> Self {
        self.margin_top = Some(v.into());
        self
    }
    pub fn margin_bottom(mut self, v: impl Into<Length>) -> Self {
        self.margin_bottom = Some(v.into());
        self
    }
    pub fn margin_vertical(self, top: impl Into<Length>, bottom: impl Into<Length>) -> Self {
        self.margin_top(top).margin_bottom(bottom)
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }
    pub fn border_none(mut self) -> Self {
        self.border = Some(Border::NONE);
        self
    }
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }
    pub fn no_shadow(mut self) -> Self {
        self.no_shadow = true;
        self
    }
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }
    pub fn font_size(mut self, px: f32) -> Self {
        self.font_size = Some(px);
        self
    }
    pub fn font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_shrink(mut self, v: f32) -> Self {
        self.flex_shrink = Some(v);
        self
    }
    pub fn flex_basis(mut self, v: impl Into<Length>) -> Self {
        self.flex_basis = Some(v.into());
        self
    }
    /// `flex: none`
    pub fn flex_none(self) -> Self {
        self.flex_grow(0.0).flex_shrink(0.0).flex_basis(Length::Auto)
    }
    /// `flex: auto`
    pub fn flex_auto(self) -> Self {
        self.flex_grow(1.0).flex_shrink(1.0).flex_basis(Length::Auto)
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a);
        self
    }
    pub fn relative(mut self) -> Self {
        self.position_type = Some(PositionType::Relative);
        self
    }
    pub fn absolute(mut self) -> Self {
        self.position_type = Some(PositionType::Absolute);
        self
    }
    pub fn fixed(mut self) -> Self {
        self.position_type = Some(PositionType::Fixed);
        self
    }
    pub fn offset(
        mut self,
        left: Option<Length>,
        top: Option<Length>,
        right: Option<Length>,
        bottom: Option<Length>,
    ) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self.offset_right = right;
        self.offset_bottom = bottom;
        self
    }
    pub fn offset_left(mut self, v: impl Into<Length>) -> Self {
        self.offset_left = Some(v.into());
        self
    }
    pub fn offset_right(mut self, v: impl Into<Length>) -> Self {
        self.offset_right = Some(v.into());
        self
    }
    pub fn offset_top(mut self, v: impl Into<Length>) -> Self {
        self.offset_top = Some(v.into());
        self
    }
    pub fn offset_bottom(mut self, v: impl Into<Length>) -> Self {
        self.offset_bottom = Some(v.into());
        self
    }
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    /// Layers `over` on top of `self`: fields set in `over` win, classes
    /// accumulate in order.
    pub fn merge(mut self, over: &Modifier) -> Self {
        self.classes.extend(over.classes.iter().cloned());
        take_some!(self, over;
            display, width, height, min_width, max_width, padding,
            margin_left, margin_right, margin_top, margin_bottom,
            background, border, border_color, corner_radius,
            text_color, font_size, font_weight, text_align,
            flex_grow, flex_shrink, flex_basis, flex_dir, align_self,
            justify_content, align_items_container, alpha, position_type,
            offset_left, offset_right, offset_top, offset_bottom, z_index, on_click,
        );
        self.no_shadow |= over.no_shadow;
        self
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Inline style declarations in a fixed order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out: Vec<(&'static str, String)> = Vec::new();
        let mut push = |k: &'static str, v: String| out.push((k, v));

        if let Some(d) = self.display {
            push("display", display_css(d).to_string());
        }
        if let Some(p) = self.position_type {
            push("position", position_css(p).to_string());
        }
        if let Some(v) = self.offset_left {
            push("left", v.to_string());
        }
        if let Some(v) = self.offset_top {
            push("top", v.to_string());
        }
        if let Some(v) = self.offset_right {
            push("right", v.to_string());
        }
        if let Some(v) = self.offset_bottom {
            push("bottom", v.to_string());
        }
        if let Some(z) = self.z_index {
            push("z-index", z.to_string());
        }
        if let Some(v) = self.flex_grow {
            push("flex-grow", v.to_string());
        }
        if let Some(v) = self.flex_shrink {
            push("flex-shrink", v.to_string());
        }
        if let Some(v) = self.flex_basis {
            push("flex-basis", v.to_string());
        }
        if let Some(d) = self.flex_dir {
            push("flex-direction", flex_dir_css(d).to_string());
        }
        if let Some(j) = self.justify_content {
            push("justify-content", justify_css(j).to_string());
        }
        if let Some(a) = self.align_items_container {
            push("align-items", align_items_css(a).to_string());
        }
        if let Some(a) = self.align_self {
            push("align-self", align_items_css(a).to_string());
        }
        if let Some(v) = self.width {
            push("width", v.to_string());
        }
        if let Some(v) = self.height {
            push("height", v.to_string());
        }
        if let Some(v) = self.min_width {
            push("min-width", v.to_string());
        }
        if let Some(v) = self.max_width {
            push("max-width", v.to_string());
        }
        if let Some(p) = self.padding {
            push("padding", p.to_string());
        }
        if let Some(v) = self.margin_left {
            push("margin-left", v.to_string());
        }
        if let Some(v) = self.margin_top {
            push("margin-top", v.to_string());
        }
        if let Some(v) = self.margin_right {
            push("margin-right", v.to_string());
        }
        if let Some(v) = self.margin_bottom {
            push("margin-bottom", v.to_string());
        }
        if let Some(c) = self.background {
            push("background-color", c.to_string());
        }
        match self.border {
            Some(b) if b.width <= 0.0 => push("border", "none".to_string()),
            Some(b) => push("border", format!("{} solid {}", Length::Px(b.width), b.color)),
            None => {}
        }
        if let Some(c) = self.border_color {
            push("border-color", c.to_string());
        }
        if let Some(r) = self.corner_radius {
            push("border-radius", Length::Px(r).to_string());
        }
        if self.no_shadow {
            push("box-shadow", "none".to_string());
        }
        if let Some(c) = self.text_color {
            push("color", c.to_string());
        }
        if let Some(s) = self.font_size {
            push("font-size", Length::Px(s).to_string());
        }
        if let Some(w) = self.font_weight {
            push("font-weight", w.to_string());
        }
        if let Some(a) = self.text_align {
            let a = match a {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
                TextAlign::Right => "right",
            };
            push("text-align", a.to_string());
        }
        if let Some(a) = self.alpha {
            push("opacity", a.to_string());
        }
        out
    }

    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn display_css(d: Display) -> &'static str {
    match d {
        Display::Block => "block",
        Display::Flex => "flex",
        Display::InlineFlex => "inline-flex",
        Display::None => "none",
    }
}

fn position_css(p: PositionType) -> &'static str {
    match p {
        PositionType::Relative => "relative",
        PositionType::Absolute => "absolute",
        PositionType::Fixed => "fixed",
    }
}

fn flex_dir_css(d: FlexDirection) -> &'static str {
    match d {
        FlexDirection::Row => "row",
        FlexDirection::Column => "column",
        FlexDirection::RowReverse => "row-reverse",
        FlexDirection::ColumnReverse => "column-reverse",
    }
}

fn justify_css(j: JustifyContent) -> &'static str {
    match j {
        JustifyContent::Start => "start",
        JustifyContent::End => "end",
        JustifyContent::FlexStart => "flex-start",
        JustifyContent::FlexEnd => "flex-end",
        JustifyContent::Center => "center",
        JustifyContent::Stretch => "stretch",
        JustifyContent::SpaceBetween => "space-between",
        JustifyContent::SpaceEvenly => "space-evenly",
        JustifyContent::SpaceAround => "space-around",
    }
}

fn align_items_css(a: AlignItems) -> &'static str {
    match a {
        AlignItems::Start => "start",
        AlignItems::End => "end",
        AlignItems::FlexStart => "flex-start",
        AlignItems::FlexEnd => "flex-end",
        AlignItems::Center => "center",
        AlignItems::Baseline => "baseline",
        AlignItems::Stretch => "stretch",
    }
}

/// Style overrides for the named sub-parts of a component.
#[derive(Clone, Debug, Default)]
pub struct Parts(BTreeMap<String, Modifier>);

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part(mut self, name: impl Into<String>, modifier: Modifier) -> Self {
        self.0.insert(name.into(), modifier);
        self
    }

    /// Override for `name`, or an empty modifier.
    pub fn get(&self, name: &str) -> Modifier {
        self.0.get(name).cloned().unwrap_or_default()
    }

    /// `base` with the override for `name` layered on top.
    pub fn apply(&self, name: &str, base: Modifier) -> Modifier {
        match self.0.get(name) {
            Some(over) => base.merge(over),
            None => base,
        }
    }

    pub fn validate(&self, component: &'static str, known: &[&str]) -> Result<(), ConfigError> {
        match self.0.keys().find(|k| !known.contains(&k.as_str())) {
            Some(part) => Err(ConfigError::UnknownPart {
                component,
                part: part.clone(),
                known: known.join(", "),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lengths() {
        assert_eq!("250px".parse::<Length>(), Ok(Length::Px(250.0)));
        assert_eq!(" 50% ".parse::<Length>(), Ok(Length::Percent(50.0)));
        assert_eq!("auto".parse::<Length>(), Ok(Length::Auto));
        assert_eq!("12".parse::<Length>(), Ok(Length::Px(12.0)));
        assert_eq!(
            "wide".parse::<Length>(),
            Err(ConfigError::InvalidLength("wide".into()))
        );
        assert!("px".parse::<Length>().is_err());
    }

    #[test]
    fn negative_zero_renders_plain() {
        assert_eq!(Length::Px(-0.0).to_string(), "0px");
        assert_eq!(Length::Px(-10000.0).to_string(), "-10000px");
        assert_eq!(Length::Px(12.5).to_string(), "12.5px");
    }

    #[test]
    fn padding_shorthand() {
        let p: PaddingValues = "3px 8px".parse().unwrap();
        assert_eq!(p, PaddingValues::symmetric(3.0, 8.0));
        assert_eq!(p.to_string(), "3px 8px");

        let p: PaddingValues = "1px 2px 3px".parse().unwrap();
        assert_eq!((p.top, p.right, p.bottom, p.left), (1.0, 2.0, 3.0, 2.0));
        assert_eq!(p.to_string(), "1px 2px 3px 2px");

        assert!("".parse::<PaddingValues>().is_err());
        assert!("1px 2px 3px 4px 5px".parse::<PaddingValues>().is_err());
        assert!("10%".parse::<PaddingValues>().is_err());
    }

    #[test]
    fn merge_lets_overrides_win_and_keeps_classes() {
        let base = Modifier::new()
            .class("popover")
            .width(100.0)
            .background(Color::WHITE)
            .alpha(0.0);
        let over = Modifier::new().class("wide").width(300.0).no_shadow();
        let merged = base.merge(&over);

        assert_eq!(merged.class_attr(), "popover wide");
        assert_eq!(merged.width, Some(Length::Px(300.0)));
        assert_eq!(merged.background, Some(Color::WHITE));
        assert_eq!(merged.alpha, Some(0.0));
        assert!(merged.no_shadow);
    }

    #[test]
    fn css_emission_order() {
        let m = Modifier::new()
            .absolute()
            .offset_left(-10000.0)
            .offset_top(-10000.0)
            .width("250px".parse::<Length>().unwrap())
            .background(Color::from_hex("#f57c00"))
            .border_none()
            .corner_radius(4.0)
            .alpha(0.0);
        insta::assert_snapshot!(m.to_css(), @"position: absolute; left: -10000px; top: -10000px; width: 250px; background-color: #f57c00; border: none; border-radius: 4px; opacity: 0");
    }

    #[test]
    fn unknown_parts_are_rejected() {
        let parts = Parts::new().part("content", Modifier::new().padding(4.0));
        assert!(parts.validate("popover-border", &["content", "arrow"]).is_ok());

        let parts = parts.part("footer", Modifier::new());
        let err = parts.validate("popover-border", &["content", "arrow"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "popover-border: unknown part `footer` (known parts: content, arrow)"
        );
    }
}
