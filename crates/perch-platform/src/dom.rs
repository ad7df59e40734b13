//! Target-independent half of the DOM host: which element each view becomes
//! and what inline style it carries.

use perch_core::{Callback, Vec2, View, ViewKind};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub fn tag_for(kind: &ViewKind) -> &'static str {
    match kind {
        ViewKind::Text { .. } => "span",
        ViewKind::Button { .. } => "button",
        ViewKind::Polygon { .. } => "svg",
        ViewKind::Box | ViewKind::Row | ViewKind::Column | ViewKind::Stack => "div",
    }
}

fn base_style(kind: &ViewKind) -> &'static str {
    match kind {
        ViewKind::Row => "display: flex; flex-direction: row",
        ViewKind::Column => "display: flex; flex-direction: column",
        ViewKind::Stack => "position: relative",
        ViewKind::Polygon { .. } => "overflow: visible",
        _ => "",
    }
}

/// Inline style of `view`. Modifier declarations come last and win.
pub fn style_for(view: &View) -> String {
    let mut parts: Vec<String> = Vec::new();
    let base = base_style(&view.kind);
    if !base.is_empty() {
        parts.push(base.to_string());
    }
    if let ViewKind::Text {
        color, font_size, ..
    } = &view.kind
    {
        if let Some(c) = color {
            parts.push(format!("color: {c}"));
        }
        if let Some(px) = font_size {
            parts.push(format!("font-size: {px}px"));
        }
    }
    let css = view.modifier.to_css();
    if !css.is_empty() {
        parts.push(css);
    }
    parts.join("; ")
}

/// SVG `points` attribute.
pub fn polygon_points(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// What a click on the element rendered for `view` should run.
pub fn click_handler(view: &View) -> Option<Callback> {
    match &view.kind {
        ViewKind::Button {
            on_click: Some(f), ..
        } => Some(f.clone()),
        _ => view.modifier.on_click.clone(),
    }
}
