//! Placement math for popovers.
//!
//! Everything here is pure: given the panel's measured size, the chosen
//! [`Position`] and the arrow dimensions, compute where the panel goes
//! relative to its zero-size point node.

use perch_core::{Alignment, Length, Orientation, Position, Rect, Size, Vec2};

pub use perch_core::split_position;

/// Offsets of the panel from the point node. `None` leaves the edge unset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PopoverOffsets {
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub right: Option<Length>,
    pub bottom: Option<Length>,
}

pub fn calc_popover_offsets(
    orientation: Orientation,
    width: f32,
    height: f32,
    pop_offset: Option<f32>,
    arrow_length: f32,
    arrow_gap: f32,
) -> PopoverOffsets {
    let total = Length::Px(arrow_length + arrow_gap);
    let across = |half: f32| Length::Px(-pop_offset.unwrap_or(half));

    match orientation {
        Orientation::Left => PopoverOffsets {
            left: Some(Length::Initial),
            top: Some(across(height / 2.0)),
            right: Some(total),
            bottom: None,
        },
        Orientation::Right => PopoverOffsets {
            left: Some(total),
            top: Some(across(height / 2.0)),
            right: None,
            bottom: None,
        },
        Orientation::Above => PopoverOffsets {
            left: Some(across(width / 2.0)),
            top: Some(Length::Initial),
            right: None,
            bottom: Some(total),
        },
        Orientation::Below => PopoverOffsets {
            left: Some(across(width / 2.0)),
            top: Some(total),
            right: None,
            bottom: None,
        },
    }
}

/// Position that keeps a panel anchored at `point` inside `viewport`: open
/// toward the larger free area on both axes.
pub fn calculate_optimal_position(point: Vec2, viewport: Size) -> Position {
    let third = (viewport.width / 3.0).floor();
    let half = (viewport.height / 2.0).floor();

    let horizontal = if point.x < third {
        Alignment::Right
    } else if point.x < 2.0 * third {
        Alignment::Center
    } else {
        Alignment::Left
    };
    let vertical = if point.y < half {
        Orientation::Below
    } else {
        Orientation::Above
    };

    match (vertical, horizontal) {
        (Orientation::Below, Alignment::Right) => Position::BelowRight,
        (Orientation::Below, Alignment::Center) => Position::BelowCenter,
        (Orientation::Below, _) => Position::BelowLeft,
        (_, Alignment::Right) => Position::AboveRight,
        (_, Alignment::Center) => Position::AboveCenter,
        _ => Position::AboveLeft,
    }
}

pub fn element_midpoint(rect: Rect) -> Vec2 {
    Vec2::new(
        (rect.left() + rect.right()) / 2.0,
        (rect.top() + rect.bottom()) / 2.0,
    )
}

/// Whether any part of `rect` lies outside the viewport. An edge that
/// touches the boundary is still inside.
pub fn is_clipped(rect: Rect, viewport: Size) -> bool {
    clip_edges(rect, viewport).any()
}

/// How far `rect` overhangs each viewport edge, in pixels (0 when inside).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipEdges {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ClipEdges {
    pub fn any(&self) -> bool {
        self.left > 0.0 || self.top > 0.0 || self.right > 0.0 || self.bottom > 0.0
    }
}

pub fn clip_edges(rect: Rect, viewport: Size) -> ClipEdges {
    ClipEdges {
        left: (-rect.left()).max(0.0),
        top: (-rect.top()).max(0.0),
        right: (rect.right() - viewport.width).max(0.0),
        bottom: (rect.bottom() - viewport.height).max(0.0),
    }
}

/// Smallest even integer not below `n`.
pub fn next_even_integer(n: f32) -> f32 {
    let n = n.ceil();
    if n.rem_euclid(2.0) == 1.0 { n + 1.0 } else { n }
}

/// Distance along the panel edge from its corner to the arrow tip.
/// `None` centers the arrow.
pub fn calc_pop_offset(
    alignment: Alignment,
    position_offset: Option<f32>,
    width: f32,
    height: f32,
) -> Option<f32> {
    match alignment {
        Alignment::Center => None,
        Alignment::Right | Alignment::Below => Some(20.0 + position_offset.unwrap_or(0.0)),
        Alignment::Left => Some(position_offset.map_or(width, |o| width - 25.0 - o)),
        Alignment::Above => Some(position_offset.map_or(height, |o| height - 25.0 - o)),
    }
}
