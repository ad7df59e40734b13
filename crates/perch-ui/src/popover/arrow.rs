use perch_core::*;

use crate::Polygon;

/// Everything an arrow needs to draw itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowParams {
    pub orientation: Orientation,
    /// Distance from the panel corner to the tip; `None` centers it.
    pub pop_offset: Option<f32>,
    pub length: f32,
    pub width: f32,
    /// Fill override. Falls back to the title grey or the panel background.
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub grey: bool,
    pub no_border: bool,
}

impl ArrowParams {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            pop_offset: None,
            length: 11.0,
            width: 22.0,
            color: None,
            border_color: None,
            grey: false,
            no_border: false,
        }
    }
}

/// Draws the pointer between a panel and its anchor.
pub trait ArrowRenderer {
    fn render(&self, params: &ArrowParams) -> View;
}

/// Filled triangle, open on the side that touches the panel.
#[derive(Clone, Copy, Debug, Default)]
pub struct TriangleArrow;

impl ArrowRenderer for TriangleArrow {
    fn render(&self, p: &ArrowParams) -> View {
        let theme = theme();
        let fill = p.color.unwrap_or(if p.grey {
            theme.popover_title_background
        } else {
            theme.popover_background
        });
        let stroke = match (p.border_color, p.no_border) {
            (Some(c), _) => Some(c),
            (None, false) => Some(theme.popover_border),
            (None, true) => None,
        };

        let size = if p.orientation.is_horizontal() {
            Size::new(p.length, p.width)
        } else {
            Size::new(p.width, p.length)
        };

        Polygon(arrow_points(p.orientation, p.length, p.width), size, fill, stroke)
            .modifier(arrow_placement(p))
    }
}

/// Triangle corners in a `length` x `width` box (rotated for vertical sides).
pub fn arrow_points(orientation: Orientation, length: f32, width: f32) -> [Vec2; 3] {
    let (l, w, h) = (length, width, width / 2.0);
    match orientation {
        Orientation::Left => [Vec2::new(0.0, 0.0), Vec2::new(l, h), Vec2::new(0.0, w)],
        Orientation::Right => [Vec2::new(l, 0.0), Vec2::new(0.0, h), Vec2::new(l, w)],
        Orientation::Above => [Vec2::new(0.0, 0.0), Vec2::new(h, l), Vec2::new(w, 0.0)],
        Orientation::Below => [Vec2::new(0.0, l), Vec2::new(h, 0.0), Vec2::new(w, l)],
    }
}

fn arrow_placement(p: &ArrowParams) -> Modifier {
    let outside = Length::Px(-p.length);
    let along = p.pop_offset.map_or(Length::Percent(50.0), Length::Px);
    let half = Length::Px(-p.width / 2.0);

    let m = Modifier::new().class("popover-arrow").absolute();
    match p.orientation {
        Orientation::Left => m.offset_right(outside).offset_top(along).margin_top(half),
        Orientation::Right => m.offset_left(outside).offset_top(along).margin_top(half),
        Orientation::Above => m.offset_bottom(outside).offset_left(along).margin_left(half),
        Orientation::Below => m.offset_top(outside).offset_left(along).margin_left(half),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(view: &View) -> (Vec<Vec2>, f32, f32, Color, Option<Color>) {
        match &view.kind {
            ViewKind::Polygon {
                points,
                width,
                height,
                fill,
                stroke,
                ..
            } => (points.to_vec(), *width, *height, *fill, *stroke),
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn points_face_the_anchor() {
        assert_eq!(
            arrow_points(Orientation::Below, 11.0, 22.0),
            [Vec2::new(0.0, 11.0), Vec2::new(11.0, 0.0), Vec2::new(22.0, 11.0)]
        );
        assert_eq!(
            arrow_points(Orientation::Right, 6.0, 12.0),
            [Vec2::new(6.0, 0.0), Vec2::new(0.0, 6.0), Vec2::new(6.0, 12.0)]
        );
    }

    #[test]
    fn default_arrow_is_white_with_border() {
        let v = TriangleArrow.render(&ArrowParams::new(Orientation::Below));
        let (_, w, h, fill, stroke) = polygon(&v);
        assert_eq!((w, h), (22.0, 11.0));
        assert_eq!(fill, Color::WHITE);
        assert_eq!(stroke, Some(Color(0, 0, 0, 51)));
        insta::assert_snapshot!(
            v.modifier.to_css(),
            @"position: absolute; left: 50%; top: -11px; margin-left: -11px"
        );
    }

    #[test]
    fn grey_and_borderless_variants() {
        let p = ArrowParams {
            grey: true,
            no_border: true,
            pop_offset: Some(20.0),
            ..ArrowParams::new(Orientation::Left)
        };
        let v = TriangleArrow.render(&p);
        let (_, w, h, fill, stroke) = polygon(&v);
        assert_eq!((w, h), (11.0, 22.0));
        assert_eq!(fill, Color::from_hex("#f7f7f7"));
        assert_eq!(stroke, None);
        assert_eq!(v.modifier.offset_right, Some(Length::Px(-11.0)));
        assert_eq!(v.modifier.offset_top, Some(Length::Px(20.0)));
    }

    #[test]
    fn explicit_colors_win() {
        let p = ArrowParams {
            color: Some(Color::BLACK),
            border_color: Some(Color::BLACK),
            no_border: true,
            ..ArrowParams::new(Orientation::Above)
        };
        let (_, _, _, fill, stroke) = polygon(&TriangleArrow.render(&p));
        assert_eq!(fill, Color::BLACK);
        assert_eq!(stroke, Some(Color::BLACK));
    }
}
