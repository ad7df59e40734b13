use crate::{Color, Modifier, Vec2};
use smallvec::SmallVec;
use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Stack,
    Text {
        text: String,
        color: Option<Color>,
        font_size: Option<f32>,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    /// Closed outline over `points`, drawn in a `width` x `height` box.
    Polygon {
        points: SmallVec<[Vec2; 4]>,
        width: f32,
        height: f32,
        fill: Color,
        stroke: Option<Color>,
        stroke_width: f32,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::Text {
                text,
                color,
                font_size,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Polygon {
                points,
                width,
                height,
                fill,
                stroke,
                stroke_width,
            } => f
                .debug_struct("Polygon")
                .field("points", points)
                .field("width", width)
                .field("height", height)
                .field("fill", fill)
                .field("stroke", stroke)
                .field("stroke_width", stroke_width)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    /// Stable identity of the node the host renders for this view; hosts
    /// look nodes up by it when measuring.
    pub key: Option<String>,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            key: None,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first search for the view carrying `key`.
    pub fn find(&self, key: &str) -> Option<&View> {
        if self.key.as_deref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Depth-first search for the path of views from `self` down to `key`.
    pub fn path_to(&self, key: &str) -> Option<Vec<&View>> {
        if self.key.as_deref() == Some(key) {
            return Some(vec![self]);
        }
        self.children.iter().find_map(|c| {
            c.path_to(key).map(|mut path| {
                path.insert(0, self);
                path
            })
        })
    }

    /// Concatenated text of every `Text` and `Button` below this view.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        fn walk(v: &View, out: &mut String) {
            match &v.kind {
                ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => out.push_str(text),
                _ => {}
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(self, &mut out);
        out
    }
}
