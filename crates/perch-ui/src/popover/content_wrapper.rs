use std::cell::RefCell;
use std::rc::Rc;

use perch_core::*;

use super::anchor_wrapper::PopoverContext;
use super::backdrop::Backdrop;
use super::border::{PopoverBorder, PopoverBorderConfig};
use super::title::{PopoverTitle, PopoverTitleConfig};
use crate::{IntoChildren, ViewExt};

const COMPONENT: &str = "popover-content-wrapper";

#[derive(Clone)]
pub struct ContentWrapperConfig {
    pub key: String,
    pub showing: Signal<bool>,
    /// Node measured in `no_clip` mode.
    pub point_key: String,
    /// Escape clipping ancestors by rendering `position: fixed` at the
    /// point's viewport coordinates.
    pub no_clip: bool,
    /// Clicking the backdrop calls this. No backdrop without it.
    pub on_cancel: Option<Callback>,
    pub backdrop_opacity: f32,
    pub title: Option<PopoverTitleConfig>,
    pub border: PopoverBorderConfig,
    pub modifier: Modifier,
}

impl ContentWrapperConfig {
    /// Wires the keys and cells from an anchor wrapper.
    pub fn new(ctx: &PopoverContext) -> Self {
        Self {
            key: ctx.content_key(),
            showing: ctx.showing.clone(),
            point_key: ctx.point_key.clone(),
            no_clip: false,
            on_cancel: None,
            backdrop_opacity: 0.0,
            title: None,
            border: PopoverBorderConfig::new(ctx.border_key(), ctx.position.clone())
                .anchor_key(ctx.point_wrapper_key.clone()),
            modifier: Modifier::new(),
        }
    }

    pub fn no_clip(mut self, no_clip: bool) -> Self {
        self.no_clip = no_clip;
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Rc::new(f));
        self
    }

    pub fn backdrop_opacity(mut self, opacity: f32) -> Self {
        self.backdrop_opacity = opacity;
        self
    }

    pub fn title(mut self, title: PopoverTitleConfig) -> Self {
        self.title = Some(title);
        self
    }

    /// Adjusts the panel configuration.
    pub fn border(mut self, f: impl FnOnce(PopoverBorderConfig) -> PopoverBorderConfig) -> Self {
        self.border = f(self.border);
        self
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.key.is_empty() {
            return Err(ConfigError::EmptyKey {
                component: COMPONENT,
            });
        }
        if !(0.0..=1.0).contains(&self.backdrop_opacity) {
            return Err(ConfigError::InvalidOpacity {
                component: COMPONENT,
                value: self.backdrop_opacity,
            });
        }
        self.border.validate()
    }
}

/// Viewport coordinates of the point, tracked for `no_clip` rendering.
struct PointTracker {
    point_key: RefCell<String>,
    left: Signal<f32>,
    top: Signal<f32>,
}

impl PointTracker {
    fn track(&self, host: &dyn Host) {
        if let Some(m) = host.measure(&self.point_key.borrow()) {
            self.left.set_if_changed(m.rect.left());
            self.top.set_if_changed(m.rect.top());
        }
    }
}

impl Lifecycle for PointTracker {
    fn on_mount(&self, host: &dyn Host) {
        self.track(host);
    }

    fn on_update(&self, host: &dyn Host) {
        self.track(host);
    }
}

pub fn PopoverContentWrapper(
    cfg: ContentWrapperConfig,
    body: impl IntoChildren,
) -> Result<View, ConfigError> {
    cfg.validate()?;

    let mut wrapper = Modifier::new()
        .class("popover-content-wrapper")
        .flex_none();
    if cfg.no_clip {
        let tracker = use_instance(&cfg.key, || PointTracker {
            point_key: RefCell::new(cfg.point_key.clone()),
            left: signal(0.0),
            top: signal(0.0),
        });
        *tracker.point_key.borrow_mut() = cfg.point_key.clone();
        wrapper = wrapper
            .fixed()
            .offset_left(tracker.left.get())
            .offset_top(tracker.top.get());
    }

    let backdrop = match &cfg.on_cancel {
        Some(on_cancel) if cfg.showing.get() => {
            Some(Backdrop(cfg.backdrop_opacity, on_cancel.clone()))
        }
        _ => None,
    };

    let mut border = cfg.border;
    if let Some(title) = &cfg.title {
        border = border.title(PopoverTitle(title, &cfg.showing));
    }

    Ok(View::new(ViewKind::Box)
        .key(cfg.key)
        .modifier(wrapper.merge(&cfg.modifier))
        .child((backdrop, PopoverBorder(border, body)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    fn ctx(id: &str, showing: bool) -> PopoverContext {
        PopoverContext {
            id: id.to_string(),
            showing: signal(showing),
            position: signal(Position::BelowCenter),
            point_key: format!("{id}/point"),
            point_wrapper_key: format!("{id}/point-wrapper"),
        }
    }

    #[test]
    fn backdrop_only_with_cancel() {
        let mut sched = Scheduler::new();
        let c = ctx("backdrop", true);

        let root = sched.compose(|_| {
            PopoverContentWrapper(ContentWrapperConfig::new(&c), Text("body")).unwrap()
        });
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].key.as_deref(), Some("backdrop/border"));

        let root = sched.compose(|_| {
            PopoverContentWrapper(
                ContentWrapperConfig::new(&c).on_cancel(|| {}).backdrop_opacity(0.5),
                Text("body"),
            )
            .unwrap()
        });
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].modifier.alpha, Some(0.5));
        unmount_all();
    }

    #[test]
    fn title_is_forwarded_to_the_border() {
        let mut sched = Scheduler::new();
        let c = ctx("titled", true);
        let root = sched.compose(|_| {
            PopoverContentWrapper(
                ContentWrapperConfig::new(&c).title(PopoverTitleConfig::new("Heading")),
                Text("body"),
            )
            .unwrap()
        });
        assert_eq!(root.text_content(), "Heading×body");
        unmount_all();
    }

    #[test]
    fn no_clip_starts_fixed_at_origin() {
        let mut sched = Scheduler::new();
        let c = ctx("fixed", true);
        let root = sched.compose(|_| {
            PopoverContentWrapper(ContentWrapperConfig::new(&c).no_clip(true), Text("body")).unwrap()
        });
        assert_eq!(root.modifier.position_type, Some(PositionType::Fixed));
        assert_eq!(root.modifier.offset_left, Some(Length::Px(0.0)));
        unmount_all();
    }

    #[test]
    fn opacity_out_of_range() {
        let c = ctx("opacity", true);
        let err = ContentWrapperConfig::new(&c).backdrop_opacity(1.5).validate();
        assert_eq!(
            err,
            Err(ConfigError::InvalidOpacity {
                component: "popover-content-wrapper",
                value: 1.5
            })
        );
    }
}
