use perch_core::*;

use crate::{Column, Row, ViewExt};

const COMPONENT: &str = "popover-anchor-wrapper";

/// Handed to the popover builder of [`PopoverAnchorWrapper`].
#[derive(Clone, Debug)]
pub struct PopoverContext {
    pub id: String,
    pub showing: Signal<bool>,
    /// Effective position. Starts at the caller's position and may be moved
    /// by the border when the panel is clipped.
    pub position: Signal<Position>,
    /// Zero-size node the panel hangs off.
    pub point_key: String,
    /// Row or column holding the anchor and the point.
    pub point_wrapper_key: String,
}

impl PopoverContext {
    pub fn border_key(&self) -> String {
        format!("{}/border", self.id)
    }

    pub fn content_key(&self) -> String {
        format!("{}/content", self.id)
    }
}

#[derive(Clone, Debug)]
pub struct AnchorWrapperConfig {
    /// Prefix for every node key the popover renders.
    pub id: String,
    pub showing: Signal<bool>,
    pub position: Position,
    pub modifier: Modifier,
}

impl AnchorWrapperConfig {
    pub fn new(id: impl Into<String>, showing: Signal<bool>) -> Self {
        Self {
            id: id.into(),
            showing,
            position: Position::default(),
            modifier: Modifier::new(),
        }
    }

    pub fn position(mut self, p: Position) -> Self {
        self.position = p;
        self
    }

    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id.is_empty() {
            return Err(ConfigError::EmptyKey {
                component: COMPONENT,
            });
        }
        Ok(())
    }
}

/// Position cells of one anchor.
///
/// `external` mirrors what the caller last asked for; `internal` is what the
/// popover actually uses. Whenever the popover is hidden, `internal` snaps
/// back to `external`, so a correction only lasts for one show-cycle.
struct AnchorState {
    external: Signal<Position>,
    internal: Signal<Position>,
}

impl AnchorState {
    fn new(position: Position, showing: &Signal<bool>) -> Self {
        let external = signal(position);
        let internal = signal(position);
        observe({
            let (showing, external, internal) = (showing.clone(), external.clone(), internal.clone());
            move || {
                if !showing.get() {
                    internal.set_if_changed(external.get());
                }
            }
        });
        Self { external, internal }
    }
}

impl Lifecycle for AnchorState {}

/// Wraps `anchor` and, while `showing`, the popover built by `popover`.
pub fn PopoverAnchorWrapper(
    cfg: AnchorWrapperConfig,
    anchor: View,
    popover: impl FnOnce(&PopoverContext) -> Result<View, ConfigError>,
) -> Result<View, ConfigError> {
    cfg.validate()?;

    let state = use_instance(&cfg.id, || AnchorState::new(cfg.position, &cfg.showing));
    if cfg.position != state.external.get_untracked() {
        state.external.set(cfg.position);
        state.internal.set(cfg.position);
    }

    let ctx = PopoverContext {
        id: cfg.id.clone(),
        showing: cfg.showing.clone(),
        position: state.internal.clone(),
        point_key: format!("{}/point", cfg.id),
        point_wrapper_key: format!("{}/point-wrapper", cfg.id),
    };

    let orientation = ctx.position.get().orientation();
    let point = if cfg.showing.get() {
        Some(
            View::new(ViewKind::Box)
                .key(ctx.point_key.clone())
                .modifier(
                    Modifier::new()
                        .class("rc-popover-point")
                        .class("popover-point")
                        .flex_none()
                        .relative()
                        .z_index(4),
                )
                .child(popover(&ctx)?),
        )
    } else {
        None
    };

    let wrapper_modifier = Modifier::new()
        .class("rc-point-wrapper")
        .display(Display::InlineFlex)
        .flex_none()
        .align_items(AlignItems::Center);
    let wrapper = if orientation.is_horizontal() {
        Row(wrapper_modifier)
    } else {
        Column(wrapper_modifier)
    };
    let wrapper = match orientation {
        Orientation::Left | Orientation::Above => wrapper.child((point, anchor)),
        Orientation::Right | Orientation::Below => wrapper.child((anchor, point)),
    }
    .key(ctx.point_wrapper_key);

    Ok(View::new(ViewKind::Box)
        .key(cfg.id)
        .modifier(
            Modifier::new()
                .class("rc-popover-anchor-wrapper")
                .display(Display::InlineFlex)
                .flex_none()
                .merge(&cfg.modifier),
        )
        .child(wrapper))
}
