#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use perch_core::*;

    use crate::*;

    /// Lays out only what the popover tests need: anchors and points sit at
    /// fixed rects, and every other keyed node is a `panel`-sized box placed
    /// from its absolute offsets relative to the nearest fixed ancestor.
    struct TestHost {
        viewport: Size,
        fixed: HashMap<String, Rect>,
        panel: Size,
        root: Option<View>,
    }

    impl TestHost {
        fn new(viewport: Size, panel: Size) -> Self {
            Self {
                viewport,
                fixed: HashMap::new(),
                panel,
                root: None,
            }
        }

        fn place(mut self, key: &str, rect: Rect) -> Self {
            self.fixed.insert(key.to_string(), rect);
            self
        }

        fn panel_rect(&self, key: &str) -> Option<Rect> {
            let path = self.root.as_ref()?.path_to(key)?;
            let node = path.last()?;
            let origin = path
                .iter()
                .rev()
                .find_map(|v| v.key.as_deref().and_then(|k| self.fixed.get(k)))?;
            let m = &node.modifier;
            let Size { width, height } = self.panel;
            let x = match (m.offset_left, m.offset_right) {
                (Some(Length::Px(l)), _) => origin.left() + l,
                (_, Some(Length::Px(r))) => origin.left() - r - width,
                _ => origin.left(),
            };
            let y = match (m.offset_top, m.offset_bottom) {
                (Some(Length::Px(t)), _) => origin.top() + t,
                (_, Some(Length::Px(b))) => origin.top() - b - height,
                _ => origin.top(),
            };
            Some(Rect::new(x, y, width, height))
        }
    }

    impl Host for TestHost {
        fn present(&mut self, root: &View) {
            self.root = Some(root.clone());
        }

        fn viewport(&self) -> Size {
            self.viewport
        }

        fn measure(&self, key: &str) -> Option<Measurement> {
            let rect = match self.fixed.get(key) {
                Some(r) => *r,
                None => self.panel_rect(key)?,
            };
            Some(Measurement {
                rect,
                client: rect.size(),
            })
        }
    }

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Anchor near the bottom-right corner of a 900x600 viewport.
    fn corner_host(id: &str) -> TestHost {
        TestHost::new(Size::new(900.0, 600.0), Size::new(200.0, 100.0))
            .place(&format!("{id}/point-wrapper"), Rect::new(800.0, 550.0, 40.0, 20.0))
            .place(&format!("{id}/point"), Rect::new(820.0, 570.0, 0.0, 0.0))
    }

    struct App {
        id: &'static str,
        showing: Signal<bool>,
        // internal position handed to the popover builder
        position: RefCell<Option<Signal<Position>>>,
    }

    impl App {
        fn new(id: &'static str) -> Self {
            Self {
                id,
                showing: signal(true),
                position: RefCell::new(None),
            }
        }

        fn build(&self) -> View {
            let anchor = PopoverAnchorWrapper(
                AnchorWrapperConfig::new(self.id, self.showing.clone())
                    .position(Position::BelowCenter),
                Button("Open", || {}),
                |ctx| {
                    *self.position.borrow_mut() = Some(ctx.position.clone());
                    PopoverContentWrapper(
                        ContentWrapperConfig::new(ctx).border(|b| b.width(200.0)),
                        Text("Panel"),
                    )
                },
            );
            Column(Modifier::new()).child(anchor.unwrap())
        }

        fn position(&self) -> Position {
            self.position
                .borrow()
                .as_ref()
                .map(|p| p.get_untracked())
                .unwrap_or_default()
        }
    }

    fn border_of<'a>(root: &'a View, id: &str) -> &'a View {
        root.find(&format!("{id}/border")).expect("border rendered")
    }

    #[test]
    fn clipped_popover_flips_once_measured() {
        init_logs();
        let app = App::new("flip");
        let mut host = corner_host(app.id);
        let mut sched = Scheduler::new();

        let first = sched.frame(&mut host, |_| app.build());
        let border = border_of(&first, app.id);
        assert_eq!(border.modifier.alpha, Some(0.0));
        assert_eq!(border.modifier.offset_left, Some(Length::Px(-10000.0)));

        let second = sched.frame(&mut host, |_| app.build());
        let border = border_of(&second, app.id);
        assert_eq!(border.modifier.alpha, Some(0.0), "still hidden while measuring");
        assert_eq!(border.modifier.offset_top, Some(Length::Px(10.0)));
        assert_eq!(app.position(), Position::AboveLeft);

        let settled = sched.settle(&mut host, |_| app.build());
        let border = border_of(&settled, app.id);
        assert_eq!(border.modifier.alpha, Some(1.0));
        assert_eq!(border.modifier.offset_top, Some(Length::Initial));
        assert_eq!(border.modifier.offset_bottom, Some(Length::Px(10.0)));
        assert_eq!(border.modifier.offset_left, Some(Length::Px(-200.0)));

        let rect = host.measure("flip/border").unwrap().rect;
        assert_eq!(rect, Rect::new(620.0, 460.0, 200.0, 100.0));
        assert!(!popover::geometry::is_clipped(rect, host.viewport()));

        // point now precedes the anchor
        let wrapper = settled.find("flip/point-wrapper").unwrap();
        assert_eq!(wrapper.children[0].key.as_deref(), Some("flip/point"));
        unmount_all();
    }

    #[test]
    fn unclipped_popover_keeps_its_position() {
        init_logs();
        let app = App::new("stay");
        let mut host = TestHost::new(Size::new(900.0, 600.0), Size::new(200.0, 100.0))
            .place("stay/point-wrapper", Rect::new(400.0, 100.0, 40.0, 20.0))
            .place("stay/point", Rect::new(420.0, 120.0, 0.0, 0.0));
        let mut sched = Scheduler::new();

        let root = sched.settle(&mut host, |_| app.build());
        assert_eq!(app.position(), Position::BelowCenter);
        let border = border_of(&root, "stay");
        assert_eq!(border.modifier.alpha, Some(1.0));
        assert_eq!(border.modifier.offset_left, Some(Length::Px(-100.0)));
        assert_eq!(border.modifier.offset_top, Some(Length::Px(10.0)));
        unmount_all();
    }

    #[test]
    fn correction_happens_at_most_once_per_show_cycle() {
        init_logs();
        // panel larger than the viewport: every placement is clipped
        let mut host = TestHost::new(Size::new(300.0, 200.0), Size::new(400.0, 300.0))
            .place("anchor", Rect::new(240.0, 140.0, 20.0, 20.0))
            .place("point", Rect::new(250.0, 160.0, 0.0, 0.0));
        let position = signal(Position::BelowCenter);
        let writes = Rc::new(Cell::new(0));
        position.subscribe({
            let writes = writes.clone();
            move |_| writes.set(writes.get() + 1)
        });

        let build = |_: &mut Scheduler| {
            Box(Modifier::new()).key("point").child(
                PopoverBorder(
                    PopoverBorderConfig::new("once/border", position.clone()).anchor_key("anchor"),
                    Text("big"),
                )
                .unwrap(),
            )
        };

        let mut sched = Scheduler::new();
        sched.settle(&mut host, build);
        assert_eq!(position.get_untracked(), Position::AboveLeft);
        assert_eq!(writes.get(), 1);

        position.set(Position::BelowCenter);
        sched.settle(&mut host, build);
        assert_eq!(position.get_untracked(), Position::BelowCenter);
        assert_eq!(writes.get(), 2);
        assert!(!frame_requested());
        unmount_all();
    }

    #[test]
    fn hiding_resets_position_and_placement() {
        init_logs();
        let app = App::new("cycle");
        let mut host = corner_host(app.id);
        let mut sched = Scheduler::new();

        sched.settle(&mut host, |_| app.build());
        assert_eq!(app.position(), Position::AboveLeft);

        app.showing.set(false);
        let hidden = sched.settle(&mut host, |_| app.build());
        assert!(hidden.find("cycle/border").is_none());
        assert!(!is_mounted("cycle/border"));
        assert_eq!(app.position(), Position::BelowCenter);

        app.showing.set(true);
        let reshown = sched.frame(&mut host, |_| app.build());
        let border = border_of(&reshown, app.id);
        assert_eq!(border.modifier.alpha, Some(0.0));
        assert_eq!(border.modifier.offset_left, Some(Length::Px(-10000.0)));

        sched.settle(&mut host, |_| app.build());
        assert_eq!(app.position(), Position::AboveLeft);
        unmount_all();
    }

    #[test]
    fn no_clip_wrapper_follows_the_point() {
        init_logs();
        let mut host = corner_host("tip");
        let showing = signal(true);
        let mut sched = Scheduler::new();
        let root = sched.settle(&mut host, |_| {
            PopoverTooltip(TooltipConfig::new("tip", "Copied", showing.clone()), Text("copy"))
                .unwrap()
        });
        let content = root.find("tip/content").unwrap();
        assert_eq!(content.modifier.offset_left, Some(Length::Px(820.0)));
        assert_eq!(content.modifier.offset_top, Some(Length::Px(570.0)));
        assert_eq!(border_of(&root, "tip").modifier.alpha, Some(1.0));
        unmount_all();
    }

    #[test]
    fn error_boundary_renders_fallback_for_bad_config() {
        init_logs();
        let showing = signal(true);
        let view = ErrorBoundary(
            "tooltip",
            || PopoverTooltip(TooltipConfig::new("", "x", showing.clone()), Text("a")),
            |info| Text(info.message),
        );
        assert_eq!(view.text_content(), "popover-tooltip: key must not be empty");
    }

    #[test]
    fn theme_overrides_default_colors() {
        let mut sched = Scheduler::new();
        let showing = signal(true);
        let dark = Theme {
            tooltip_default: Color::from_hex("#222222"),
            ..Theme::default()
        };
        let root = sched.compose(|_| {
            with_theme(dark, || {
                PopoverTooltip(TooltipConfig::new("themed", "Hi", showing.clone()), Text("a"))
                    .unwrap()
            })
        });
        assert_eq!(
            border_of(&root, "themed").modifier.background,
            Some(Color::from_hex("#222222"))
        );
        unmount_all();
    }

    #[test]
    fn layout_primitives() {
        let spacer = Spacer();
        assert_eq!(spacer.modifier.flex_grow, Some(1.0));

        let gap = Gap(8.0);
        assert_eq!(gap.modifier.width, Some(Length::Px(8.0)));
        assert_eq!(gap.modifier.class_attr(), "rc-gap");

        let rule = Line(1.0, Color::BLACK);
        assert_eq!(rule.modifier.background, Some(Color::BLACK));

        let stack = Stack(Modifier::new()).child([Text("a"), Text("b"), Text("c")]);
        assert!(matches!(stack.kind, ViewKind::Stack));
        assert_eq!(stack.text_content(), "abc");
    }
}
