#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::lifecycle::{self, Lifecycle, use_instance};
    use crate::reactive::{observe, observed_signal_count, observer_count};
    use crate::runtime::{Scheduler, frame_requested};
    use crate::scope::*;
    use crate::signal::*;
    use crate::{Color, Host, Measurement, Rect, Size, Vec2, View, ViewKind};

    struct NullHost;

    impl Host for NullHost {
        fn viewport(&self) -> Size {
            Size::new(800.0, 600.0)
        }
        fn measure(&self, _key: &str) -> Option<Measurement> {
            None
        }
    }

    #[derive(Default)]
    struct Calls {
        mounts: Cell<u32>,
        updates: Cell<u32>,
        unmounts: Rc<Cell<u32>>,
    }

    impl Lifecycle for Calls {
        fn on_mount(&self, _host: &dyn Host) {
            self.mounts.set(self.mounts.get() + 1);
        }
        fn on_update(&self, _host: &dyn Host) {
            self.updates.set(self.updates.get() + 1);
        }
        fn on_unmount(&self) {
            self.unmounts.set(self.unmounts.get() + 1);
        }
    }

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let id = sig.subscribe({
            let seen = seen.clone();
            move |v| seen.borrow_mut().push(*v)
        });

        sig.set(42);
        assert!(!sig.set_if_changed(42));
        assert!(sig.set_if_changed(7));
        sig.unsubscribe(id);
        sig.set(9);
        assert_eq!(*seen.borrow(), vec![42, 7]);
    }

    #[test]
    fn test_subscriber_may_read_signal() {
        let sig = signal(1);
        let read = Rc::new(Cell::new(0));
        sig.subscribe({
            let (sig, read) = (sig.clone(), read.clone());
            move |_| read.set(sig.get_untracked())
        });
        sig.set(5);
        assert_eq!(read.get(), 5);
    }

    #[test]
    fn test_writes_request_frame() {
        let mut sched = Scheduler::new();
        let sig = signal(0);
        sched.compose(|_| View::new(ViewKind::Box));
        assert!(!frame_requested());
        sig.set(1);
        assert!(frame_requested());
    }

    #[test]
    fn test_observer_tracks_and_rewires() {
        let flag = signal(true);
        let a = signal(1);
        let b = signal(10);
        let out = signal(0);

        let rule = observe({
            let (flag, a, b, out) = (flag.clone(), a.clone(), b.clone(), out.clone());
            move || out.set(if flag.get() { a.get() } else { b.get() })
        });
        assert_eq!(out.get_untracked(), 1);

        a.set(2);
        assert_eq!(out.get_untracked(), 2);

        flag.set(false);
        assert_eq!(out.get_untracked(), 10);

        // `a` is no longer a dependency
        a.set(3);
        assert_eq!(out.get_untracked(), 10);

        rule.run();
        assert!(rule.is_disposed());
        b.set(11);
        assert_eq!(out.get_untracked(), 10);
    }

    #[test]
    fn test_observer_writing_its_own_dependency_does_not_recurse() {
        let n = signal(0);
        let runs = Rc::new(Cell::new(0));
        let _rule = observe({
            let (n, runs) = (n.clone(), runs.clone());
            move || {
                runs.set(runs.get() + 1);
                if n.get() < 100 {
                    n.set(n.get_untracked() + 1);
                }
            }
        });
        assert_eq!(runs.get(), 1);
        assert_eq!(n.get_untracked(), 1);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(Cell::new(false));

        let scope = Scope::new();
        scope.add_disposer({
            let cleaned_up = cleaned_up.clone();
            move || cleaned_up.set(true)
        });

        assert!(!cleaned_up.get());
        scope.dispose();
        assert!(cleaned_up.get());
    }

    #[test]
    fn test_scope_disposes_observers() {
        let before = observer_count();
        let scope = Scope::new();
        scope.run(|| {
            let s = signal(0);
            observe(move || {
                s.get();
            });
        });
        assert_eq!(observer_count(), before + 1);
        scope.dispose();
        assert_eq!(observer_count(), before);
    }

    #[test]
    fn test_disposed_observers_leave_no_edges() {
        let before = observed_signal_count();
        for _ in 0..3 {
            let scope = Scope::new();
            scope.run(|| {
                let s = signal(0);
                observe(move || {
                    s.get();
                });
            });
            assert_eq!(observed_signal_count(), before + 1);
            scope.dispose();
        }
        assert_eq!(observed_signal_count(), before);
    }

    #[test]
    fn test_instance_lifecycle() {
        let mut sched = Scheduler::new();
        let mut host = NullHost;
        let unmounts = Rc::new(Cell::new(0));
        let show = Rc::new(Cell::new(true));

        let mut build = |_: &mut Scheduler| {
            let mut root = View::new(ViewKind::Box);
            if show.get() {
                let calls = use_instance("calls", || Calls {
                    unmounts: unmounts.clone(),
                    ..Calls::default()
                });
                root.children.push(
                    View::new(ViewKind::Text {
                        text: format!("{}/{}", calls.mounts.get(), calls.updates.get()),
                        color: None,
                        font_size: None,
                    })
                    .key("calls"),
                );
            }
            root
        };

        sched.frame(&mut host, &mut build);
        assert!(lifecycle::is_mounted("calls"));
        let root = sched.frame(&mut host, &mut build);
        assert_eq!(root.text_content(), "1/0");
        let root = sched.frame(&mut host, &mut build);
        assert_eq!(root.text_content(), "1/1");

        show.set(false);
        sched.frame(&mut host, &mut build);
        assert_eq!(unmounts.get(), 1);
        assert!(!lifecycle::is_mounted("calls"));
        assert_eq!(lifecycle::instance_count(), 0);

        // fresh instance after remount
        show.set(true);
        let root = sched.frame(&mut host, &mut build);
        assert_eq!(root.text_content(), "0/0");
    }

    #[test]
    fn test_settle_stops_when_clean() {
        let mut sched = Scheduler::new();
        let mut host = NullHost;
        let n = signal(0);

        sched.settle(&mut host, |_| {
            if n.get_untracked() < 3 {
                n.set(n.get_untracked() + 1);
            }
            View::new(ViewKind::Box)
        });
        assert_eq!(n.get_untracked(), 3);
        assert_eq!(sched.frames(), 4);
        assert!(!frame_requested());
    }

    #[test]
    fn test_view_lookup() {
        let tree = View::new(ViewKind::Column).with_children(vec![
            View::new(ViewKind::Box).key("a"),
            View::new(ViewKind::Row)
                .key("b")
                .with_children(vec![View::new(ViewKind::Box).key("c")]),
        ]);
        assert!(tree.find("c").is_some());
        assert!(tree.find("d").is_none());
        let path: Vec<_> = tree
            .path_to("c")
            .unwrap()
            .iter()
            .map(|v| v.key.clone())
            .collect();
        assert_eq!(path, vec![None, Some("b".into()), Some("c".into())]);
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::from_hex("#f57c00").to_string(), "#f57c00");
        assert_eq!(Color(0, 0, 0, 51).to_string(), "rgba(0, 0, 0, 0.2)");
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert_eq!(
            (rect.left(), rect.top(), rect.right(), rect.bottom()),
            (10.0, 10.0, 110.0, 60.0)
        );
        assert_eq!(Rect::from_edges(10.0, 10.0, 110.0, 60.0), rect);
        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
    }
}
