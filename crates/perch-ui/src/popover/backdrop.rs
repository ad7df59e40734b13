use perch_core::*;

/// Full-viewport layer behind an open popover. Clicking it calls `on_click`.
pub fn Backdrop(opacity: f32, on_click: Callback) -> View {
    View::new(ViewKind::Box).modifier(
        Modifier::new()
            .class("rc-backdrop")
            .class("noselect")
            .fixed()
            .offset_left(0.0)
            .offset_top(0.0)
            .fill_max_size()
            .background(theme().backdrop)
            .alpha(opacity)
            .on_click(move || on_click()),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn covers_viewport_and_forwards_clicks() {
        let clicks = Rc::new(Cell::new(0));
        let v = Backdrop(0.3, {
            let clicks = clicks.clone();
            Rc::new(move || clicks.set(clicks.get() + 1))
        });
        insta::assert_snapshot!(
            v.modifier.to_css(),
            @"position: fixed; left: 0px; top: 0px; width: 100%; height: 100%; background-color: #000000; opacity: 0.3"
        );
        if let Some(f) = &v.modifier.on_click {
            f();
        }
        assert_eq!(clicks.get(), 1);
    }
}
