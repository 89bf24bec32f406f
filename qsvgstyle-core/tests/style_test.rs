//! Tests for the widget style on top of the bundled theme

use qsvgstyle_core::animation::PROGRESS_STEP;
use qsvgstyle_core::geometry::{Rect, Size};
use qsvgstyle_core::layout::{LayoutDirection, LayoutTree, WidgetId, WidgetRef};
use qsvgstyle_core::size::apply_size_spec;
use qsvgstyle_core::state::State;
use qsvgstyle_core::style::{
    Dispatch, OptionExtra, RangeOption, StyleOption, SubControl, ThemeContext, WidgetInfo,
};
use qsvgstyle_core::text::FixedMetrics;
use qsvgstyle_core::vgi::RecordingPainter;
use qsvgstyle_theme::groups::{ComplexControl, ContentsType, ControlElement};
use qsvgstyle_theme::SizeSpec;

fn context() -> ThemeContext {
    ThemeContext::builtin(Box::new(FixedMetrics::default())).unwrap()
}

fn ids(painter: &RecordingPainter) -> Vec<String> {
    painter.elements().into_iter().map(|(id, _)| id.to_string()).collect()
}

fn draw_button(ctx: &ThemeContext, widget: &WidgetRef, tree: &LayoutTree) -> Vec<String> {
    let option = StyleOption::new(Rect::new(0, 0, 60, 24), State::ENABLED).with_text("Go");
    let mut painter = RecordingPainter::new();
    let done = ctx.draw_control(
        ControlElement::PushButton,
        &option,
        &mut painter,
        Some(WidgetInfo::in_layout(widget, tree)),
    );
    assert_eq!(done, Dispatch::Done);
    ids(&painter)
}

#[test]
fn test_button_row_forms_a_capsule() {
    let ctx = context();
    let mut tree = LayoutTree::new();
    let row = tree.hbox(0);
    let buttons: Vec<WidgetRef> = (1..=3).map(|id| WidgetRef::new(id, "PushButton")).collect();
    for button in &buttons {
        tree.add_widget(row, button.clone());
    }
    let has = |ids: &[String], id: &str| ids.iter().any(|i| i == id);

    let first = draw_button(&ctx, &buttons[0], &tree);
    assert!(has(&first, "button-normal-left"));
    assert!(has(&first, "button-normal-topleft"));
    assert!(!has(&first, "button-normal-right"));
    assert!(!has(&first, "button-normal-topright"));

    let middle = draw_button(&ctx, &buttons[1], &tree);
    assert!(has(&middle, "button-normal-top"));
    assert!(has(&middle, "button-normal-bottom"));
    assert!(!has(&middle, "button-normal-left"));
    assert!(!has(&middle, "button-normal-right"));

    let last = draw_button(&ctx, &buttons[2], &tree);
    assert!(has(&last, "button-normal-right"));
    assert!(!has(&last, "button-normal-left"));
}

#[test]
fn test_spaced_buttons_keep_their_frame() {
    let ctx = context();
    let mut tree = LayoutTree::new();
    let row = tree.hbox(6);
    let button = WidgetRef::new(1, "PushButton");
    tree.add_widget(row, button.clone());
    tree.add_widget(row, WidgetRef::new(2, "PushButton"));

    let ids = draw_button(&ctx, &button, &tree);
    for side in ["left", "right", "top", "bottom"] {
        assert!(ids.contains(&format!("button-normal-{}", side)), "missing {}", side);
    }
}

#[test]
fn test_scroll_bar_slider_moves_with_the_value() {
    let ctx = context();
    let bar = Rect::new(0, 0, 200, 14);
    let slider_at = |value: i32, direction: LayoutDirection| {
        let option = StyleOption::new(bar, State::ENABLED)
            .with_extra(OptionExtra::Range(RangeOption::new(0, 100, value)))
            .with_direction(direction);
        ctx.sub_control_rect(ComplexControl::ScrollBar, SubControl::ScrollBarSlider, &option, None)
            .unwrap()
    };
    let groove = ctx
        .sub_control_rect(
            ComplexControl::ScrollBar,
            SubControl::ScrollBarGroove,
            &StyleOption::new(bar, State::ENABLED)
                .with_extra(OptionExtra::Range(RangeOption::new(0, 100, 0))),
            None,
        )
        .unwrap();

    let mut last = i32::MIN;
    for value in (0..=100).step_by(10) {
        let slider = slider_at(value, LayoutDirection::Ltr);
        assert!(groove.contains_rect(&slider), "{:?} outside {:?}", slider, groove);
        assert!(slider.x >= last);
        last = slider.x;
    }
    assert!(slider_at(100, LayoutDirection::Ltr).x > slider_at(0, LayoutDirection::Ltr).x);
}

#[test]
fn test_size_grows_with_the_text() {
    let ctx = context();
    let size_of = |text: &str| {
        let option = StyleOption::new(Rect::new(0, 0, 0, 0), State::ENABLED).with_text(text);
        ctx.size_from_contents(ContentsType::PushButton, &option, Size::default(), None)
            .unwrap()
    };
    let short = size_of("Ok");
    let long = size_of("A considerably longer caption");
    assert!(long.width > short.width);
    assert_eq!(long.height, short.height);

    let fixed = SizeSpec {
        fixed_w: Some(50),
        ..Default::default()
    };
    assert_eq!(apply_size_spec(long, &fixed).width, 50);
    let min = SizeSpec {
        min_w: Some(long.width + 10),
        ..Default::default()
    };
    assert_eq!(apply_size_spec(short, &min).width, long.width + 10);
    assert_eq!(apply_size_spec(long, &min).height, long.height);
}

#[test]
fn test_busy_progress_animation_lifecycle() {
    let mut ctx = context();
    let bar = WidgetId(42);
    assert!(!ctx.animations().is_running());

    ctx.animations_mut().show(bar);
    assert!(ctx.animations().is_running());
    assert_eq!(ctx.tick_progress(), vec![bar]);
    assert_eq!(ctx.tick_progress(), vec![bar]);
    assert_eq!(ctx.animations().offset(bar), 2 * PROGRESS_STEP);

    // Showing again restarts from the beginning.
    ctx.animations_mut().show(bar);
    assert_eq!(ctx.animations().offset(bar), 0);

    ctx.animations_mut().hide(bar);
    assert!(!ctx.animations().is_running());
    assert!(ctx.tick_progress().is_empty());
    assert_eq!(ctx.animations().offset(bar), 0);

    ctx.animations_mut().show(bar);
    ctx.animations_mut().destroy(bar);
    assert!(ctx.animations().is_empty());
}
