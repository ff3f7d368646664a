use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_controls_core::input::InputEvent;
use ratatui_controls_core::input::KeyCode;
use ratatui_controls_core::input::KeyEvent;
use ratatui_controls_core::input::MouseButton;
use ratatui_controls_core::input::MouseButtons;
use ratatui_controls_core::input::MouseEvent;
use ratatui_controls_core::input::MouseEventKind;
use ratatui_controls_core::listeners::ListenerKind;
use ratatui_controls_core::listeners::WindowListeners;
use ratatui_controls_core::slider::InteractionState;
use ratatui_controls_core::slider::Slider;
use ratatui_controls_core::slider::SliderAction;
use ratatui_controls_core::slider::SliderOptions;
use ratatui_controls_core::slider::SliderValue;
use ratatui_controls_core::theme::Theme;

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code))
}

fn mouse(x: u16, kind: MouseEventKind) -> InputEvent {
    InputEvent::Mouse(MouseEvent::new(x, 0, kind))
}

/// Renders twice around a measurement so handles sit at their measured positions.
fn layout(slider: &mut Slider, width: u16) {
    let area = Rect::new(0, 0, width, 1);
    let mut buf = Buffer::empty(area);
    slider.render_ref(area, &mut buf, &Theme::default());
    slider.measure();
    slider.render_ref(area, &mut buf, &Theme::default());
}

fn build(options: SliderOptions, window: &WindowListeners) -> Slider {
    Slider::with_window(options, window.clone()).expect("valid range")
}

#[test]
fn arrow_keys_walk_the_step_grid() {
    let window = WindowListeners::new();
    let mut s = build(
        SliderOptions {
            default_value: Some(SliderValue::Single(1.0)),
            min: 1.0,
            max: 10.0,
            step: 2.0,
            ..Default::default()
        },
        &window,
    );
    s.focus_handle(0);

    assert_eq!(
        s.handle_event(key(KeyCode::Right)),
        SliderAction::Changed(SliderValue::Single(3.0))
    );
    assert_eq!(
        s.handle_event(key(KeyCode::Right)),
        SliderAction::Changed(SliderValue::Single(5.0))
    );
    assert_eq!(
        s.handle_event(key(KeyCode::Down)),
        SliderAction::Changed(SliderValue::Single(3.0))
    );
}

#[test]
fn home_and_end_hit_exact_bounds() {
    let window = WindowListeners::new();
    let mut s = build(
        SliderOptions {
            default_value: Some(SliderValue::Single(5.0)),
            min: 1.0,
            max: 10.0,
            step: 4.0,
            ..Default::default()
        },
        &window,
    );
    s.focus_handle(0);

    s.handle_event(key(KeyCode::Home));
    assert_eq!(s.value(), &SliderValue::Single(1.0));
    s.handle_event(key(KeyCode::End));
    assert_eq!(s.value(), &SliderValue::Single(10.0));
}

#[test]
fn off_grid_max_steps_back_onto_grid() {
    // 10 is off the {1, 3, 5, 7, 9} grid; the first step down only moves by one.
    let window = WindowListeners::new();
    let mut s = build(
        SliderOptions {
            default_value: Some(SliderValue::Single(1.0)),
            min: 1.0,
            max: 10.0,
            step: 2.0,
            ..Default::default()
        },
        &window,
    );
    s.set_value(SliderValue::Single(10.0));
    s.focus_handle(0);
    assert_eq!(
        s.handle_event(key(KeyCode::Left)),
        SliderAction::Changed(SliderValue::Single(9.0))
    );
    assert_eq!(
        s.handle_event(key(KeyCode::Left)),
        SliderAction::Changed(SliderValue::Single(7.0))
    );
}

#[test]
fn bar_press_engages_nearest_handle() {
    let window = WindowListeners::new();
    let mut s = build(
        SliderOptions {
            default_value: Some(SliderValue::Multi(vec![3.0, 7.0])),
            min: 0.0,
            max: 10.0,
            ..Default::default()
        },
        &window,
    );
    layout(&mut s, 10);

    let action = s.handle_event(mouse(4, MouseEventKind::Down(MouseButton::Left)));
    assert_eq!(action, SliderAction::Changed(SliderValue::Multi(vec![4.0, 7.0])));
    assert_eq!(s.controller().active_handle(), Some(0));
    assert_eq!(s.controller().state(), InteractionState::Engaged(Some(0)));

    s.handle_event(mouse(5, MouseEventKind::Drag(MouseButton::Left)));
    assert_eq!(s.value(), &SliderValue::Multi(vec![5.0, 7.0]));

    s.handle_event(mouse(5, MouseEventKind::Up(MouseButton::Left)));
    assert_eq!(window.total(), 0);
    assert_eq!(s.controller().active_handle(), Some(0));
}

#[test]
fn non_primary_press_never_starts_a_drag() {
    let window = WindowListeners::new();
    let mut s = build(
        SliderOptions {
            default_value: Some(SliderValue::Single(50.0)),
            min: 0.0,
            max: 100.0,
            ..Default::default()
        },
        &window,
    );
    layout(&mut s, 20);

    assert_eq!(
        s.handle_event(mouse(3, MouseEventKind::Down(MouseButton::Right))),
        SliderAction::None
    );
    let mut chord = MouseButtons::only(MouseButton::Left);
    chord.insert(MouseButton::Right);
    let chorded = MouseEvent::new(3, 0, MouseEventKind::Down(MouseButton::Left)).with_buttons(chord);
    assert_eq!(s.handle_event(InputEvent::Mouse(chorded)), SliderAction::None);

    assert_eq!(window.active(ListenerKind::PointerMove), 0);
    assert_eq!(window.active(ListenerKind::PointerUp), 0);

    assert_eq!(
        s.handle_event(mouse(15, MouseEventKind::Drag(MouseButton::Left))),
        SliderAction::None
    );
    assert_eq!(s.value(), &SliderValue::Single(50.0));
}

#[test]
fn dropping_a_slider_mid_drag_detaches_listeners() {
    let window = WindowListeners::new();
    {
        let mut s = build(SliderOptions::default(), &window);
        layout(&mut s, 20);
        s.handle_event(mouse(10, MouseEventKind::Down(MouseButton::Left)));
        s.focus_handle(0);
        assert_eq!(window.total(), 4);
    }
    assert_eq!(window.total(), 0);
}

#[test]
fn sliders_sharing_a_window_keep_separate_registrations() {
    let window = WindowListeners::new();
    let mut a = build(SliderOptions::default(), &window);
    let mut b = build(SliderOptions::default(), &window);

    a.focus_handle(0);
    b.focus_handle(0);
    assert_eq!(window.active(ListenerKind::KeyDown), 2);

    a.handle_event(InputEvent::FocusLost);
    b.blur();
    assert_eq!(window.active(ListenerKind::KeyDown), 0);
}
