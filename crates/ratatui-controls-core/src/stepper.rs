//! Numeric stepper: a value between decrement and increment buttons.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseEvent;
use crate::keymap;
use crate::quantize::RangeConfig;
use crate::quantize::RangeError;
use crate::render;
use crate::theme::Theme;

const DECREMENT_LABEL: &str = "[-]";
const INCREMENT_LABEL: &str = "[+]";

#[derive(Clone, Debug)]
pub struct StepperBindings {
    pub increment: Vec<KeyEvent>,
    pub decrement: Vec<KeyEvent>,
}

impl Default for StepperBindings {
    fn default() -> Self {
        Self {
            increment: vec![
                keymap::key(KeyCode::Up),
                keymap::key_char('+'),
                keymap::key_shift(KeyCode::Char('+')),
            ],
            decrement: vec![keymap::key(KeyCode::Down), keymap::key_char('-')],
        }
    }
}

#[derive(Clone, Debug)]
pub struct StepperOptions {
    pub label: Option<String>,
    pub help: Option<String>,
    pub error: Option<String>,
    pub min_value: f64,
    pub max_value: f64,
    pub step: f64,
    pub default_value: f64,
    pub disabled: bool,
    pub title_increment: Option<String>,
    pub title_decrement: Option<String>,
    pub bindings: StepperBindings,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            label: None,
            help: None,
            error: None,
            min_value: 0.0,
            max_value: 100.0,
            step: 1.0,
            default_value: 0.0,
            disabled: false,
            title_increment: None,
            title_decrement: None,
            bindings: StepperBindings::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepperAction {
    None,
    Changed(f64),
    Focused,
    Blurred,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ButtonHits {
    decrement: Option<Rect>,
    increment: Option<Rect>,
}

type ChangeCallback = Box<dyn FnMut(f64)>;
type NotifyCallback = Box<dyn FnMut()>;

pub struct InputStepper {
    range: RangeConfig,
    value: f64,
    options: StepperOptions,
    focused: bool,
    hits: ButtonHits,
    on_change: Option<ChangeCallback>,
    on_focus: Option<NotifyCallback>,
    on_blur: Option<NotifyCallback>,
}

impl InputStepper {
    pub fn with_options(options: StepperOptions) -> Result<Self, RangeError> {
        let range = RangeConfig::try_new(options.min_value, options.max_value, options.step)?;
        Ok(Self {
            value: range.clamp(options.default_value),
            range,
            options,
            focused: false,
            hits: ButtonHits::default(),
            on_change: None,
            on_focus: None,
            on_blur: None,
        })
    }

    pub fn on_change(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn options(&self) -> &StepperOptions {
        &self.options
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    pub fn set_error(&mut self, error: Option<impl Into<String>>) {
        self.options.error = error.map(Into::into);
    }

    pub fn is_increment_disabled(&self) -> bool {
        self.options.disabled || self.value >= self.range.max
    }

    pub fn is_decrement_disabled(&self) -> bool {
        self.options.disabled || self.value <= self.range.min
    }

    /// Sets a typed value, clamped into range.
    pub fn set_value(&mut self, value: f64) -> StepperAction {
        if self.options.disabled {
            return StepperAction::None;
        }
        self.commit(self.range.clamp(value))
    }

    pub fn increment(&mut self) -> StepperAction {
        if self.is_increment_disabled() {
            return StepperAction::None;
        }
        self.commit(self.range.clamp(self.value + self.range.step))
    }

    pub fn decrement(&mut self) -> StepperAction {
        if self.is_decrement_disabled() {
            return StepperAction::None;
        }
        self.commit(self.range.clamp(self.value - self.range.step))
    }

    pub fn focus(&mut self) -> StepperAction {
        if self.options.disabled || self.focused {
            return StepperAction::None;
        }
        self.focused = true;
        self.dispatch(StepperAction::Focused)
    }

    pub fn blur(&mut self) -> StepperAction {
        if !self.focused {
            return StepperAction::None;
        }
        self.focused = false;
        self.dispatch(StepperAction::Blurred)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> StepperAction {
        match event {
            InputEvent::Key(key) => {
                if !self.focused {
                    return StepperAction::None;
                }
                if keymap::any_matches(&self.options.bindings.increment, &key) {
                    return self.increment();
                }
                if keymap::any_matches(&self.options.bindings.decrement, &key) {
                    return self.decrement();
                }
                StepperAction::None
            }
            InputEvent::Mouse(m) => self.handle_mouse_event(&m),
            InputEvent::FocusLost => self.blur(),
            InputEvent::Paste(_) | InputEvent::Resize(..) | InputEvent::FocusGained => {
                StepperAction::None
            }
        }
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> StepperAction {
        if !event.is_primary_press() {
            return StepperAction::None;
        }
        let hit = |r: Option<Rect>| {
            r.is_some_and(|r| {
                event.x >= r.x
                    && event.x < r.x.saturating_add(r.width)
                    && event.y >= r.y
                    && event.y < r.y.saturating_add(r.height)
            })
        };
        if hit(self.hits.decrement) {
            return self.decrement();
        }
        if hit(self.hits.increment) {
            return self.increment();
        }
        StepperAction::None
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.hits = ButtonHits::default();
        if area.width == 0 || area.height == 0 {
            return;
        }
        let bottom = area.y.saturating_add(area.height);
        let mut y = area.y;

        if let Some(label) = self.options.label.as_deref() {
            render::render_line(Rect::new(area.x, y, area.width, 1), buf, label, theme.heading);
            y += 1;
        }
        if y >= bottom {
            return;
        }

        let dec_w = UnicodeWidthStr::width(DECREMENT_LABEL) as u16;
        let inc_w = UnicodeWidthStr::width(INCREMENT_LABEL) as u16;
        if area.width >= dec_w + inc_w {
            let dec = Rect::new(area.x, y, dec_w, 1);
            let inc = Rect::new(area.x + area.width - inc_w, y, inc_w, 1);
            let style = |disabled: bool| {
                if disabled {
                    theme.button_disabled
                } else {
                    theme.button
                }
            };
            render::render_line(dec, buf, DECREMENT_LABEL, style(self.is_decrement_disabled()));
            render::render_line(inc, buf, INCREMENT_LABEL, style(self.is_increment_disabled()));
            let middle = Rect::new(dec.x + dec_w, y, area.width - dec_w - inc_w, 1);
            let value_style = if self.focused {
                theme.accent
            } else {
                theme.text_primary
            };
            render::render_centered(middle, buf, &render::format_number(self.value), value_style);
            self.hits = ButtonHits {
                decrement: Some(dec),
                increment: Some(inc),
            };
        }
        y += 1;

        if y >= bottom {
            return;
        }
        let feedback = match (self.options.error.as_deref(), self.options.help.as_deref()) {
            (Some(error), _) if !error.is_empty() => Some((error, theme.danger)),
            (_, Some(help)) => Some((help, theme.text_muted)),
            _ => None,
        };
        if let Some((text, style)) = feedback {
            render::render_line(Rect::new(area.x, y, area.width, 1), buf, text, style);
        }
    }

    fn commit(&mut self, next: f64) -> StepperAction {
        if next == self.value {
            return StepperAction::None;
        }
        self.value = next;
        tracing::trace!(value = next, "stepper value changed");
        self.dispatch(StepperAction::Changed(next))
    }

    fn dispatch(&mut self, action: StepperAction) -> StepperAction {
        match action {
            StepperAction::Changed(v) => {
                if let Some(f) = self.on_change.as_mut() {
                    f(v);
                }
            }
            StepperAction::Focused => {
                if let Some(f) = self.on_focus.as_mut() {
                    f();
                }
            }
            StepperAction::Blurred => {
                if let Some(f) = self.on_blur.as_mut() {
                    f();
                }
            }
            StepperAction::None => {}
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;
    use crate::input::MouseButtons;
    use crate::input::MouseEventKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn stepper(min: f64, max: f64, step: f64, value: f64) -> InputStepper {
        InputStepper::with_options(StepperOptions {
            min_value: min,
            max_value: max,
            step,
            default_value: value,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn steps_until_bounds() {
        let mut s = stepper(1.0, 10.0, 2.0, 4.0);
        assert_eq!(s.increment(), StepperAction::Changed(6.0));
        assert_eq!(s.increment(), StepperAction::Changed(8.0));
        assert_eq!(s.increment(), StepperAction::Changed(10.0));
        assert!(s.is_increment_disabled());
        assert_eq!(s.increment(), StepperAction::None);
        assert_eq!(s.decrement(), StepperAction::Changed(8.0));
    }

    #[test]
    fn default_value_is_clamped() {
        assert_eq!(stepper(1.0, 10.0, 1.0, 40.0).value(), 10.0);
        assert!(stepper(1.0, 10.0, 1.0, -3.0).is_decrement_disabled());
    }

    #[test]
    fn disabled_stepper_ignores_input() {
        let mut s = stepper(0.0, 10.0, 1.0, 5.0);
        s.set_disabled(true);
        assert_eq!(s.increment(), StepperAction::None);
        assert_eq!(s.set_value(2.0), StepperAction::None);
        assert_eq!(s.focus(), StepperAction::None);
        assert_eq!(s.value(), 5.0);
    }

    #[test]
    fn keys_need_focus() {
        let mut s = stepper(0.0, 10.0, 1.0, 5.0);
        let up = InputEvent::Key(KeyEvent::new(KeyCode::Up));
        assert_eq!(s.handle_event(up.clone()), StepperAction::None);
        assert_eq!(s.focus(), StepperAction::Focused);
        assert_eq!(s.handle_event(up), StepperAction::Changed(6.0));
        assert_eq!(
            s.handle_event(InputEvent::Key(keymap::key_char('-'))),
            StepperAction::Changed(5.0)
        );
        assert_eq!(s.handle_event(InputEvent::FocusLost), StepperAction::Blurred);
    }

    #[test]
    fn renders_buttons_value_and_error() {
        let mut s = InputStepper::with_options(StepperOptions {
            label: Some("Adults".into()),
            help: Some("Count of adults".into()),
            error: Some("Too many".into()),
            min_value: 1.0,
            max_value: 10.0,
            default_value: 10.0,
            ..Default::default()
        })
        .unwrap();
        let area = Rect::new(0, 0, 11, 3);
        let mut buf = Buffer::empty(area);
        s.render_ref(area, &mut buf, &Theme::default());
        assert_eq!(row(&buf, 0).trim_end(), "Adults");
        assert_eq!(row(&buf, 1), "[-] 10  [+]");
        assert_eq!(row(&buf, 2).trim_end(), "Too many");
        assert_eq!(buf[(8, 1)].style().fg, Theme::default().button_disabled.fg);
    }

    #[test]
    fn clicking_buttons_steps_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = {
            let seen = seen.clone();
            stepper(0.0, 10.0, 1.0, 5.0).on_change(move |v| seen.borrow_mut().push(v))
        };
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);
        s.render_ref(area, &mut buf, &Theme::default());

        let click = |x| {
            InputEvent::Mouse(MouseEvent::new(
                x,
                0,
                MouseEventKind::Down(MouseButton::Left),
            ))
        };
        s.handle_event(click(9));
        s.handle_event(click(1));
        s.handle_event(click(1));
        s.handle_event(click(5));
        assert_eq!(*seen.borrow(), vec![6.0, 5.0, 4.0]);
    }

    #[test]
    fn chorded_press_does_not_step() {
        let mut s = stepper(0.0, 10.0, 1.0, 5.0);
        let area = Rect::new(0, 0, 11, 1);
        let mut buf = Buffer::empty(area);
        s.render_ref(area, &mut buf, &Theme::default());

        let mut held = MouseButtons::only(MouseButton::Left);
        held.insert(MouseButton::Middle);
        let chorded =
            MouseEvent::new(9, 0, MouseEventKind::Down(MouseButton::Left)).with_buttons(held);
        assert_eq!(s.handle_event(InputEvent::Mouse(chorded)), StepperAction::None);
        assert_eq!(
            s.handle_event(InputEvent::Mouse(MouseEvent::new(
                9,
                0,
                MouseEventKind::Down(MouseButton::Right),
            ))),
            StepperAction::None
        );
        assert_eq!(s.value(), 5.0);
    }
}
