//! Range slider with one or more handles.
//!
//! [`Slider`] is the component: it renders into a `ratatui` buffer, records where its bar and
//! handles were drawn, and routes [`InputEvent`]s to a [`SliderController`], which owns the
//! value. The host drives the lifecycle:
//!
//! - [`Slider::mount`] once, then [`Slider::tick`] from the event loop so the deferred
//!   measurement runs after the first layout,
//! - [`Slider::handle_event`] for every input event (resize and focus-lost included),
//! - [`Slider::unmount`] (or drop) to release everything.
//!
//! ```no_run
//! use ratatui_controls_core::slider::{Slider, SliderOptions, SliderValue};
//!
//! let slider = Slider::with_options(SliderOptions {
//!     label: Some("Price".into()),
//!     default_value: Some(SliderValue::Multi(vec![20.0, 80.0])),
//!     min: 0.0,
//!     max: 100.0,
//!     step: 5.0,
//!     ..Default::default()
//! })?
//! .on_change(|value| println!("{value:?}"));
//! # Ok::<(), ratatui_controls_core::quantize::RangeError>(())
//! ```

mod bindings;
mod controller;
mod render;
mod value;

pub use bindings::SliderBindings;
pub use bindings::SliderKeyAction;
pub use controller::InteractionState;
pub use controller::SliderAction;
pub use controller::SliderController;
pub use render::HandleAttrs;
pub use value::SliderValue;

use ratatui::layout::Rect;
use std::time::Duration;
use std::time::Instant;

use crate::geometry;
use crate::geometry::LayoutRef;
use crate::geometry::MeasureSchedule;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::listeners::ListenerKind;
use crate::listeners::WindowListeners;
use crate::position;
use crate::position::PositionDescriptor;
use crate::quantize::RangeConfig;
use crate::quantize::RangeError;

pub const DEFAULT_MEASURE_DELAY: Duration = Duration::from_millis(10);

#[derive(Clone, Debug)]
pub struct SliderOptions {
    pub label: Option<String>,
    pub description: Option<String>,
    /// Initial value; `Single(1.0)` when absent.
    pub default_value: Option<SliderValue>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub bindings: SliderBindings,
    /// Delay between [`Slider::mount`] and the first measurement.
    pub measure_delay: Duration,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            label: None,
            description: None,
            default_value: None,
            min: 1.0,
            max: 100.0,
            step: 1.0,
            bindings: SliderBindings::default(),
            measure_delay: DEFAULT_MEASURE_DELAY,
        }
    }
}

type ChangeCallback = Box<dyn FnMut(&SliderValue)>;
type FocusCallback = Box<dyn FnMut(Option<usize>)>;
type BlurCallback = Box<dyn FnMut()>;

pub struct Slider {
    controller: SliderController,
    label: Option<String>,
    description: Option<String>,
    container: LayoutRef,
    bar: LayoutRef,
    handle_hits: Vec<Rect>,
    parent_width: Option<f64>,
    measure: MeasureSchedule,
    measure_delay: Duration,
    /// Set by a resize; the next render measures the new layout.
    remeasure: bool,
    on_change: Option<ChangeCallback>,
    on_focus: Option<FocusCallback>,
    on_blur: Option<BlurCallback>,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    pub fn new() -> Self {
        let options = SliderOptions::default();
        let range = RangeConfig::new(options.min, options.max, options.step);
        Self::from_parts(options, range, WindowListeners::new())
    }

    pub fn with_options(options: SliderOptions) -> Result<Self, RangeError> {
        Self::with_window(options, WindowListeners::new())
    }

    /// Like [`Slider::with_options`], registering window listeners in a shared registry.
    pub fn with_window(options: SliderOptions, window: WindowListeners) -> Result<Self, RangeError> {
        let range = RangeConfig::try_new(options.min, options.max, options.step)?;
        Ok(Self::from_parts(options, range, window))
    }

    fn from_parts(options: SliderOptions, range: RangeConfig, window: WindowListeners) -> Self {
        let value = options.default_value.unwrap_or_default();
        let controller = SliderController::new(range, value, window).with_bindings(options.bindings);
        Self {
            controller,
            label: options.label,
            description: options.description,
            container: LayoutRef::new(),
            bar: LayoutRef::new(),
            handle_hits: Vec::new(),
            parent_width: None,
            measure: MeasureSchedule::default(),
            measure_delay: options.measure_delay,
            remeasure: false,
            on_change: None,
            on_focus: None,
            on_blur: None,
        }
    }

    pub fn on_change(mut self, f: impl FnMut(&SliderValue) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut(Option<usize>) + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn controller(&self) -> &SliderController {
        &self.controller
    }

    pub fn value(&self) -> &SliderValue {
        self.controller.value()
    }

    /// Replaces the value programmatically. Does not invoke `on_change`.
    pub fn set_value(&mut self, value: impl Into<SliderValue>) {
        self.controller.set_value(value.into());
    }

    pub fn set_label(&mut self, label: Option<impl Into<String>>) {
        self.label = label.map(Into::into);
    }

    pub fn set_description(&mut self, description: Option<impl Into<String>>) {
        self.description = description.map(Into::into);
    }

    /// Last measured container width. `None` until the first measurement.
    pub fn parent_width(&self) -> Option<f64> {
        self.parent_width
    }

    pub fn position(&self) -> PositionDescriptor {
        let range = self.controller.range();
        position::map(self.parent_width, self.controller.value(), range.max, range.min)
    }

    /// Schedules the first measurement, giving layout time to settle.
    pub fn mount(&mut self, now: Instant) {
        self.measure.schedule(now, self.measure_delay);
    }

    /// Runs a due measurement. Returns `true` when one happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.measure.poll(now) {
            return false;
        }
        self.measure();
        true
    }

    /// Re-reads the container geometry.
    pub fn measure(&mut self) {
        if let Some(bounds) = geometry::bounding_rect(&self.container) {
            self.parent_width = Some(bounds.width);
            tracing::debug!(width = bounds.width, "slider container measured");
        }
    }

    /// Cancels pending work and releases every window listener.
    pub fn unmount(&mut self) {
        self.measure.cancel();
        self.remeasure = false;
        self.controller.release();
        self.container.clear();
        self.bar.clear();
        self.handle_hits.clear();
    }

    pub fn focus_handle(&mut self, index: usize) -> SliderAction {
        let handle = self.controller.value().is_multi().then_some(index);
        let action = self.controller.focus(handle);
        self.dispatch(action)
    }

    /// Moves keyboard focus to the next handle; blurs after the last one.
    pub fn focus_next(&mut self) -> SliderAction {
        self.cycle_focus(true)
    }

    pub fn focus_prev(&mut self) -> SliderAction {
        self.cycle_focus(false)
    }

    pub fn blur(&mut self) -> SliderAction {
        let action = self.controller.blur();
        self.dispatch(action)
    }

    /// Routes one host event.
    ///
    /// Mouse presses are hit-tested against the last render; moves, releases, keys and
    /// focus-lost only reach the controller while it holds the matching window listener.
    pub fn handle_event(&mut self, event: InputEvent) -> SliderAction {
        let action = match event {
            InputEvent::Mouse(m) => self.handle_mouse_event(&m),
            InputEvent::Key(key) => {
                if !self.controller.is_listening(ListenerKind::KeyDown) {
                    return SliderAction::None;
                }
                match key.code {
                    KeyCode::Tab if !key.modifiers.any() => return self.focus_next(),
                    KeyCode::BackTab => return self.focus_prev(),
                    _ => self.controller.key_down(&key),
                }
            }
            InputEvent::Resize(..) => {
                self.remeasure = true;
                SliderAction::None
            }
            InputEvent::FocusLost => {
                if !self.controller.is_listening(ListenerKind::FocusOut) {
                    return SliderAction::None;
                }
                self.controller.blur()
            }
            InputEvent::FocusGained | InputEvent::Paste(_) => SliderAction::None,
        };
        self.dispatch(action)
    }

    fn handle_mouse_event(&mut self, event: &MouseEvent) -> SliderAction {
        match event.kind {
            MouseEventKind::Down(_) => {
                if let Some(i) = self.hit_handle(event.x, event.y) {
                    let handle = self.controller.value().is_multi().then_some(i);
                    return self.controller.handle_pointer_down(handle, event);
                }
                if self.hit_bar(event.x, event.y) {
                    return self
                        .controller
                        .bar_pointer_down(event, geometry::bounding_rect(&self.bar));
                }
                SliderAction::None
            }
            MouseEventKind::Drag(_) | MouseEventKind::Moved => self
                .controller
                .pointer_move(event, geometry::bounding_rect(&self.bar)),
            MouseEventKind::Up(_) => {
                if !self.controller.is_listening(ListenerKind::PointerUp) {
                    return SliderAction::None;
                }
                self.controller.pointer_up()
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => SliderAction::None,
        }
    }

    fn hit_handle(&self, x: u16, y: u16) -> Option<usize> {
        self.handle_hits
            .iter()
            .rposition(|r| contains(r, x, y))
    }

    fn hit_bar(&self, x: u16, y: u16) -> bool {
        self.bar.rect().is_some_and(|r| contains(&r, x, y))
    }

    fn cycle_focus(&mut self, forward: bool) -> SliderAction {
        let count = self.controller.value().len();
        let current = if self.controller.has_focus() {
            Some(self.controller.active_handle().unwrap_or(0))
        } else {
            None
        };
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => count.checked_sub(1),
            (Some(i), true) => (i + 1 < count).then_some(i + 1),
            (Some(i), false) => i.checked_sub(1),
        };
        match next {
            Some(i) => self.focus_handle(i),
            None => self.blur(),
        }
    }

    fn dispatch(&mut self, action: SliderAction) -> SliderAction {
        match &action {
            SliderAction::Changed(value) => {
                if let Some(f) = self.on_change.as_mut() {
                    f(value);
                }
            }
            SliderAction::Focused(handle) => {
                if let Some(f) = self.on_focus.as_mut() {
                    f(*handle);
                }
            }
            SliderAction::Blurred => {
                if let Some(f) = self.on_blur.as_mut() {
                    f();
                }
            }
            SliderAction::None => {}
        }
        action
    }
}

fn contains(r: &Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
}
