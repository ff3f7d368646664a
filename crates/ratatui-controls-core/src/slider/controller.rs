use crate::geometry::Bounds;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::listeners::ListenerKind;
use crate::listeners::Subscription;
use crate::listeners::WindowListeners;
use crate::quantize;
use crate::quantize::RangeConfig;
use crate::slider::bindings::SliderBindings;
use crate::slider::bindings::SliderKeyAction;
use crate::slider::value::SliderValue;

const POINTER_LISTENERS: [ListenerKind; 2] = [ListenerKind::PointerMove, ListenerKind::PointerUp];
const KEYBOARD_LISTENERS: [ListenerKind; 2] = [ListenerKind::KeyDown, ListenerKind::FocusOut];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    /// A handle is focused or being dragged. `None` targets a single-value slider.
    Engaged(Option<usize>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SliderAction {
    None,
    Changed(SliderValue),
    Focused(Option<usize>),
    Blurred,
}

/// Interaction state machine of a slider.
///
/// Owns the value, the active handle and the window subscriptions taken while a handle is
/// engaged. Geometry is passed in by the caller on every pointer event so a resize during a
/// drag is picked up by the next move.
#[derive(Debug)]
pub struct SliderController {
    range: RangeConfig,
    value: SliderValue,
    active_handle: Option<usize>,
    bindings: SliderBindings,
    window: WindowListeners,
    pointer: Option<Subscription>,
    keyboard: Option<Subscription>,
}

impl SliderController {
    pub fn new(range: RangeConfig, value: SliderValue, window: WindowListeners) -> Self {
        Self {
            value: value.aligned(&range),
            range,
            active_handle: None,
            bindings: SliderBindings::default(),
            window,
            pointer: None,
            keyboard: None,
        }
    }

    pub fn with_bindings(mut self, bindings: SliderBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn range(&self) -> &RangeConfig {
        &self.range
    }

    pub fn value(&self) -> &SliderValue {
        &self.value
    }

    pub fn set_value(&mut self, value: SliderValue) {
        self.value = value.aligned(&self.range);
        if self.active_handle.is_some_and(|i| i >= self.value.len()) {
            self.active_handle = None;
        }
    }

    /// Last engaged handle. Kept after the interaction ends.
    pub fn active_handle(&self) -> Option<usize> {
        self.active_handle
    }

    pub fn state(&self) -> InteractionState {
        if self.pointer.is_some() || self.keyboard.is_some() {
            InteractionState::Engaged(self.active_handle)
        } else {
            InteractionState::Idle
        }
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.pointer.as_ref().is_some_and(|s| s.listens_to(kind))
            || self.keyboard.as_ref().is_some_and(|s| s.listens_to(kind))
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn has_focus(&self) -> bool {
        self.keyboard.is_some()
    }

    /// Press on a handle. Starts a drag without changing the value.
    pub fn handle_pointer_down(
        &mut self,
        handle: Option<usize>,
        event: &MouseEvent,
    ) -> SliderAction {
        if !event.is_primary_press() {
            return SliderAction::None;
        }
        self.active_handle = handle;
        self.attach_pointer();
        tracing::debug!(?handle, "slider drag started on handle");
        SliderAction::None
    }

    /// Press on the bar: seeks to the pressed position, engaging the closest handle.
    pub fn bar_pointer_down(&mut self, event: &MouseEvent, bar: Option<Bounds>) -> SliderAction {
        if !event.is_primary_press() {
            return SliderAction::None;
        }
        let Some(raw) = self.value_at(event.x, bar) else {
            return SliderAction::None;
        };
        if self.value.is_multi() {
            let Some(nearest) = self.value.nearest_handle(raw) else {
                return SliderAction::None;
            };
            self.active_handle = Some(nearest);
        }
        self.attach_pointer();
        tracing::debug!(handle = ?self.active_handle, raw, "slider drag started on bar");
        self.apply(self.range.align(raw))
    }

    pub fn pointer_move(&mut self, event: &MouseEvent, bar: Option<Bounds>) -> SliderAction {
        if !self.is_listening(ListenerKind::PointerMove) {
            return SliderAction::None;
        }
        let held = match event.kind {
            MouseEventKind::Drag(MouseButton::Left) => true,
            MouseEventKind::Moved => event.buttons.left,
            _ => false,
        };
        if !held {
            return SliderAction::None;
        }
        let Some(raw) = self.value_at(event.x, bar) else {
            return SliderAction::None;
        };
        self.apply(self.range.align(raw))
    }

    pub fn pointer_up(&mut self) -> SliderAction {
        if self.pointer.take().is_some() {
            tracing::debug!(handle = ?self.active_handle, "slider drag ended");
        }
        SliderAction::None
    }

    pub fn focus(&mut self, handle: Option<usize>) -> SliderAction {
        self.active_handle = handle;
        self.keyboard = None;
        self.keyboard = Some(self.window.subscribe(&KEYBOARD_LISTENERS));
        tracing::debug!(?handle, "slider handle focused");
        SliderAction::Focused(handle)
    }

    pub fn blur(&mut self) -> SliderAction {
        if self.keyboard.take().is_none() {
            return SliderAction::None;
        }
        tracing::debug!(handle = ?self.active_handle, "slider handle blurred");
        SliderAction::Blurred
    }

    pub fn key_down(&mut self, key: &KeyEvent) -> SliderAction {
        if !self.is_listening(ListenerKind::KeyDown) {
            return SliderAction::None;
        }
        // Modified keys belong to the host (shortcuts, selection).
        if key.modifiers.any() {
            return SliderAction::None;
        }
        let Some(action) = self.bindings.action_for(key) else {
            return SliderAction::None;
        };
        match action {
            SliderKeyAction::Increment => self.move_by_step(self.range.step),
            SliderKeyAction::Decrement => self.move_by_step(-self.range.step),
            SliderKeyAction::ToMin => self.apply(self.range.min),
            SliderKeyAction::ToMax => self.apply(self.range.max),
        }
    }

    /// Drops every window subscription.
    pub fn release(&mut self) {
        self.pointer = None;
        self.keyboard = None;
    }

    fn attach_pointer(&mut self) {
        self.pointer = None;
        self.pointer = Some(self.window.subscribe(&POINTER_LISTENERS));
    }

    fn move_by_step(&mut self, delta: f64) -> SliderAction {
        let Some(current) = self.value.get(self.active_handle) else {
            return SliderAction::None;
        };
        self.apply(self.range.align(current + delta))
    }

    fn value_at(&self, page_x: u16, bar: Option<Bounds>) -> Option<f64> {
        let bar = bar.filter(|b| b.width > 0.0)?;
        Some(quantize::from_offset(
            page_x as f64,
            bar.left,
            bar.width,
            self.range.min,
            self.range.max,
        ))
    }

    fn apply(&mut self, next: f64) -> SliderAction {
        if !self.value.replace(self.active_handle, next) {
            return SliderAction::None;
        }
        tracing::trace!(value = ?self.value, handle = ?self.active_handle, "slider value changed");
        SliderAction::Changed(self.value.clone())
    }
}
