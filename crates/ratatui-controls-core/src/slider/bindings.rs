use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::keymap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKeyAction {
    Increment,
    Decrement,
    ToMin,
    ToMax,
}

/// Key table for focused slider handles.
///
/// Defaults follow the usual slider keys: up/right increment, down/left decrement, home/end
/// jump to the bounds.
#[derive(Clone, Debug)]
pub struct SliderBindings {
    pub increment: Vec<KeyEvent>,
    pub decrement: Vec<KeyEvent>,
    pub to_min: Vec<KeyEvent>,
    pub to_max: Vec<KeyEvent>,
}

impl Default for SliderBindings {
    fn default() -> Self {
        Self {
            increment: vec![keymap::key(KeyCode::Up), keymap::key(KeyCode::Right)],
            decrement: vec![keymap::key(KeyCode::Down), keymap::key(KeyCode::Left)],
            to_min: vec![keymap::key(KeyCode::Home)],
            to_max: vec![keymap::key(KeyCode::End)],
        }
    }
}

impl SliderBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<SliderKeyAction> {
        if keymap::any_matches(&self.increment, key) {
            return Some(SliderKeyAction::Increment);
        }
        if keymap::any_matches(&self.decrement, key) {
            return Some(SliderKeyAction::Decrement);
        }
        if keymap::any_matches(&self.to_min, key) {
            return Some(SliderKeyAction::ToMin);
        }
        if keymap::any_matches(&self.to_max, key) {
            return Some(SliderKeyAction::ToMax);
        }
        None
    }
}
