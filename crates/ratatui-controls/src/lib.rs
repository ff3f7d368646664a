//! `ratatui-controls` provides form controls for terminal UIs: range sliders with one or more
//! handles and numeric steppers.
//!
//! Everything lives in `ratatui-controls-core` and is re-exported here. Enable the `crossterm`
//! feature for [`crossterm_input`], which converts crossterm events into [`input::InputEvent`].
pub use ratatui_controls_core::geometry;
pub use ratatui_controls_core::input;
pub use ratatui_controls_core::keymap;
pub use ratatui_controls_core::listeners;
pub use ratatui_controls_core::position;
pub use ratatui_controls_core::quantize;
pub use ratatui_controls_core::render;
pub use ratatui_controls_core::slider;
pub use ratatui_controls_core::stepper;
pub use ratatui_controls_core::theme;

#[cfg(feature = "crossterm")]
pub use ratatui_controls_core::crossterm_input;
