//! `ratatui-controls-core` provides numeric form controls for terminal UIs.
//!
//! This crate is designed for **widget library authors** and apps that want fine-grained
//! control. The facade crate `ratatui-controls` re-exports it.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input, timers and rendering from your app.
//! - No async runtime: all components run on the main thread.
//! - Headless core: quantization ([`quantize`]) and position mapping ([`position`]) are pure
//!   functions; the slider state machine ([`slider::SliderController`]) can be driven without
//!   rendering anything.
//!
//! ## Window listeners
//!
//! A slider being dragged keeps receiving pointer moves that land outside its area, and a
//! focused handle receives every key press. These window-scoped registrations are explicit
//! [`listeners::Subscription`] handles owned by the control and released on drop, so tearing a
//! control down mid-drag never leaves a listener behind. Share a [`listeners::WindowListeners`]
//! registry between controls to observe them.
//!
//! Useful entry points:
//! - [`slider::Slider`]: single or multi handle range slider.
//! - [`stepper::InputStepper`]: numeric stepper with increment/decrement buttons.
//! - [`quantize::RangeConfig`]: clamp + snap-to-step.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod geometry;
pub mod input;
pub mod keymap;
pub mod listeners;
pub mod position;
pub mod quantize;
pub mod render;

pub mod slider;
pub mod stepper;
