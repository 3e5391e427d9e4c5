//! Plain-text rendering for terminal front ends.

pub mod keypad;

pub use keypad::{DisplayStyle, render_display, render_keypad};
