//! Calculator module: keypad options, the evaluation engine and display
//! formatting.
//!
//! This module provides functionality to:
//! - Build the keypad layout of available options
//! - Feed options one at a time into the engine
//! - Format the display for the user
//! - Translate typed text into options and copy results to the clipboard

mod catalog;
mod clipboard;
mod engine;
mod format;
mod keys;
mod option;

pub use catalog::{Catalog, Layout, build_options};
pub use clipboard::{clipboard_text, copy_to_clipboard};
pub use engine::{
    DEFAULT_MAX_DIGITS, Engine, EngineOptions, EngineSnapshot, PendingBinaryOperation,
};
pub use format::{NumberFormat, NumberLocale, render_value};
pub use keys::{looks_like_keys, parse_keys};
pub use option::{Behavior, BinaryOp, CalculatorOption, UnaryOp};
