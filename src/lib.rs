//! keycalc: a keypad-driven four-function calculator.
//!
//! The [`calculator::Engine`] consumes keypad options one at a time and keeps
//! a formatted display string up to date:
//!
//! ```
//! use keycalc::calculator::{Catalog, Engine};
//!
//! let catalog = Catalog::default();
//! let mut engine = Engine::new();
//! for key in ["3", "+", "2", "="] {
//!     engine.submit(catalog.find(key).unwrap());
//! }
//! assert_eq!(engine.formatted_display_text(), "5");
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod ui;

pub use config::Config;
pub use error::{ClipboardError, ConfigError, KeyError};
