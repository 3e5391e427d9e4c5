//! The calculator state machine.
//!
//! [`Engine::submit`] consumes one key at a time. Keys that show on the
//! display accumulate into the display text; every other key runs an
//! operation against the result register. The formatted display text is
//! recomputed right after each display change, so callers read
//! [`Engine::formatted_display_text`] after every submission.

use serde::Serialize;
use tracing::{debug, trace};

use super::format::{NumberFormat, render_value};
use super::option::{Behavior, BinaryOp, CalculatorOption, UnaryOp};

/// Default cap on the number of digits that can be typed into one number.
pub const DEFAULT_MAX_DIGITS: usize = 9;

/// A binary operation waiting for its second operand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PendingBinaryOperation {
    pub op: BinaryOp,
    pub first_operand: f64,
    pub second_operand: Option<f64>,
}

impl PendingBinaryOperation {
    pub fn new(op: BinaryOp, first_operand: f64) -> Self {
        Self {
            op,
            first_operand,
            second_operand: None,
        }
    }

    pub fn has_second_operand(&self) -> bool {
        self.second_operand.is_some()
    }

    /// Apply the operation and keep the result as the next first operand,
    /// so repeated evaluation keeps applying the same second operand.
    ///
    /// Returns `None` if no second operand has been set.
    pub fn perform(&mut self) -> Option<f64> {
        let second = self.second_operand?;
        let value = self.op.apply(self.first_operand, second);
        self.first_operand = value;
        Some(value)
    }
}

/// Engine tuning knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum number of digits in a typed number.
    pub max_digits: usize,
    pub number_format: NumberFormat,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            number_format: NumberFormat::default(),
        }
    }
}

/// Serializable view of the engine state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub display_text: String,
    pub formatted_display_text: String,
    pub result_register: f64,
    pub is_entering_number: bool,
    pub pending_operation: Option<PendingBinaryOperation>,
}

/// Calculator state for one session.
#[derive(Clone, Debug)]
pub struct Engine {
    display_text: String,
    formatted_display_text: String,
    result_register: f64,
    is_entering_number: bool,
    pending_operation: Option<PendingBinaryOperation>,
    /// An operand was typed or produced since the pending operation was
    /// created. Gates chaining so that pressing two operators in a row
    /// replaces the operator instead of applying it.
    operand_entered: bool,
    options: EngineOptions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        let mut engine = Self {
            display_text: String::new(),
            formatted_display_text: String::new(),
            result_register: 0.0,
            is_entering_number: false,
            pending_operation: None,
            operand_entered: false,
            options,
        };
        engine.set_display_text("0".to_string());
        engine
    }

    /// Raw display text, e.g. `"1234.5"`.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Display text formatted for the user, e.g. `"1,234.5"`.
    pub fn formatted_display_text(&self) -> &str {
        &self.formatted_display_text
    }

    pub fn result_register(&self) -> f64 {
        self.result_register
    }

    pub fn is_entering_number(&self) -> bool {
        self.is_entering_number
    }

    pub fn pending_operation(&self) -> Option<&PendingBinaryOperation> {
        self.pending_operation.as_ref()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display_text: self.display_text.clone(),
            formatted_display_text: self.formatted_display_text.clone(),
            result_register: self.result_register,
            is_entering_number: self.is_entering_number,
            pending_operation: self.pending_operation,
        }
    }

    /// Feed a single key to the engine.
    pub fn submit(&mut self, option: &CalculatorOption) {
        trace!(title = %option.title, behavior = ?option.behavior, "submit");
        if option.should_show_on_result_display {
            self.append(option);
        } else {
            self.perform_operation(option.behavior);
        }
        trace!(
            display = %self.display_text,
            register = self.result_register,
            entering = self.is_entering_number,
            pending = ?self.pending_operation,
            "state"
        );
    }

    fn append(&mut self, option: &CalculatorOption) {
        if !option.is_plain_number && self.display_text.contains(option.title.as_str()) {
            debug!(title = %option.title, "ignoring duplicate symbol");
            return;
        }
        if self.is_entering_number && !self.digits_in_range() {
            debug!(max_digits = self.options.max_digits, "ignoring digit over cap");
            return;
        }

        let mut text = if self.result_register == 0.0 && !self.is_entering_number {
            String::new()
        } else {
            std::mem::take(&mut self.display_text)
        };
        text.push_str(&option.title);
        self.set_display_text(text);
        self.is_entering_number = true;
        self.operand_entered = true;
    }

    fn perform_operation(&mut self, behavior: Behavior) {
        self.is_entering_number = false;
        self.update_result_register();

        match behavior {
            Behavior::Clear => self.clear(),
            Behavior::Unary(op) => self.apply_unary(op),
            Behavior::Binary(op) => self.start_binary(op),
            Behavior::None | Behavior::Constant => {}
            Behavior::Equals => {
                self.perform_pending_operation();
                self.update_display();
                self.result_register = 0.0;
                self.operand_entered = false;
            }
        }
    }

    fn clear(&mut self) {
        self.result_register = 0.0;
        self.update_display();
        self.pending_operation = None;
        self.operand_entered = false;
    }

    fn apply_unary(&mut self, op: UnaryOp) {
        self.result_register = op.apply(self.result_register);
        self.update_display();
        self.operand_entered = true;
    }

    fn start_binary(&mut self, op: BinaryOp) {
        let chains = self.operand_entered
            && self
                .pending_operation
                .is_some_and(|pending| !pending.has_second_operand());
        if chains {
            self.perform_pending_operation();
            self.update_display();
        }

        self.pending_operation = Some(PendingBinaryOperation::new(op, self.result_register));
        self.result_register = 0.0;
        self.operand_entered = false;
    }

    fn perform_pending_operation(&mut self) {
        let Some(pending) = self.pending_operation.as_mut() else {
            return;
        };
        if !pending.has_second_operand() {
            pending.second_operand = Some(self.result_register);
        }
        if let Some(value) = pending.perform() {
            self.result_register = value;
        }
    }

    /// Re-read the result register from the display text.
    fn update_result_register(&mut self) {
        match self.display_text.parse::<f64>() {
            Ok(value) if value.is_finite() => self.result_register = value,
            _ => debug!(display = %self.display_text, "display is not a number, keeping register"),
        }
    }

    /// Re-render the display text from the result register.
    fn update_display(&mut self) {
        self.set_display_text(render_value(self.result_register));
    }

    fn set_display_text(&mut self, text: String) {
        self.display_text = text;
        if let Some(formatted) = self.options.number_format.format_display_text(&self.display_text) {
            self.formatted_display_text = formatted;
        }
    }

    fn digits_in_range(&self) -> bool {
        self.display_text.chars().filter(|c| c.is_numeric()).count() < self.options.max_digits
    }
}
