//! Calculator options: the keys a user can press.
//!
//! Operations are a closed set of named variants dispatched through
//! [`UnaryOp::apply`] and [`BinaryOp::apply`], so options stay plain data
//! that can be compared, logged and serialized.

use serde::{Deserialize, Serialize};

/// Single-operand operation applied to the result register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    /// Sign toggle: -x
    Negate,
    /// x / 100
    Percent,
    /// √x
    SquareRoot,
    /// x²
    Square,
    /// 1/x
    Reciprocal,
}

impl UnaryOp {
    /// Evaluate this operation on a value.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
            Self::Percent => value / 100.0,
            Self::SquareRoot => value.sqrt(),
            Self::Square => value * value,
            Self::Reciprocal => 1.0 / value,
        }
    }
}

/// Two-operand operation held by a pending operation until its second
/// operand arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// xʸ
    Power,
}

impl BinaryOp {
    /// Evaluate this operation on two values.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => lhs.powf(rhs),
        }
    }
}

/// What an operation key does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "op")]
pub enum Behavior {
    /// Filler key, does nothing.
    None,
    Clear,
    Unary(UnaryOp),
    Binary(BinaryOp),
    /// Reserved for constant keys; currently leaves state untouched.
    Constant,
    Equals,
}

/// A single calculator key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculatorOption {
    /// Glyph shown on the key and appended to the display.
    pub title: String,
    /// True for digits. The decimal point is a display-only symbol and is
    /// not a plain number, so it can appear at most once.
    pub is_plain_number: bool,
    /// True if pressing the key appends `title` to the display instead of
    /// running an operation.
    pub should_show_on_result_display: bool,
    pub behavior: Behavior,
}

impl CalculatorOption {
    /// A digit key.
    pub fn digit(digit: u8) -> Self {
        Self {
            title: digit.to_string(),
            is_plain_number: true,
            should_show_on_result_display: true,
            behavior: Behavior::None,
        }
    }

    /// The decimal point key.
    pub fn decimal_point() -> Self {
        Self {
            title: ".".to_string(),
            is_plain_number: false,
            should_show_on_result_display: true,
            behavior: Behavior::None,
        }
    }

    /// An operation key that never touches the display text directly.
    pub fn operation(title: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            title: title.into(),
            is_plain_number: false,
            should_show_on_result_display: false,
            behavior,
        }
    }

    /// Blank filler key.
    pub fn blank() -> Self {
        Self::operation("", Behavior::None)
    }

    /// Check if pressing this key appends to the display.
    pub fn appends_to_display(&self) -> bool {
        self.should_show_on_result_display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_ops() {
        assert_eq!(BinaryOp::Add.apply(3.0, 2.0), 5.0);
        assert_eq!(BinaryOp::Subtract.apply(3.0, 2.0), 1.0);
        assert_eq!(BinaryOp::Multiply.apply(3.0, 2.0), 6.0);
        assert_eq!(BinaryOp::Divide.apply(3.0, 2.0), 1.5);
        assert_eq!(BinaryOp::Power.apply(2.0, 10.0), 1024.0);
        assert!(BinaryOp::Divide.apply(1.0, 0.0).is_infinite());
    }

    #[test]
    fn test_unary_ops() {
        assert_eq!(UnaryOp::Negate.apply(4.0), -4.0);
        assert_eq!(UnaryOp::Percent.apply(50.0), 0.5);
        assert_eq!(UnaryOp::SquareRoot.apply(16.0), 4.0);
        assert_eq!(UnaryOp::Square.apply(-3.0), 9.0);
        assert_eq!(UnaryOp::Reciprocal.apply(4.0), 0.25);
        assert!(UnaryOp::SquareRoot.apply(-1.0).is_nan());
    }

    #[test]
    fn test_option_kinds() {
        let seven = CalculatorOption::digit(7);
        assert_eq!(seven.title, "7");
        assert!(seven.is_plain_number);
        assert!(seven.appends_to_display());

        let point = CalculatorOption::decimal_point();
        assert!(!point.is_plain_number);
        assert!(point.appends_to_display());

        let plus = CalculatorOption::operation("+", Behavior::Binary(BinaryOp::Add));
        assert!(!plus.is_plain_number);
        assert!(!plus.appends_to_display());
    }

    #[test]
    fn test_behavior_serialization() {
        let json = serde_json::to_string(&Behavior::Binary(BinaryOp::Divide)).unwrap();
        assert_eq!(json, r#"{"kind":"binary","op":"divide"}"#);

        let json = serde_json::to_string(&Behavior::Equals).unwrap();
        assert_eq!(json, r#"{"kind":"equals"}"#);

        let back: Behavior = serde_json::from_str(r#"{"kind":"unary","op":"negate"}"#).unwrap();
        assert_eq!(back, Behavior::Unary(UnaryOp::Negate));
    }
}
