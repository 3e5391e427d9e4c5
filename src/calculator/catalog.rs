//! The fixed keypad layout.

use serde::{Deserialize, Serialize};

use super::option::{Behavior, BinaryOp, CalculatorOption, UnaryOp};

/// Which keypad to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Classic four-function keypad.
    #[default]
    Basic,
    /// Basic keypad with an extra row of scientific keys on top.
    Scientific,
}

/// Ordered rows of calculator options.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    rows: Vec<Vec<CalculatorOption>>,
}

impl Catalog {
    /// Build the keypad for a layout.
    pub fn build(layout: Layout) -> Self {
        let mut rows = Vec::new();
        if layout == Layout::Scientific {
            rows.push(scientific_row());
        }
        rows.extend(build_options());
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<CalculatorOption>] {
        &self.rows
    }

    /// Number of keys per row, taken from the first row.
    pub fn columns_per_row(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }

    /// Find an option by its key glyph.
    pub fn find(&self, title: &str) -> Option<&CalculatorOption> {
        if title.is_empty() {
            return None;
        }
        self.iter().find(|option| option.title == title)
    }

    /// Iterate over all options in row order.
    pub fn iter(&self) -> impl Iterator<Item = &CalculatorOption> {
        self.rows.iter().flatten()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::build(Layout::Basic)
    }
}

/// Build the basic four-function keypad.
///
/// ```text
/// C  ±  %  ÷
/// 7  8  9  ×
/// 4  5  6  −
/// 1  2  3  +
/// 0     .  =
/// ```
pub fn build_options() -> Vec<Vec<CalculatorOption>> {
    use CalculatorOption as Opt;

    vec![
        vec![
            Opt::operation("C", Behavior::Clear),
            Opt::operation("±", Behavior::Unary(UnaryOp::Negate)),
            Opt::operation("%", Behavior::Unary(UnaryOp::Percent)),
            Opt::operation("÷", Behavior::Binary(BinaryOp::Divide)),
        ],
        vec![
            Opt::digit(7),
            Opt::digit(8),
            Opt::digit(9),
            Opt::operation("×", Behavior::Binary(BinaryOp::Multiply)),
        ],
        vec![
            Opt::digit(4),
            Opt::digit(5),
            Opt::digit(6),
            Opt::operation("−", Behavior::Binary(BinaryOp::Subtract)),
        ],
        vec![
            Opt::digit(1),
            Opt::digit(2),
            Opt::digit(3),
            Opt::operation("+", Behavior::Binary(BinaryOp::Add)),
        ],
        vec![
            Opt::digit(0),
            Opt::blank(),
            Opt::decimal_point(),
            Opt::operation("=", Behavior::Equals),
        ],
    ]
}

fn scientific_row() -> Vec<CalculatorOption> {
    vec![
        CalculatorOption::operation("√", Behavior::Unary(UnaryOp::SquareRoot)),
        CalculatorOption::operation("x²", Behavior::Unary(UnaryOp::Square)),
        CalculatorOption::operation("1/x", Behavior::Unary(UnaryOp::Reciprocal)),
        CalculatorOption::operation("xʸ", Behavior::Binary(BinaryOp::Power)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_layout_shape() {
        let catalog = Catalog::build(Layout::Basic);
        assert_eq!(catalog.rows().len(), 5);
        assert_eq!(catalog.columns_per_row(), Some(4));
        assert!(catalog.rows().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_scientific_layout_adds_row() {
        let catalog = Catalog::build(Layout::Scientific);
        assert_eq!(catalog.rows().len(), 6);
        assert_eq!(catalog.columns_per_row(), Some(4));
        assert_eq!(catalog.rows()[0][0].title, "√");
        assert_eq!(
            catalog.find("xʸ").map(|o| o.behavior),
            Some(Behavior::Binary(BinaryOp::Power))
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_options(), build_options());
    }

    #[test]
    fn test_all_digits_present() {
        let catalog = Catalog::default();
        for digit in 0..=9u8 {
            let option = catalog.find(&digit.to_string()).unwrap();
            assert!(option.is_plain_number);
            assert!(option.should_show_on_result_display);
        }
    }

    #[test]
    fn test_display_xor_computation() {
        for option in Catalog::build(Layout::Scientific).iter() {
            let computes = !matches!(option.behavior, Behavior::None) || option.title.is_empty();
            assert_ne!(option.should_show_on_result_display, computes, "{:?}", option);
        }
    }

    #[test]
    fn test_find_operations() {
        let catalog = Catalog::default();
        assert_eq!(catalog.find("C").map(|o| o.behavior), Some(Behavior::Clear));
        assert_eq!(catalog.find("=").map(|o| o.behavior), Some(Behavior::Equals));
        assert_eq!(
            catalog.find("−").map(|o| o.behavior),
            Some(Behavior::Binary(BinaryOp::Subtract))
        );
        assert!(catalog.find(".").is_some_and(|o| !o.is_plain_number));
        assert!(catalog.find("").is_none());
        assert!(catalog.find("√").is_none());
    }
}
