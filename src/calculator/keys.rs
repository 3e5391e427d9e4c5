//! Keyboard input for the calculator.
//!
//! Maps typed text such as `3+2=` or `12*4 n` onto keypad options so a
//! terminal front end can drive the engine without a button grid.

use lazy_static::lazy_static;
use regex::Regex;

use super::catalog::Catalog;
use super::option::CalculatorOption;
use crate::error::KeyError;

lazy_static! {
    /// Matches strings made only of characters that have a key binding.
    static ref KEY_CHARS: Regex = Regex::new(
        r"^[\d\s\.,\+\-\*/xX×÷−=%cCnN~±sS√qQ²rR\^]*$"
    ).unwrap();
}

/// Key glyph for a typed character, or `None` for whitespace.
fn key_title(c: char) -> Result<Option<&'static str>, KeyError> {
    let title = match c {
        c if c.is_whitespace() => return Ok(None),
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        '.' | ',' => ".",
        '+' => "+",
        '-' | '−' => "−",
        '*' | 'x' | 'X' | '×' => "×",
        '/' | '÷' => "÷",
        '=' => "=",
        '%' => "%",
        'c' | 'C' => "C",
        'n' | 'N' | '~' | '±' => "±",
        's' | 'S' | '√' => "√",
        'q' | 'Q' | '²' => "x²",
        'r' | 'R' => "1/x",
        '^' => "xʸ",
        other => return Err(KeyError::UnknownKey(other)),
    };
    Ok(Some(title))
}

/// Check if a line only contains characters that have key bindings.
///
/// This is a fast pre-check; [`parse_keys`] reports the exact offending
/// character.
pub fn looks_like_keys(input: &str) -> bool {
    KEY_CHARS.is_match(input)
}

/// Translate typed text into keypad options.
///
/// Fails on characters without a binding, and on bindings whose key is not
/// part of the catalog's layout (e.g. `^` on the basic keypad).
pub fn parse_keys<'a>(
    catalog: &'a Catalog,
    input: &str,
) -> Result<Vec<&'a CalculatorOption>, KeyError> {
    let mut options = Vec::new();
    for c in input.chars() {
        let Some(title) = key_title(c)? else {
            continue;
        };
        let option = catalog
            .find(title)
            .ok_or_else(|| KeyError::NotOnKeypad(title.to_string()))?;
        options.push(option);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Behavior, BinaryOp, Layout};

    fn titles(catalog: &Catalog, input: &str) -> Vec<String> {
        parse_keys(catalog, input)
            .unwrap()
            .into_iter()
            .map(|o| o.title.clone())
            .collect()
    }

    #[test]
    fn test_simple_sequence() {
        let catalog = Catalog::default();
        assert_eq!(titles(&catalog, "3+2="), vec!["3", "+", "2", "="]);
    }

    #[test]
    fn test_ascii_aliases() {
        let catalog = Catalog::default();
        assert_eq!(
            titles(&catalog, "8-2*3/4 n % c"),
            vec!["8", "−", "2", "×", "3", "÷", "4", "±", "%", "C"]
        );
        assert_eq!(titles(&catalog, "1,5x2"), vec!["1", ".", "5", "×", "2"]);
    }

    #[test]
    fn test_whitespace_ignored() {
        let catalog = Catalog::default();
        assert!(parse_keys(&catalog, "  \t ").unwrap().is_empty());
        assert_eq!(titles(&catalog, " 1 0 "), vec!["1", "0"]);
    }

    #[test]
    fn test_unknown_character() {
        let catalog = Catalog::default();
        assert_eq!(parse_keys(&catalog, "3+a").unwrap_err(), KeyError::UnknownKey('a'));
        assert_eq!(parse_keys(&catalog, "(1)").unwrap_err(), KeyError::UnknownKey('('));
    }

    #[test]
    fn test_scientific_keys_need_layout() {
        let basic = Catalog::build(Layout::Basic);
        assert_eq!(
            parse_keys(&basic, "2^3").unwrap_err(),
            KeyError::NotOnKeypad("xʸ".to_string())
        );

        let scientific = Catalog::build(Layout::Scientific);
        let options = parse_keys(&scientific, "2^3").unwrap();
        assert_eq!(options[1].behavior, Behavior::Binary(BinaryOp::Power));
        assert_eq!(titles(&scientific, "9s4q2r"), vec!["9", "√", "4", "x²", "2", "1/x"]);
    }

    #[test]
    fn test_looks_like_keys() {
        assert!(looks_like_keys("3+2="));
        assert!(looks_like_keys("12 × 4 ="));
        assert!(looks_like_keys(""));
        assert!(!looks_like_keys("hello"));
        assert!(!looks_like_keys("sin(0)"));
    }
}
