//! Fraction recognition and square roots
//!
//! Six division forms are tried in a fixed order. Each form rescans the
//! whole string left by the previous one, so later forms see the fractions
//! earlier forms produced. The last form splits any two non-space,
//! non-parenthesis runs around a slash and is greedy: `a/b/c` becomes
//! `\frac{a/b}{c}`.

use lazy_static::lazy_static;
use regex::Regex;

use super::rewrite::{replace_all_unless, static_regex};

/// One division shape and how to rewrite it.
struct FractionForm {
    pattern: Regex,
    /// The left operand is a parenthesised group, which must not be the
    /// argument of a `sqrt(...)` call.
    parenthesised_left: bool,
}

impl FractionForm {
    fn new(pattern: &str, parenthesised_left: bool) -> Self {
        FractionForm {
            pattern: static_regex(pattern),
            parenthesised_left,
        }
    }

    fn apply(&self, text: &str) -> String {
        if self.parenthesised_left {
            replace_all_unless(
                text,
                &self.pattern,
                |text, caps| {
                    caps.get(0)
                        .is_some_and(|m| is_sqrt_argument(text, m.start()))
                },
                |caps| format!(r"\frac{{{}}}{{{}}}", &caps[1], &caps[2]),
            )
        } else {
            self.pattern
                .replace_all(text, r"\frac{${1}}{${2}}")
                .into_owned()
        }
    }
}

lazy_static! {
    static ref FRACTION_FORMS: [FractionForm; 6] = [
        // (A)/(B)
        FractionForm::new(r"\(\s*([^()]+)\s*\)\s*/\s*\(\s*([^()]+)\s*\)", true),
        // (A)/B
        FractionForm::new(r"\(\s*([^()]+)\s*\)\s*/\s*([^()\s]+)", true),
        // A/(B)
        FractionForm::new(r"([^()\s]+)\s*/\s*\(\s*([^()]+)\s*\)", false),
        // A/sqrt(...)
        FractionForm::new(r"([^()\s]+)\s*/\s*(sqrt\([^()]+\))", false),
        // sqrt(...)/B
        FractionForm::new(r"(sqrt\([^()]+\))\s*/\s*([^()\s]+)", false),
        // A/B
        FractionForm::new(r"([^()\s]+)\s*/\s*([^()\s]+)", false),
    ];
    static ref SQUARE_ROOT: Regex = static_regex(r"sqrt\((.*?)\)");
}

fn is_sqrt_argument(text: &str, open_paren: usize) -> bool {
    text[..open_paren].ends_with("sqrt")
}

/// Rewrite divisions into `\frac{num}{den}`.
pub fn rewrite_fractions(input: &str) -> String {
    FRACTION_FORMS
        .iter()
        .fold(input.to_string(), |text, form| form.apply(&text))
}

/// `sqrt(...)` -> `\sqrt{...}`, up to the first closing parenthesis.
pub fn rewrite_square_roots(input: &str) -> String {
    SQUARE_ROOT.replace_all(input, r"\sqrt{${1}}").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesised_forms() {
        assert_eq!(rewrite_fractions("(a+b)/(c+d)"), r"\frac{a+b}{c+d}");
        assert_eq!(rewrite_fractions("(x+1)/2"), r"\frac{x+1}{2}");
        assert_eq!(rewrite_fractions("2/(x+1)"), r"\frac{2}{x+1}");
    }

    #[test]
    fn test_sqrt_operands() {
        assert_eq!(rewrite_fractions("1/sqrt(x)"), r"\frac{1}{sqrt(x)}");
        assert_eq!(rewrite_fractions("sqrt(4)/2"), r"\frac{sqrt(4)}{2}");
    }

    #[test]
    fn test_sqrt_argument_is_not_a_group() {
        assert_eq!(rewrite_fractions("sqrt(a)/(b)"), "sqrt(a)/(b)");
    }

    #[test]
    fn test_bare_operands() {
        assert_eq!(rewrite_fractions("a/b"), r"\frac{a}{b}");
        assert_eq!(rewrite_fractions("a / b"), r"\frac{a}{b}");
        assert_eq!(rewrite_fractions("1/2 + 3/4"), r"\frac{1}{2} + \frac{3}{4}");
    }

    #[test]
    fn test_multiple_slashes_split_greedily() {
        assert_eq!(rewrite_fractions("a/b/c"), r"\frac{a/b}{c}");
    }

    #[test]
    fn test_group_keeps_inner_trailing_space() {
        assert_eq!(rewrite_fractions("( a )/( b )"), r"\frac{a }{b }");
    }

    #[test]
    fn test_square_root() {
        assert_eq!(rewrite_square_roots("sqrt(2)"), r"\sqrt{2}");
        assert_eq!(
            rewrite_square_roots(r"\frac{sqrt(4)}{2}"),
            r"\frac{\sqrt{4}}{2}"
        );
        assert_eq!(rewrite_square_roots("sqrt(x"), "sqrt(x");
    }
}
