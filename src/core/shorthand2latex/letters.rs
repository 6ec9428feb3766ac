//! Greek letter substitution

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::rewrite::static_regex;
use crate::data::symbols::{greek_names_longest_first, greek_replacement};

lazy_static! {
    /// Every table key in one word-anchored alternation, compiled once.
    static ref GREEK_WORD: Regex = {
        let names: Vec<String> = greek_names_longest_first()
            .into_iter()
            .map(regex::escape)
            .collect();
        static_regex(&format!(r"\b({})\b", names.join("|")))
    };
}

/// Replace standalone spelled-out Greek names (case-sensitive, whole words only).
pub fn rewrite_greek_letters(input: &str) -> String {
    GREEK_WORD
        .replace_all(input, |caps: &Captures<'_>| {
            greek_replacement(&caps[1]).map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_names() {
        assert_eq!(rewrite_greek_letters("alpha + beta"), r"\alpha + \beta");
        assert_eq!(rewrite_greek_letters("2pi r"), "2pi r");
        assert_eq!(rewrite_greek_letters("(theta)"), r"(\theta)");
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(rewrite_greek_letters("alphabet"), "alphabet");
        assert_eq!(rewrite_greek_letters("beta_1"), "beta_1");
        assert_eq!(rewrite_greek_letters("zeta eta"), r"\zeta \eta");
    }

    #[test]
    fn test_case_sensitive_capitals() {
        assert_eq!(rewrite_greek_letters("Gamma Alpha"), r"\Gamma A");
        assert_eq!(rewrite_greek_letters("ALPHA"), "ALPHA");
        assert_eq!(rewrite_greek_letters("omicron Omicron"), "o O");
    }
}
