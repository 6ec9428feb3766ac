//! Operator passes: multiplication, relations, exponent groups, plus-minus

use lazy_static::lazy_static;
use regex::Regex;

use super::rewrite::{operator_pattern, replace_operator, static_regex};

lazy_static! {
    static ref TIMES: Regex = static_regex(&operator_pattern("*"));
    static ref LESS_EQUAL: Regex = static_regex(&operator_pattern("<="));
    static ref GREATER_EQUAL: Regex = static_regex(&operator_pattern(">="));
    static ref NOT_EQUAL: Regex = static_regex(&operator_pattern("!="));
    static ref PLUS_MINUS: Regex = static_regex(&operator_pattern("+-"));
    static ref EXPONENT_GROUP: Regex = static_regex(r"\^\((.*?)\)");
}

/// `*` -> `\cdot`
pub fn rewrite_multiplication(input: &str) -> String {
    replace_operator(input, &TIMES, r"\cdot")
}

/// `<=`, `>=`, `!=`, applied in that order.
pub fn rewrite_relations(input: &str) -> String {
    let out = replace_operator(input, &LESS_EQUAL, r"\leq");
    let out = replace_operator(&out, &GREATER_EQUAL, r"\geq");
    replace_operator(&out, &NOT_EQUAL, r"\neq")
}

/// `^(...)` -> `^{(...)}`; the parentheses stay inside the group.
pub fn rewrite_exponent_groups(input: &str) -> String {
    EXPONENT_GROUP.replace_all(input, "^{(${1})}").into_owned()
}

/// `+-` -> `\pm`
pub fn rewrite_plus_minus(input: &str) -> String {
    replace_operator(input, &PLUS_MINUS, r"\pm")
}
