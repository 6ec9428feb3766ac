//! Calculus notation: derivatives, exponentials, limits, integrals, sums, products
//!
//! Each function is one pipeline pass over the whole working string.

use lazy_static::lazy_static;
use regex::{Captures, NoExpand, Regex};

use super::rewrite::{replace_all_unless, static_regex};

lazy_static! {
    static ref DERIVATIVE: Regex = static_regex(r"d(\p{L}+)/d(\p{L}+)");
    static ref EXPONENTIAL: Regex = static_regex(r"exp\((.*?)\)");
    static ref LIMIT: Regex =
        static_regex(r"lim\s*\(\s*([a-zA-Z]+)\s*->\s*(\w+)\)\s+(.*)");
    static ref NEG_INFINITY: Regex = static_regex(r"\bminf\b");
    static ref INFINITY: Regex = static_regex(r"\binf\b");
    static ref DEFINITE_INTEGRAL: Regex =
        static_regex(&bounded_pattern("int", r"\s+(?P<body>.*?)\s*dx"));
    static ref INDEFINITE_INTEGRAL: Regex = static_regex(r"int\s+(?P<body>.+?)\s*dx");
    static ref SUMMATION: Regex = static_regex(&bounded_pattern("sum", r"\s+(?P<body>.*)"));
    static ref PRODUCT: Regex = static_regex(&bounded_pattern("prod", r"\s+(?P<body>.*)"));
}

/// Bound notations accepted after `int`, `sum` and `prod`, in priority order:
/// `_{lo}^{hi}`, `_lo^hi`, `(lo, hi)`.
const BOUND_GROUPS: [(&str, &str); 3] = [
    ("braced_lo", "braced_hi"),
    ("bare_lo", "bare_hi"),
    ("paren_lo", "paren_hi"),
];

/// One alternation per keyword, so each occurrence is rewritten by the first
/// notation that fits and never revisited by another.
fn bounded_pattern(keyword: &str, tail: &str) -> String {
    format!(
        concat!(
            r"{kw}\s*(?:",
            r"_\{{\s*(?P<braced_lo>[^}}]+)\}}\s*\^\{{\s*(?P<braced_hi>[^}}]+)\}}",
            r"|_(?P<bare_lo>\S+)\^(?P<bare_hi>\S+)",
            r"|\(\s*(?P<paren_lo>[^,]+)\s*,\s*(?P<paren_hi>[^)\s]+)\s*\)",
            r"){tail}"
        ),
        kw = regex::escape(keyword),
        tail = tail
    )
}

fn bounds<'t>(caps: &Captures<'t>) -> Option<(&'t str, &'t str)> {
    BOUND_GROUPS
        .iter()
        .find_map(|(lo, hi)| Some((caps.name(lo)?.as_str(), caps.name(hi)?.as_str())))
}

fn body<'t>(caps: &Captures<'t>) -> &'t str {
    caps.name("body").map_or("", |m| m.as_str())
}

/// `dX/dY` -> `\frac{dX}{dY}`
pub fn rewrite_derivatives(input: &str) -> String {
    DERIVATIVE
        .replace_all(input, r"\frac{d${1}}{d${2}}")
        .into_owned()
}

/// `exp(...)` -> `e^{...}`, up to the first closing parenthesis.
pub fn rewrite_exponentials(input: &str) -> String {
    EXPONENTIAL.replace_all(input, "e^{${1}}").into_owned()
}

/// Limit target token to LaTeX: `inf` and `minf` become infinities.
pub fn limit_target(token: &str) -> &str {
    match token {
        "inf" => r"\infty",
        "minf" => r"-\infty",
        other => other,
    }
}

/// `lim(x -> a) expr` -> `\lim_{x \to a} expr`; `expr` runs to the end of the line.
pub fn rewrite_limits(input: &str) -> String {
    LIMIT
        .replace_all(input, |caps: &Captures<'_>| {
            format!(
                r"\lim_{{{} \to {}}} {}",
                &caps[1],
                limit_target(&caps[2]),
                &caps[3]
            )
        })
        .into_owned()
}

/// Standalone `minf` and `inf` words left over after limits.
pub fn rewrite_infinity(input: &str) -> String {
    let negated = NEG_INFINITY.replace_all(input, NoExpand(r"-\infty"));
    INFINITY
        .replace_all(&negated, NoExpand(r"\infty"))
        .into_owned()
}

/// Definite integrals in any bound notation, each ending at `dx`.
pub fn rewrite_definite_integrals(input: &str) -> String {
    DEFINITE_INTEGRAL
        .replace_all(input, |caps: &Captures<'_>| match bounds(caps) {
            Some((lo, hi)) => format!(r"\int_{{{}}}^{{{}}} {} \, dx", lo, hi, body(caps)),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// `int expr dx` -> `\int expr \, dx`.
///
/// An `int` whose integrand opens with `(` is the bounds form and is left alone.
pub fn rewrite_indefinite_integrals(input: &str) -> String {
    replace_all_unless(
        input,
        &INDEFINITE_INTEGRAL,
        |_, caps| body(caps).starts_with('('),
        |caps| format!(r"\int {} \, dx", body(caps)),
    )
}

fn rewrite_big_operator(input: &str, re: &Regex, command: &str) -> String {
    re.replace_all(input, |caps: &Captures<'_>| match bounds(caps) {
        Some((lo, hi)) => format!(r"{}_{{{}}}^{{{}}} {}", command, lo, hi, body(caps)),
        None => caps[0].to_string(),
    })
    .into_owned()
}

/// `sum` with bounds -> `\sum_{lo}^{hi} rest-of-line`
pub fn rewrite_sums(input: &str) -> String {
    rewrite_big_operator(input, &SUMMATION, r"\sum")
}

/// `prod` with bounds -> `\prod_{lo}^{hi} rest-of-line`
pub fn rewrite_products(input: &str) -> String {
    rewrite_big_operator(input, &PRODUCT, r"\prod")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative() {
        assert_eq!(rewrite_derivatives("dx/dy"), r"\frac{dx}{dy}");
        assert_eq!(
            rewrite_derivatives("dy/dx + dv/dt"),
            r"\frac{dy}{dx} + \frac{dv}{dt}"
        );
        assert_eq!(rewrite_derivatives("dtheta/dt"), r"\frac{dtheta}{dt}");
    }

    #[test]
    fn test_derivative_requires_letters() {
        assert_eq!(rewrite_derivatives("d2/dx"), "d2/dx");
        assert_eq!(rewrite_derivatives("dx / dy"), "dx / dy");
    }

    #[test]
    fn test_exponential_is_lazy() {
        assert_eq!(rewrite_exponentials("exp(x+1)"), "e^{x+1}");
        assert_eq!(rewrite_exponentials("exp(a) + exp(b)"), "e^{a} + e^{b}");
        // First closing parenthesis ends the argument.
        assert_eq!(rewrite_exponentials("exp(f(x))"), "e^{f(x})");
    }

    #[test]
    fn test_limit_targets() {
        assert_eq!(
            rewrite_limits("lim(x -> inf) f(x)"),
            r"\lim_{x \to \infty} f(x)"
        );
        assert_eq!(
            rewrite_limits("lim(n->minf) 1/n"),
            r"\lim_{n \to -\infty} 1/n"
        );
        assert_eq!(rewrite_limits("lim (h -> 0) g"), r"\lim_{h \to 0} g");
        // No space allowed before the closing parenthesis.
        assert_eq!(rewrite_limits("lim(h -> 0 ) g"), "lim(h -> 0 ) g");
    }

    #[test]
    fn test_limit_needs_expression() {
        assert_eq!(rewrite_limits("lim(x -> 0)"), "lim(x -> 0)");
    }

    #[test]
    fn test_infinity_words() {
        assert_eq!(rewrite_infinity("x -> inf"), r"x -> \infty");
        assert_eq!(rewrite_infinity("minf < x"), r"-\infty < x");
        assert_eq!(rewrite_infinity("info infinite"), "info infinite");
    }

    #[test]
    fn test_infinity_leaves_rewritten_limits_alone() {
        let limit = rewrite_limits("lim(x -> inf) 1/x");
        assert_eq!(rewrite_infinity(&limit), limit);
    }

    #[test]
    fn test_definite_integral_notations() {
        let expected = r"\int_{0}^{1} x \, dx";
        assert_eq!(rewrite_definite_integrals("int_{0}^{1} x dx"), expected);
        assert_eq!(rewrite_definite_integrals("int_0^1 x dx"), expected);
        assert_eq!(rewrite_definite_integrals("int(0, 1) x dx"), expected);
    }

    #[test]
    fn test_definite_integral_braced_is_not_double_braced() {
        assert_eq!(
            rewrite_definite_integrals("int_{a}^{b} f(x) dx"),
            r"\int_{a}^{b} f(x) \, dx"
        );
    }

    #[test]
    fn test_indefinite_integral() {
        assert_eq!(rewrite_indefinite_integrals("int x^2 dx"), r"\int x^2 \, dx");
        assert_eq!(rewrite_indefinite_integrals("int (x) dx"), "int (x) dx");
    }

    #[test]
    fn test_indefinite_skips_definite_output() {
        let definite = rewrite_definite_integrals("int_0^1 x dx");
        assert_eq!(rewrite_indefinite_integrals(&definite), definite);
    }

    #[test]
    fn test_sum_notations() {
        let expected = r"\sum_{i=1}^{n} i";
        assert_eq!(rewrite_sums("sum_{i=1}^{n} i"), expected);
        assert_eq!(rewrite_sums("sum_i=1^n i"), expected);
        assert_eq!(rewrite_sums("sum(i=1, n) i"), expected);
    }

    #[test]
    fn test_product_takes_rest_of_line() {
        assert_eq!(
            rewrite_products("prod_{k=1}^{n} k + 1"),
            r"\prod_{k=1}^{n} k + 1"
        );
        assert_eq!(rewrite_products("prod x"), "prod x");
    }
}
