//! Shorthand math notation to LaTeX converter
//!
//! The converter is an ordered list of rewrite passes. Each pass scans the
//! whole working string and replaces every non-overlapping match, and the
//! next pass sees its output. The order resolves ambiguities between passes
//! and changing it changes the output for many inputs:
//!
//! 1. derivatives            `dy/dx`
//! 2. exponentials           `exp(x)`
//! 3. limits                 `lim(x -> inf) f(x)`
//! 4. infinity words         `inf`, `minf`
//! 5. Greek letters          `alpha`, `Omega`
//! 6. multiplication         `*`
//! 7. relations              `<=`, `>=`, `!=`
//! 8. exponent groups        `x^(n+1)`
//! 9. fractions              `(a)/(b)`, `a/b`, ...
//! 10. square roots          `sqrt(x)`
//! 11. definite integrals    `int_0^1 f dx`
//! 12. indefinite integrals  `int f dx`
//! 13. sums                  `sum_{i=1}^{n} i`
//! 14. products              `prod(k=1, n) k`
//! 15. plus-minus            `+-`
//!
//! The result is then wrapped in `\( ... \)`. Conversion never fails:
//! anything unrecognised passes through as literal text.

pub mod calculus;
pub mod fractions;
pub mod letters;
pub mod operators;
mod rewrite;

use std::fmt;

use crate::utils::report::{ConversionReport, PassRecord};

/// A single rewrite stage of the pipeline.
#[derive(Clone, Copy)]
pub struct Pass {
    /// Stable identifier, used in traces and logs
    pub name: &'static str,
    /// Shorthand the pass recognises
    pub notation: &'static str,
    rewrite: fn(&str) -> String,
}

impl Pass {
    const fn new(name: &'static str, notation: &'static str, rewrite: fn(&str) -> String) -> Self {
        Pass {
            name,
            notation,
            rewrite,
        }
    }

    /// Run this pass over the whole working string.
    pub fn apply(&self, input: &str) -> String {
        (self.rewrite)(input)
    }
}

impl fmt::Debug for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pass")
            .field("name", &self.name)
            .field("notation", &self.notation)
            .finish()
    }
}

/// The rewrite passes, in the order they must run.
pub static PIPELINE: [Pass; 15] = [
    Pass::new("derivatives", "dX/dY", calculus::rewrite_derivatives),
    Pass::new("exponentials", "exp(...)", calculus::rewrite_exponentials),
    Pass::new("limits", "lim(x -> a) expr", calculus::rewrite_limits),
    Pass::new("infinity", "inf, minf", calculus::rewrite_infinity),
    Pass::new("greek-letters", "alpha, Beta, ...", letters::rewrite_greek_letters),
    Pass::new("multiplication", "*", operators::rewrite_multiplication),
    Pass::new("relations", "<=, >=, !=", operators::rewrite_relations),
    Pass::new("exponent-groups", "^(...)", operators::rewrite_exponent_groups),
    Pass::new("fractions", "A/B", fractions::rewrite_fractions),
    Pass::new("square-roots", "sqrt(...)", fractions::rewrite_square_roots),
    Pass::new(
        "definite-integrals",
        "int_{a}^{b} f dx, int_a^b f dx, int(a, b) f dx",
        calculus::rewrite_definite_integrals,
    ),
    Pass::new(
        "indefinite-integrals",
        "int f dx",
        calculus::rewrite_indefinite_integrals,
    ),
    Pass::new(
        "sums",
        "sum_{a}^{b} f, sum_a^b f, sum(a, b) f",
        calculus::rewrite_sums,
    ),
    Pass::new(
        "products",
        "prod_{a}^{b} f, prod_a^b f, prod(a, b) f",
        calculus::rewrite_products,
    ),
    Pass::new("plus-minus", "+-", operators::rewrite_plus_minus),
];

/// Look up a pass by name.
pub fn pass(name: &str) -> Option<&'static Pass> {
    PIPELINE.iter().find(|p| p.name == name)
}

/// Wrap a string in inline-math delimiters.
pub fn wrap_inline_math(latex: &str) -> String {
    format!("\\({}\\)", latex)
}

/// Convert shorthand notation to LaTeX wrapped in `\( ... \)`.
///
/// Total over all inputs. The output is not a fixed point: converting it
/// again wraps it a second time.
///
/// # Example
///
/// ```
/// assert_eq!(shortex::convert_to_latex("alpha + beta"), r"\(\alpha + \beta\)");
/// ```
pub fn convert_to_latex(input: &str) -> String {
    let body = PIPELINE.iter().fold(input.to_string(), |text, pass| {
        let next = pass.apply(&text);
        if next != text {
            tracing::trace!(pass = pass.name, before = %text, after = %next, "pass rewrote input");
        }
        next
    });
    wrap_inline_math(&body)
}

/// Convert and record every pass that changed the working string.
pub fn convert_with_trace(input: &str) -> ConversionReport {
    let mut passes = Vec::new();
    let mut text = input.to_string();

    for pass in PIPELINE.iter() {
        let next = pass.apply(&text);
        if next != text {
            passes.push(PassRecord::new(pass.name, &text, &next));
        }
        text = next;
    }

    let output = wrap_inline_math(&text);
    tracing::debug!(fired = passes.len(), "converted shorthand");
    ConversionReport::new(input, output, passes)
}
