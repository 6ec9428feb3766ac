//! Syntax reference for the shorthand notation
//!
//! One entry per supported notation, in pipeline order, with a worked
//! example. Rendered entries carry the LaTeX the converter produces for
//! the example, so the reference cannot drift from the implementation.

use serde::Serialize;

use crate::core::shorthand2latex::convert_to_latex;

/// A notation and a worked example.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxEntry {
    pub topic: &'static str,
    pub shorthand: &'static str,
    pub description: &'static str,
}

/// Static reference table.
pub static SYNTAX_REFERENCE: &[SyntaxEntry] = &[
    SyntaxEntry {
        topic: "Derivative",
        shorthand: "dy/dx",
        description: "Leibniz derivative of two letter runs",
    },
    SyntaxEntry {
        topic: "Exponential",
        shorthand: "exp(x+1)",
        description: "e raised to the argument (no nested parentheses)",
    },
    SyntaxEntry {
        topic: "Limit",
        shorthand: "lim(x -> inf) 1/x",
        description: "Limit; target inf or minf for infinities, expression to end of line",
    },
    SyntaxEntry {
        topic: "Infinity",
        shorthand: "minf < x < inf",
        description: "Standalone inf and minf",
    },
    SyntaxEntry {
        topic: "Greek letters",
        shorthand: "alpha + Omega",
        description: "Spelled-out names, whole words, case-sensitive",
    },
    SyntaxEntry {
        topic: "Multiplication",
        shorthand: "a*b",
        description: "Centered dot",
    },
    SyntaxEntry {
        topic: "Relations",
        shorthand: "a <= b >= c != d",
        description: "Less-or-equal, greater-or-equal, not-equal",
    },
    SyntaxEntry {
        topic: "Exponent group",
        shorthand: "x^(n+1)",
        description: "Grouped exponent; parentheses are kept",
    },
    SyntaxEntry {
        topic: "Fraction",
        shorthand: "(a+b)/(c+d)",
        description: "Division; either side may be parenthesised or a sqrt call",
    },
    SyntaxEntry {
        topic: "Square root",
        shorthand: "sqrt(2)",
        description: "Square root (no nested parentheses)",
    },
    SyntaxEntry {
        topic: "Definite integral",
        shorthand: "int_0^1 x^2 dx",
        description: "Also int_{a}^{b} f dx and int(a, b) f dx",
    },
    SyntaxEntry {
        topic: "Indefinite integral",
        shorthand: "int x dx",
        description: "Integrand up to the first dx",
    },
    SyntaxEntry {
        topic: "Sum",
        shorthand: "sum_{i=1}^{n} i",
        description: "Also sum_a^b and sum(a, b); summand runs to end of line",
    },
    SyntaxEntry {
        topic: "Product",
        shorthand: "prod(k=1, n) k",
        description: "Also prod_{a}^{b} and prod_a^b; factor runs to end of line",
    },
    SyntaxEntry {
        topic: "Plus-minus",
        shorthand: "a +- b",
        description: "Plus-or-minus sign",
    },
];

/// A reference entry with its example converted.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSyntax {
    pub topic: &'static str,
    pub shorthand: &'static str,
    pub description: &'static str,
    pub latex: String,
}

/// The reference table with every example converted.
pub fn syntax_reference() -> Vec<RenderedSyntax> {
    SYNTAX_REFERENCE
        .iter()
        .map(|entry| RenderedSyntax {
            topic: entry.topic,
            shorthand: entry.shorthand,
            description: entry.description,
            latex: convert_to_latex(entry.shorthand),
        })
        .collect()
}

/// Plain-text table for terminals.
pub fn format_syntax_reference() -> String {
    let rows = syntax_reference();
    let topic_width = rows.iter().map(|r| r.topic.len()).max().unwrap_or(0);
    let shorthand_width = rows.iter().map(|r| r.shorthand.len()).max().unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        out.push_str(&format!(
            "{:<tw$}  {:<sw$}  {}\n{:<tw$}  {:<sw$}  {}\n",
            row.topic,
            row.shorthand,
            row.latex,
            "",
            "",
            row.description,
            tw = topic_width,
            sw = shorthand_width,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shorthand2latex::PIPELINE;

    #[test]
    fn test_one_entry_per_pass() {
        assert_eq!(SYNTAX_REFERENCE.len(), PIPELINE.len());
    }

    #[test]
    fn test_every_example_is_recognised() {
        for row in syntax_reference() {
            assert_ne!(
                row.latex,
                format!("\\({}\\)", row.shorthand),
                "example for {} was not converted",
                row.topic
            );
        }
    }

    #[test]
    fn test_examples_exercise_their_pass() {
        for (entry, pass) in SYNTAX_REFERENCE.iter().zip(PIPELINE.iter()) {
            assert_ne!(
                pass.apply(entry.shorthand),
                entry.shorthand,
                "{} example does not trigger pass {}",
                entry.topic,
                pass.name
            );
        }
    }

    #[test]
    fn test_format_lists_all_topics() {
        let table = format_syntax_reference();
        for entry in SYNTAX_REFERENCE {
            assert!(table.contains(entry.topic));
        }
    }
}
