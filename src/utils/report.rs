//! Per-pass conversion reports.

use serde::Serialize;

use crate::core::shorthand2latex::wrap_inline_math;

/// One pass that changed the working string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassRecord {
    pub pass: String,
    pub before: String,
    pub after: String,
}

impl PassRecord {
    pub fn new(pass: impl Into<String>, before: &str, after: &str) -> Self {
        Self {
            pass: pass.into(),
            before: before.to_string(),
            after: after.to_string(),
        }
    }
}

/// Result of a traced conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub output: String,
    /// Passes that fired, in pipeline order
    pub passes: Vec<PassRecord>,
    /// No pass recognised anything; the output is only the wrapped input
    pub untouched: bool,
}

impl ConversionReport {
    pub fn new(input: impl Into<String>, output: impl Into<String>, passes: Vec<PassRecord>) -> Self {
        let input = input.into();
        let output = output.into();
        let untouched = output == wrap_inline_math(&input);
        Self {
            input,
            output,
            passes,
            untouched,
        }
    }

    /// Names of the passes that fired.
    pub fn fired(&self) -> impl Iterator<Item = &str> {
        self.passes.iter().map(|p| p.pass.as_str())
    }

    /// Human-readable trace, one line per pass.
    pub fn render_trace(&self) -> String {
        let mut out = format!("input: {}\n", self.input);
        for record in &self.passes {
            out.push_str(&format!("  {:<22} {}\n", record.pass, record.after));
        }
        if self.untouched {
            out.push_str("  (no shorthand recognised)\n");
        }
        out.push_str(&format!("output: {}", self.output));
        out
    }
}
