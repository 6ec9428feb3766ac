//! Shortex - shorthand math notation to LaTeX
//!
//! Converts plain-text shorthand such as `int_0^1 x^2 dx` or
//! `lim(x -> inf) 1/x` into inline LaTeX (`\( ... \)`) through an ordered
//! pipeline of rewrite passes.
//!
//! ```
//! use shortex::convert_to_latex;
//!
//! assert_eq!(convert_to_latex("dx/dy"), r"\(\frac{dx}{dy}\)");
//! assert_eq!(convert_to_latex("a*b <= c"), r"\(a\cdot b \leq c\)");
//! ```

pub mod core;
pub mod data;
pub mod syntax;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::shorthand2latex::{
    convert_to_latex, convert_with_trace, wrap_inline_math, Pass, PIPELINE,
};
pub use crate::syntax::{format_syntax_reference, syntax_reference, RenderedSyntax};
pub use crate::utils::{ConversionReport, PassRecord, ShortexError, ShortexResult};
