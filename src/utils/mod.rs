//! Utility modules
//!
//! - Error types for the outer surfaces
//! - Per-pass conversion reports
//! - Logging setup (CLI only)

pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod report;

// Re-export commonly used items
pub use error::{ShortexError, ShortexResult};
pub use report::{ConversionReport, PassRecord};
