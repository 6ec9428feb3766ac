//! Static lookup data
//!
//! Tables here are built at compile time and never mutated.

pub mod symbols;
