//! Core conversion modules

pub mod shorthand2latex;
