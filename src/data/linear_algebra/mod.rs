//! # Linear algebra primitives
//!
//! Matrices storing their values either sparsely, in a map keyed by position, or densely.

pub mod error;
pub mod matrix;
pub mod traits;
