//! dense-matrix: a small row-major matrix of `f64` values.
//!
//! This crate provides a single dense `Matrix` type with construction helpers
//! (zeros, literal rows, identity), 1-based element access, and the basic
//! arithmetic needed by callers: addition, subtraction, scalar and matrix
//! multiplication, and transpose.
//!
//! Shape misuse at construction or access time panics. Combining two matrices
//! whose shapes are incompatible returns a [`DimensionMismatch`] instead.
//!
//! The `compat` feature reproduces the original library's subtraction check
//! and min/max seeding for callers that depend on that behavior.
mod display;
pub mod error;
pub mod matrix;
pub mod ops;
mod serialization;

pub use error::{DimensionMismatch, Operation, ShapeError};
pub use matrix::Matrix;
