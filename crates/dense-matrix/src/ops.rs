//! Arithmetic on [`Matrix`] values.
//!
//! Every operation borrows its operands and allocates a fresh result, so a
//! failed call leaves both inputs exactly as they were.
use std::ops::Mul;

use crate::error::{DimensionMismatch, Operation};
use crate::matrix::Matrix;

#[allow(clippy::should_implement_trait)]
impl Matrix {
    /// Element-wise sum of two matrices of the same shape.
    pub fn add(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        if self.shape() != rhs.shape() {
            return Err(DimensionMismatch::new(
                Operation::Add,
                self.shape(),
                rhs.shape(),
            ));
        }
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Element-wise difference `self - rhs` of two matrices of the same shape.
    #[cfg(not(feature = "compat"))]
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        if self.shape() != rhs.shape() {
            return Err(DimensionMismatch::new(
                Operation::Subtract,
                self.shape(),
                rhs.shape(),
            ));
        }
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Element-wise difference `self - rhs`.
    ///
    /// Only rejects operands that differ on both axes. When exactly one axis
    /// differs the result takes `self`'s shape and `rhs` is read with
    /// [`Matrix::get`], which panics if `rhs` is the smaller one.
    #[cfg(feature = "compat")]
    pub fn sub(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        if self.rows != rhs.rows && self.cols != rhs.cols {
            return Err(DimensionMismatch::new(
                Operation::Subtract,
                self.shape(),
                rhs.shape(),
            ));
        }
        let mut r = self.clone();
        for i in 1..=r.rows {
            for j in 1..=r.cols {
                let offset = r.offset(i, j);
                r.data[offset] -= rhs.get(i, j);
            }
        }
        Ok(r)
    }

    /// Multiplies every element by `x`.
    pub fn scalar(&self, x: f64) -> Matrix {
        self.mapv(|v| v * x)
    }

    /// Standard matrix product `self * rhs`.
    ///
    /// Requires `self.cols() == rhs.rows()`; the result is
    /// `self.rows() x rhs.cols()`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, DimensionMismatch> {
        if self.cols != rhs.rows {
            return Err(DimensionMismatch::new(
                Operation::Multiply,
                self.shape(),
                rhs.shape(),
            ));
        }
        log::trace!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );

        let mut r = Matrix::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for (k, a) in lhs_row.iter().enumerate() {
                    sum += a * rhs.data[k * rhs.cols + j];
                }
                r.data[i * rhs.cols + j] = sum;
            }
        }
        Ok(r)
    }

    pub fn transpose(&self) -> Matrix {
        log::trace!("transposing {}x{}", self.rows, self.cols);
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    fn zip_with<F>(&self, rhs: &Matrix, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        debug_assert_eq!(self.shape(), rhs.shape());
        Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scalar(rhs)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scalar(rhs)
    }
}
