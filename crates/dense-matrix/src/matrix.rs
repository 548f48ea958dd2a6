use std::slice::Iter;

use crate::error::ShapeError;

/// Dense `f64` matrix stored in one row-major buffer.
///
/// Coordinates passed to the public accessors are 1-based: `(1, 1)` is the
/// top-left element and `(rows, cols)` the bottom-right one.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    pub(crate) data: Vec<f64>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            panic!("invalid matrix dimension: {} x {}", rows, cols);
        }
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Builds a matrix from literal rows, copying them into row-major order.
    ///
    /// The column count is taken from the first row and every other row must
    /// have the same length.
    ///
    /// # Panics
    ///
    /// Panics if there are no rows, the first row is empty, or the rows are
    /// ragged.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[f64]>,
    {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut m = Matrix::zeros(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                panic!("invalid row length {}, expected {}", row.len(), cols);
            }
            let start = i * cols;
            m.data[start..start + cols].copy_from_slice(row);
        }
        m
    }

    /// Creates the `dimension x dimension` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    pub fn identity(dimension: usize) -> Self {
        if dimension == 0 {
            panic!("invalid identity matrix dimension: {}", dimension);
        }
        let mut m = Matrix::zeros(dimension, dimension);
        for i in 1..=dimension {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Wraps an existing row-major buffer without copying it.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        let fits = rows
            .checked_mul(cols)
            .map_or(false, |len| len == data.len());
        if rows == 0 || cols == 0 || !fits {
            return Err(ShapeError::new(rows, cols, data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Iterates over all elements in row-major order.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Maps a 1-based coordinate to its offset in the backing buffer.
    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> usize {
        if i == 0 || j == 0 || i > self.rows || j > self.cols {
            panic!("invalid matrix index: ({}, {})", i, j);
        }
        (i - 1) * self.cols + (j - 1)
    }

    /// Returns a copy of row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is outside `1..=rows`.
    pub fn row(&self, i: usize) -> Vec<f64> {
        assert!(
            i >= 1 && i <= self.rows,
            "invalid matrix row: {} (rows: {})",
            i,
            self.rows
        );
        let start = (i - 1) * self.cols;
        self.data[start..start + self.cols].to_vec()
    }

    /// Returns a copy of column `j`, one value per row.
    ///
    /// # Panics
    ///
    /// Panics if `j` is outside `1..=cols`.
    pub fn col(&self, j: usize) -> Vec<f64> {
        assert!(
            j >= 1 && j <= self.cols,
            "invalid matrix column: {} (cols: {})",
            j,
            self.cols
        );
        self.data
            .iter()
            .skip(j - 1)
            .step_by(self.cols)
            .copied()
            .collect()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.offset(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        let offset = self.offset(i, j);
        self.data[offset] = v;
    }

    /// Largest element of the matrix.
    ///
    /// NaN elements are ignored unless every element is NaN.
    #[cfg(not(feature = "compat"))]
    pub fn max(&self) -> f64 {
        self.data[1..].iter().copied().fold(self.data[0], f64::max)
    }

    /// Smallest element of the matrix.
    ///
    /// NaN elements are ignored unless every element is NaN.
    #[cfg(not(feature = "compat"))]
    pub fn min(&self) -> f64 {
        self.data[1..].iter().copied().fold(self.data[0], f64::min)
    }

    /// Largest element, or `0.0` if every element is negative.
    #[cfg(feature = "compat")]
    pub fn max(&self) -> f64 {
        let mut max = 0.0;
        for &v in &self.data {
            if v > max {
                max = v;
            }
        }
        max
    }

    /// Smallest element, or `f64::MAX` if no element is smaller.
    #[cfg(feature = "compat")]
    pub fn min(&self) -> f64 {
        let mut min = f64::MAX;
        for &v in &self.data {
            if v < min {
                min = v;
            }
        }
        min
    }

    /// Applies `f` to every element, producing a matrix of the same shape.
    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// True if both matrices share a shape and every pair of elements differs
    /// by at most `tolerance`.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl<const M: usize, const N: usize> From<[[f64; N]; M]> for Matrix {
    fn from(rows: [[f64; N]; M]) -> Self {
        Matrix::from_rows(&rows)
    }
}
