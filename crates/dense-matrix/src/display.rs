use std::fmt;

use crate::matrix::Matrix;

/// Number of integer digits reserved for a matrix whose largest element is `max`.
fn digits_for(mut max: f64) -> usize {
    let mut digits = 1;
    while max.is_finite() && max > 1.0 {
        max /= 10.0;
        digits += 1;
    }
    digits
}

/// Renders one bracketed line per row, e.g. `[  1.00  2.50  ]`.
///
/// Every field is right-aligned with two decimals; the field width grows with
/// the magnitude of [`Matrix::max`].
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = digits_for(self.max()) + 3;
        for row in self.data.chunks(self.cols) {
            write!(f, "[ ")?;
            for value in row {
                write!(f, "{:>width$.2} ", value, width = width)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
