use std::error::Error;
use std::fmt;

/// Binary operation that rejected its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

/// Returned when two matrices have incompatible shapes for an operation.
///
/// Both operands are left untouched and no result is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub op: Operation,
    pub lhs: (usize, usize),
    pub rhs: (usize, usize),
}

impl DimensionMismatch {
    pub(crate) fn new(op: Operation, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        log::debug!(
            "rejecting {} of {}x{} and {}x{}",
            op,
            lhs.0,
            lhs.1,
            rhs.0,
            rhs.1
        );
        Self { op, lhs, rhs }
    }
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joiner = match self.op {
            Operation::Add => "and",
            Operation::Subtract => "from",
            Operation::Multiply => "by",
        };
        // subtraction reads "subtract B from A"
        let (first, second) = match self.op {
            Operation::Subtract => (self.rhs, self.lhs),
            _ => (self.lhs, self.rhs),
        };
        write!(
            f,
            "matrix dimensions do not match: cannot {} {}x{} {} {}x{}",
            self.op, first.0, first.1, joiner, second.0, second.1
        )
    }
}

impl Error for DimensionMismatch {}

/// Returned when a flat buffer cannot back a matrix of the requested shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl ShapeError {
    pub(crate) fn new(rows: usize, cols: usize, len: usize) -> Self {
        Self { rows, cols, len }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}
