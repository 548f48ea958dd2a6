//! serde support for [`Matrix`].
//!
//! A matrix serializes as `{"rows": R, "cols": C, "data": [...]}` with `data`
//! in row-major order. Deserialization goes through
//! [`Matrix::from_shape_vec`], so payloads whose buffer does not match the
//! declared shape are rejected.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matrix::Matrix;

#[derive(Serialize)]
struct MatrixRef<'a> {
    rows: usize,
    cols: usize,
    data: &'a [f64],
}

#[derive(Deserialize)]
struct MatrixOwned {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MatrixRef {
            rows: self.rows,
            cols: self.cols,
            data: &self.data,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = MatrixOwned::deserialize(deserializer)?;
        Matrix::from_shape_vec((raw.rows, raw.cols), raw.data).map_err(serde::de::Error::custom)
    }
}
