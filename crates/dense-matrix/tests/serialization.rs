//! Integration tests for serde support.

use dense_matrix::Matrix;

#[test]
fn serializes_shape_and_row_major_data() {
    let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.5]]);
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, r#"{"rows":2,"cols":3,"data":[1.0,2.0,3.0,4.0,5.0,6.5]}"#);
}

#[test]
fn deserializes_into_equal_matrix() {
    let m = Matrix::from([[1.0, 3.0], [0.0, 1.0], [5.0, 2.0]]);
    let json = serde_json::to_string_pretty(&m).unwrap();
    let back: Matrix = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
    assert_eq!(back.get(3, 1), 5.0);
}

#[test]
fn rejects_buffer_that_does_not_match_shape() {
    let json = r#"{"rows":2,"cols":2,"data":[1.0,2.0,3.0]}"#;
    let err = serde_json::from_str::<Matrix>(json).unwrap_err();
    assert!(err
        .to_string()
        .contains("invalid shape (2, 2) for buffer of length 3"));
}

#[test]
fn rejects_zero_dimension() {
    let json = r#"{"rows":0,"cols":3,"data":[]}"#;
    assert!(serde_json::from_str::<Matrix>(json).is_err());
}

#[test]
fn rejects_missing_field() {
    let json = r#"{"rows":1,"data":[1.0]}"#;
    assert!(serde_json::from_str::<Matrix>(json).is_err());
}

#[test]
fn rejects_shape_whose_size_overflows() {
    let json = r#"{"rows":4294967296,"cols":4294967296,"data":[]}"#;
    let err = serde_json::from_str::<Matrix>(json).unwrap_err();
    assert!(err
        .to_string()
        .contains("invalid shape (4294967296, 4294967296) for buffer of length 0"));
}
