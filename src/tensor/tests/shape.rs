use crate::assert_err;
use crate::tensor::{Shape, TensorError, UNKNOWN_DIM, UNKNOWN_RANK, UNKNOWN_SIZE};

#[test]
fn test_shape_size() {
    assert_eq!(Shape::scalar().shape_size(), Ok(1));
    assert_eq!(Shape::from([3]).shape_size(), Ok(3));
    assert_eq!(Shape::from([2, 3, 4]).shape_size(), Ok(24));
    assert_eq!(Shape::from([2, 0, 4]).shape_size(), Ok(0));
}

#[test]
fn test_shape_size_unknown() {
    assert_eq!(Shape::from([2, UNKNOWN_DIM, 4]).shape_size(), Ok(UNKNOWN_SIZE));
    assert_eq!(Shape::unknown_rank().shape_size(), Ok(UNKNOWN_SIZE));
}

#[test]
fn test_shape_size_overflow_is_reported() {
    // 2^32 * 2^32 = 2^64 > i64::MAX
    let shape = Shape::from([1i64 << 32, 1i64 << 32]);
    assert_err!(shape.shape_size(), TensorError::ShapeSizeOverflow { .. });

    let shape = Shape::from([i64::MAX, 2]);
    assert_err!(
        shape.shape_size(),
        TensorError::ShapeSizeOverflow { dims } if dims == &vec![i64::MAX, 2]
    );

    // 恰好等于 i64::MAX 不算溢出
    assert_eq!(Shape::from([i64::MAX, 1]).shape_size(), Ok(i64::MAX));
}

#[test]
fn test_shape_size_zero_dim_wins_over_overflow() {
    let shape = Shape::from([i64::MAX, 2, 0]);
    assert_eq!(shape.shape_size(), Ok(0));
}

#[test]
fn test_shape_size_invalid_dim() {
    let shape = Shape::from([2, -5]);
    assert_err!(shape.shape_size(), TensorError::InvalidDim { index: 1, dim: -5 });
}

#[test]
fn test_unknown_rank_collapses() {
    let shape = Shape::new(vec![1, UNKNOWN_RANK, 3]);
    assert_eq!(shape.dims(), &[UNKNOWN_RANK]);
    assert!(shape.is_unknown_rank());
    assert_eq!(shape.rank(), None);

    let mut shape = Shape::from([1, 2, 3]);
    shape.set_dim(1, UNKNOWN_RANK).unwrap();
    assert!(shape.is_unknown_rank());
}

#[test]
fn test_set_dim() {
    let mut shape = Shape::from([1, 2, 3]);
    shape.set_dim(2, UNKNOWN_DIM).unwrap();
    assert_eq!(shape.dims(), &[1, 2, UNKNOWN_DIM]);
    assert!(shape.is_unknown_shape());
    assert!(!shape.is_unknown_rank());
    assert_eq!(shape.rank(), Some(3));

    assert_err!(
        shape.set_dim(3, 1),
        TensorError::DimIndexOutOfRange { index: 3, rank: 3 }
    );
}
