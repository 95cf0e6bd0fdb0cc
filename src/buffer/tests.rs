use crate::assert_err;
use crate::buffer::{Buffer, OUT_OF_RANGE_BYTE};
use crate::tensor::TensorError;

#[test]
fn test_copy_from_null_gives_empty_buffer() {
    let buffer = Buffer::copy_from(None);
    assert_eq!(buffer.size(), 0);
    assert!(buffer.is_null());
    assert!(buffer.is_empty());
    assert_eq!(buffer.data(), &[] as &[u8]);
}

#[test]
fn test_copy_from_is_deep_copy() {
    let mut source = vec![1u8, 2, 3, 4];
    let buffer = Buffer::copy_from(Some(&source));
    source[0] = 100;
    assert_eq!(buffer.data(), &[1, 2, 3, 4]);
    assert!(!buffer.is_shared());
}

#[test]
fn test_copy_on_write() {
    let b1 = Buffer::from(vec![1u8, 2, 3]);
    let mut b2 = b1.clone();
    assert!(b1.is_shared());
    assert!(b2.is_shared());

    b2.data_mut()[0] = 9;

    // b1 看不到 b2 的修改
    assert_eq!(b1.data(), &[1, 2, 3]);
    assert_eq!(b2.data(), &[9, 2, 3]);
    assert!(!b1.is_shared());
    assert!(!b2.is_shared());
}

#[test]
fn test_data_mut_on_private_storage_does_not_copy() {
    let mut buffer = Buffer::from(vec![0u8; 4]);
    let before = buffer.data().as_ptr();
    buffer.data_mut()[1] = 7;
    assert_eq!(buffer.data().as_ptr(), before);
    assert_eq!(buffer.at(1), 7);
}

#[test]
fn test_at_out_of_range_returns_sentinel() {
    let buffer = Buffer::from(vec![5u8, 6]);
    assert_eq!(buffer.at(0), 5);
    assert_eq!(buffer.at(1), 6);
    assert_eq!(buffer.at(2), OUT_OF_RANGE_BYTE);
    assert_eq!(Buffer::new().at(0), 0xFF);
}

#[test]
fn test_set_at() {
    let mut buffer = Buffer::with_size(3).unwrap();
    assert!(buffer.set_at(2, 42));
    assert!(!buffer.set_at(3, 42));
    assert_eq!(buffer.data(), &[0, 0, 42]);
}

#[test]
fn test_with_value_and_allocation_failure() {
    let buffer = Buffer::with_value(4, 0xAB).unwrap();
    assert_eq!(buffer.data(), &[0xAB; 4]);

    assert_err!(
        Buffer::with_size(usize::MAX),
        TensorError::AllocationFailed(size) if *size == usize::MAX
    );
}

#[test]
fn test_null_and_empty_compare_equal_by_content() {
    assert_eq!(Buffer::new(), Buffer::from(Vec::new()));
    assert!(Buffer::new().is_null());
    assert!(!Buffer::from(Vec::new()).is_null());
}

#[test]
fn test_clear_and_into_vec() {
    let mut b1 = Buffer::from(vec![1u8, 2]);
    let b2 = b1.share();
    b1.clear();
    assert!(b1.is_null());
    assert_eq!(b2.into_vec(), vec![1, 2]);
}
