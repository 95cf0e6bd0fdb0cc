use crate::assert_err;
use crate::attr::{AnyValue, AttrError, AttrValueType, NamedAttrs, ValueKind};
use crate::buffer::Buffer;
use crate::tensor::DataType;

#[test]
fn test_unset_by_default() {
    let value = AnyValue::default();
    assert!(value.is_unset());
    assert_eq!(value.kind(), None);
    assert_err!(value.get::<i64>(), AttrError::Unset);
}

#[test]
fn test_get_and_type_mismatch() {
    let value = AnyValue::new(7i64);
    assert_eq!(value.kind(), Some(ValueKind::Int));
    assert_eq!(value.get::<i64>(), Ok(&7));
    assert_err!(
        value.get::<f32>(),
        AttrError::TypeMismatch {
            expected: ValueKind::Float,
            actual: ValueKind::Int
        }
    );
    // 列表与标量是不同的种类
    assert_err!(value.get::<Vec<i64>>(), AttrError::TypeMismatch { .. });
}

#[test]
fn test_set_changes_kind_and_clear() {
    let mut value = AnyValue::from("relu");
    assert_eq!(value.get::<String>().map(String::as_str), Ok("relu"));

    value.set(vec![1.0f32, 2.0]);
    assert_eq!(value.kind(), Some(ValueKind::ListFloat));
    value.get_mut::<Vec<f32>>().unwrap().push(3.0);
    assert_eq!(value.get::<Vec<f32>>(), Ok(&vec![1.0, 2.0, 3.0]));

    value.clear();
    assert!(value.is_unset());
    assert_err!(value.get_mut::<Vec<f32>>(), AttrError::Unset);
}

#[test]
fn test_same_kind() {
    let a = AnyValue::new(DataType::Int8);
    let b = AnyValue::new(DataType::Float);
    let c = AnyValue::new(vec![DataType::Int8]);
    assert!(a.same_kind(&b));
    assert!(!a.same_kind(&c));
    assert!(AnyValue::Unset.same_kind(&AnyValue::default()));
}

#[test]
fn test_value_kind_table() {
    assert_eq!(ValueKind::ALL.len(), 21);
    assert_eq!(ValueKind::ALL.iter().filter(|k| k.is_list()).count(), 11);
    assert_eq!(<Vec<Vec<i64>> as AttrValueType>::KIND, ValueKind::ListListInt);
    assert_eq!(<Buffer as AttrValueType>::KIND, ValueKind::Bytes);
    assert_eq!(ValueKind::NamedAttrs.to_string(), "named_attrs");
}

#[test]
fn test_clone_is_independent() {
    let original = AnyValue::new(NamedAttrs::new("func").with_attr("alpha", 0.5f32));
    let mut copy = original.clone();
    copy.get_mut::<NamedAttrs>()
        .unwrap()
        .set_attr("alpha", 1.5f32);
    assert_eq!(
        original.get::<NamedAttrs>().unwrap().get_attr::<f32>("alpha"),
        Ok(&0.5)
    );
}
