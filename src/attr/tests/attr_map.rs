use crate::assert_err;
use crate::attr::{AnyValue, AttrError, AttrMap, ValueKind};
use crate::buffer::Buffer;

#[test]
fn test_get_attr_errors() {
    let mut attrs = AttrMap::new();
    attrs.set_value("empty", AnyValue::Unset);
    attrs.set_attr("axis", 1i64);

    assert_err!(attrs.get_attr::<i64>("missing"), AttrError::NotFound("missing"));
    assert_err!(attrs.get_attr::<i64>("empty"), AttrError::Unset);
    assert_err!(
        attrs.get_attr::<bool>("axis"),
        AttrError::TypeMismatch { expected: ValueKind::Bool, .. }
    );
    assert_eq!(attrs.get_attr::<i64>("axis"), Ok(&1));
}

#[test]
fn test_typed_accessors() {
    let mut attrs = AttrMap::new();
    attrs.set_int("axis", -1);
    attrs.set_str("mode", "nearest".to_string());
    attrs.set_list_list_int("pads", vec![vec![0, 1], vec![1, 0]]);
    attrs.set_bytes("blob", Buffer::from(vec![9u8]));

    assert_eq!(attrs.get_int("axis"), Some(&-1));
    assert_eq!(attrs.get_str("mode").map(String::as_str), Some("nearest"));
    assert_eq!(attrs.get_list_list_int("pads").map(Vec::len), Some(2));
    assert_eq!(attrs.get_bytes("blob").map(Buffer::size), Some(1));
    // 类型不符或不存在时返回 None
    assert_eq!(attrs.get_float("axis"), None);
    assert_eq!(attrs.get_int("nothing"), None);
}

#[test]
fn test_names_are_sorted_and_remove() {
    let mut attrs: AttrMap = [
        ("b".to_string(), AnyValue::new(true)),
        ("a".to_string(), AnyValue::new(1i64)),
    ]
    .into_iter()
    .collect();
    assert_eq!(attrs.names(), vec!["a".to_string(), "b".to_string()]);
    assert_eq!(attrs.len(), 2);

    assert_eq!(attrs.remove_attr("a"), Some(AnyValue::new(1i64)));
    assert!(!attrs.has_attr("a"));
    assert_eq!(attrs.remove_attr("a"), None);

    attrs.clear();
    assert!(attrs.is_empty());
}

#[test]
fn test_get_attr_mut() {
    let mut attrs = AttrMap::new();
    attrs.set_attr("shape", vec![2i64, 3]);
    attrs.get_attr_mut::<Vec<i64>>("shape").unwrap()[1] = 4;
    assert_eq!(attrs.get_list_int("shape"), Some(&vec![2, 4]));
}
