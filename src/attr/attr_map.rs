/*
 * @Author       : 老董
 * @Date         : 2026-03-08
 * @Description  : 属性表：节点、图、模型、NamedAttrs 共用的“名称 -> AnyValue”映射
 */

use std::collections::BTreeMap;
use std::collections::btree_map;

use super::{AnyValue, AttrError, AttrValueType, NamedAttrs};
use crate::buffer::Buffer;
use crate::graph::ComputeGraph;
use crate::tensor::{DataType, Tensor, TensorDesc};

/// 属性表（按名称有序，序列化结果因此是确定的）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttrMap {
    attrs: BTreeMap<String, AnyValue>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.attrs.keys().cloned().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AnyValue> {
        self.attrs.iter()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn get_value(&self, name: &str) -> Option<&AnyValue> {
        self.attrs.get(name)
    }

    pub fn get_value_mut(&mut self, name: &str) -> Option<&mut AnyValue> {
        self.attrs.get_mut(name)
    }

    pub fn set_value(&mut self, name: &str, value: AnyValue) {
        self.attrs.insert(name.to_string(), value);
    }

    pub fn set_attr<T: AttrValueType>(&mut self, name: &str, value: T) {
        self.set_value(name, value.into_any());
    }

    /// 取值：属性不存在返回`NotFound`，未赋值返回`Unset`，类型不符返回`TypeMismatch`
    pub fn get_attr<T: AttrValueType>(&self, name: &str) -> Result<&T, AttrError> {
        self.attrs
            .get(name)
            .ok_or_else(|| AttrError::NotFound(name.to_string()))?
            .get::<T>()
    }

    pub fn get_attr_mut<T: AttrValueType>(&mut self, name: &str) -> Result<&mut T, AttrError> {
        self.attrs
            .get_mut(name)
            .ok_or_else(|| AttrError::NotFound(name.to_string()))?
            .get_mut::<T>()
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<AnyValue> {
        self.attrs.remove(name)
    }

    pub fn clear(&mut self) {
        self.attrs.clear();
    }
}

// 按类型命名的便捷存取：`set_int`/`get_int`、`set_list_float`/`get_list_float`……
// get 系列在属性不存在或类型不符时返回`None`。
macro_rules! typed_accessors {
    ($($name:ident: $ty:ty;)*) => {
        paste::paste! {
            impl AttrMap {
                $(
                    pub fn [<set_ $name>](&mut self, name: &str, value: $ty) {
                        self.set_attr::<$ty>(name, value);
                    }

                    pub fn [<get_ $name>](&self, name: &str) -> Option<&$ty> {
                        self.get_attr::<$ty>(name).ok()
                    }
                )*
            }
        }
    };
}

typed_accessors! {
    int: i64;
    float: f32;
    bool: bool;
    str: String;
    bytes: Buffer;
    data_type: DataType;
    tensor: Tensor;
    tensor_desc: TensorDesc;
    named_attrs: NamedAttrs;
    graph: ComputeGraph;
    list_int: Vec<i64>;
    list_float: Vec<f32>;
    list_bool: Vec<bool>;
    list_str: Vec<String>;
    list_bytes: Vec<Buffer>;
    list_data_type: Vec<DataType>;
    list_tensor: Vec<Tensor>;
    list_tensor_desc: Vec<TensorDesc>;
    list_named_attrs: Vec<NamedAttrs>;
    list_graph: Vec<ComputeGraph>;
    list_list_int: Vec<Vec<i64>>;
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a AnyValue);
    type IntoIter = btree_map::Iter<'a, String, AnyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}

impl FromIterator<(String, AnyValue)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, AnyValue)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().collect(),
        }
    }
}
