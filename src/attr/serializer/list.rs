/*
 * @Author       : 老董
 * @Date         : 2026-03-10
 * @Description  : 列表属性序列化器
 *
 * 所有列表种类共用`List`这一个 oneof 字段，元素类型由`val_type`记录，
 * 因此空列表读回后仍保持原来的列表种类。
 */

use super::graph::{graph_from_def, graph_to_def};
use super::named_attrs::{named_attrs_from_def, named_attrs_to_def};
use super::scalar::data_type_from_code;
use super::tensor::{desc_from_def, desc_to_def, tensor_from_def, tensor_to_def};
use super::{AttrSerializer, SerializerRegistry, wrong_field};
use crate::attr::{AnyValue, AttrError, ValueKind};
use crate::buffer::Buffer;
use crate::proto::{AttrValueDef, ListValue, ListValueType, WireFieldTag};

const LIST_KINDS: &[ValueKind] = &[
    ValueKind::ListInt,
    ValueKind::ListFloat,
    ValueKind::ListBool,
    ValueKind::ListString,
    ValueKind::ListBytes,
    ValueKind::ListDataType,
    ValueKind::ListTensor,
    ValueKind::ListTensorDesc,
    ValueKind::ListNamedAttrs,
    ValueKind::ListGraph,
    ValueKind::ListListInt,
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ListSerializer;

impl AttrSerializer for ListSerializer {
    fn value_kinds(&self) -> &'static [ValueKind] {
        LIST_KINDS
    }

    fn wire_tag(&self) -> WireFieldTag {
        WireFieldTag::List
    }

    fn serialize(
        &self,
        registry: &SerializerRegistry,
        value: &AnyValue,
    ) -> Result<AttrValueDef, AttrError> {
        let mut list = ListValue::default();
        match value {
            AnyValue::ListInt(v) => {
                list.val_type = ListValueType::Int;
                list.i = v.clone();
            }
            AnyValue::ListFloat(v) => {
                list.val_type = ListValueType::Float;
                list.f = v.clone();
            }
            AnyValue::ListBool(v) => {
                list.val_type = ListValueType::Bool;
                list.b = v.clone();
            }
            AnyValue::ListString(v) => {
                list.val_type = ListValueType::String;
                list.s = v.clone();
            }
            AnyValue::ListBytes(v) => {
                list.val_type = ListValueType::Bytes;
                list.bt = v.iter().map(|b| b.data().to_vec()).collect();
            }
            AnyValue::ListDataType(v) => {
                list.val_type = ListValueType::DataType;
                list.dt = v.iter().map(|d| d.code()).collect();
            }
            AnyValue::ListTensor(v) => {
                list.val_type = ListValueType::Tensor;
                list.t = v.iter().map(tensor_to_def).collect();
            }
            AnyValue::ListTensorDesc(v) => {
                list.val_type = ListValueType::TensorDesc;
                list.td = v.iter().map(desc_to_def).collect();
            }
            AnyValue::ListNamedAttrs(v) => {
                list.val_type = ListValueType::NamedAttrs;
                list.na = v
                    .iter()
                    .map(|n| named_attrs_to_def(registry, n))
                    .collect::<Result<_, _>>()?;
            }
            AnyValue::ListGraph(v) => {
                list.val_type = ListValueType::Graph;
                list.g = v
                    .iter()
                    .map(|g| graph_to_def(registry, g))
                    .collect::<Result<_, _>>()?;
            }
            AnyValue::ListListInt(v) => {
                list.val_type = ListValueType::ListListInt;
                list.list_list_i = v.clone();
            }
            AnyValue::Unset => return Err(AttrError::Unset),
            other => {
                return Err(AttrError::Unsupported(format!(
                    "{}不是列表类型",
                    other.kind().map_or("unset", |k| k.name())
                )));
            }
        }
        Ok(AttrValueDef::List(list))
    }

    fn deserialize(
        &self,
        registry: &SerializerRegistry,
        def: &AttrValueDef,
    ) -> Result<AnyValue, AttrError> {
        let AttrValueDef::List(list) = def else {
            return Err(wrong_field(WireFieldTag::List, def));
        };
        let value = match list.val_type {
            ListValueType::Int => AnyValue::ListInt(list.i.clone()),
            ListValueType::Float => AnyValue::ListFloat(list.f.clone()),
            ListValueType::Bool => AnyValue::ListBool(list.b.clone()),
            ListValueType::String => AnyValue::ListString(list.s.clone()),
            ListValueType::Bytes => {
                AnyValue::ListBytes(list.bt.iter().map(|b| Buffer::from(b.clone())).collect())
            }
            ListValueType::DataType => AnyValue::ListDataType(
                list.dt
                    .iter()
                    .map(|&code| data_type_from_code(code))
                    .collect::<Result<_, _>>()?,
            ),
            ListValueType::Tensor => AnyValue::ListTensor(
                list.t.iter().map(tensor_from_def).collect::<Result<_, _>>()?,
            ),
            ListValueType::TensorDesc => AnyValue::ListTensorDesc(
                list.td.iter().map(desc_from_def).collect::<Result<_, _>>()?,
            ),
            ListValueType::NamedAttrs => AnyValue::ListNamedAttrs(
                list.na
                    .iter()
                    .map(|n| named_attrs_from_def(registry, n))
                    .collect::<Result<_, _>>()?,
            ),
            ListValueType::Graph => AnyValue::ListGraph(
                list.g
                    .iter()
                    .map(|g| graph_from_def(registry, g))
                    .collect::<Result<_, _>>()?,
            ),
            ListValueType::ListListInt => AnyValue::ListListInt(list.list_list_i.clone()),
            ListValueType::None => {
                return Err(AttrError::InvalidWireValue("列表元素类型未设置".to_string()));
            }
        };
        Ok(value)
    }
}
