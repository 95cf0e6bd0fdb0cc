/*
 * @Author       : 老董
 * @Date         : 2026-03-09
 * @Description  : 属性值序列化器
 *
 * 每个序列化器负责把一种（或一族）`AnyValue`变体投影到`AttrValueDef`的一个 oneof 字段，
 * 以及反方向的还原。所有序列化器组成一个封闭枚举，由 enum_dispatch 静态分派；
 * 注册表（registry.rs）按`ValueKind`/`WireFieldTag`查表找到对应的序列化器。
 */

mod graph;
mod list;
mod named_attrs;
mod registry;
mod scalar;
mod tensor;

pub use graph::GraphSerializer;
pub(crate) use graph::{graph_from_def, graph_to_def};
pub use list::ListSerializer;
pub use named_attrs::NamedAttrsSerializer;
pub use registry::SerializerRegistry;
pub use scalar::{
    BoolSerializer, BytesSerializer, DataTypeSerializer, FloatSerializer, IntSerializer,
    StringSerializer,
};
pub use tensor::{TensorDescSerializer, TensorSerializer};

use enum_dispatch::enum_dispatch;

use super::{AnyValue, AttrError, ValueKind};
use crate::proto::{AttrValueDef, WireFieldTag};

#[enum_dispatch]
pub trait AttrSerializer {
    /// 本序列化器负责的值种类（序列化方向的键）
    fn value_kinds(&self) -> &'static [ValueKind];

    /// 本序列化器写入的 oneof 字段（反序列化方向的键）
    fn wire_tag(&self) -> WireFieldTag;

    /// 取出强类型值并写入对应字段；值未赋值或种类不符时失败
    fn serialize(&self, registry: &SerializerRegistry, value: &AnyValue)
    -> Result<AttrValueDef, AttrError>;

    /// 从对应字段还原强类型值
    fn deserialize(&self, registry: &SerializerRegistry, def: &AttrValueDef)
    -> Result<AnyValue, AttrError>;
}

#[enum_dispatch(AttrSerializer)]
pub enum SerializerInstance {
    IntSerializer,
    FloatSerializer,
    BoolSerializer,
    StringSerializer,
    BytesSerializer,
    DataTypeSerializer,
    TensorSerializer,
    TensorDescSerializer,
    NamedAttrsSerializer,
    GraphSerializer,
    ListSerializer,
}

/// 序列化器收到与自身不符的值时的错误
pub(crate) fn mismatch(expected: ValueKind, value: &AnyValue) -> AttrError {
    match value.kind() {
        None => AttrError::Unset,
        Some(actual) => AttrError::TypeMismatch { expected, actual },
    }
}

/// 反序列化器收到与自身不符的字段时的错误
pub(crate) fn wrong_field(expected: WireFieldTag, def: &AttrValueDef) -> AttrError {
    AttrError::InvalidWireValue(format!(
        "期望字段{:?}，实际为{:?}",
        expected,
        def.field_tag()
    ))
}
