/*
 * @Author       : 老董
 * @Date         : 2026-03-08
 * @Description  : 属性系统：类型擦除的属性值、属性表，以及与线上格式之间的序列化
 */

mod attr_map;
mod error;
mod named_attrs;
pub mod serializer;
mod value;

pub use attr_map::AttrMap;
pub use error::AttrError;
pub use named_attrs::NamedAttrs;
pub use serializer::{AttrSerializer, SerializerInstance, SerializerRegistry};
pub use value::{AnyValue, AttrValueType, ValueKind};

#[cfg(test)]
mod tests;
