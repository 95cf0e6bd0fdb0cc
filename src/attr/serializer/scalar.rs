use super::{AttrSerializer, SerializerRegistry, mismatch, wrong_field};
use crate::attr::{AnyValue, AttrError, ValueKind};
use crate::buffer::Buffer;
use crate::proto::{AttrValueDef, WireFieldTag};
use crate::tensor::DataType;

// 标量序列化器：值与字段一一对应，只有取出/写入两个动作
macro_rules! scalar_serializer {
    ($serializer:ident, $kind:ident, $tag:ident, |$v:ident| $to_wire:expr, |$w:ident| $from_wire:expr) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $serializer;

        impl AttrSerializer for $serializer {
            fn value_kinds(&self) -> &'static [ValueKind] {
                &[ValueKind::$kind]
            }

            fn wire_tag(&self) -> WireFieldTag {
                WireFieldTag::$tag
            }

            fn serialize(
                &self,
                _registry: &SerializerRegistry,
                value: &AnyValue,
            ) -> Result<AttrValueDef, AttrError> {
                match value {
                    AnyValue::$kind($v) => Ok(AttrValueDef::$tag($to_wire)),
                    other => Err(mismatch(ValueKind::$kind, other)),
                }
            }

            fn deserialize(
                &self,
                _registry: &SerializerRegistry,
                def: &AttrValueDef,
            ) -> Result<AnyValue, AttrError> {
                match def {
                    AttrValueDef::$tag($w) => Ok(AnyValue::$kind($from_wire)),
                    other => Err(wrong_field(WireFieldTag::$tag, other)),
                }
            }
        }
    };
}

scalar_serializer!(IntSerializer, Int, I, |v| *v, |w| *w);
scalar_serializer!(FloatSerializer, Float, F, |v| *v, |w| *w);
scalar_serializer!(BoolSerializer, Bool, B, |v| *v, |w| *w);
scalar_serializer!(StringSerializer, String, S, |v| v.clone(), |w| w.clone());
scalar_serializer!(BytesSerializer, Bytes, Bt, |v| v.data().to_vec(), |w| {
    Buffer::from(w.clone())
});
scalar_serializer!(DataTypeSerializer, DataType, Dt, |v| v.code(), |w| {
    data_type_from_code(*w)?
});

/// 线上的数据类型编码转换为`DataType`，未知编码视为无效值
pub(crate) fn data_type_from_code(code: i32) -> Result<DataType, AttrError> {
    DataType::from_code(code)
        .ok_or_else(|| AttrError::InvalidWireValue(format!("未知的数据类型编码{code}")))
}
