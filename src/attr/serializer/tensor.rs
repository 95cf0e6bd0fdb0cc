use super::scalar::data_type_from_code;
use super::{AttrSerializer, SerializerRegistry, mismatch, wrong_field};
use crate::attr::{AnyValue, AttrError, ValueKind};
use crate::buffer::Buffer;
use crate::proto::{AttrValueDef, TensorDef, TensorDescDef, WireFieldTag};
use crate::tensor::{Format, Shape, Tensor, TensorDesc};

fn format_from_code(code: i32) -> Result<Format, AttrError> {
    Format::from_code(code)
        .ok_or_else(|| AttrError::InvalidWireValue(format!("未知的数据格式编码{code}")))
}

pub(crate) fn desc_to_def(desc: &TensorDesc) -> TensorDescDef {
    TensorDescDef {
        name: desc.name().to_string(),
        dtype: desc.data_type().code(),
        format: desc.format().code(),
        shape: desc.shape().dims().to_vec(),
        origin_shape: desc.origin_shape().map(|s| s.dims().to_vec()),
        origin_format: desc.origin_format().map(|f| f.code()),
        size: desc.size(),
        const_data: desc.const_data().map(|d| d.data().to_vec()),
    }
}

/// 还原描述符；origin 字段只在线上存在时才设置，保持“未设置”与“默认值”的区别
pub(crate) fn desc_from_def(def: &TensorDescDef) -> Result<TensorDesc, AttrError> {
    let mut desc = TensorDesc::new(
        Shape::new(def.shape.clone()),
        format_from_code(def.format)?,
        data_type_from_code(def.dtype)?,
    );
    desc.set_name(&def.name);
    if let Some(origin_shape) = &def.origin_shape {
        desc.set_origin_shape(Shape::new(origin_shape.clone()));
    }
    if let Some(origin_format) = def.origin_format {
        desc.set_origin_format(format_from_code(origin_format)?);
    }
    desc.set_size(def.size);
    if let Some(const_data) = &def.const_data {
        desc.set_const_data(Buffer::from(const_data.clone()));
    }
    Ok(desc)
}

pub(crate) fn tensor_to_def(tensor: &Tensor) -> TensorDef {
    TensorDef {
        desc: desc_to_def(tensor.desc()),
        data: tensor.data().to_vec(),
    }
}

pub(crate) fn tensor_from_def(def: &TensorDef) -> Result<Tensor, AttrError> {
    Ok(Tensor::new(
        desc_from_def(&def.desc)?,
        Buffer::from(def.data.clone()),
    ))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TensorDescSerializer;

impl AttrSerializer for TensorDescSerializer {
    fn value_kinds(&self) -> &'static [ValueKind] {
        &[ValueKind::TensorDesc]
    }

    fn wire_tag(&self) -> WireFieldTag {
        WireFieldTag::Td
    }

    fn serialize(
        &self,
        _registry: &SerializerRegistry,
        value: &AnyValue,
    ) -> Result<AttrValueDef, AttrError> {
        match value {
            AnyValue::TensorDesc(desc) => Ok(AttrValueDef::Td(desc_to_def(desc))),
            other => Err(mismatch(ValueKind::TensorDesc, other)),
        }
    }

    fn deserialize(
        &self,
        _registry: &SerializerRegistry,
        def: &AttrValueDef,
    ) -> Result<AnyValue, AttrError> {
        match def {
            AttrValueDef::Td(desc) => Ok(AnyValue::TensorDesc(desc_from_def(desc)?)),
            other => Err(wrong_field(WireFieldTag::Td, other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TensorSerializer;

impl AttrSerializer for TensorSerializer {
    fn value_kinds(&self) -> &'static [ValueKind] {
        &[ValueKind::Tensor]
    }

    fn wire_tag(&self) -> WireFieldTag {
        WireFieldTag::T
    }

    fn serialize(
        &self,
        _registry: &SerializerRegistry,
        value: &AnyValue,
    ) -> Result<AttrValueDef, AttrError> {
        match value {
            AnyValue::Tensor(tensor) => Ok(AttrValueDef::T(tensor_to_def(tensor))),
            other => Err(mismatch(ValueKind::Tensor, other)),
        }
    }

    fn deserialize(
        &self,
        _registry: &SerializerRegistry,
        def: &AttrValueDef,
    ) -> Result<AnyValue, AttrError> {
        match def {
            AttrValueDef::T(tensor) => Ok(AnyValue::Tensor(tensor_from_def(tensor)?)),
            other => Err(wrong_field(WireFieldTag::T, other)),
        }
    }
}
