use super::{AttrSerializer, SerializerRegistry, mismatch, wrong_field};
use crate::attr::{AnyValue, AttrError, NamedAttrs, ValueKind};
use crate::proto::{AttrValueDef, NamedAttrsDef, WireFieldTag};

/// 嵌套的属性逐项交给注册表处理，因此嵌套深度不受限制
pub(crate) fn named_attrs_to_def(
    registry: &SerializerRegistry,
    value: &NamedAttrs,
) -> Result<NamedAttrsDef, AttrError> {
    Ok(NamedAttrsDef {
        name: value.name().to_string(),
        attr: registry.serialize_map(value.attrs())?,
    })
}

pub(crate) fn named_attrs_from_def(
    registry: &SerializerRegistry,
    def: &NamedAttrsDef,
) -> Result<NamedAttrs, AttrError> {
    let mut value = NamedAttrs::new(&def.name);
    *value.attrs_mut() = registry.deserialize_map(&def.attr)?;
    Ok(value)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NamedAttrsSerializer;

impl AttrSerializer for NamedAttrsSerializer {
    fn value_kinds(&self) -> &'static [ValueKind] {
        &[ValueKind::NamedAttrs]
    }

    fn wire_tag(&self) -> WireFieldTag {
        WireFieldTag::Func
    }

    fn serialize(
        &self,
        registry: &SerializerRegistry,
        value: &AnyValue,
    ) -> Result<AttrValueDef, AttrError> {
        match value {
            AnyValue::NamedAttrs(v) => Ok(AttrValueDef::Func(named_attrs_to_def(registry, v)?)),
            other => Err(mismatch(ValueKind::NamedAttrs, other)),
        }
    }

    fn deserialize(
        &self,
        registry: &SerializerRegistry,
        def: &AttrValueDef,
    ) -> Result<AnyValue, AttrError> {
        match def {
            AttrValueDef::Func(v) => Ok(AnyValue::NamedAttrs(named_attrs_from_def(registry, v)?)),
            other => Err(wrong_field(WireFieldTag::Func, other)),
        }
    }
}
