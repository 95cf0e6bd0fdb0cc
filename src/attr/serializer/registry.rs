/*
 * @Author       : 老董
 * @Date         : 2026-03-09
 * @Description  : 序列化器注册表
 *
 * 注册只在一个显式的启动函数（`register_builtin_serializers`）中按固定顺序完成，
 * 不依赖任何静态初始化顺序。进程级实例在首次使用时构建一次（`global()`）。
 */

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::{
    AttrSerializer, BoolSerializer, BytesSerializer, DataTypeSerializer, FloatSerializer,
    GraphSerializer, IntSerializer, ListSerializer, NamedAttrsSerializer, SerializerInstance,
    StringSerializer, TensorDescSerializer, TensorSerializer,
};
use crate::attr::{AnyValue, AttrError, AttrMap, ValueKind};
use crate::proto::{AttrDef, WireFieldTag};

/// 序列化器注册表：`ValueKind`用于序列化方向，`WireFieldTag`用于反序列化方向
#[derive(Default)]
pub struct SerializerRegistry {
    serializers: Vec<SerializerInstance>,
    by_kind: HashMap<ValueKind, usize>,
    by_tag: HashMap<WireFieldTag, usize>,
}

impl SerializerRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册了全部内置序列化器的注册表
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        // 内置序列化器的种类与字段互不重叠，注册不会失败
        if let Err(e) = registry.register_builtin_serializers() {
            log::error!("注册内置序列化器失败：{e}");
        }
        registry
    }

    /// 进程级注册表（首次使用时构建）
    pub fn global() -> &'static SerializerRegistry {
        static REGISTRY: OnceLock<SerializerRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::with_builtin)
    }

    /// 按固定顺序注册全部内置序列化器
    pub fn register_builtin_serializers(&mut self) -> Result<(), AttrError> {
        self.register(IntSerializer)?;
        self.register(FloatSerializer)?;
        self.register(BoolSerializer)?;
        self.register(StringSerializer)?;
        self.register(BytesSerializer)?;
        self.register(DataTypeSerializer)?;
        self.register(TensorSerializer)?;
        self.register(TensorDescSerializer)?;
        self.register(NamedAttrsSerializer)?;
        self.register(GraphSerializer)?;
        self.register(ListSerializer)?;
        Ok(())
    }

    /// 注册一个序列化器；其负责的任一种类或字段已被注册时失败，且不做任何修改
    pub fn register<S: Into<SerializerInstance>>(&mut self, serializer: S) -> Result<(), AttrError> {
        let serializer = serializer.into();
        let kinds = serializer.value_kinds();
        let tag = serializer.wire_tag();
        if let Some(kind) = kinds.iter().find(|k| self.by_kind.contains_key(k)) {
            return Err(AttrError::DuplicateRegistration(format!("值种类{kind}")));
        }
        if self.by_tag.contains_key(&tag) {
            return Err(AttrError::DuplicateRegistration(format!("字段{tag:?}")));
        }

        let slot = self.serializers.len();
        self.serializers.push(serializer);
        for &kind in kinds {
            self.by_kind.insert(kind, slot);
        }
        self.by_tag.insert(tag, slot);
        Ok(())
    }

    pub fn is_registered(&self, kind: ValueKind) -> bool {
        self.by_kind.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.serializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serializers.is_empty()
    }

    /// 序列化单个属性值
    ///
    /// 值未赋值返回`Unset`；值的种类没有注册序列化器返回`Unsupported`，不做任何猜测。
    pub fn serialize(&self, value: &AnyValue) -> Result<AttrDef, AttrError> {
        let kind = value.kind().ok_or(AttrError::Unset)?;
        let slot = self.by_kind.get(&kind).ok_or_else(|| {
            log::error!("属性值类型{kind}没有注册序列化器");
            AttrError::Unsupported(kind.name().to_string())
        })?;
        let def = self.serializers[*slot].serialize(self, value)?;
        Ok(AttrDef { value: Some(def) })
    }

    /// 反序列化单个属性值，按被填充字段的标签分派
    pub fn deserialize(&self, def: &AttrDef) -> Result<AnyValue, AttrError> {
        let value = def.value.as_ref().ok_or(AttrError::EmptyWireValue)?;
        let tag = value.field_tag();
        let slot = self.by_tag.get(&tag).ok_or_else(|| {
            log::error!("字段{tag:?}没有注册反序列化器");
            AttrError::Unsupported(format!("{tag:?}"))
        })?;
        self.serializers[*slot].deserialize(self, value)
    }

    /// 逐项序列化属性表，出错时附带属性名
    pub fn serialize_map(&self, attrs: &AttrMap) -> Result<BTreeMap<String, AttrDef>, AttrError> {
        attrs
            .iter()
            .map(|(name, value)| {
                self.serialize(value)
                    .map(|def| (name.clone(), def))
                    .inspect_err(|e| log::error!("序列化属性{name}失败：{e}"))
            })
            .collect()
    }

    pub fn deserialize_map(&self, defs: &BTreeMap<String, AttrDef>) -> Result<AttrMap, AttrError> {
        defs.iter()
            .map(|(name, def)| {
                self.deserialize(def)
                    .map(|value| (name.clone(), value))
                    .inspect_err(|e| log::error!("反序列化属性{name}失败：{e}"))
            })
            .collect()
    }
}
