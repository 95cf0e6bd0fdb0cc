use super::{AnyValue, AttrError, AttrMap, AttrValueType};

/// 带名称的属性集合，可以作为属性值任意深度地嵌套
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedAttrs {
    name: String,
    attrs: AttrMap,
}

impl NamedAttrs {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: AttrMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub const fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    pub fn set_attr<T: AttrValueType>(&mut self, name: &str, value: T) {
        self.attrs.set_attr(name, value);
    }

    pub fn get_attr<T: AttrValueType>(&self, name: &str) -> Result<&T, AttrError> {
        self.attrs.get_attr(name)
    }

    pub fn get_value(&self, name: &str) -> Option<&AnyValue> {
        self.attrs.get_value(name)
    }

    /// 链式构造
    pub fn with_attr<T: AttrValueType>(mut self, name: &str, value: T) -> Self {
        self.set_attr(name, value);
        self
    }
}
