/*
 * @Author       : 老董
 * @Date         : 2026-03-08
 * @Description  : AnyValue：封闭集合上的类型擦除属性值
 *
 * 变体集合、`ValueKind`以及每个 Rust 类型到变体的映射都由同一张表生成，
 * 新增一种属性类型只需在表中加一行（外加对应的序列化器）。
 */

use std::fmt::{self, Display};

use super::{AttrError, NamedAttrs};
use crate::buffer::Buffer;
use crate::graph::ComputeGraph;
use crate::tensor::{DataType, Tensor, TensorDesc};

/// 可以存入`AnyValue`的类型
pub trait AttrValueType: Sized {
    const KIND: ValueKind;

    fn from_any(value: &AnyValue) -> Option<&Self>;

    fn from_any_mut(value: &mut AnyValue) -> Option<&mut Self>;

    fn into_any(self) -> AnyValue;
}

macro_rules! define_attr_values {
    ($($ty:ty => $variant:ident, $name:literal;)*) => {
        /// 属性值的种类，也是序列化方向的分派键
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ValueKind {
            $($variant,)*
        }

        impl ValueKind {
            pub const ALL: &'static [ValueKind] = &[$(ValueKind::$variant,)*];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(ValueKind::$variant => $name,)*
                }
            }
        }

        /// 类型擦除的属性值，未赋值时为`Unset`
        #[derive(Debug, Clone, PartialEq, Default)]
        pub enum AnyValue {
            #[default]
            Unset,
            $($variant($ty),)*
        }

        impl AnyValue {
            /// 值的种类；`Unset`返回`None`
            pub fn kind(&self) -> Option<ValueKind> {
                match self {
                    AnyValue::Unset => None,
                    $(AnyValue::$variant(_) => Some(ValueKind::$variant),)*
                }
            }
        }

        $(
            impl AttrValueType for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                fn from_any(value: &AnyValue) -> Option<&Self> {
                    match value {
                        AnyValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn from_any_mut(value: &mut AnyValue) -> Option<&mut Self> {
                    match value {
                        AnyValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn into_any(self) -> AnyValue {
                    AnyValue::$variant(self)
                }
            }

            impl From<$ty> for AnyValue {
                fn from(value: $ty) -> Self {
                    AnyValue::$variant(value)
                }
            }
        )*
    };
}

define_attr_values! {
    i64 => Int, "int";
    f32 => Float, "float";
    bool => Bool, "bool";
    String => String, "string";
    Buffer => Bytes, "bytes";
    DataType => DataType, "data_type";
    Tensor => Tensor, "tensor";
    TensorDesc => TensorDesc, "tensor_desc";
    NamedAttrs => NamedAttrs, "named_attrs";
    ComputeGraph => Graph, "graph";
    Vec<i64> => ListInt, "list_int";
    Vec<f32> => ListFloat, "list_float";
    Vec<bool> => ListBool, "list_bool";
    Vec<String> => ListString, "list_string";
    Vec<Buffer> => ListBytes, "list_bytes";
    Vec<DataType> => ListDataType, "list_data_type";
    Vec<Tensor> => ListTensor, "list_tensor";
    Vec<TensorDesc> => ListTensorDesc, "list_tensor_desc";
    Vec<NamedAttrs> => ListNamedAttrs, "list_named_attrs";
    Vec<ComputeGraph> => ListGraph, "list_graph";
    Vec<Vec<i64>> => ListListInt, "list_list_int";
}

impl ValueKind {
    pub const fn is_list(&self) -> bool {
        matches!(
            self,
            Self::ListInt
                | Self::ListFloat
                | Self::ListBool
                | Self::ListString
                | Self::ListBytes
                | Self::ListDataType
                | Self::ListTensor
                | Self::ListTensorDesc
                | Self::ListNamedAttrs
                | Self::ListGraph
                | Self::ListListInt
        )
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AnyValue {
    pub fn new<T: AttrValueType>(value: T) -> Self {
        value.into_any()
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// 取值：未赋值返回`Unset`，类型不符返回`TypeMismatch`，两者相互区分
    pub fn get<T: AttrValueType>(&self) -> Result<&T, AttrError> {
        let actual = self.kind().ok_or(AttrError::Unset)?;
        T::from_any(self).ok_or(AttrError::TypeMismatch {
            expected: T::KIND,
            actual,
        })
    }

    pub fn get_mut<T: AttrValueType>(&mut self) -> Result<&mut T, AttrError> {
        let actual = self.kind().ok_or(AttrError::Unset)?;
        T::from_any_mut(self).ok_or(AttrError::TypeMismatch {
            expected: T::KIND,
            actual,
        })
    }

    /// 赋值（可以改变值的种类）
    pub fn set<T: AttrValueType>(&mut self, value: T) {
        *self = value.into_any();
    }

    /// 清空为`Unset`
    pub fn clear(&mut self) {
        *self = Self::Unset;
    }

    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind() == other.kind()
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        AnyValue::String(value.to_string())
    }
}
