/*
 * @Author       : 老董
 * @Date         : 2026-03-03
 * @Description  : 张量的数据类型与数据排布格式，数值与线上格式中的枚举编码一致
 */

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// 数据类型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum DataType {
    #[default]
    Float = 0,
    Float16 = 1,
    Int8 = 2,
    Int32 = 3,
    Uint8 = 4,
    Int16 = 6,
    Uint16 = 7,
    Uint32 = 8,
    Int64 = 9,
    Uint64 = 10,
    Double = 11,
    Bool = 12,
    String = 13,
    Complex64 = 16,
    Complex128 = 17,
    Bf16 = 27,
    Undefined = 28,
}

impl DataType {
    /// 单个元素的字节宽度；变长或未定义的类型返回`None`
    pub const fn size_in_bytes(&self) -> Option<usize> {
        match self {
            Self::Bool | Self::Int8 | Self::Uint8 => Some(1),
            Self::Float16 | Self::Bf16 | Self::Int16 | Self::Uint16 => Some(2),
            Self::Float | Self::Int32 | Self::Uint32 => Some(4),
            Self::Double | Self::Int64 | Self::Uint64 | Self::Complex64 => Some(8),
            Self::Complex128 => Some(16),
            Self::String | Self::Undefined => None,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        FromPrimitive::from_i32(code)
    }

    pub fn code(&self) -> i32 {
        self.to_i32().unwrap_or(Self::Undefined as i32)
    }
}

/// 数据排布格式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive, Serialize, Deserialize,
)]
pub enum Format {
    Nchw = 0,
    Nhwc = 1,
    #[default]
    Nd = 2,
    Nc1hwc0 = 3,
    FractalZ = 4,
    Hwcn = 16,
    Ndhwc = 27,
    FractalNz = 29,
    Ncdhw = 30,
    Reserved = 40,
}

impl Format {
    pub fn from_code(code: i32) -> Option<Self> {
        FromPrimitive::from_i32(code)
    }

    pub fn code(&self) -> i32 {
        self.to_i32().unwrap_or(Self::Reserved as i32)
    }
}
