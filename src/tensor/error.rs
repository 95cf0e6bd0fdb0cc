use thiserror::Error;

use super::DataType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("形状{dims:?}的元素总数超出i64范围")]
    ShapeSizeOverflow { dims: Vec<i64> },
    #[error("形状第{index}维的值{dim}无效")]
    InvalidDim { index: usize, dim: i64 },
    #[error("维度索引{index}越界（阶数为{rank}）")]
    DimIndexOutOfRange { index: usize, rank: usize },
    #[error("形状未知，无法计算大小")]
    UnknownShape,
    #[error("数据类型不匹配：期望{expected:?}，实际为{actual:?}")]
    DataTypeMismatch { expected: DataType, actual: DataType },
    #[error("数据类型{0:?}没有固定的字节宽度")]
    UnsizedDataType(DataType),
    #[error("数据长度不匹配：期望{expected}字节，实际为{actual}字节")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("缓冲区分配失败：{0}字节")]
    AllocationFailed(usize),
}
