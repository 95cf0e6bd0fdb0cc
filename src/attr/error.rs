use thiserror::Error;

use super::ValueKind;
use crate::graph::GraphError;
use crate::tensor::TensorError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttrError {
    #[error("属性{0}不存在")]
    NotFound(String),
    #[error("属性值未赋值")]
    Unset,
    #[error("属性值类型不符：请求{expected}，实际为{actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("不支持的属性值类型：{0}")]
    Unsupported(String),
    #[error("序列化器重复注册：{0}")]
    DuplicateRegistration(String),
    #[error("线上格式的属性值没有填充任何字段")]
    EmptyWireValue,
    #[error("线上格式的属性值无效：{0}")]
    InvalidWireValue(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
