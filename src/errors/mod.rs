/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 状态码视图：把各模块的类型化错误折叠为调用方（核函数、加载器）关心的状态码
 */

use std::fmt::{self, Display};

use crate::attr::AttrError;
use crate::graph::GraphError;
use crate::model::ModelError;
use crate::tensor::TensorError;

/// 跨模块的状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphStatus {
    Success,
    /// 操作失败（结构错误、编解码失败、I/O 失败等）
    Failed,
    /// 入参本身无效（不存在的节点、越界的锚点等）
    ParamInvalid,
}

impl GraphStatus {
    pub const fn code(&self) -> u32 {
        match self {
            Self::Success => 0,
            Self::Failed => 0xFFFF_FFFF,
            Self::ParamInvalid => 50331649,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl Display for GraphStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_name = match self {
            GraphStatus::Success => "GRAPH_SUCCESS",
            GraphStatus::Failed => "GRAPH_FAILED",
            GraphStatus::ParamInvalid => "GRAPH_PARAM_INVALID",
        };
        write!(f, "{}", status_name)
    }
}

/// 可以折叠为`GraphStatus`的错误
pub trait StatusCode {
    fn status(&self) -> GraphStatus;
}

impl<T, E: StatusCode> StatusCode for Result<T, E> {
    fn status(&self) -> GraphStatus {
        match self {
            Ok(_) => GraphStatus::Success,
            Err(e) => e.status(),
        }
    }
}

impl StatusCode for GraphError {
    fn status(&self) -> GraphStatus {
        match self {
            GraphError::NodeNotFound(_) | GraphError::InvalidAnchor { .. } => {
                GraphStatus::ParamInvalid
            }
            _ => GraphStatus::Failed,
        }
    }
}

impl StatusCode for TensorError {
    fn status(&self) -> GraphStatus {
        match self {
            TensorError::DimIndexOutOfRange { .. } => GraphStatus::ParamInvalid,
            _ => GraphStatus::Failed,
        }
    }
}

impl StatusCode for AttrError {
    fn status(&self) -> GraphStatus {
        match self {
            AttrError::Graph(e) => e.status(),
            AttrError::Tensor(e) => e.status(),
            AttrError::NotFound(_) => GraphStatus::ParamInvalid,
            _ => GraphStatus::Failed,
        }
    }
}

impl StatusCode for ModelError {
    fn status(&self) -> GraphStatus {
        match self {
            ModelError::PathTooLong { .. } | ModelError::InvalidPath(_) => {
                GraphStatus::ParamInvalid
            }
            ModelError::Attr(e) => e.status(),
            ModelError::Graph(e) => e.status(),
            _ => GraphStatus::Failed,
        }
    }
}
