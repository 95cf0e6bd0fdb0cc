use std::fmt::{self, Display};

use crate::errors::GraphStatus;

/// 核函数返回的状态码：`Ok`为0，其余均为失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum KernelStatus {
    Ok = 0,
    ParamInvalid = 1,
    InnerError = 2,
    Unsupported = 3,
}

impl KernelStatus {
    pub const fn code(&self) -> u32 {
        *self as u32
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl Display for KernelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "KERNEL_OK",
            Self::ParamInvalid => "KERNEL_PARAM_INVALID",
            Self::InnerError => "KERNEL_INNER_ERROR",
            Self::Unsupported => "KERNEL_UNSUPPORTED",
        };
        write!(f, "{name}")
    }
}

impl From<GraphStatus> for KernelStatus {
    fn from(status: GraphStatus) -> Self {
        match status {
            GraphStatus::Success => Self::Ok,
            GraphStatus::ParamInvalid => Self::ParamInvalid,
            GraphStatus::Failed => Self::InnerError,
        }
    }
}
