use thiserror::Error;

use crate::attr::AttrError;
use crate::graph::GraphError;

/// 模型保存/加载错误
///
/// 任何失败都不会返回部分构建的模型。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("文件{path}读写失败：{message}")]
    Io { path: String, message: String },
    #[error("路径长度{len}超过上限{max}")]
    PathTooLong { len: usize, max: usize },
    #[error("无效路径：{0}")]
    InvalidPath(String),
    #[error("模型编码失败：{0}")]
    Encode(String),
    #[error("模型解码失败：{0}")]
    Decode(String),
    #[error("无效的模型文件：文件头不是 GIRM")]
    BadMagic,
    #[error("不支持的模型文件版本：{0}")]
    UnsupportedVersion(u32),
    #[error("模型数据长度不符：文件头记录{expected}字节，实际{actual}字节")]
    LengthMismatch { expected: u64, actual: u64 },
    #[error("模型中没有计算图")]
    MissingGraph,
    #[error("配置无效：{0}")]
    Config(String),
    #[error(transparent)]
    Attr(#[from] AttrError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl ModelError {
    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
