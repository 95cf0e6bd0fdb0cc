use serde::Deserialize;

use super::ModelError;

/// 路径长度上限（含）
pub const MAX_PATH_LEN: usize = 4096;

/// 模型文件的默认权限：仅属主可读
pub const DEFAULT_FILE_MODE: u32 = 0o400;

/// 模型 I/O 配置
///
/// ```ignore
/// let options = ModelIoOptions::from_json(r#"{"file_mode": 420}"#)?;
/// model.save_with("model.girm", &options)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelIoOptions {
    /// 路径（规范化后）长度达到该值即拒绝
    pub max_path_len: usize,
    /// 新建文件的权限位（仅 unix 生效）
    pub file_mode: u32,
    /// 加载后校验连接的对称性
    pub check_symmetry_on_load: bool,
}

impl Default for ModelIoOptions {
    fn default() -> Self {
        Self {
            max_path_len: MAX_PATH_LEN,
            file_mode: DEFAULT_FILE_MODE,
            check_symmetry_on_load: true,
        }
    }
}

impl ModelIoOptions {
    /// 从 JSON 解析，缺省字段取默认值
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Config(e.to_string()))
    }
}
