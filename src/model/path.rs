/*
 * @Author       : 老董
 * @Date         : 2026-03-12
 * @Description  : 模型文件路径：长度检查在任何文件系统调用之前完成，之后再规范化
 */

use std::path::{Path, PathBuf};

use super::ModelError;

fn check_len(path: &Path, max: usize) -> Result<(), ModelError> {
    let len = path.as_os_str().len();
    if len >= max {
        log::error!("路径长度{len}超过上限{max}");
        return Err(ModelError::PathTooLong { len, max });
    }
    Ok(())
}

/// 加载路径：文件必须存在，返回规范化后的绝对路径
pub(super) fn resolve_load_path(path: &Path, max: usize) -> Result<PathBuf, ModelError> {
    if path.as_os_str().is_empty() {
        return Err(ModelError::InvalidPath("路径为空".to_string()));
    }
    check_len(path, max)?;
    let resolved = path.canonicalize().map_err(|e| ModelError::io(path, &e))?;
    check_len(&resolved, max)?;
    if !resolved.is_file() {
        return Err(ModelError::InvalidPath(format!(
            "{}不是普通文件",
            resolved.display()
        )));
    }
    Ok(resolved)
}

/// 保存路径：文件可以不存在，但其所在目录必须存在；规范化的是目录部分
pub(super) fn resolve_save_path(path: &Path, max: usize) -> Result<PathBuf, ModelError> {
    check_len(path, max)?;
    let file_name = path.file_name().ok_or_else(|| {
        ModelError::InvalidPath(format!("{}没有文件名", path.display()))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let resolved = parent
        .canonicalize()
        .map_err(|e| ModelError::io(parent, &e))?
        .join(file_name);
    check_len(&resolved, max)?;
    Ok(resolved)
}
