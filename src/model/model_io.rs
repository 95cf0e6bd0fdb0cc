/*
 * @Author       : 老董
 * @Date         : 2026-03-12
 * @Description  : 模型的保存与加载
 *
 * 文件以只读权限（默认 0o400）创建：先写入同目录下的暂存文件，再改名替换目标文件。
 * 加载时整体读入、校验文件头后一次性解码，任何失败都不返回部分模型。
 */

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::codec::{decode, encode};
use super::path::{resolve_load_path, resolve_save_path};
use super::{Model, ModelError, ModelIoOptions};
use crate::attr::SerializerRegistry;
use crate::graph::GraphDescriptor;

/// 保存时使用的暂存文件：与目标同目录，名为`.<文件名>.tmp`
pub(super) fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

fn remove_if_exists(path: &Path) -> Result<(), ModelError> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("删除已有文件{}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ModelError::io(path, &e)),
    }
}

fn write_new_file(path: &Path, bytes: &[u8], mode: u32) -> Result<(), ModelError> {
    let mut open_options = OpenOptions::new();
    open_options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open_options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    let mut file = open_options.open(path).map_err(|e| ModelError::io(path, &e))?;
    file.write_all(bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| ModelError::io(path, &e))
}

/// `summary()`的输出结构
#[derive(Serialize)]
struct ModelSummary<'a> {
    name: &'a str,
    version: u32,
    platform_version: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attrs: Vec<String>,
    graph: GraphDescriptor,
}

impl Model {
    /// 以默认配置保存到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        self.save_with(path, &ModelIoOptions::default())
    }

    pub fn save_with<P: AsRef<Path>>(&self, path: P, options: &ModelIoOptions) -> Result<(), ModelError> {
        let path = resolve_save_path(path.as_ref(), options.max_path_len)?;
        let bytes = self.save_to_buffer()?;

        // 先写暂存文件，再改名替换目标文件
        let staging = staging_path(&path);
        remove_if_exists(&staging)?;
        if let Err(e) = write_new_file(&staging, &bytes, options.file_mode) {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }
        // 只读的目标文件在非 unix 平台上无法被改名覆盖
        #[cfg(not(unix))]
        remove_if_exists(&path)?;
        if let Err(e) = fs::rename(&staging, &path) {
            let _ = fs::remove_file(&staging);
            return Err(ModelError::io(&path, &e));
        }

        log::debug!(
            "模型{}已保存到{}（{}字节）",
            self.name,
            path.display(),
            bytes.len()
        );
        Ok(())
    }

    /// 以默认配置从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        Self::load_with(path, &ModelIoOptions::default())
    }

    pub fn load_with<P: AsRef<Path>>(path: P, options: &ModelIoOptions) -> Result<Self, ModelError> {
        let path = resolve_load_path(path.as_ref(), options.max_path_len)?;
        let mut bytes = Vec::new();
        File::open(&path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|e| ModelError::io(&path, &e))?;
        log::debug!("读取模型文件{}（{}字节）", path.display(), bytes.len());

        Self::from_bytes(&bytes, options).inspect_err(|e| {
            log::error!("加载模型文件{}失败：{e}", path.display());
        })
    }

    /// 编码为内存中的字节（与文件内容相同）
    pub fn save_to_buffer(&self) -> Result<Vec<u8>, ModelError> {
        let def = self.to_def(SerializerRegistry::global())?;
        encode(&def)
    }

    pub fn load_from_buffer(bytes: &[u8]) -> Result<Self, ModelError> {
        Self::from_bytes(bytes, &ModelIoOptions::default())
    }

    fn from_bytes(bytes: &[u8], options: &ModelIoOptions) -> Result<Self, ModelError> {
        let def = decode(bytes)?;
        let model = Self::from_def(&def, SerializerRegistry::global())?;
        if options.check_symmetry_on_load {
            model.graph.check_symmetry()?;
        }
        Ok(model)
    }

    /// 可读的 JSON 摘要，仅用于调试，不能用于重新加载
    pub fn summary(&self) -> Result<String, ModelError> {
        let summary = ModelSummary {
            name: &self.name,
            version: self.version,
            platform_version: &self.platform_version,
            attrs: self.attrs.names(),
            graph: self.graph.describe(),
        };
        serde_json::to_string_pretty(&summary).map_err(|e| ModelError::Encode(e.to_string()))
    }
}
