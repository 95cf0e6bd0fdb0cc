/*
 * @Author       : 老董
 * @Date         : 2026-03-12
 * @Description  : 模型编解码
 *
 * 文件布局（小端）：
 * | 魔数 "GIRM" (4) | 格式版本 u32 (4) | 负载长度 u64 (8) | bincode(ModelDef) |
 */

use super::{Model, ModelError};
use crate::attr::SerializerRegistry;
use crate::attr::serializer::{graph_from_def, graph_to_def};
use crate::proto::ModelDef;

/// 模型文件魔数
pub const MODEL_MAGIC: &[u8; 4] = b"GIRM";
/// 模型文件格式版本
pub const FORMAT_VERSION: u32 = 1;
/// 文件头字节数
pub const HEADER_LEN: usize = 16;

impl Model {
    pub(super) fn to_def(&self, registry: &SerializerRegistry) -> Result<ModelDef, ModelError> {
        Ok(ModelDef {
            name: self.name.clone(),
            version: self.version,
            custom_version: self.platform_version.clone(),
            graph: Some(graph_to_def(registry, &self.graph)?),
            attr: registry.serialize_map(&self.attrs)?,
        })
    }

    pub(super) fn from_def(def: &ModelDef, registry: &SerializerRegistry) -> Result<Self, ModelError> {
        let graph = def.graph.as_ref().ok_or(ModelError::MissingGraph)?;
        Ok(Self {
            name: def.name.clone(),
            version: def.version,
            platform_version: def.custom_version.clone(),
            graph: graph_from_def(registry, graph)?,
            attrs: registry.deserialize_map(&def.attr)?,
        })
    }
}

pub(super) fn encode(def: &ModelDef) -> Result<Vec<u8>, ModelError> {
    let payload = bincode::serialize(def).map_err(|e| ModelError::Encode(e.to_string()))?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(MODEL_MAGIC);
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

pub(super) fn decode(bytes: &[u8]) -> Result<ModelDef, ModelError> {
    if bytes.len() < HEADER_LEN {
        if !MODEL_MAGIC.starts_with(&bytes[..bytes.len().min(MODEL_MAGIC.len())]) {
            return Err(ModelError::BadMagic);
        }
        return Err(ModelError::LengthMismatch {
            expected: HEADER_LEN as u64,
            actual: bytes.len() as u64,
        });
    }
    let (header, payload) = bytes.split_at(HEADER_LEN);
    if &header[..4] != MODEL_MAGIC {
        log::error!("模型文件头不是{:?}", MODEL_MAGIC);
        return Err(ModelError::BadMagic);
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(&header[4..8]);
    let version = u32::from_le_bytes(version);
    if version != FORMAT_VERSION {
        return Err(ModelError::UnsupportedVersion(version));
    }

    let mut expected = [0u8; 8];
    expected.copy_from_slice(&header[8..16]);
    let expected = u64::from_le_bytes(expected);
    if expected != payload.len() as u64 {
        return Err(ModelError::LengthMismatch {
            expected,
            actual: payload.len() as u64,
        });
    }

    bincode::deserialize(payload).map_err(|e| ModelError::Decode(e.to_string()))
}
