/*
 * @Author       : 老董
 * @Date         : 2026-03-12
 * @Description  : 模型：根计算图 + 元信息，以及文件/内存形式的保存与加载
 *
 * 文件组织：
 * - codec.rs: 模型 <-> ModelDef，以及带文件头的二进制编解码
 * - model_io.rs: save/load（文件）、save_to_buffer/load_from_buffer（内存）
 * - path.rs: 路径规范化与长度检查
 * - options.rs: I/O 配置
 */

mod codec;
mod error;
mod model_io;
mod options;
mod path;

pub use codec::{FORMAT_VERSION, HEADER_LEN, MODEL_MAGIC};
pub use error::ModelError;
pub use options::{DEFAULT_FILE_MODE, MAX_PATH_LEN, ModelIoOptions};

use crate::attr::AttrMap;
use crate::graph::ComputeGraph;

/// 模型级属性名
pub mod attr_names {
    pub const MEMORY_SIZE: &str = "memory_size";
    pub const WEIGHT_SIZE: &str = "weight_size";
    pub const STREAM_NUM: &str = "stream_num";
    pub const EVENT_NUM: &str = "event_num";
    pub const LABEL_NUM: &str = "label_num";
    pub const TARGET_TYPE: &str = "target_type";
}

/// 模型
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    name: String,
    version: u32,
    platform_version: String,
    graph: ComputeGraph,
    attrs: AttrMap,
}

impl Model {
    pub fn new(name: &str, platform_version: &str) -> Self {
        Self {
            name: name.to_string(),
            platform_version: platform_version.to_string(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub const fn version(&self) -> u32 {
        self.version
    }

    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    pub fn platform_version(&self) -> &str {
        &self.platform_version
    }

    pub fn set_platform_version(&mut self, platform_version: &str) {
        self.platform_version = platform_version.to_string();
    }

    pub const fn graph(&self) -> &ComputeGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut ComputeGraph {
        &mut self.graph
    }

    pub fn set_graph(&mut self, graph: ComputeGraph) {
        self.graph = graph;
    }

    pub const fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    // ========== 常用元信息 ==========

    pub fn memory_size(&self) -> Option<i64> {
        self.attrs.get_int(attr_names::MEMORY_SIZE).copied()
    }

    pub fn set_memory_size(&mut self, size: i64) {
        self.attrs.set_int(attr_names::MEMORY_SIZE, size);
    }

    pub fn weight_size(&self) -> Option<i64> {
        self.attrs.get_int(attr_names::WEIGHT_SIZE).copied()
    }

    pub fn set_weight_size(&mut self, size: i64) {
        self.attrs.set_int(attr_names::WEIGHT_SIZE, size);
    }

    pub fn stream_num(&self) -> Option<i64> {
        self.attrs.get_int(attr_names::STREAM_NUM).copied()
    }

    pub fn set_stream_num(&mut self, num: i64) {
        self.attrs.set_int(attr_names::STREAM_NUM, num);
    }

    pub fn event_num(&self) -> Option<i64> {
        self.attrs.get_int(attr_names::EVENT_NUM).copied()
    }

    pub fn set_event_num(&mut self, num: i64) {
        self.attrs.set_int(attr_names::EVENT_NUM, num);
    }

    pub fn label_num(&self) -> Option<i64> {
        self.attrs.get_int(attr_names::LABEL_NUM).copied()
    }

    pub fn set_label_num(&mut self, num: i64) {
        self.attrs.set_int(attr_names::LABEL_NUM, num);
    }

    /// 目标平台
    pub fn target_type(&self) -> Option<&str> {
        self.attrs
            .get_str(attr_names::TARGET_TYPE)
            .map(String::as_str)
    }

    pub fn set_target_type(&mut self, target: &str) {
        self.attrs.set_str(attr_names::TARGET_TYPE, target.to_string());
    }
}

#[cfg(test)]
mod tests;
