/*
 * @Author       : 老董
 * @Date         : 2026-03-07
 * @Description  : 图描述符（Graph Descriptor）
 *                 可读的 JSON 摘要，用于调试输出；不用于重新加载
 */

use serde::{Deserialize, Serialize};

use super::ComputeGraph;
use crate::graph::{AnchorKind, CONTROL_ANCHOR_INDEX};

/// 图的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// 格式版本
    pub version: String,
    /// 图名称
    pub name: String,
    /// 所有节点描述（创建顺序）
    pub nodes: Vec<NodeDescriptor>,
    /// 图属性名
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attrs: Vec<String>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub name: String,
    pub op_type: String,
    /// 每个输入数据锚点的来源，形如`"conv1:0"`；未连接为`None`
    pub inputs: Vec<Option<String>>,
    /// 控制依赖来源节点名
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub control_inputs: Vec<String>,
    /// 每个输出的形状
    pub output_shapes: Vec<Vec<i64>>,
    /// 属性名
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attrs: Vec<String>,
}

impl GraphDescriptor {
    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ComputeGraph {
    /// 生成图描述符
    pub fn describe(&self) -> GraphDescriptor {
        let nodes = self
            .nodes
            .values()
            .map(|node| {
                let inputs = (0..node.in_data_anchors_num())
                    .map(|i| {
                        node.in_data_anchor(i)
                            .and_then(|a| self.resolve(&a).ok())
                            .and_then(|peers| peers.first())
                            .map(|src| {
                                let index = if src.kind() == AnchorKind::OutData {
                                    src.index()
                                } else {
                                    CONTROL_ANCHOR_INDEX
                                };
                                format!("{}:{}", self.node_label(src.node()), index)
                            })
                    })
                    .collect();
                let control_inputs = self
                    .resolve(&node.in_control_anchor())
                    .map(|peers| peers.iter().map(|p| self.node_label(p.node())).collect())
                    .unwrap_or_default();
                NodeDescriptor {
                    name: node.name().to_string(),
                    op_type: node.op_type().to_string(),
                    inputs,
                    control_inputs,
                    output_shapes: node
                        .output_descs()
                        .iter()
                        .map(|d| d.shape().dims().to_vec())
                        .collect(),
                    attrs: node.attrs().names(),
                }
            })
            .collect();

        GraphDescriptor {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: self.name.clone(),
            nodes,
            attrs: self.attrs.names(),
        }
    }
}
