/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : ComputeGraph 计算图的底层实现
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 节点的增删查
 * - link.rs: 连接协议（link/unlink/replace_peer）
 * - query.rs: 按锚点类型过滤的 peer 查询
 * - topology.rs: 拓扑排序、对称性校验
 * - compare.rs: 结构相等
 * - describe.rs: 可读的 JSON 描述
 */

mod compare;
mod core;
mod describe;
mod link;
mod query;
mod topology;

pub use describe::{GraphDescriptor, NodeDescriptor};

use super::{Node, NodeId};
use crate::attr::AttrMap;
use std::collections::{BTreeMap, HashMap};

/// 计算图
///
/// 图是其全部节点的唯一所有者（arena）：节点按`NodeId`存放，id 单调递增且不复用，
/// 锚点之间的 peer 关系以`AnchorRef`句柄记录，解引用时在 arena 中检查存活性。
/// 因此控制依赖形成的环不会造成任何引用计数意义上的泄漏。
#[derive(Debug, Clone)]
pub struct ComputeGraph {
    pub(in crate::graph) name: String,
    pub(in crate::graph) nodes: BTreeMap<NodeId, Node>,
    /// 节点名 -> 节点 id（节点名在图内唯一）
    pub(in crate::graph) name_index: HashMap<String, NodeId>,
    pub(in crate::graph) next_id: u64,
    pub(in crate::graph) attrs: AttrMap,
}

impl Default for ComputeGraph {
    fn default() -> Self {
        Self::new()
    }
}
