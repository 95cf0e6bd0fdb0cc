/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : ComputeGraph 核心操作：创建、节点增删查
 */

use super::super::error::GraphError;
use super::ComputeGraph;
use crate::attr::AttrMap;
use crate::graph::anchor::data_index;
use crate::graph::{AnchorKind, AnchorRef, Node, NodeId};
use crate::tensor::TensorDesc;
use std::collections::{BTreeMap, HashMap};

impl ComputeGraph {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_graph")
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: BTreeMap::new(),
            name_index: HashMap::new(),
            next_id: 0,
            attrs: AttrMap::new(),
        }
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub const fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    /// 所有节点 id（按创建顺序）
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// 所有节点（按创建顺序）
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// 节点的可变引用，只能修改描述与属性，连接关系仍须经由图修改
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))
    }

    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// 用于日志/错误信息的节点名；节点不存在时返回 id
    pub(in crate::graph) fn node_label(&self, id: NodeId) -> String {
        self.nodes
            .get(&id)
            .map_or_else(|| id.to_string(), |n| n.name().to_string())
    }

    // ========== 节点增删 ==========

    /// 新增节点，输入/输出锚点的个数与给定的张量描述个数一致
    pub fn add_node_with_descs(
        &mut self,
        name: &str,
        op_type: &str,
        input_descs: Vec<TensorDesc>,
        output_descs: Vec<TensorDesc>,
    ) -> Result<NodeId, GraphError> {
        if self.name_index.contains_key(name) {
            return Err(GraphError::DuplicateNodeName(format!(
                "节点{}在图{}中重复",
                name, self.name
            )));
        }
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let node = Node::new(id, name, op_type, input_descs, output_descs);
        self.nodes.insert(id, node);
        self.name_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// 新增节点，输入/输出使用默认张量描述
    pub fn add_node(
        &mut self,
        name: &str,
        op_type: &str,
        inputs_num: usize,
        outputs_num: usize,
    ) -> Result<NodeId, GraphError> {
        self.add_node_with_descs(
            name,
            op_type,
            vec![TensorDesc::default(); inputs_num],
            vec![TensorDesc::default(); outputs_num],
        )
    }

    /// 删除节点；节点必须已经完全断开连接
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let node = self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))?;
        if node.has_links() {
            log::error!("删除失败：{node}仍有连接");
            return Err(GraphError::NodeStillLinked(format!(
                "{node}仍有连接，删除前须先断开"
            )));
        }
        self.name_index.remove(node.name());
        self.nodes.remove(&id).ok_or(GraphError::NodeNotFound(id))
    }

    /// 断开节点所有锚点上的全部连接
    pub fn isolate_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        let anchors = self.node(id)?.all_anchors();
        for anchor in anchors {
            self.unlink_all(&anchor)?;
        }
        Ok(())
    }

    /// 在`src`（输出锚点）与`dst`（输入锚点）之间插入节点`new_node`：
    /// 结果为`src -> new_node.in[in_index]`、`new_node.out[out_index] -> dst`
    pub fn insert_node_between(
        &mut self,
        src: &AnchorRef,
        dst: &AnchorRef,
        new_node: NodeId,
        in_index: usize,
        out_index: usize,
    ) -> Result<(), GraphError> {
        let node = self.node(new_node)?;
        let first = node.in_data_anchor(in_index).ok_or_else(|| GraphError::InvalidAnchor {
            node: node.name().to_string(),
            kind: AnchorKind::InData,
            index: data_index(in_index),
        })?;
        let second = node
            .out_data_anchor(out_index)
            .ok_or_else(|| GraphError::InvalidAnchor {
                node: node.name().to_string(),
                kind: AnchorKind::OutData,
                index: data_index(out_index),
            })?;
        self.replace_peer(src, dst, &first, &second)
    }
}
