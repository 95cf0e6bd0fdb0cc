/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : 计算图节点：有序的数据锚点槽位、一对控制锚点、每个槽位的张量描述和属性表
 */

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::{AnchorKind, AnchorRef};
use crate::attr::AttrMap;
use crate::tensor::TensorDesc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 计算图节点
///
/// 节点只能由`ComputeGraph`创建，锚点的连接关系（peer 列表）也只能经由图修改，
/// 以保证双向对称；节点自身只负责描述信息和属性。
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    op_type: String,
    input_descs: Vec<TensorDesc>,
    output_descs: Vec<TensorDesc>,
    in_data_peers: Vec<Vec<AnchorRef>>,
    out_data_peers: Vec<Vec<AnchorRef>>,
    in_control_peers: Vec<AnchorRef>,
    out_control_peers: Vec<AnchorRef>,
    attrs: AttrMap,
}

impl Node {
    pub(in crate::graph) fn new(
        id: NodeId,
        name: &str,
        op_type: &str,
        input_descs: Vec<TensorDesc>,
        output_descs: Vec<TensorDesc>,
    ) -> Self {
        let in_data_peers = vec![Vec::new(); input_descs.len()];
        let out_data_peers = vec![Vec::new(); output_descs.len()];
        Self {
            id,
            name: name.to_string(),
            op_type: op_type.to_string(),
            input_descs,
            output_descs,
            in_data_peers,
            out_data_peers,
            in_control_peers: Vec::new(),
            out_control_peers: Vec::new(),
            attrs: AttrMap::new(),
        }
    }

    // ========== 基础访问器 ==========

    pub const fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn op_type(&self) -> &str {
        &self.op_type
    }

    pub fn set_op_type(&mut self, op_type: &str) {
        self.op_type = op_type.to_string();
    }

    pub const fn attrs(&self) -> &AttrMap {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut AttrMap {
        &mut self.attrs
    }

    // ========== 张量描述 ==========

    pub fn input_descs(&self) -> &[TensorDesc] {
        &self.input_descs
    }

    pub fn output_descs(&self) -> &[TensorDesc] {
        &self.output_descs
    }

    pub fn input_desc(&self, index: usize) -> Option<&TensorDesc> {
        self.input_descs.get(index)
    }

    pub fn output_desc(&self, index: usize) -> Option<&TensorDesc> {
        self.output_descs.get(index)
    }

    pub fn input_desc_mut(&mut self, index: usize) -> Option<&mut TensorDesc> {
        self.input_descs.get_mut(index)
    }

    pub fn output_desc_mut(&mut self, index: usize) -> Option<&mut TensorDesc> {
        self.output_descs.get_mut(index)
    }

    /// 追加一个输入（同时新增一个未连接的输入数据锚点），返回其索引
    pub fn add_input_desc(&mut self, desc: TensorDesc) -> usize {
        self.input_descs.push(desc);
        self.in_data_peers.push(Vec::new());
        self.input_descs.len() - 1
    }

    /// 追加一个输出（同时新增一个未连接的输出数据锚点），返回其索引
    pub fn add_output_desc(&mut self, desc: TensorDesc) -> usize {
        self.output_descs.push(desc);
        self.out_data_peers.push(Vec::new());
        self.output_descs.len() - 1
    }

    // ========== 锚点 ==========

    pub fn in_data_anchors_num(&self) -> usize {
        self.in_data_peers.len()
    }

    pub fn out_data_anchors_num(&self) -> usize {
        self.out_data_peers.len()
    }

    pub fn in_data_anchor(&self, index: usize) -> Option<AnchorRef> {
        (index < self.in_data_peers.len()).then(|| AnchorRef::in_data(self.id, index))
    }

    pub fn out_data_anchor(&self, index: usize) -> Option<AnchorRef> {
        (index < self.out_data_peers.len()).then(|| AnchorRef::out_data(self.id, index))
    }

    pub const fn in_control_anchor(&self) -> AnchorRef {
        AnchorRef::in_control(self.id)
    }

    pub const fn out_control_anchor(&self) -> AnchorRef {
        AnchorRef::out_control(self.id)
    }

    /// 节点上的所有锚点，顺序为：输入数据、输出数据、输入控制、输出控制
    pub fn all_anchors(&self) -> Vec<AnchorRef> {
        let mut anchors = Vec::with_capacity(self.in_data_peers.len() + self.out_data_peers.len() + 2);
        anchors.extend((0..self.in_data_peers.len()).map(|i| AnchorRef::in_data(self.id, i)));
        anchors.extend((0..self.out_data_peers.len()).map(|i| AnchorRef::out_data(self.id, i)));
        anchors.push(self.in_control_anchor());
        anchors.push(self.out_control_anchor());
        anchors
    }

    /// 是否有任何锚点仍处于连接状态
    pub fn has_links(&self) -> bool {
        self.in_data_peers.iter().any(|p| !p.is_empty())
            || self.out_data_peers.iter().any(|p| !p.is_empty())
            || !self.in_control_peers.is_empty()
            || !self.out_control_peers.is_empty()
    }

    /// 锚点的 peer 列表；锚点不属于本节点或索引越界时返回`None`
    pub(in crate::graph) fn peers(&self, anchor: &AnchorRef) -> Option<&Vec<AnchorRef>> {
        if anchor.node() != self.id {
            return None;
        }
        match anchor.kind() {
            AnchorKind::InData => usize::try_from(anchor.index())
                .ok()
                .and_then(|i| self.in_data_peers.get(i)),
            AnchorKind::OutData => usize::try_from(anchor.index())
                .ok()
                .and_then(|i| self.out_data_peers.get(i)),
            AnchorKind::InControl => Some(&self.in_control_peers),
            AnchorKind::OutControl => Some(&self.out_control_peers),
        }
    }

    pub(in crate::graph) fn peers_mut(&mut self, anchor: &AnchorRef) -> Option<&mut Vec<AnchorRef>> {
        if anchor.node() != self.id {
            return None;
        }
        match anchor.kind() {
            AnchorKind::InData => usize::try_from(anchor.index())
                .ok()
                .and_then(|i| self.in_data_peers.get_mut(i)),
            AnchorKind::OutData => usize::try_from(anchor.index())
                .ok()
                .and_then(|i| self.out_data_peers.get_mut(i)),
            AnchorKind::InControl => Some(&mut self.in_control_peers),
            AnchorKind::OutControl => Some(&mut self.out_control_peers),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "节点[{}({})]", self.name, self.op_type)
    }
}
