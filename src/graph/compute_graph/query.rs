/*
 * @Author       : 老董
 * @Date         : 2026-03-06
 * @Description  : peer 查询：按运行时锚点类型过滤未分类的 peer 列表
 */

use super::super::error::GraphError;
use super::ComputeGraph;
use crate::graph::{AnchorKind, AnchorRef, NodeId};

impl ComputeGraph {
    /// 锚点的全部 peer（连接顺序）
    pub fn peer_anchors(&self, anchor: &AnchorRef) -> Result<&[AnchorRef], GraphError> {
        Ok(self.resolve(anchor)?.as_slice())
    }

    pub fn peer_anchors_num(&self, anchor: &AnchorRef) -> Result<usize, GraphError> {
        Ok(self.resolve(anchor)?.len())
    }

    /// 两个锚点是否相连；任一锚点无效时返回`false`
    pub fn is_linked_with(&self, anchor: &AnchorRef, peer: &AnchorRef) -> bool {
        self.resolve(anchor).is_ok_and(|peers| peers.contains(peer))
    }

    fn peers_of_kind(&self, anchor: &AnchorRef, kind: AnchorKind) -> Result<Vec<AnchorRef>, GraphError> {
        Ok(self
            .resolve(anchor)?
            .iter()
            .filter(|p| p.kind() == kind)
            .copied()
            .collect())
    }

    /// 输入数据锚点的数据来源（输出数据锚点）
    pub fn peer_out_anchor(&self, in_data: &AnchorRef) -> Result<Option<AnchorRef>, GraphError> {
        Ok(self.peers_of_kind(in_data, AnchorKind::OutData)?.into_iter().next())
    }

    pub fn peer_in_data_anchors(&self, anchor: &AnchorRef) -> Result<Vec<AnchorRef>, GraphError> {
        self.peers_of_kind(anchor, AnchorKind::InData)
    }

    pub fn peer_in_control_anchors(&self, anchor: &AnchorRef) -> Result<Vec<AnchorRef>, GraphError> {
        self.peers_of_kind(anchor, AnchorKind::InControl)
    }

    pub fn peer_out_control_anchors(&self, anchor: &AnchorRef) -> Result<Vec<AnchorRef>, GraphError> {
        self.peers_of_kind(anchor, AnchorKind::OutControl)
    }

    pub fn peer_out_data_anchors(&self, anchor: &AnchorRef) -> Result<Vec<AnchorRef>, GraphError> {
        self.peers_of_kind(anchor, AnchorKind::OutData)
    }

    // ========== 节点级查询 ==========

    fn neighbor_nodes<F>(&self, id: NodeId, select: F) -> Result<Vec<NodeId>, GraphError>
    where
        F: Fn(&AnchorRef) -> bool,
    {
        let node = self.node(id)?;
        let mut neighbors = Vec::new();
        for anchor in node.all_anchors().iter().filter(|a| select(a)) {
            for peer in self.resolve(anchor)? {
                if !neighbors.contains(&peer.node()) {
                    neighbors.push(peer.node());
                }
            }
        }
        Ok(neighbors)
    }

    /// 通过输入数据锚点相连的上游节点
    pub fn in_data_nodes(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.neighbor_nodes(id, |a| a.kind() == AnchorKind::InData)
    }

    /// 通过输出数据锚点相连的下游节点
    pub fn out_data_nodes(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.neighbor_nodes(id, |a| a.kind() == AnchorKind::OutData)
    }

    pub fn in_control_nodes(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.neighbor_nodes(id, |a| a.kind() == AnchorKind::InControl)
    }

    pub fn out_control_nodes(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.neighbor_nodes(id, |a| a.kind() == AnchorKind::OutControl)
    }

    /// 所有上游节点（数据 + 控制）
    pub fn in_all_nodes(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.neighbor_nodes(id, |a| a.kind().is_in())
    }

    /// 所有下游节点（数据 + 控制）
    pub fn out_all_nodes(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        self.neighbor_nodes(id, |a| a.kind().is_out())
    }
}
