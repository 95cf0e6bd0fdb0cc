/*
 * @Author       : 老董
 * @Date         : 2026-03-07
 * @Description  : 计算图的结构相等
 *
 * 节点 id 只是 arena 内的句柄，不参与比较：两张图相等，当且仅当
 * 图名、图属性相同，节点按顺序一一对应（名称、类型、张量描述、属性相同），
 * 且每个锚点的 peer 集合（以“peer 节点名 + 类型 + 索引”表示）相同。
 */

use super::ComputeGraph;
use crate::graph::{AnchorKind, AnchorRef, Node};

type PeerSignature = (String, AnchorKind, i32);

impl ComputeGraph {
    fn peer_signatures(&self, anchor: &AnchorRef) -> Vec<PeerSignature> {
        let mut signatures: Vec<PeerSignature> = self
            .resolve(anchor)
            .map(|peers| {
                peers
                    .iter()
                    .map(|p| (self.node_label(p.node()), p.kind(), p.index()))
                    .collect()
            })
            .unwrap_or_default();
        signatures.sort();
        signatures
    }

    fn same_node(&self, lhs: &Node, other: &Self, rhs: &Node) -> bool {
        if lhs.name() != rhs.name()
            || lhs.op_type() != rhs.op_type()
            || lhs.input_descs() != rhs.input_descs()
            || lhs.output_descs() != rhs.output_descs()
            || lhs.attrs() != rhs.attrs()
        {
            return false;
        }
        lhs.all_anchors()
            .iter()
            .zip(rhs.all_anchors().iter())
            .all(|(a, b)| self.peer_signatures(a) == other.peer_signatures(b))
    }
}

impl PartialEq for ComputeGraph {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.attrs == other.attrs
            && self.nodes.len() == other.nodes.len()
            && self
                .nodes
                .values()
                .zip(other.nodes.values())
                .all(|(lhs, rhs)| self.same_node(lhs, other, rhs))
    }
}
