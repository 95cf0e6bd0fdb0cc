/*
 * @Author       : 老董
 * @Date         : 2026-03-06
 * @Description  : 拓扑排序与连接不变量校验
 */

use super::super::error::GraphError;
use super::ComputeGraph;
use crate::graph::{AnchorKind, NodeId};
use std::collections::{BTreeMap, VecDeque};

impl ComputeGraph {
    /// 数据 + 控制边上的拓扑序（Kahn 算法，入度相同时按创建顺序）
    pub fn topological_order(&self) -> Result<Vec<NodeId>, GraphError> {
        let mut in_degrees: BTreeMap<NodeId, usize> = BTreeMap::new();
        for &id in self.nodes.keys() {
            in_degrees.insert(id, self.in_all_nodes(id)?.len());
        }

        let mut ready: VecDeque<NodeId> = in_degrees
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(id, _)| *id)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());
        while let Some(id) = ready.pop_front() {
            order.push(id);
            for next in self.out_all_nodes(id)? {
                if let Some(degree) = in_degrees.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(next);
                    }
                }
            }
        }

        if order.len() != self.nodes.len() {
            let stuck: Vec<String> = in_degrees
                .iter()
                .filter(|(_, d)| **d > 0)
                .map(|(id, _)| self.node_label(*id))
                .collect();
            log::error!("图{}中存在环：{:?}", self.name, stuck);
            return Err(GraphError::CycleDetected(format!(
                "图{}中存在环，涉及节点{:?}",
                self.name, stuck
            )));
        }
        Ok(order)
    }

    /// 没有任何上游连接的节点
    pub fn input_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .keys()
            .copied()
            .filter(|&id| self.in_all_nodes(id).is_ok_and(|n| n.is_empty()))
            .collect()
    }

    /// 没有任何下游连接的节点
    pub fn output_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .keys()
            .copied()
            .filter(|&id| self.out_all_nodes(id).is_ok_and(|n| n.is_empty()))
            .collect()
    }

    /// 校验全图的连接不变量：对称性、单一来源、peer 全部存活
    pub fn check_symmetry(&self) -> Result<(), GraphError> {
        for node in self.nodes.values() {
            for anchor in node.all_anchors() {
                let peers = self.resolve(&anchor)?;
                if anchor.kind() == AnchorKind::InData && peers.len() > 1 {
                    return Err(GraphError::Corrupted(format!(
                        "{node}的输入数据锚点{}有{}个来源",
                        anchor.index(),
                        peers.len()
                    )));
                }
                for peer in peers {
                    let mirrored = self
                        .resolve(peer)
                        .map_err(|_| {
                            GraphError::Corrupted(format!("{node}的锚点{anchor}指向已失效的锚点{peer}"))
                        })?
                        .contains(&anchor);
                    if !mirrored {
                        return Err(GraphError::Corrupted(format!(
                            "连接不对称：{anchor}记录了{peer}，反之则没有"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
