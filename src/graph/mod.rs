/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : 锚点连接图：节点、锚点以及保持双向对称的连接协议
 *
 * 公开 API：
 * - `ComputeGraph`: 节点的唯一所有者（arena），所有连接变更都经由它完成
 * - `Node`: 节点（锚点槽位 + 张量描述 + 属性表）
 * - `AnchorRef`: 锚点句柄（类型 + 所属节点 + 索引）
 * - `GraphError`: 错误类型
 */

mod anchor;
mod compute_graph;
mod error;
mod node;

pub use anchor::{AnchorKind, AnchorRef, CONTROL_ANCHOR_INDEX};
pub use compute_graph::{ComputeGraph, GraphDescriptor, NodeDescriptor};
pub use error::GraphError;
pub use node::{Node, NodeId};

#[cfg(test)]
mod tests;
