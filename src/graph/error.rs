/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : 锚点图的结构错误
 */

use thiserror::Error;

use super::{AnchorKind, NodeId};

/// 图结构操作错误
///
/// 均可由调用方恢复（例如放弃本次图编辑），失败时不会修改任何一侧的连接。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("节点{0}不存在")]
    NodeNotFound(NodeId),
    #[error("{0}")]
    DuplicateNodeName(String),
    #[error("节点{node}上不存在{kind}锚点{index}")]
    InvalidAnchor {
        node: String,
        kind: AnchorKind,
        index: i32,
    },
    #[error("{src}锚点无法连接到{dst}锚点")]
    IncompatibleAnchors { src: AnchorKind, dst: AnchorKind },
    #[error("节点{node}的{kind}锚点{index}已存在该连接或已有数据来源")]
    AlreadyLinked {
        node: String,
        kind: AnchorKind,
        index: i32,
    },
    #[error("节点{node}的锚点{index}与节点{peer_node}的锚点{peer_index}之间没有连接")]
    NotConnected {
        node: String,
        index: i32,
        peer_node: String,
        peer_index: i32,
    },
    #[error("{0}")]
    NodeStillLinked(String),
    #[error("{0}")]
    CycleDetected(String),
    #[error("{0}")]
    Corrupted(String),
}
