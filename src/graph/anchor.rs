/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : 锚点句柄
 *
 * 锚点本身不持有任何所有权：它只是“类型 + 所属节点 + 索引”三元组，
 * 真正的连接关系存放在所属节点的槽位里，由`ComputeGraph`统一维护。
 * 节点被删除后，指向它的句柄在 arena 中查不到即视为失效（相当于弱引用）。
 */

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use super::NodeId;

/// 控制锚点的索引
pub const CONTROL_ANCHOR_INDEX: i32 = -1;

/// 锚点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnchorKind {
    InData,
    OutData,
    InControl,
    OutControl,
}

impl AnchorKind {
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::InData | Self::OutData)
    }

    pub const fn is_control(&self) -> bool {
        !self.is_data()
    }

    pub const fn is_in(&self) -> bool {
        matches!(self, Self::InData | Self::InControl)
    }

    pub const fn is_out(&self) -> bool {
        !self.is_in()
    }
}

impl Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match self {
            AnchorKind::InData => "输入数据",
            AnchorKind::OutData => "输出数据",
            AnchorKind::InControl => "输入控制",
            AnchorKind::OutControl => "输出控制",
        };
        write!(f, "{}", kind_name)
    }
}

/// 数据锚点索引转为线上格式的 i32。超出范围时取`i32::MAX`，
/// 该索引不对应任何实际存在的锚点，后续校验会将其拒绝。
pub(crate) const fn data_index(index: usize) -> i32 {
    if index > i32::MAX as usize {
        i32::MAX
    } else {
        index as i32
    }
}

/// 锚点句柄
///
/// 相等性按“类型 + 所属节点 + 索引”判断，控制锚点忽略索引，
/// 因此调用方持有的不同句柄只要指向同一逻辑锚点就视为相同。
#[derive(Debug, Clone, Copy)]
pub struct AnchorRef {
    kind: AnchorKind,
    node: NodeId,
    index: i32,
}

impl AnchorRef {
    pub const fn in_data(node: NodeId, index: usize) -> Self {
        Self {
            kind: AnchorKind::InData,
            node,
            index: data_index(index),
        }
    }

    pub const fn out_data(node: NodeId, index: usize) -> Self {
        Self {
            kind: AnchorKind::OutData,
            node,
            index: data_index(index),
        }
    }

    pub const fn in_control(node: NodeId) -> Self {
        Self {
            kind: AnchorKind::InControl,
            node,
            index: CONTROL_ANCHOR_INDEX,
        }
    }

    pub const fn out_control(node: NodeId) -> Self {
        Self {
            kind: AnchorKind::OutControl,
            node,
            index: CONTROL_ANCHOR_INDEX,
        }
    }

    /// 由线上格式中的索引还原：`CONTROL_ANCHOR_INDEX`为控制锚点，其余为数据锚点
    pub(crate) const fn from_wire(node: NodeId, index: i32, is_out: bool) -> Self {
        match (index == CONTROL_ANCHOR_INDEX, is_out) {
            (true, true) => Self::out_control(node),
            (true, false) => Self::in_control(node),
            (false, true) => Self {
                kind: AnchorKind::OutData,
                node,
                index,
            },
            (false, false) => Self {
                kind: AnchorKind::InData,
                node,
                index,
            },
        }
    }

    pub const fn kind(&self) -> AnchorKind {
        self.kind
    }

    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// 数据锚点的索引；控制锚点恒为`CONTROL_ANCHOR_INDEX`
    pub const fn index(&self) -> i32 {
        if self.kind.is_control() {
            CONTROL_ANCHOR_INDEX
        } else {
            self.index
        }
    }

    /// `self`作为源、`dst`作为目的能否构成一条连接
    pub const fn can_link_to(&self, dst: &Self) -> bool {
        self.kind.is_out() && dst.kind.is_in()
    }
}

impl PartialEq for AnchorRef {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.node == other.node && self.index() == other.index()
    }
}

impl Eq for AnchorRef {}

impl Hash for AnchorRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.node.hash(state);
        self.index().hash(state);
    }
}

impl Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.node, self.index(), self.kind)
    }
}
