/*
 * @Author       : 老董
 * @Date         : 2026-03-06
 * @Description  : 连接协议
 *
 * 所有变更都是“成对”完成的：先校验两侧（及 replace_peer 中的四个锚点），
 * 校验全部通过后才同时修改两侧的 peer 列表，因此任何失败都不会留下单侧连接。
 *
 * 不变量：
 * - 对称：A 在 B 的 peer 列表中，当且仅当 B 在 A 的 peer 列表中
 * - 单一来源：输入数据锚点最多只有一个 peer
 */

use super::super::error::GraphError;
use super::ComputeGraph;
use crate::graph::{AnchorKind, AnchorRef};

impl ComputeGraph {
    /// 校验锚点有效（所属节点存活且索引在范围内），返回其 peer 列表
    pub(in crate::graph) fn resolve(&self, anchor: &AnchorRef) -> Result<&Vec<AnchorRef>, GraphError> {
        self.nodes
            .get(&anchor.node())
            .and_then(|n| n.peers(anchor))
            .ok_or_else(|| self.invalid_anchor(anchor))
    }

    fn peers_mut(&mut self, anchor: &AnchorRef) -> Result<&mut Vec<AnchorRef>, GraphError> {
        let err = self.invalid_anchor(anchor);
        self.nodes
            .get_mut(&anchor.node())
            .and_then(|n| n.peers_mut(anchor))
            .ok_or(err)
    }

    fn invalid_anchor(&self, anchor: &AnchorRef) -> GraphError {
        GraphError::InvalidAnchor {
            node: self.node_label(anchor.node()),
            kind: anchor.kind(),
            index: anchor.index(),
        }
    }

    fn already_linked(&self, anchor: &AnchorRef) -> GraphError {
        let node = self.node_label(anchor.node());
        log::error!(
            "节点{}的{}锚点{}已存在该连接或已有数据来源",
            node,
            anchor.kind(),
            anchor.index()
        );
        GraphError::AlreadyLinked {
            node,
            kind: anchor.kind(),
            index: anchor.index(),
        }
    }

    fn not_connected(&self, anchor: &AnchorRef, peer: &AnchorRef) -> GraphError {
        let node = self.node_label(anchor.node());
        let peer_node = self.node_label(peer.node());
        log::error!(
            "节点{}的锚点{}与节点{}的锚点{}之间没有连接",
            node,
            anchor.index(),
            peer_node,
            peer.index()
        );
        GraphError::NotConnected {
            node,
            index: anchor.index(),
            peer_node,
            peer_index: peer.index(),
        }
    }

    /// 校验`src -> dst`可以新建连接（不修改任何状态）
    fn check_linkable(&self, src: &AnchorRef, dst: &AnchorRef) -> Result<(), GraphError> {
        if !src.can_link_to(dst) {
            log::error!("{}锚点{src}无法连接到{}锚点{dst}", src.kind(), dst.kind());
            return Err(GraphError::IncompatibleAnchors {
                src: src.kind(),
                dst: dst.kind(),
            });
        }
        let src_peers = self.resolve(src)?;
        let dst_peers = self.resolve(dst)?;
        if dst.kind() == AnchorKind::InData && !dst_peers.is_empty() {
            return Err(self.already_linked(dst));
        }
        if src_peers.contains(dst) || dst_peers.contains(src) {
            return Err(self.already_linked(src));
        }
        Ok(())
    }

    /// 建立`src -> dst`的连接
    ///
    /// `src`须为输出（数据或控制）锚点，`dst`须为输入（数据或控制）锚点；
    /// 输入数据锚点已有来源时失败，控制连接没有该限制。
    pub fn link(&mut self, src: &AnchorRef, dst: &AnchorRef) -> Result<(), GraphError> {
        self.check_linkable(src, dst)?;
        self.peers_mut(src)?.push(*dst);
        self.peers_mut(dst)?.push(*src);
        Ok(())
    }

    /// 以输入数据锚点`in_data`为主体，从输出锚点`src`引入数据
    pub fn link_from(&mut self, in_data: &AnchorRef, src: &AnchorRef) -> Result<(), GraphError> {
        if in_data.kind() != AnchorKind::InData {
            return Err(GraphError::IncompatibleAnchors {
                src: src.kind(),
                dst: in_data.kind(),
            });
        }
        self.link(src, in_data)
    }

    /// 以输出锚点`src`为主体，连接到输入锚点`dst`
    pub fn link_to(&mut self, src: &AnchorRef, dst: &AnchorRef) -> Result<(), GraphError> {
        self.link(src, dst)
    }

    /// 断开`anchor`与`peer`之间的连接（与方向无关）
    ///
    /// 按锚点身份（类型 + 节点 + 索引）查找，任意一侧找不到对方都视为“没有连接”，且不做任何修改。
    pub fn unlink(&mut self, anchor: &AnchorRef, peer: &AnchorRef) -> Result<(), GraphError> {
        let this_pos = self.resolve(anchor)?.iter().position(|p| p == peer);
        let peer_pos = self.resolve(peer)?.iter().position(|p| p == anchor);
        let (Some(this_pos), Some(peer_pos)) = (this_pos, peer_pos) else {
            return Err(self.not_connected(anchor, peer));
        };
        self.peers_mut(anchor)?.remove(this_pos);
        self.peers_mut(peer)?.remove(peer_pos);
        Ok(())
    }

    /// 断开`anchor`上的全部连接
    ///
    /// 某个 peer 无法解析（其节点已被删除）或不对称时，只从本侧移除该条目并继续，
    /// 保证一定终止。
    pub fn unlink_all(&mut self, anchor: &AnchorRef) -> Result<(), GraphError> {
        let peers = self.resolve(anchor)?.clone();
        for peer in peers {
            if let Err(e) = self.unlink(anchor, &peer) {
                log::warn!("断开{anchor}与{peer}失败（{e}），仅移除本侧记录");
                self.peers_mut(anchor)?.retain(|p| p != &peer);
            }
        }
        Ok(())
    }

    /// 将`this <-> old_peer`的连接改接为`this <-> first`与`second <-> old_peer`
    ///
    /// 用于在两个已连接的锚点之间插入新节点：`first`/`second`通常是新节点的输入/输出锚点。
    /// 两侧原有条目都在原位置被替换，新锚点追加对应的镜像条目，调用结束后对称性依旧成立。
    pub fn replace_peer(
        &mut self,
        this: &AnchorRef,
        old_peer: &AnchorRef,
        first: &AnchorRef,
        second: &AnchorRef,
    ) -> Result<(), GraphError> {
        let Some(this_pos) = self.resolve(this)?.iter().position(|p| p == old_peer) else {
            return Err(self.not_connected(this, old_peer));
        };
        let Some(old_pos) = self.resolve(old_peer)?.iter().position(|p| p == this) else {
            log::error!("连接不对称：{old_peer}的 peer 列表中找不到{this}");
            return Err(self.not_connected(old_peer, this));
        };

        if first == old_peer || second == this {
            return Err(GraphError::IncompatibleAnchors {
                src: first.kind(),
                dst: second.kind(),
            });
        }
        // this 与 first、second 与 old_peer 都必须构成合法方向
        let (first_src, first_dst) = if this.kind().is_out() {
            (this, first)
        } else {
            (first, this)
        };
        let (second_src, second_dst) = if old_peer.kind().is_out() {
            (old_peer, second)
        } else {
            (second, old_peer)
        };
        for (src, dst) in [(first_src, first_dst), (second_src, second_dst)] {
            if !src.can_link_to(dst) {
                return Err(GraphError::IncompatibleAnchors {
                    src: src.kind(),
                    dst: dst.kind(),
                });
            }
        }
        let first_peers = self.resolve(first)?;
        if (first.kind() == AnchorKind::InData && !first_peers.is_empty()) || first_peers.contains(this) {
            return Err(self.already_linked(first));
        }
        let second_peers = self.resolve(second)?;
        if (second.kind() == AnchorKind::InData && !second_peers.is_empty())
            || second_peers.contains(old_peer)
        {
            return Err(self.already_linked(second));
        }

        self.peers_mut(this)?[this_pos] = *first;
        self.peers_mut(old_peer)?[old_pos] = *second;
        self.peers_mut(first)?.push(*this);
        self.peers_mut(second)?.push(*old_peer);
        Ok(())
    }
}
