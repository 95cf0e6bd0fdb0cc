/*
 * @Author       : 老董
 * @Date         : 2026-03-10
 * @Description  : 计算图 <-> GraphDef
 *
 * 节点按 id 顺序写出；连接只从输出侧写出一次（先各输出数据锚点，再输出控制锚点，
 * 各自按 peer 顺序），因此同一张图的序列化结果是确定的。
 * 读回时节点重新分配 id，连接按旧 id -> 新 id 的映射重新建立。
 * 输出侧锚点的 peer 顺序读回后不变；输入控制锚点有多个 peer 时，
 * 读回后按源节点的顺序排列，不保留原来的连接顺序。
 */

use std::collections::HashMap;

use super::tensor::{desc_from_def, desc_to_def};
use super::{AttrSerializer, SerializerRegistry, mismatch, wrong_field};
use crate::attr::{AnyValue, AttrError, ValueKind};
use crate::graph::{AnchorRef, ComputeGraph, NodeId};
use crate::proto::{AnchorDef, AttrValueDef, EdgeDef, GraphDef, OpDef, WireFieldTag};

pub(crate) fn graph_to_def(
    registry: &SerializerRegistry,
    graph: &ComputeGraph,
) -> Result<GraphDef, AttrError> {
    let mut ops = Vec::with_capacity(graph.node_count());
    let mut edges = Vec::new();
    for node in graph.nodes() {
        ops.push(OpDef {
            id: node.id().0,
            name: node.name().to_string(),
            op_type: node.op_type().to_string(),
            input_desc: node.input_descs().iter().map(desc_to_def).collect(),
            output_desc: node.output_descs().iter().map(desc_to_def).collect(),
            attr: registry.serialize_map(node.attrs())?,
        });

        let out_anchors = (0..node.out_data_anchors_num())
            .map(|i| AnchorRef::out_data(node.id(), i))
            .chain(std::iter::once(node.out_control_anchor()));
        for src in out_anchors {
            for dst in graph.peer_anchors(&src)? {
                edges.push(EdgeDef {
                    src: anchor_to_def(&src),
                    dst: anchor_to_def(dst),
                });
            }
        }
    }

    Ok(GraphDef {
        name: graph.name().to_string(),
        op: ops,
        edge: edges,
        attr: registry.serialize_map(graph.attrs())?,
    })
}

pub(crate) fn graph_from_def(
    registry: &SerializerRegistry,
    def: &GraphDef,
) -> Result<ComputeGraph, AttrError> {
    let mut graph = ComputeGraph::with_name(&def.name);
    *graph.attrs_mut() = registry.deserialize_map(&def.attr)?;

    let mut id_map = HashMap::with_capacity(def.op.len());
    for op in &def.op {
        let inputs = op
            .input_desc
            .iter()
            .map(desc_from_def)
            .collect::<Result<Vec<_>, _>>()?;
        let outputs = op
            .output_desc
            .iter()
            .map(desc_from_def)
            .collect::<Result<Vec<_>, _>>()?;
        let id = graph.add_node_with_descs(&op.name, &op.op_type, inputs, outputs)?;
        *graph.node_mut(id)?.attrs_mut() = registry.deserialize_map(&op.attr)?;
        if id_map.insert(op.id, id).is_some() {
            return Err(AttrError::InvalidWireValue(format!("节点 id {}重复", op.id)));
        }
    }

    for edge in &def.edge {
        let src = anchor_from_def(&id_map, &edge.src, true)?;
        let dst = anchor_from_def(&id_map, &edge.dst, false)?;
        graph.link(&src, &dst)?;
    }
    Ok(graph)
}

fn anchor_to_def(anchor: &AnchorRef) -> AnchorDef {
    AnchorDef {
        node_id: anchor.node().0,
        index: anchor.index(),
    }
}

fn anchor_from_def(
    id_map: &HashMap<u64, NodeId>,
    def: &AnchorDef,
    is_out: bool,
) -> Result<AnchorRef, AttrError> {
    let node = id_map.get(&def.node_id).ok_or_else(|| {
        AttrError::InvalidWireValue(format!("连接引用了不存在的节点 id {}", def.node_id))
    })?;
    Ok(AnchorRef::from_wire(*node, def.index, is_out))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphSerializer;

impl AttrSerializer for GraphSerializer {
    fn value_kinds(&self) -> &'static [ValueKind] {
        &[ValueKind::Graph]
    }

    fn wire_tag(&self) -> WireFieldTag {
        WireFieldTag::G
    }

    fn serialize(
        &self,
        registry: &SerializerRegistry,
        value: &AnyValue,
    ) -> Result<AttrValueDef, AttrError> {
        match value {
            AnyValue::Graph(graph) => Ok(AttrValueDef::G(graph_to_def(registry, graph)?)),
            other => Err(mismatch(ValueKind::Graph, other)),
        }
    }

    fn deserialize(
        &self,
        registry: &SerializerRegistry,
        def: &AttrValueDef,
    ) -> Result<AnyValue, AttrError> {
        match def {
            AttrValueDef::G(graph) => Ok(AnyValue::Graph(graph_from_def(registry, graph)?)),
            other => Err(wrong_field(WireFieldTag::G, other)),
        }
    }
}
