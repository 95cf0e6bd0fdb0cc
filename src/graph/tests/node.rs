use crate::assert_err;
use crate::graph::{AnchorKind, AnchorRef, ComputeGraph, GraphError, NodeId, CONTROL_ANCHOR_INDEX};
use crate::tensor::{DataType, Format, Shape, TensorDesc};

#[test]
fn test_add_node_assigns_increasing_ids() {
    let mut graph = ComputeGraph::new();
    assert_eq!(graph.name(), "default_graph");
    let a = graph.add_node("a", "Add", 2, 1).unwrap();
    let b = graph.add_node("b", "Add", 2, 1).unwrap();
    assert!(b > a);

    graph.remove_node(b).unwrap();
    let c = graph.add_node("c", "Add", 2, 1).unwrap();
    // id 不复用
    assert!(c > b);
    assert_eq!(graph.node_ids(), vec![a, c]);
}

#[test]
fn test_duplicate_node_name() {
    let mut graph = ComputeGraph::with_name("g");
    graph.add_node("conv1", "Conv2D", 1, 1).unwrap();
    assert_err!(
        graph.add_node("conv1", "Conv2D", 1, 1),
        GraphError::DuplicateNodeName("节点conv1在图g中重复")
    );
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_node_lookup() {
    let mut graph = ComputeGraph::new();
    let id = graph.add_node("conv", "Conv2D", 2, 1).unwrap();
    assert_eq!(graph.find_node("conv"), Some(id));
    assert_eq!(graph.find_node("nothing"), None);
    assert!(graph.contains_node(id));
    assert_err!(graph.node(NodeId(99)), GraphError::NodeNotFound(NodeId(99)));

    graph.node_mut(id).unwrap().set_op_type("DepthwiseConv2D");
    assert_eq!(graph.node(id).unwrap().op_type(), "DepthwiseConv2D");
}

#[test]
fn test_anchors_of_node() {
    let mut graph = ComputeGraph::new();
    let id = graph.add_node("split", "Split", 1, 3).unwrap();
    let node = graph.node(id).unwrap();
    assert_eq!(node.in_data_anchors_num(), 1);
    assert_eq!(node.out_data_anchors_num(), 3);
    assert_eq!(node.out_data_anchor(2), Some(AnchorRef::out_data(id, 2)));
    assert_eq!(node.out_data_anchor(3), None);
    assert_eq!(node.in_control_anchor().index(), CONTROL_ANCHOR_INDEX);

    let kinds: Vec<AnchorKind> = node.all_anchors().iter().map(AnchorRef::kind).collect();
    assert_eq!(
        kinds,
        vec![
            AnchorKind::InData,
            AnchorKind::OutData,
            AnchorKind::OutData,
            AnchorKind::OutData,
            AnchorKind::InControl,
            AnchorKind::OutControl,
        ]
    );
    assert!(!node.has_links());
}

#[test]
fn test_descs_grow_anchors() {
    let mut graph = ComputeGraph::new();
    let desc = TensorDesc::new(Shape::from([1, 8]), Format::Nd, DataType::Int32);
    let id = graph
        .add_node_with_descs("concat", "Concat", vec![desc.clone()], vec![desc.clone()])
        .unwrap();
    let node = graph.node_mut(id).unwrap();
    assert_eq!(node.add_input_desc(desc.clone()), 1);
    assert_eq!(node.in_data_anchors_num(), 2);
    assert_eq!(node.input_desc(1), Some(&desc));
    node.output_desc_mut(0).unwrap().set_data_type(DataType::Float);
    assert_eq!(node.output_desc(0).map(TensorDesc::data_type), Some(DataType::Float));
}

#[test]
fn test_control_anchor_identity_ignores_index() {
    let id = NodeId(4);
    let from_wire = AnchorRef::from_wire(id, CONTROL_ANCHOR_INDEX, true);
    assert_eq!(from_wire, AnchorRef::out_control(id));
    assert_ne!(AnchorRef::out_control(id), AnchorRef::in_control(id));
    assert_ne!(AnchorRef::out_data(id, 0), AnchorRef::out_data(id, 1));
    assert!(AnchorRef::out_data(id, 0).can_link_to(&AnchorRef::in_control(id)));
    assert!(!AnchorRef::in_data(id, 0).can_link_to(&AnchorRef::out_data(id, 0)));
}

#[test]
fn test_remove_node() {
    let (mut graph, [data, conv, _]) = super::chain_graph();
    assert_err!(graph.remove_node(conv), GraphError::NodeStillLinked(_));
    assert!(graph.contains_node(conv));

    graph.isolate_node(conv).unwrap();
    assert!(graph.out_data_nodes(data).unwrap().is_empty());
    let removed = graph.remove_node(conv).unwrap();
    assert_eq!(removed.name(), "conv");
    assert_eq!(graph.find_node("conv"), None);
    assert_err!(graph.remove_node(conv), GraphError::NodeNotFound(_));

    // 节点名释放后可以再次使用
    assert!(graph.add_node("conv", "Conv2D", 1, 1).is_ok());
}
