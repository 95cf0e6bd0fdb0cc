use super::chain_graph;
use crate::graph::{AnchorRef, ComputeGraph, GraphDescriptor};
use crate::tensor::{DataType, Format, Shape, TensorDesc};

#[test]
fn test_describe_chain() {
    let (mut graph, [data, conv, _]) = chain_graph();
    graph
        .link(&AnchorRef::out_control(data), &AnchorRef::in_control(conv))
        .unwrap();
    graph.node_mut(conv).unwrap().attrs_mut().set_int("group", 1);
    graph.attrs_mut().set_bool("training", false);

    let desc = graph.describe();
    assert_eq!(desc.name, "chain");
    assert_eq!(desc.attrs, vec!["training".to_string()]);
    assert_eq!(desc.nodes.len(), 3);

    let conv_desc = &desc.nodes[1];
    assert_eq!(conv_desc.name, "conv");
    assert_eq!(conv_desc.inputs, vec![Some("data:0".to_string()), None]);
    assert_eq!(conv_desc.control_inputs, vec!["data".to_string()]);
    assert_eq!(conv_desc.attrs, vec!["group".to_string()]);
}

#[test]
fn test_describe_json() {
    let mut graph = ComputeGraph::with_name("shapes");
    let desc = TensorDesc::new(Shape::from([2, 3]), Format::Nchw, DataType::Float);
    graph
        .add_node_with_descs("data", "Data", vec![], vec![desc])
        .unwrap();

    let json = graph.describe().to_json().unwrap();
    assert!(json.contains("\"output_shapes\""));
    let parsed = GraphDescriptor::from_json(&json).unwrap();
    assert_eq!(parsed, graph.describe());
    assert_eq!(parsed.nodes[0].output_shapes, vec![vec![2, 3]]);
}

#[test]
fn test_structural_equality() {
    let (a, _) = chain_graph();
    let (mut b, [_, conv, _]) = chain_graph();
    assert_eq!(a, b);

    b.node_mut(conv).unwrap().attrs_mut().set_int("group", 2);
    assert_ne!(a, b);

    // 节点与连接一致但 id 不同的图仍然相等
    let mut c = ComputeGraph::with_name("chain");
    c.add_node("placeholder", "NoOp", 0, 0).unwrap();
    let id = c.find_node("placeholder").unwrap();
    c.remove_node(id).unwrap();
    let data = c.add_node("data", "Data", 0, 1).unwrap();
    let conv = c.add_node("conv", "Conv2D", 2, 1).unwrap();
    let relu = c.add_node("relu", "Relu", 1, 1).unwrap();
    c.link(&AnchorRef::out_data(data, 0), &AnchorRef::in_data(conv, 0))
        .unwrap();
    c.link(&AnchorRef::out_data(conv, 0), &AnchorRef::in_data(relu, 0))
        .unwrap();
    assert_eq!(a, c);
}
