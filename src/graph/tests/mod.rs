mod describe;
mod invariants;
mod node;

use crate::graph::{AnchorRef, ComputeGraph, NodeId};

/// data -> conv -> relu 的简单链，返回 (图, [data, conv, relu])
fn chain_graph() -> (ComputeGraph, [NodeId; 3]) {
    let mut graph = ComputeGraph::with_name("chain");
    let data = graph.add_node("data", "Data", 0, 1).unwrap();
    let conv = graph.add_node("conv", "Conv2D", 2, 1).unwrap();
    let relu = graph.add_node("relu", "Relu", 1, 1).unwrap();
    graph
        .link(&AnchorRef::out_data(data, 0), &AnchorRef::in_data(conv, 0))
        .unwrap();
    graph
        .link(&AnchorRef::out_data(conv, 0), &AnchorRef::in_data(relu, 0))
        .unwrap();
    (graph, [data, conv, relu])
}
