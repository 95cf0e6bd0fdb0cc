use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{AnchorKind, AnchorRef, ComputeGraph, NodeId};

fn random_anchor(rng: &mut StdRng, graph: &ComputeGraph, nodes: &[NodeId], out: bool) -> AnchorRef {
    let node = nodes[rng.gen_range(0..nodes.len())];
    let node_ref = graph.node(node).unwrap();
    match (out, rng.gen_bool(0.25)) {
        (true, true) => AnchorRef::out_control(node),
        (true, false) => AnchorRef::out_data(node, rng.gen_range(0..node_ref.out_data_anchors_num())),
        (false, true) => AnchorRef::in_control(node),
        (false, false) => AnchorRef::in_data(node, rng.gen_range(0..node_ref.in_data_anchors_num())),
    }
}

fn assert_invariants(graph: &ComputeGraph) {
    graph.check_symmetry().unwrap();
    for node in graph.nodes() {
        for anchor in node.all_anchors() {
            let peers = graph.peer_anchors(&anchor).unwrap();
            if anchor.kind() == AnchorKind::InData {
                assert!(peers.len() <= 1, "{anchor}有多个来源");
            }
            for peer in peers {
                assert!(graph.is_linked_with(peer, &anchor));
                assert_eq!(peer.kind().is_out(), anchor.kind().is_in());
            }
        }
    }
}

/// 随机的连接/断开/改接序列之后，对称与单一来源始终成立
#[test]
fn test_random_edits_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(20260311);
    let mut graph = ComputeGraph::with_name("fuzz");
    let nodes: Vec<NodeId> = (0..8)
        .map(|i| graph.add_node(&format!("n{i}"), "Op", 2, 2).unwrap())
        .collect();

    for _ in 0..500 {
        let src = random_anchor(&mut rng, &graph, &nodes, true);
        let dst = random_anchor(&mut rng, &graph, &nodes, false);
        match rng.gen_range(0..4) {
            0 | 1 => {
                let _ = graph.link(&src, &dst);
            }
            2 => {
                let _ = graph.unlink(&dst, &src);
            }
            _ => {
                let first = random_anchor(&mut rng, &graph, &nodes, false);
                let second = random_anchor(&mut rng, &graph, &nodes, true);
                let _ = graph.replace_peer(&src, &dst, &first, &second);
            }
        }
        assert_invariants(&graph);
    }

    for &node in &nodes {
        graph.isolate_node(node).unwrap();
        assert!(!graph.node(node).unwrap().has_links());
    }
    assert_invariants(&graph);
}

/// 失败的操作不改变图
#[test]
fn test_failed_edits_do_not_mutate() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut graph = ComputeGraph::new();
    let nodes: Vec<NodeId> = (0..4)
        .map(|i| graph.add_node(&format!("n{i}"), "Op", 1, 1).unwrap())
        .collect();

    for _ in 0..200 {
        let src = random_anchor(&mut rng, &graph, &nodes, true);
        let dst = random_anchor(&mut rng, &graph, &nodes, false);
        let before = graph.clone();
        let result = if rng.gen_bool(0.5) {
            graph.link(&src, &dst)
        } else {
            graph.unlink(&src, &dst)
        };
        if result.is_err() {
            assert_eq!(graph, before);
        }
    }
}
