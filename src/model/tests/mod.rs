mod options;

use std::path::PathBuf;

use crate::attr::NamedAttrs;
use crate::graph::{AnchorRef, ComputeGraph};
use crate::model::Model;
use crate::tensor::{DataType, Format, Shape, Tensor, TensorDesc};

/// 测试文件放在系统临时目录下，文件名带上进程号以免并行测试互相覆盖
fn temp_model_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("graph_ir_{}_{name}.girm", std::process::id()))
}

fn sample_model() -> Model {
    let mut graph = ComputeGraph::with_name("main");
    let desc = TensorDesc::new(Shape::from([1, 3, 2, 2]), Format::Nchw, DataType::Float);
    let data = graph
        .add_node_with_descs("data", "Data", vec![], vec![desc.clone()])
        .unwrap();
    let weight = graph
        .add_node_with_descs("weight", "Const", vec![], vec![desc.clone()])
        .unwrap();
    let conv = graph
        .add_node_with_descs(
            "conv",
            "Conv2D",
            vec![desc.clone(), desc.clone()],
            vec![desc.clone()],
        )
        .unwrap();
    let out = graph.add_node("output", "NetOutput", 1, 0).unwrap();
    graph
        .link(&AnchorRef::out_data(data, 0), &AnchorRef::in_data(conv, 0))
        .unwrap();
    graph
        .link(&AnchorRef::out_data(weight, 0), &AnchorRef::in_data(conv, 1))
        .unwrap();
    graph
        .link(&AnchorRef::out_data(conv, 0), &AnchorRef::in_data(out, 0))
        .unwrap();
    graph
        .link(&AnchorRef::out_control(weight), &AnchorRef::in_control(data))
        .unwrap();

    let values: Vec<u8> = (0..48).collect();
    let attrs = graph.node_mut(weight).unwrap().attrs_mut();
    attrs.set_tensor("value", Tensor::with_bytes(desc, &values));
    let attrs = graph.node_mut(conv).unwrap().attrs_mut();
    attrs.set_list_int("strides", vec![1, 1]);
    attrs.set_list_list_int("pads", vec![vec![0, 0], vec![1, 1]]);
    attrs.set_named_attrs("epilogue", NamedAttrs::new("relu").with_attr("alpha", 0.0f32));

    let mut body = ComputeGraph::with_name("body");
    body.add_node("noop", "NoOp", 0, 0).unwrap();
    graph.attrs_mut().set_graph("subgraph", body);

    let mut model = Model::new("resnet_tiny", "1.0.2");
    model.set_version(3);
    model.set_graph(graph);
    model.set_memory_size(1 << 20);
    model.set_stream_num(2);
    model.set_target_type("mini");
    model
}
