use approx::assert_abs_diff_eq;
use ndarray::{ArrayD, IxDyn};

use crate::context::SessionContext;
use crate::graph::ComputeGraph;
use crate::kernel::{Kernel, KernelContext, KernelStatus, run_kernel};
use crate::tensor::{DataType, Format, Shape, Tensor, TensorDesc};

/// 测试用核函数：out = in * scale
struct MulsKernel;

impl Kernel for MulsKernel {
    fn op_type(&self) -> &str {
        "Muls"
    }

    fn compute(&self, ctx: &mut KernelContext<'_>) -> KernelStatus {
        let Some(&scale) = ctx.get_attr::<f32>("value") else {
            return KernelStatus::ParamInvalid;
        };
        let Some(input) = ctx.input(0) else {
            return KernelStatus::ParamInvalid;
        };
        let Ok(array) = input.to_f32_array() else {
            return KernelStatus::Unsupported;
        };
        let result = array.mapv(|v| v * scale);
        let Some(output) = ctx.output_mut(0) else {
            return KernelStatus::ParamInvalid;
        };
        *output = Tensor::from_f32_array(&result);
        KernelStatus::Ok
    }
}

fn muls_graph(scale: Option<f32>) -> ComputeGraph {
    let mut graph = ComputeGraph::new();
    let id = graph.add_node("muls", "Muls", 1, 1).unwrap();
    if let Some(scale) = scale {
        graph.node_mut(id).unwrap().attrs_mut().set_float("value", scale);
    }
    graph
}

#[test]
fn test_run_kernel() {
    let graph = muls_graph(Some(2.5));
    let node = graph.node(graph.find_node("muls").unwrap()).unwrap();
    let session = SessionContext::new(1, 0).with_trace_id(7);
    let input = Tensor::from_f32_array(
        &ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, -2.0, 0.5, 4.0]).unwrap(),
    );
    let mut output = Tensor::default();

    let mut ctx = KernelContext::new(&session, node, vec![Some(&input)], vec![Some(&mut output)]);
    assert_eq!(ctx.session().trace_id(), 7);
    assert_eq!(run_kernel(&MulsKernel, &mut ctx), KernelStatus::Ok);
    assert_eq!(ctx.output(0).map(Tensor::size), Some(16));
    drop(ctx);

    let result = output.to_f32_array().unwrap();
    assert_eq!(result.shape(), &[2, 2]);
    for (actual, expected) in result.iter().zip([2.5f32, -5.0, 1.25, 10.0]) {
        assert_abs_diff_eq!(*actual, expected, epsilon = 1e-6);
    }
}

#[test]
fn test_missing_tensors_are_none() {
    let graph = muls_graph(Some(1.0));
    let node = graph.node(graph.find_node("muls").unwrap()).unwrap();
    let session = SessionContext::default();
    let mut ctx = KernelContext::new(&session, node, vec![None], vec![None]);

    assert_eq!(ctx.input_num(), 1);
    assert_eq!(ctx.output_num(), 1);
    assert!(ctx.input(0).is_none());
    assert!(ctx.input(5).is_none());
    assert!(ctx.output(3).is_none());
    assert!(ctx.output_mut(0).is_none());
    assert_eq!(run_kernel(&MulsKernel, &mut ctx), KernelStatus::ParamInvalid);
}

#[test]
fn test_get_attr_none_on_absent_or_wrong_type() {
    let mut graph = muls_graph(None);
    let id = graph.find_node("muls").unwrap();
    graph.node_mut(id).unwrap().attrs_mut().set_int("axis", 1);
    let node = graph.node(id).unwrap();
    let session = SessionContext::default();
    let input = Tensor::from_f32_array(&ArrayD::zeros(IxDyn(&[1])));
    let mut output = Tensor::default();
    let mut ctx = KernelContext::new(&session, node, vec![Some(&input)], vec![Some(&mut output)]);

    assert!(ctx.get_attr::<f32>("value").is_none());
    assert!(ctx.get_attr::<f32>("axis").is_none());
    assert_eq!(ctx.get_attr::<i64>("axis"), Some(&1));
    assert_eq!(run_kernel(&MulsKernel, &mut ctx), KernelStatus::ParamInvalid);
}

#[test]
fn test_kernel_rejects_other_op_type_and_dtype() {
    let mut graph = ComputeGraph::new();
    let id = graph.add_node("relu", "Relu", 1, 1).unwrap();
    let session = SessionContext::default();
    let mut ctx = KernelContext::new(&session, graph.node(id).unwrap(), vec![], vec![]);
    assert_eq!(run_kernel(&MulsKernel, &mut ctx), KernelStatus::ParamInvalid);

    let graph = muls_graph(Some(3.0));
    let node = graph.node(graph.find_node("muls").unwrap()).unwrap();
    let desc = TensorDesc::new(Shape::from([2]), Format::Nd, DataType::Int8);
    let input = Tensor::with_bytes(desc, &[1, 2]);
    let mut output = Tensor::default();
    let mut ctx = KernelContext::new(&session, node, vec![Some(&input)], vec![Some(&mut output)]);
    assert_eq!(run_kernel(&MulsKernel, &mut ctx), KernelStatus::Unsupported);
}
