use crate::attr::AttrValueType;
use crate::context::SessionContext;
use crate::graph::Node;
use crate::tensor::Tensor;

/// 核函数上下文
///
/// 借用节点（取属性）与调用方准备好的输入/输出张量，生命周期不超过一次核函数调用。
/// 某个槽位为`None`表示该张量缺失（例如可选输入未提供）。
pub struct KernelContext<'a> {
    session: &'a SessionContext,
    node: &'a Node,
    inputs: Vec<Option<&'a Tensor>>,
    outputs: Vec<Option<&'a mut Tensor>>,
}

impl<'a> KernelContext<'a> {
    pub fn new(
        session: &'a SessionContext,
        node: &'a Node,
        inputs: Vec<Option<&'a Tensor>>,
        outputs: Vec<Option<&'a mut Tensor>>,
    ) -> Self {
        Self {
            session,
            node,
            inputs,
            outputs,
        }
    }

    pub const fn session(&self) -> &SessionContext {
        self.session
    }

    pub fn node_name(&self) -> &str {
        self.node.name()
    }

    pub fn op_type(&self) -> &str {
        self.node.op_type()
    }

    pub fn input_num(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_num(&self) -> usize {
        self.outputs.len()
    }

    pub fn input(&self, index: usize) -> Option<&Tensor> {
        self.inputs.get(index).copied().flatten()
    }

    pub fn output(&self, index: usize) -> Option<&Tensor> {
        self.outputs.get(index)?.as_deref()
    }

    pub fn output_mut(&mut self, index: usize) -> Option<&mut Tensor> {
        self.outputs.get_mut(index)?.as_deref_mut()
    }

    /// 节点属性；不存在、未赋值或类型不符时为`None`
    pub fn get_attr<T: AttrValueType>(&self, name: &str) -> Option<&T> {
        self.node.attrs().get_attr::<T>(name).ok()
    }
}
