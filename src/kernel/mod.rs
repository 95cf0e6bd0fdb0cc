/*
 * @Author       : 老董
 * @Date         : 2026-03-13
 * @Description  : 核函数接口：IR 向计算核函数暴露的上下文与状态码
 *
 * 核函数本身不在本库中，这里只约定它能看到什么：
 * 按索引取输入/输出张量（越界或缺失时为`None`），按名称取强类型属性，
 * 以及所属会话的上下文。
 */

mod context;
mod status;

pub use context::KernelContext;
pub use status::KernelStatus;

/// 计算核函数
pub trait Kernel {
    /// 核函数对应的算子类型
    fn op_type(&self) -> &str;

    /// 执行计算；输入缺失或属性不符时应尽早返回非`Ok`的状态
    fn compute(&self, ctx: &mut KernelContext<'_>) -> KernelStatus;
}

/// 执行核函数，先核对算子类型，失败时记录节点名
pub fn run_kernel<K: Kernel + ?Sized>(kernel: &K, ctx: &mut KernelContext<'_>) -> KernelStatus {
    if kernel.op_type() != ctx.op_type() {
        log::error!(
            "核函数{}无法执行节点{}（算子类型{}）",
            kernel.op_type(),
            ctx.node_name(),
            ctx.op_type()
        );
        return KernelStatus::ParamInvalid;
    }
    let status = kernel.compute(ctx);
    if !status.is_ok() {
        log::error!(
            "节点{}执行失败：{}（会话{}，追踪 id {}）",
            ctx.node_name(),
            status,
            ctx.session().session_id(),
            ctx.session().trace_id()
        );
    }
    status
}

#[cfg(test)]
mod tests;
