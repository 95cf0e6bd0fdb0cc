//! # Graph IR
//!
//! `graph_ir`是计算图的中间表示（IR）库：节点之间通过带类型的锚点（anchor）连接，
//! 节点和图都挂载一个可序列化的属性表（标量、列表、张量、嵌套子图等）。
//! 模型的保存/加载、算子注册和核函数调度都建立在这一层之上。
//!

pub mod attr;
pub mod buffer;
pub mod context;
pub mod errors;
pub mod graph;
pub mod kernel;
pub mod model;
pub mod proto;
pub mod tensor;
pub mod utils;

pub use attr::{AnyValue, AttrError, AttrMap, AttrValueType, NamedAttrs, ValueKind};
pub use buffer::Buffer;
pub use context::{ResourceContextRegistry, SessionContext};
pub use errors::{GraphStatus, StatusCode};
pub use graph::{AnchorKind, AnchorRef, ComputeGraph, GraphError, Node, NodeId};
pub use kernel::{Kernel, KernelContext, KernelStatus};
pub use model::{Model, ModelError, ModelIoOptions};
pub use tensor::{DataType, Format, Shape, Tensor, TensorDesc, TensorError};
