/*
 * @Author       : 老董
 * @Date         : 2026-03-08
 * @Description  : 线上格式（wire message）
 *
 * 这些结构只负责承载字节，不带任何业务逻辑；与内存对象之间的转换由
 * `attr::serializer`中的各序列化器完成。整体以 bincode 编码。
 *
 * 层次：ModelDef -> GraphDef -> OpDef -> AttrDef -> AttrValueDef（oneof）
 */

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::cell::Cell;
use std::collections::BTreeMap;

/// 属性值允许的最大嵌套层数。NamedAttrs、子图与列表之间的每一层嵌套都要
/// 经过一个`AttrDef`，因此只在`AttrDef::value`处计数即可覆盖全部递归路径。
pub const MAX_NESTING_DEPTH: usize = 64;

thread_local! {
    static NESTING_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// 进入一层嵌套；离开作用域时恢复计数（包括解码出错提前返回的情况）
struct NestingGuard;

impl NestingGuard {
    fn enter() -> Result<Self, usize> {
        NESTING_DEPTH.with(|depth| {
            let next = depth.get() + 1;
            if next > MAX_NESTING_DEPTH {
                return Err(next);
            }
            depth.set(next);
            Ok(Self)
        })
    }
}

impl Drop for NestingGuard {
    fn drop(&mut self) {
        NESTING_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

fn deserialize_nested<'de, D>(deserializer: D) -> Result<Option<AttrValueDef>, D::Error>
where
    D: Deserializer<'de>,
{
    let _guard = NestingGuard::enter().map_err(|depth| {
        D::Error::custom(format!("属性嵌套层数{depth}超过上限{MAX_NESTING_DEPTH}"))
    })?;
    Option::<AttrValueDef>::deserialize(deserializer)
}

/// 单个属性值：`value`为`None`表示没有任何字段被填充
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttrDef {
    #[serde(deserialize_with = "deserialize_nested")]
    pub value: Option<AttrValueDef>,
}

/// 属性值的 oneof 字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValueDef {
    S(String),
    I(i64),
    F(f32),
    B(bool),
    Bt(Vec<u8>),
    Dt(i32),
    T(TensorDef),
    Td(TensorDescDef),
    Func(NamedAttrsDef),
    G(GraphDef),
    List(ListValue),
}

/// oneof 字段的标签，是反序列化方向的分派键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WireFieldTag {
    S,
    I,
    F,
    B,
    Bt,
    Dt,
    T,
    Td,
    Func,
    G,
    List,
}

impl AttrValueDef {
    pub const fn field_tag(&self) -> WireFieldTag {
        match self {
            Self::S(_) => WireFieldTag::S,
            Self::I(_) => WireFieldTag::I,
            Self::F(_) => WireFieldTag::F,
            Self::B(_) => WireFieldTag::B,
            Self::Bt(_) => WireFieldTag::Bt,
            Self::Dt(_) => WireFieldTag::Dt,
            Self::T(_) => WireFieldTag::T,
            Self::Td(_) => WireFieldTag::Td,
            Self::Func(_) => WireFieldTag::Func,
            Self::G(_) => WireFieldTag::G,
            Self::List(_) => WireFieldTag::List,
        }
    }
}

/// 列表元素类型（列表字段本身无法表明元素类型，因此需要单独的判别字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ListValueType {
    #[default]
    None,
    String,
    Int,
    Float,
    Bool,
    Bytes,
    DataType,
    Tensor,
    TensorDesc,
    NamedAttrs,
    Graph,
    ListListInt,
}

/// 列表值：按`val_type`只读取对应的一个字段
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListValue {
    pub val_type: ListValueType,
    pub s: Vec<String>,
    pub i: Vec<i64>,
    pub f: Vec<f32>,
    pub b: Vec<bool>,
    pub bt: Vec<Vec<u8>>,
    pub dt: Vec<i32>,
    pub t: Vec<TensorDef>,
    pub td: Vec<TensorDescDef>,
    pub na: Vec<NamedAttrsDef>,
    pub g: Vec<GraphDef>,
    pub list_list_i: Vec<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TensorDescDef {
    pub name: String,
    pub dtype: i32,
    pub format: i32,
    pub shape: Vec<i64>,
    pub origin_shape: Option<Vec<i64>>,
    pub origin_format: Option<i32>,
    pub size: i64,
    pub const_data: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TensorDef {
    pub desc: TensorDescDef,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedAttrsDef {
    pub name: String,
    pub attr: BTreeMap<String, AttrDef>,
}

/// 锚点位置：`index`为`CONTROL_ANCHOR_INDEX`（-1）时表示控制锚点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnchorDef {
    pub node_id: u64,
    pub index: i32,
}

/// 一条连接：`src`为输出侧，`dst`为输入侧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeDef {
    pub src: AnchorDef,
    pub dst: AnchorDef,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpDef {
    pub id: u64,
    pub name: String,
    pub op_type: String,
    pub input_desc: Vec<TensorDescDef>,
    pub output_desc: Vec<TensorDescDef>,
    pub attr: BTreeMap<String, AttrDef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDef {
    pub name: String,
    pub op: Vec<OpDef>,
    pub edge: Vec<EdgeDef>,
    pub attr: BTreeMap<String, AttrDef>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelDef {
    pub name: String,
    pub version: u32,
    pub custom_version: String,
    pub graph: Option<GraphDef>,
    pub attr: BTreeMap<String, AttrDef>,
}
