/*
 * @Author       : 老董
 * @Date         : 2026-03-13
 * @Description  : 资源上下文注册表
 *
 * 有状态算子（如队列、栈）通过一个不透明的资源 key 共享形状/类型信息，
 * 读写该资源的节点登记在同一 key 下，以便资源信息变化时找到需要重新推导的节点。
 */

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::tensor::{DataType, Shape};

/// 资源上下文：资源中元素的形状与数据类型
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceContext {
    shapes: Vec<Shape>,
    data_types: Vec<DataType>,
}

impl ResourceContext {
    pub fn new(shapes: Vec<Shape>, data_types: Vec<DataType>) -> Self {
        Self { shapes, data_types }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn data_types(&self) -> &[DataType] {
        &self.data_types
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    contexts: HashMap<String, Arc<ResourceContext>>,
    dependents: HashMap<String, BTreeSet<String>>,
}

/// 资源上下文注册表，可在多个线程间共享
#[derive(Debug, Default)]
pub struct ResourceContextRegistry {
    inner: Mutex<RegistryInner>,
}

impl ResourceContextRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // 锁被污染时沿用其中的数据
    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 设置资源上下文，返回被替换的旧值
    pub fn set_context(&self, key: &str, context: ResourceContext) -> Option<Arc<ResourceContext>> {
        self.lock()
            .contexts
            .insert(key.to_string(), Arc::new(context))
    }

    pub fn get_context(&self, key: &str) -> Option<Arc<ResourceContext>> {
        self.lock().contexts.get(key).cloned()
    }

    /// 登记依赖该资源的节点；返回是否为新登记
    pub fn add_dependent_node(&self, key: &str, node_name: &str) -> bool {
        let inserted = self
            .lock()
            .dependents
            .entry(key.to_string())
            .or_default()
            .insert(node_name.to_string());
        if inserted {
            log::debug!("节点{node_name}依赖资源{key}");
        }
        inserted
    }

    /// 依赖该资源的节点名（按名称排序）
    pub fn dependent_nodes(&self, key: &str) -> Vec<String> {
        self.lock()
            .dependents
            .get(key)
            .map(|nodes| nodes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// 移除一个资源的上下文及其依赖登记
    pub fn remove(&self, key: &str) -> Option<Arc<ResourceContext>> {
        let mut inner = self.lock();
        inner.dependents.remove(key);
        inner.contexts.remove(key)
    }

    pub fn len(&self) -> usize {
        self.lock().contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().contexts.is_empty()
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.contexts.clear();
        inner.dependents.clear();
    }
}
