use std::sync::Arc;
use std::thread;

use crate::context::{ResourceContext, ResourceContextRegistry};
use crate::tensor::{DataType, Shape};

#[test]
fn test_set_and_get_context() {
    let registry = ResourceContextRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.get_context("queue").is_none());

    let context = ResourceContext::new(vec![Shape::from([2, 3])], vec![DataType::Float]);
    assert!(registry.set_context("queue", context.clone()).is_none());
    assert_eq!(registry.get_context("queue").as_deref(), Some(&context));

    let replaced = ResourceContext::new(vec![Shape::unknown_rank()], vec![DataType::Int32]);
    let old = registry.set_context("queue", replaced).unwrap();
    assert_eq!(old.shapes(), &[Shape::from([2, 3])]);
    assert_eq!(
        registry.get_context("queue").unwrap().data_types(),
        &[DataType::Int32]
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_dependent_nodes() {
    let registry = ResourceContextRegistry::new();
    assert!(registry.add_dependent_node("stack", "push"));
    assert!(registry.add_dependent_node("stack", "pop"));
    assert!(!registry.add_dependent_node("stack", "push"));
    assert_eq!(
        registry.dependent_nodes("stack"),
        vec!["pop".to_string(), "push".to_string()]
    );
    assert!(registry.dependent_nodes("other").is_empty());

    registry.set_context("stack", ResourceContext::default());
    assert!(registry.remove("stack").is_some());
    assert!(registry.dependent_nodes("stack").is_empty());
}

#[test]
fn test_clear() {
    let registry = ResourceContextRegistry::new();
    registry.set_context("a", ResourceContext::default());
    registry.add_dependent_node("a", "n");
    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.dependent_nodes("a").is_empty());
}

#[test]
fn test_concurrent_access() {
    let registry = Arc::new(ResourceContextRegistry::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..100 {
                    let key = format!("res{}", i % 10);
                    registry.set_context(&key, ResourceContext::default());
                    registry.add_dependent_node(&key, &format!("node_{t}_{i}"));
                    assert!(registry.get_context(&key).is_some());
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 10);
    let total: usize = (0..10)
        .map(|i| registry.dependent_nodes(&format!("res{i}")).len())
        .sum();
    assert_eq!(total, 800);
}
