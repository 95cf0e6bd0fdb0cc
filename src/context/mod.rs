/*
 * @Author       : 老董
 * @Date         : 2026-03-13
 * @Description  : 运行期上下文
 *
 * - `SessionContext`: 会话级 id（会话、设备、追踪），显式地按引用传递
 * - `ResourceContextRegistry`: 资源 key -> 资源上下文 / 依赖该资源的节点，一把锁保护整张表
 */

mod resource;
mod session;

pub use resource::{ResourceContext, ResourceContextRegistry};
pub use session::SessionContext;

#[cfg(test)]
mod tests;
