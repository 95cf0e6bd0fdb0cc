/// 会话上下文
///
/// 一次会话从头到尾由同一个调用链持有，按引用传给需要这些 id 的地方（如核函数上下文）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionContext {
    session_id: u64,
    device_id: u32,
    trace_id: u64,
}

impl SessionContext {
    pub const fn new(session_id: u64, device_id: u32) -> Self {
        Self {
            session_id,
            device_id,
            trace_id: 0,
        }
    }

    pub const fn with_trace_id(mut self, trace_id: u64) -> Self {
        self.trace_id = trace_id;
        self
    }

    pub const fn session_id(&self) -> u64 {
        self.session_id
    }

    pub const fn device_id(&self) -> u32 {
        self.device_id
    }

    pub const fn trace_id(&self) -> u64 {
        self.trace_id
    }

    pub fn set_trace_id(&mut self, trace_id: u64) {
        self.trace_id = trace_id;
    }

    /// 推进到下一个追踪 id 并返回它
    pub fn next_trace_id(&mut self) -> u64 {
        self.trace_id = self.trace_id.wrapping_add(1);
        self.trace_id
    }
}
