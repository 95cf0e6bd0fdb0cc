/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 写时复制（copy-on-write）的字节缓冲区，承载张量数据和字节型属性
 */

use std::fmt;
use std::sync::Arc;

use crate::tensor::TensorError;

/// 越界读取时返回的哨兵值
pub const OUT_OF_RANGE_BYTE: u8 = 0xFF;

/// 字节缓冲区
///
/// `clone()`只增加引用计数，多个持有者共享同一块存储；
/// 通过`data_mut()`写入时，若存储被共享则先复制出私有副本，
/// 因此一个持有者的原地修改永远不会被其它持有者观察到。
///
/// 内部为`None`时表示空（null）缓冲区，其大小为0。
#[derive(Clone, Default)]
pub struct Buffer {
    data: Option<Arc<Vec<u8>>>,
}

impl Buffer {
    /// 创建空（null）缓冲区
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// 分配`size`字节、全部置零的缓冲区
    pub fn with_size(size: usize) -> Result<Self, TensorError> {
        Self::with_value(size, 0)
    }

    /// 分配`size`字节、全部填充为`value`的缓冲区
    pub fn with_value(size: usize, value: u8) -> Result<Self, TensorError> {
        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|_| {
            log::error!("缓冲区分配失败：{size}字节");
            TensorError::AllocationFailed(size)
        })?;
        data.resize(size, value);
        Ok(Self {
            data: Some(Arc::new(data)),
        })
    }

    /// 深拷贝`bytes`；传入`None`得到空缓冲区（大小为0）
    pub fn copy_from(bytes: Option<&[u8]>) -> Self {
        match bytes {
            Some(bytes) => Self {
                data: Some(Arc::new(bytes.to_vec())),
            },
            None => Self::new(),
        }
    }

    /// 与`self`共享存储的新句柄（等同于`clone()`）
    pub fn share(&self) -> Self {
        self.clone()
    }

    pub fn size(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// 是否为null缓冲区（区别于“存在但长度为0”）
    pub const fn is_null(&self) -> bool {
        self.data.is_none()
    }

    /// 存储是否被多个持有者共享
    pub fn is_shared(&self) -> bool {
        self.data.as_ref().is_some_and(|d| Arc::strong_count(d) > 1)
    }

    /// 只读访问
    pub fn data(&self) -> &[u8] {
        match &self.data {
            Some(data) => data.as_slice(),
            None => &[],
        }
    }

    /// 可写访问：若存储被共享，先复制出私有副本
    pub fn data_mut(&mut self) -> &mut [u8] {
        match self.data.as_mut() {
            Some(data) => Arc::make_mut(data).as_mut_slice(),
            None => &mut [],
        }
    }

    /// 带边界检查的读取，越界返回`OUT_OF_RANGE_BYTE`
    pub fn at(&self, index: usize) -> u8 {
        match self.data().get(index) {
            Some(&byte) => byte,
            None => {
                log::warn!("缓冲区越界访问：索引{index}，大小{}", self.size());
                OUT_OF_RANGE_BYTE
            }
        }
    }

    /// 带边界检查的写入，越界时不做任何修改并返回`false`
    pub fn set_at(&mut self, index: usize, value: u8) -> bool {
        if index >= self.size() {
            log::warn!("缓冲区越界写入：索引{index}，大小{}", self.size());
            return false;
        }
        self.data_mut()[index] = value;
        true
    }

    /// 释放本句柄持有的存储，变为null缓冲区
    pub fn clear(&mut self) {
        self.data = None;
    }

    /// 取出字节；若存储未被共享则不发生复制
    pub fn into_vec(self) -> Vec<u8> {
        match self.data {
            Some(data) => Arc::try_unwrap(data).unwrap_or_else(|shared| shared.as_ref().clone()),
            None => Vec::new(),
        }
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: Some(Arc::new(data)),
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::copy_from(Some(bytes))
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

/// 按内容比较：null缓冲区与长度为0的缓冲区相等
impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.data() == other.data()
    }
}

impl Eq for Buffer {}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 16;
        let data = self.data();
        let mut s = f.debug_struct("Buffer");
        s.field("size", &data.len());
        if data.len() > PREVIEW {
            s.field("head", &&data[..PREVIEW]);
        } else {
            s.field("data", &data);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests;
