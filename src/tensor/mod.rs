mod array;
mod data_type;
mod desc;
mod error;
mod shape;

pub use data_type::{DataType, Format};
pub use desc::TensorDesc;
pub use error::TensorError;
pub use shape::{Shape, UNKNOWN_DIM, UNKNOWN_RANK, UNKNOWN_SIZE};

use crate::buffer::Buffer;

#[cfg(test)]
mod tests;

/// 张量：描述符 + 字节数据
///
/// `clone()`与源张量共享数据（写时复制），任何一方通过`data_mut()`写入都不会影响另一方。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tensor {
    desc: TensorDesc,
    data: Buffer,
}

impl Tensor {
    pub const fn new(desc: TensorDesc, data: Buffer) -> Self {
        Self { desc, data }
    }

    /// 只有描述符、没有数据的张量
    pub fn from_desc(desc: TensorDesc) -> Self {
        Self {
            desc,
            data: Buffer::new(),
        }
    }

    /// 深拷贝`bytes`作为数据
    pub fn with_bytes(desc: TensorDesc, bytes: &[u8]) -> Self {
        Self {
            desc,
            data: Buffer::copy_from(Some(bytes)),
        }
    }

    /// 按描述符分配全零数据；形状未知或数据类型没有固定宽度时报错
    pub fn zeros(desc: TensorDesc) -> Result<Self, TensorError> {
        let size = desc.compute_size_in_bytes()?;
        if size < 0 {
            return Err(TensorError::UnknownShape);
        }
        let data = Buffer::with_size(size as usize)?;
        Ok(Self { desc, data })
    }

    pub const fn desc(&self) -> &TensorDesc {
        &self.desc
    }

    pub fn desc_mut(&mut self) -> &mut TensorDesc {
        &mut self.desc
    }

    pub fn set_desc(&mut self, desc: TensorDesc) {
        self.desc = desc;
    }

    pub const fn buffer(&self) -> &Buffer {
        &self.data
    }

    pub fn data(&self) -> &[u8] {
        self.data.data()
    }

    /// 可写数据（写时复制）
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.data_mut()
    }

    pub fn set_data(&mut self, data: Buffer) {
        self.data = data;
    }

    /// 数据字节数
    pub fn size(&self) -> usize {
        self.data.size()
    }

    /// 数据长度是否与描述符计算出的字节数一致（形状未知时视为一致）
    pub fn check_size(&self) -> Result<(), TensorError> {
        let expected = self.desc.compute_size_in_bytes()?;
        if expected >= 0 && expected as usize != self.size() {
            return Err(TensorError::SizeMismatch {
                expected: expected as usize,
                actual: self.size(),
            });
        }
        Ok(())
    }
}
