/*
 * @Author       : 老董
 * @Date         : 2026-03-04
 * @Description  : 与 ndarray 之间的转换，供核函数等外部协作方以数组视角读写 Float 张量
 */

use ndarray::{ArrayD, IxDyn};

use super::{DataType, Format, Shape, Tensor, TensorDesc, TensorError};
use crate::buffer::Buffer;

const F32_WIDTH: usize = std::mem::size_of::<f32>();

impl Tensor {
    /// 由 f32 数组构造 Float 张量（小端字节序）
    pub fn from_f32_array(array: &ArrayD<f32>) -> Self {
        let dims = array.shape().iter().map(|&d| d as i64).collect();
        let mut desc = TensorDesc::new(Shape::new(dims), Format::Nd, DataType::Float);
        let bytes: Vec<u8> = array.iter().flat_map(|v| v.to_le_bytes()).collect();
        desc.set_size(bytes.len() as i64);
        Self::new(desc, Buffer::from(bytes))
    }

    /// 转为 f32 数组；数据类型不是 Float、形状未知或数据长度不符时报错
    pub fn to_f32_array(&self) -> Result<ArrayD<f32>, TensorError> {
        if self.desc().data_type() != DataType::Float {
            return Err(TensorError::DataTypeMismatch {
                expected: DataType::Float,
                actual: self.desc().data_type(),
            });
        }
        let shape = self.desc().shape();
        if shape.is_unknown_shape() {
            return Err(TensorError::UnknownShape);
        }
        let expected = usize::try_from(self.desc().compute_size_in_bytes()?).map_err(|_| {
            TensorError::ShapeSizeOverflow {
                dims: shape.dims().to_vec(),
            }
        })?;
        if self.size() != expected {
            return Err(TensorError::SizeMismatch {
                expected,
                actual: self.size(),
            });
        }
        let values: Vec<f32> = self
            .data()
            .chunks_exact(F32_WIDTH)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let dims: Vec<usize> = shape.dims().iter().map(|&d| d as usize).collect();
        ArrayD::from_shape_vec(IxDyn(&dims), values).map_err(|_| TensorError::SizeMismatch {
            expected,
            actual: self.size(),
        })
    }
}
