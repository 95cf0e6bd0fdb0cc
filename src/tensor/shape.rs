/*
 * @Author       : 老董
 * @Date         : 2026-03-03
 * @Description  : 张量形状：支持“阶数未知”和“某一维未知”两种哨兵值
 */

use serde::{Deserialize, Serialize};

use super::TensorError;

/// 某一维的大小未知
pub const UNKNOWN_DIM: i64 = -1;
/// 整个形状的阶数未知（形状坍缩为`[UNKNOWN_RANK]`）
pub const UNKNOWN_RANK: i64 = -2;
/// `shape_size()`在形状未知时返回的哨兵值
pub const UNKNOWN_SIZE: i64 = -1;

/// 张量形状
///
/// 若为标量，`dims`为`[]`；向量为`[n]`；矩阵为`[n,m]`，以此类推。
/// 任意一维出现`UNKNOWN_RANK`时，整个形状坍缩为`[UNKNOWN_RANK]`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Shape {
    dims: Vec<i64>,
}

impl Shape {
    pub fn new(dims: Vec<i64>) -> Self {
        if dims.contains(&UNKNOWN_RANK) {
            return Self::unknown_rank();
        }
        Self { dims }
    }

    pub fn scalar() -> Self {
        Self { dims: Vec::new() }
    }

    pub fn unknown_rank() -> Self {
        Self {
            dims: vec![UNKNOWN_RANK],
        }
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    /// 阶数；阶数未知时返回`None`
    pub fn rank(&self) -> Option<usize> {
        if self.is_unknown_rank() {
            None
        } else {
            Some(self.dims.len())
        }
    }

    pub fn dim(&self, index: usize) -> Option<i64> {
        self.dims.get(index).copied()
    }

    /// 设置第`index`维；写入`UNKNOWN_RANK`会使整个形状坍缩
    pub fn set_dim(&mut self, index: usize, dim: i64) -> Result<(), TensorError> {
        if self.is_unknown_rank() || index >= self.dims.len() {
            return Err(TensorError::DimIndexOutOfRange {
                index,
                rank: self.rank().unwrap_or(0),
            });
        }
        if dim == UNKNOWN_RANK {
            *self = Self::unknown_rank();
        } else {
            self.dims[index] = dim;
        }
        Ok(())
    }

    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn is_unknown_rank(&self) -> bool {
        self.dims.len() == 1 && self.dims[0] == UNKNOWN_RANK
    }

    /// 是否含有任何未知信息（阶数未知或某一维未知）
    pub fn is_unknown_shape(&self) -> bool {
        self.dims
            .iter()
            .any(|&d| d == UNKNOWN_DIM || d == UNKNOWN_RANK)
    }

    /// 所有维度之积
    ///
    /// - 标量返回1
    /// - 形状未知（任意一维未知或阶数未知）返回`UNKNOWN_SIZE`
    /// - 任意一维为0返回0
    /// - 其它负数维度返回`InvalidDim`
    /// - 乘积超出i64范围返回`ShapeSizeOverflow`，绝不返回回绕后的值
    pub fn shape_size(&self) -> Result<i64, TensorError> {
        if self.is_unknown_shape() {
            return Ok(UNKNOWN_SIZE);
        }
        if let Some((index, &dim)) = self.dims.iter().enumerate().find(|(_, d)| **d < 0) {
            return Err(TensorError::InvalidDim { index, dim });
        }
        if self.dims.contains(&0) {
            return Ok(0);
        }
        let mut size: i64 = 1;
        for &dim in &self.dims {
            size = size
                .checked_mul(dim)
                .ok_or_else(|| TensorError::ShapeSizeOverflow {
                    dims: self.dims.clone(),
                })?;
        }
        Ok(size)
    }
}

impl From<&[i64]> for Shape {
    fn from(dims: &[i64]) -> Self {
        Self::new(dims.to_vec())
    }
}

impl From<Vec<i64>> for Shape {
    fn from(dims: Vec<i64>) -> Self {
        Self::new(dims)
    }
}

impl<const N: usize> From<[i64; N]> for Shape {
    fn from(dims: [i64; N]) -> Self {
        Self::new(dims.to_vec())
    }
}
