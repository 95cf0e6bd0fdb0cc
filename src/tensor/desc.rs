/*
 * @Author       : 老董
 * @Date         : 2026-03-03
 * @Description  : 张量描述符：形状、格式、数据类型，以及可选的原始形状/格式和常量数据
 */

use super::{DataType, Format, Shape, TensorError, UNKNOWN_SIZE};
use crate::buffer::Buffer;

/// 张量描述符
///
/// `origin_shape`/`origin_format`只在张量经历过排布变换（如 NCHW→NC1HWC0）后才会设置，
/// 用于保存变换前的逻辑元信息，未设置时为`None`，与“设置为默认值”相区分。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TensorDesc {
    name: String,
    shape: Shape,
    format: Format,
    data_type: DataType,
    origin_shape: Option<Shape>,
    origin_format: Option<Format>,
    /// 数据的字节数（0 表示尚未计算）
    size: i64,
    const_data: Option<Buffer>,
}

impl TensorDesc {
    pub fn new(shape: Shape, format: Format, data_type: DataType) -> Self {
        Self {
            shape,
            format,
            data_type,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub const fn format(&self) -> Format {
        self.format
    }

    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn set_data_type(&mut self, data_type: DataType) {
        self.data_type = data_type;
    }

    pub const fn origin_shape(&self) -> Option<&Shape> {
        self.origin_shape.as_ref()
    }

    pub fn set_origin_shape(&mut self, shape: Shape) {
        self.origin_shape = Some(shape);
    }

    pub const fn origin_format(&self) -> Option<Format> {
        self.origin_format
    }

    pub fn set_origin_format(&mut self, format: Format) {
        self.origin_format = Some(format);
    }

    /// 记录一次排布变换：当前形状/格式存入 origin 字段（仅首次），再替换为新的形状/格式
    pub fn transform_layout(&mut self, shape: Shape, format: Format) {
        if self.origin_shape.is_none() {
            self.origin_shape = Some(self.shape.clone());
        }
        if self.origin_format.is_none() {
            self.origin_format = Some(self.format);
        }
        self.shape = shape;
        self.format = format;
    }

    pub const fn size(&self) -> i64 {
        self.size
    }

    pub fn set_size(&mut self, size: i64) {
        self.size = size;
    }

    pub const fn const_data(&self) -> Option<&Buffer> {
        self.const_data.as_ref()
    }

    pub fn set_const_data(&mut self, data: Buffer) {
        self.const_data = Some(data);
    }

    pub fn clear_const_data(&mut self) {
        self.const_data = None;
    }

    /// 按形状和数据类型计算字节数
    ///
    /// 形状未知时返回`UNKNOWN_SIZE`；数据类型没有固定宽度或乘法溢出时报错。
    pub fn compute_size_in_bytes(&self) -> Result<i64, TensorError> {
        let count = self.shape.shape_size()?;
        if count == UNKNOWN_SIZE {
            return Ok(UNKNOWN_SIZE);
        }
        let width = self
            .data_type
            .size_in_bytes()
            .ok_or(TensorError::UnsizedDataType(self.data_type))?;
        count
            .checked_mul(width as i64)
            .ok_or_else(|| TensorError::ShapeSizeOverflow {
                dims: self.shape.dims().to_vec(),
            })
    }

    /// 计算并写入`size`字段
    pub fn update_size(&mut self) -> Result<i64, TensorError> {
        let size = self.compute_size_in_bytes()?;
        self.size = size;
        Ok(size)
    }
}
