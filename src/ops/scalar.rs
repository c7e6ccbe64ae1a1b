//! 逐元素标量运算算子
//!
//! 与numpy对"整型数组 op 浮点标量"的类型提升一致：
//! u8/i32张量先提升为f32再参与运算，f64张量保持f64，f32保持f32。

use super::{OpError, Transform};
use crate::tensor::Tensor;

/// 逐元素加一个常数标量
#[derive(Debug, Clone, Copy)]
pub struct AddScalar {
    value: f32,
}

impl AddScalar {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Transform for AddScalar {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        Ok(match input {
            Tensor::U8(a) => Tensor::F32(a.mapv(f32::from) + self.value),
            Tensor::I32(a) => Tensor::F32(a.mapv(|x| x as f32) + self.value),
            Tensor::F32(a) => Tensor::F32(a + self.value),
            Tensor::F64(a) => Tensor::F64(a + f64::from(self.value)),
        })
    }
}

/// 逐元素乘一个常数标量
#[derive(Debug, Clone, Copy)]
pub struct MulScalar {
    value: f32,
}

impl MulScalar {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Transform for MulScalar {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        Ok(match input {
            Tensor::U8(a) => Tensor::F32(a.mapv(f32::from) * self.value),
            Tensor::I32(a) => Tensor::F32(a.mapv(|x| x as f32) * self.value),
            Tensor::F32(a) => Tensor::F32(a * self.value),
            Tensor::F64(a) => Tensor::F64(a * f64::from(self.value)),
        })
    }
}
