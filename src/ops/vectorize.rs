use super::{OpError, Transform};
use crate::tensor::Tensor;

/// 展平算子：任意形状→1维，元素按行主序排列
#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorize;

impl Vectorize {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Vectorize {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        Ok(input.ravel())
    }
}
