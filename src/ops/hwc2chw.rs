use super::{OpError, Transform};
use crate::tensor::Tensor;

/// 轴重排算子：（行、列、通道）→（通道、行、列）
///
/// 只重排轴、不复制语义上的数据。注意这是一个固定置换而非自反变换：
/// 对已是(C, H, W)的张量再应用一次会得到(W, C, H)，而不是还原。
#[derive(Debug, Clone, Copy, Default)]
pub struct Hwc2Chw;

impl Hwc2Chw {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Hwc2Chw {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        if input.dimension() != 3 {
            return Err(OpError::NotHwcImage(input.dimension()));
        }
        Ok(input.permuted(&[2, 0, 1])?)
    }
}
