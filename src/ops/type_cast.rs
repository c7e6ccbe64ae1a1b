use super::{OpError, Transform};
use crate::tensor::{DType, Tensor};

/// 类型转换算子：把元素类型转换为目标数值类型，数值不变
/// （受目标类型表示范围限制，详见[`Tensor::astype`]）
#[derive(Debug, Clone, Copy)]
pub struct TypeCast {
    dtype: DType,
}

impl TypeCast {
    pub fn new(dtype: DType) -> Self {
        Self { dtype }
    }
}

impl Transform for TypeCast {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        Ok(input.astype(self.dtype))
    }
}
