use super::{Op, OpError, Transform};
use crate::tensor::Tensor;

/// 链式组合算子：按顺序应用一组算子，第i个的输出是第i+1个的输入
///
/// 空链即恒等变换。链本身也是算子，可以嵌套进另一条链。
#[derive(Debug, Clone, Default)]
pub struct Chain {
    ops: Vec<Op>,
}

impl Chain {
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// 便捷方法：在链尾追加一个算子
    pub fn push(mut self, op: impl Into<Op>) -> Self {
        self.ops.push(op.into());
        self
    }
}

impl Transform for Chain {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        let mut sample = input;
        for op in &mut self.ops {
            sample = op.apply(sample)?;
        }
        Ok(sample)
    }
}
