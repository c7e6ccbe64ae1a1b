//! 张量层面的错误类型定义

use thiserror::Error;

/// 张量形状、轴相关的非法操作
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    /// 数据长度与形状不匹配
    #[error("张量形状不兼容：数据长度为{data_len}，与形状{shape:?}不匹配")]
    IncompatibleShape { data_len: usize, shape: Vec<usize> },

    /// 置换的轴必须唯一且在范围内
    #[error("需要交换的维度必须是唯一且在[0, {dimension})范围内，实际为{axes:?}")]
    PermuteNeedUniqueAndInRange { axes: Vec<usize>, dimension: usize },

    /// 翻转的轴必须在范围内
    #[error("需要翻转的维度必须在[0, {dimension})范围内，实际为{axes:?}")]
    FlipAxisOutOfRange { axes: Vec<usize>, dimension: usize },
}
