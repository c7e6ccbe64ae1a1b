//! 预处理算子错误类型定义

use thiserror::Error;

use crate::errors::TensorError;

/// 预处理算子相关错误
#[derive(Debug, Error)]
pub enum OpError {
    /// 输入不是（高、宽、通道）的3维图像张量
    #[error("该算子要求输入为3维（高、宽、通道）图像张量，实际维数为{0}")]
    NotHwcImage(usize),

    /// 裁剪尺寸超过填充后的图像尺寸
    #[error("裁剪尺寸{size}超过了填充后的图像尺寸{height}x{width}")]
    CropSizeTooLarge {
        size: usize,
        height: usize,
        width: usize,
    },

    /// 底层张量操作错误
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
