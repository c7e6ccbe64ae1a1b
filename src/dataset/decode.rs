//! 原始记录解码：扁平字节缓冲区 → 图像张量
//!
//! 与文件 IO 完全隔离的纯函数，便于单独测试。

use ndarray::{ArrayD, Axis, IxDyn};

use super::error::DatasetError;
use crate::tensor::Tensor;

/// 图像边长（像素）
pub const IMAGE_SIDE: usize = 32;
/// 图像通道数
pub const IMAGE_CHANNELS: usize = 3;
/// 单条记录的缓冲区长度（3×32×32）
pub const IMAGE_BYTES: usize = IMAGE_CHANNELS * IMAGE_SIDE * IMAGE_SIDE;

/// 将一条 3072 字节的扁平记录解码为 u8 图像张量
///
/// 缓冲区按（通道、行、列）排列；解码时重排为（行、列、通道）并反转通道顺序，
/// 即 `decoded[[y, x, c]] == buf[(2 - c) * 1024 + y * 32 + x]`（RGB→BGR）。
///
/// # 返回
/// 形状为 (32, 32, 3) 的 [`Tensor::U8`]
///
/// # 错误
/// 缓冲区长度不是 3072 时报错。
pub fn decode_image(buf: &[u8]) -> Result<Tensor, DatasetError> {
    if buf.len() != IMAGE_BYTES {
        return Err(DatasetError::CorruptRecord {
            len: buf.len(),
            expected: IMAGE_BYTES,
        });
    }
    let chw = ArrayD::from_shape_vec(
        IxDyn(&[IMAGE_CHANNELS, IMAGE_SIDE, IMAGE_SIDE]),
        buf.to_vec(),
    )
    .unwrap();
    let mut hwc = chw.permuted_axes(IxDyn(&[1, 2, 0]));
    hwc.invert_axis(Axis(2));
    Ok(Tensor::U8(hwc))
}
