//! 空间填充：随机裁剪前的扩边
//!
//! 只填充（高、宽）两个空间轴，通道轴保持不变。

use ndarray::{ArrayD, IxDyn};
use num_traits::AsPrimitive;

use super::OpError;
use crate::tensor::Tensor;

/// 填充策略：扩边时如何合成新的边界值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadMode {
    /// 常数填充
    Constant(f32),
    /// 复制最近的边缘像素
    Edge,
    /// 镜像反射，不重复边缘像素（同numpy的`reflect`）
    Reflect,
}

/// 对（高、宽）两个空间轴各填充`pad`个像素
///
/// # 错误
/// 输入不是3维（高、宽、通道）张量时报错。
pub(crate) fn pad_hw(input: &Tensor, pad: usize, mode: PadMode) -> Result<Tensor, OpError> {
    if input.dimension() != 3 {
        return Err(OpError::NotHwcImage(input.dimension()));
    }
    Ok(match input {
        Tensor::U8(a) => Tensor::U8(pad_array(a, pad, mode)),
        Tensor::I32(a) => Tensor::I32(pad_array(a, pad, mode)),
        Tensor::F32(a) => Tensor::F32(pad_array(a, pad, mode)),
        Tensor::F64(a) => Tensor::F64(pad_array(a, pad, mode)),
    })
}

fn pad_array<A>(a: &ArrayD<A>, pad: usize, mode: PadMode) -> ArrayD<A>
where
    A: Copy + 'static,
    f32: AsPrimitive<A>,
{
    let (height, width, channels) = (a.shape()[0], a.shape()[1], a.shape()[2]);
    let p = pad as isize;
    ArrayD::from_shape_fn(
        IxDyn(&[height + 2 * pad, width + 2 * pad, channels]),
        |idx| {
            let y = idx[0] as isize - p;
            let x = idx[1] as isize - p;
            let c = idx[2];
            match mode {
                PadMode::Constant(value) => {
                    if y >= 0 && (y as usize) < height && x >= 0 && (x as usize) < width {
                        a[[y as usize, x as usize, c]]
                    } else {
                        value.as_()
                    }
                }
                PadMode::Edge => a[[clamp_index(y, height), clamp_index(x, width), c]],
                PadMode::Reflect => a[[reflect_index(y, height), reflect_index(x, width), c]],
            }
        },
    )
}

/// 夹取到[0, len)内最近的合法下标
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// numpy式reflect下标：跨边界反射且不重复边缘像素
fn reflect_index(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut i = i.rem_euclid(period);
    if i >= len as isize {
        i = period - i;
    }
    i as usize
}
