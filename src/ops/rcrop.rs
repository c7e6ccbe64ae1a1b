use ndarray::{ArrayD, Slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::pad::{PadMode, pad_hw};
use super::{OpError, Transform};
use crate::tensor::Tensor;

/// 随机裁剪算子
///
/// 先按[`PadMode`]对两个空间轴各填充`pad`个像素（`pad`为0则不填充），
/// 再在填充后的边界内以均匀随机的左上角位置裁出`size`×`size`的方形区域，
/// 通道轴原样保留。
#[derive(Debug, Clone)]
pub struct RCrop {
    size: usize,
    pad: usize,
    mode: PadMode,
    rng: StdRng,
}

impl RCrop {
    /// 使用系统熵源初始化内部RNG
    pub fn new(size: usize, pad: usize, mode: PadMode) -> Self {
        Self {
            size,
            pad,
            mode,
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子初始化内部RNG（测试复现用）
    pub fn with_seed(size: usize, pad: usize, mode: PadMode, seed: u64) -> Self {
        Self {
            size,
            pad,
            mode,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Transform for RCrop {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        if input.dimension() != 3 {
            return Err(OpError::NotHwcImage(input.dimension()));
        }
        let padded = if self.pad > 0 {
            pad_hw(&input, self.pad, self.mode)?
        } else {
            input
        };

        let (height, width) = (padded.shape()[0], padded.shape()[1]);
        if self.size > height || self.size > width {
            return Err(OpError::CropSizeTooLarge {
                size: self.size,
                height,
                width,
            });
        }

        // 左上角在填充后边界内均匀抽取（含两端，裁剪区域恰好贴边也是合法位置）
        let top = self.rng.gen_range(0..=height - self.size);
        let left = self.rng.gen_range(0..=width - self.size);
        Ok(crop(&padded, top, left, self.size))
    }
}

/// 从(top, left)裁出size×size的区域，保留所有通道
fn crop(t: &Tensor, top: usize, left: usize, size: usize) -> Tensor {
    match t {
        Tensor::U8(a) => Tensor::U8(crop_array(a, top, left, size)),
        Tensor::I32(a) => Tensor::I32(crop_array(a, top, left, size)),
        Tensor::F32(a) => Tensor::F32(crop_array(a, top, left, size)),
        Tensor::F64(a) => Tensor::F64(crop_array(a, top, left, size)),
    }
}

fn crop_array<A: Copy>(a: &ArrayD<A>, top: usize, left: usize, size: usize) -> ArrayD<A> {
    a.slice_each_axis(|axis| match axis.axis.index() {
        0 => Slice::new(top as isize, Some((top + size) as isize), 1),
        1 => Slice::new(left as isize, Some((left + size) as isize), 1),
        _ => Slice::new(0, None, 1),
    })
    .to_owned()
}
