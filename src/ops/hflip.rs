//! 随机翻转算子

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{OpError, Transform};
use crate::tensor::Tensor;

/// 以0.5的概率"同时"沿行轴（0）与通道轴（2）镜像输入，否则原样返回
///
/// 注意：该行为沿用了原版实现的怪癖——它不是纯粹的水平翻转，
/// 而是把行序颠倒的同时也把通道顺序反转（BGR↔RGB）。
/// 需要纯空间翻转时请改用[`HFlipSpatial`]。
#[derive(Debug, Clone)]
pub struct HFlip {
    rng: StdRng,
}

impl HFlip {
    /// 使用系统熵源初始化内部RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子初始化内部RNG（测试复现用）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HFlip {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for HFlip {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        if input.dimension() != 3 {
            return Err(OpError::NotHwcImage(input.dimension()));
        }
        if self.rng.gen_bool(0.5) {
            Ok(input.flipped(&[0, 2])?)
        } else {
            Ok(input)
        }
    }
}

/// 以0.5的概率沿列轴（1）镜像输入的纯空间水平翻转，否则原样返回
///
/// [`HFlip`]怪癖行为的修正版，不触碰通道顺序。
#[derive(Debug, Clone)]
pub struct HFlipSpatial {
    rng: StdRng,
}

impl HFlipSpatial {
    /// 使用系统熵源初始化内部RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子初始化内部RNG（测试复现用）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HFlipSpatial {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for HFlipSpatial {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError> {
        if input.dimension() != 3 {
            return Err(OpError::NotHwcImage(input.dimension()));
        }
        if self.rng.gen_bool(0.5) {
            Ok(input.flipped(&[1])?)
        } else {
            Ok(input)
        }
    }
}
