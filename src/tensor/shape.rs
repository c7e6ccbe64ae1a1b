use std::collections::HashSet;

use ndarray::{ArrayD, Axis, IxDyn};

use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 将任意形状的张量展平为1维张量，元素按行主序（逻辑顺序）排列
    pub fn ravel(&self) -> Tensor {
        match self {
            Tensor::U8(a) => Tensor::U8(ravel_array(a)),
            Tensor::I32(a) => Tensor::I32(ravel_array(a)),
            Tensor::F32(a) => Tensor::F32(ravel_array(a)),
            Tensor::F64(a) => Tensor::F64(ravel_array(a)),
        }
    }

    /// 按给定顺序置换轴，返回新张量：结果的第i个轴是原张量的第`axes[i]`个轴
    /// （同numpy的`transpose`语义，只重排轴不复制语义上的数据布局）
    ///
    /// `axes`必须恰好包含[0, 维数)内的每个值各一次，否则报错。
    pub fn permuted(&self, axes: &[usize]) -> Result<Tensor, TensorError> {
        let dimension = self.dimension();
        let unique: HashSet<_> = axes.iter().collect();
        if axes.len() != dimension || unique.len() != dimension || axes.iter().any(|&a| a >= dimension)
        {
            return Err(TensorError::PermuteNeedUniqueAndInRange {
                axes: axes.to_vec(),
                dimension,
            });
        }
        Ok(match self {
            Tensor::U8(a) => Tensor::U8(a.clone().permuted_axes(IxDyn(axes))),
            Tensor::I32(a) => Tensor::I32(a.clone().permuted_axes(IxDyn(axes))),
            Tensor::F32(a) => Tensor::F32(a.clone().permuted_axes(IxDyn(axes))),
            Tensor::F64(a) => Tensor::F64(a.clone().permuted_axes(IxDyn(axes))),
        })
    }

    /// 沿给定的各个轴镜像张量，返回新张量
    ///
    /// 每个轴都必须在[0, 维数)内，否则报错。
    pub fn flipped(&self, axes: &[usize]) -> Result<Tensor, TensorError> {
        let dimension = self.dimension();
        if axes.iter().any(|&a| a >= dimension) {
            return Err(TensorError::FlipAxisOutOfRange {
                axes: axes.to_vec(),
                dimension,
            });
        }
        Ok(match self {
            Tensor::U8(a) => Tensor::U8(flip_array(a, axes)),
            Tensor::I32(a) => Tensor::I32(flip_array(a, axes)),
            Tensor::F32(a) => Tensor::F32(flip_array(a, axes)),
            Tensor::F64(a) => Tensor::F64(flip_array(a, axes)),
        })
    }
}

fn ravel_array<A: Clone>(a: &ArrayD<A>) -> ArrayD<A> {
    let data: Vec<A> = a.iter().cloned().collect();
    let len = data.len();
    ArrayD::from_shape_vec(IxDyn(&[len]), data).unwrap()
}

fn flip_array<A: Clone>(a: &ArrayD<A>, axes: &[usize]) -> ArrayD<A> {
    let mut flipped = a.clone();
    for &axis in axes {
        flipped.invert_axis(Axis(axis));
    }
    flipped
}
