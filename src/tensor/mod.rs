//! 张量模块
//!
//! 与`only_torch`中纯f32的`Tensor`不同，本库的张量需要在预处理链中改变元素类型
//! （如u8图像→f32归一化输入），所以这里的[`Tensor`]是按[`DType`]区分变体的枚举，
//! 底层仍是`ndarray`的动态维数组。

use ndarray::{ArrayD, IxDyn};

use crate::errors::TensorError;

mod cast;
mod print;
mod shape;


/// 张量元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    U8,
    I32,
    F32,
    F64,
}

/// 按元素类型区分变体的动态维张量
///
/// 图像样本约定为形状`[高, 宽, 通道]`的`U8`变体；经过预处理链后通常变为`F32`。
#[derive(Debug, Clone, PartialEq)]
pub enum Tensor {
    U8(ArrayD<u8>),
    I32(ArrayD<i32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

impl Tensor {
    /// 创建一个f32张量。若为标量，`shape`可以是[]、[1]、[1,1]...
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则panic。
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        check_shape(data.len(), shape);
        Tensor::F32(ArrayD::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap())
    }

    /// 创建一个u8张量（图像样本的原始类型），形状约定同[`Tensor::new`]
    pub fn new_u8(data: &[u8], shape: &[usize]) -> Tensor {
        check_shape(data.len(), shape);
        Tensor::U8(ArrayD::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap())
    }

    /// 创建一个i32张量，形状约定同[`Tensor::new`]
    pub fn new_i32(data: &[i32], shape: &[usize]) -> Tensor {
        check_shape(data.len(), shape);
        Tensor::I32(ArrayD::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap())
    }

    /// 创建一个f64张量，形状约定同[`Tensor::new`]
    pub fn new_f64(data: &[f64], shape: &[usize]) -> Tensor {
        check_shape(data.len(), shape);
        Tensor::F64(ArrayD::from_shape_vec(IxDyn(shape), data.to_vec()).unwrap())
    }

    /// 当前元素类型
    pub fn dtype(&self) -> DType {
        match self {
            Tensor::U8(_) => DType::U8,
            Tensor::I32(_) => DType::I32,
            Tensor::F32(_) => DType::F32,
            Tensor::F64(_) => DType::F64,
        }
    }

    /// 张量的形状
    pub fn shape(&self) -> &[usize] {
        match self {
            Tensor::U8(a) => a.shape(),
            Tensor::I32(a) => a.shape(),
            Tensor::F32(a) => a.shape(),
            Tensor::F64(a) => a.shape(),
        }
    }

    /// 张量的维（dim）数、阶（rank）数，即`shape()`的元素个数
    pub fn dimension(&self) -> usize {
        self.shape().len()
    }

    /// 张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// 判断两个张量的形状是否严格一致。如：[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 若为U8变体则返回底层数组的引用
    pub fn as_u8(&self) -> Option<&ArrayD<u8>> {
        match self {
            Tensor::U8(a) => Some(a),
            _ => None,
        }
    }

    /// 若为I32变体则返回底层数组的引用
    pub fn as_i32(&self) -> Option<&ArrayD<i32>> {
        match self {
            Tensor::I32(a) => Some(a),
            _ => None,
        }
    }

    /// 若为F32变体则返回底层数组的引用
    pub fn as_f32(&self) -> Option<&ArrayD<f32>> {
        match self {
            Tensor::F32(a) => Some(a),
            _ => None,
        }
    }

    /// 若为F64变体则返回底层数组的引用
    pub fn as_f64(&self) -> Option<&ArrayD<f64>> {
        match self {
            Tensor::F64(a) => Some(a),
            _ => None,
        }
    }
}

fn check_shape(data_len: usize, shape: &[usize]) {
    assert!(
        data_len == shape.iter().product::<usize>(),
        "{}",
        TensorError::IncompatibleShape {
            data_len,
            shape: shape.to_vec(),
        }
    );
}
