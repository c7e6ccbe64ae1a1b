use ndarray::ArrayD;
use num_traits::AsPrimitive;

use super::{DType, Tensor};

impl Tensor {
    /// 转换元素类型，数值保持不变（受目标类型表示范围限制）
    ///
    /// 语义同Rust的`as`转换：浮点转整型时向零取整并饱和到目标范围，
    /// 整型转浮点无损。因此"先转整型再转回浮点"对无小数部分的值可精确往返。
    pub fn astype(&self, dtype: DType) -> Tensor {
        match self {
            Tensor::U8(a) => cast_array(a, dtype),
            Tensor::I32(a) => cast_array(a, dtype),
            Tensor::F32(a) => cast_array(a, dtype),
            Tensor::F64(a) => cast_array(a, dtype),
        }
    }
}

fn cast_array<A>(a: &ArrayD<A>, dtype: DType) -> Tensor
where
    A: Copy + AsPrimitive<u8> + AsPrimitive<i32> + AsPrimitive<f32> + AsPrimitive<f64>,
{
    match dtype {
        DType::U8 => Tensor::U8(a.mapv(|x| x.as_())),
        DType::I32 => Tensor::I32(a.mapv(|x| x.as_())),
        DType::F32 => Tensor::F32(a.mapv(|x| x.as_())),
        DType::F64 => Tensor::F64(a.mapv(|x| x.as_())),
    }
}
