/*
 * @Author       : 老董
 * @Date         : 2026-03-05
 * @Description  : 预处理算子模块：一组纯的张量→张量变换，可单独使用，
 *                 也可通过Chain按顺序组合后逐样本应用。
 */

//! # 主要组件
//!
//! - [`Chain`]: 链式组合算子（空链即恒等变换）
//! - [`TypeCast`] / [`Vectorize`] / [`AddScalar`] / [`MulScalar`] / [`Hwc2Chw`]: 确定性算子
//! - [`HFlip`] / [`HFlipSpatial`] / [`RCrop`]: 随机算子，各自持有可注入的随机数生成器
//! - [`PadMode`]: 随机裁剪的边界填充策略
//!
//! 除随机算子内部的抽签外，所有算子无共享可变状态、无副作用；
//! 随机算子的抽签也不跨调用持久化。

use enum_dispatch::enum_dispatch;

use crate::tensor::Tensor;

mod chain;
mod error;
mod hflip;
mod hwc2chw;
mod pad;
mod rcrop;
mod scalar;
mod type_cast;
mod vectorize;

#[cfg(test)]
mod tests;

pub use chain::Chain;
pub use error::OpError;
pub use hflip::{HFlip, HFlipSpatial};
pub use hwc2chw::Hwc2Chw;
pub use pad::PadMode;
pub use rcrop::RCrop;
pub use scalar::{AddScalar, MulScalar};
pub use type_cast::TypeCast;
pub use vectorize::Vectorize;

/// 所有预处理算子的静态分发枚举
#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Op {
    Chain(Chain),
    TypeCast(TypeCast),
    Vectorize(Vectorize),
    AddScalar(AddScalar),
    MulScalar(MulScalar),
    Hwc2Chw(Hwc2Chw),
    HFlip(HFlip),
    HFlipSpatial(HFlipSpatial),
    RCrop(RCrop),
}

/// 算子统一接口：输入张量，输出变换后的张量（形状、类型都可能改变）
///
/// 这里用`&mut self`而不是`&self`，是为了让随机算子持有自己的RNG
/// （注入式随机源，测试时用固定种子即可复现）。
#[enum_dispatch(Op)]
pub trait Transform {
    fn apply(&mut self, input: Tensor) -> Result<Tensor, OpError>;
}
