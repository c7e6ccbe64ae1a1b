/*
 * @Author       : 老董
 * @Date         : 2026-03-02
 * @Description  : 数据集模块：从CIFAR-10的序列化批次文件中加载猫狗二分类数据集。
 */

//! # 主要组件
//!
//! - [`PetsDataset`]: 猫狗二分类数据集（猫→0，狗→1）
//! - [`Subset`]: 数据集划分（训练/验证/测试），决定拼接哪些批次文件
//! - [`Sample`]: 单个样本（序号、图像张量、标签）
//! - [`CifarBatch`]: 批次文件的（反）序列化结构
//! - [`decode_image`]: 扁平记录→图像张量的纯解码函数
//! - [`DatasetError`]: 数据集错误类型
//!
//! 所有批次文件在构造数据集时一次性同步读取，之后数据集只读。

mod batch;
mod decode;
mod error;
mod pets;

#[cfg(test)]
mod tests;

pub use batch::{CifarBatch, read_batch, write_batch};
pub use decode::{IMAGE_BYTES, IMAGE_CHANNELS, IMAGE_SIDE, decode_image};
pub use error::DatasetError;
pub use pets::{PETS_CLASS_MAP, PetsDataset, Sample, Subset};
