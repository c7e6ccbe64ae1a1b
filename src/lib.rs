//! # Only Vision
//!
//! `only_vision`是[only_torch](https://github.com/dbsxdbsx/only_torch)的配套数据集与预处理库，
//! 仿造[torchvision](https://pytorch.org/vision)提供两部分功能：
//! 1. 数据集加载——从CIFAR-10的序列化批次文件中筛选出猫、狗两类图像，组成可随机访问的二分类数据集；
//! 2. 预处理算子——一组纯函数式的张量变换（类型转换、展平、加乘、轴变换、随机翻转/裁剪），可通过链式组合逐样本应用。
//!

pub mod dataset;
pub mod errors;
pub mod ops;
pub mod tensor;
