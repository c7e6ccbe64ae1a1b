//! CIFAR-10 猫狗二分类数据集
//!
//! 从 CIFAR-10 的 10 个类别中只保留猫（3）和狗（5）两类，
//! 并把标签重映射为 0（猫）和 1（狗）。

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::batch::read_batch;
use super::decode::decode_image;
use super::error::DatasetError;
use crate::tensor::Tensor;

/// 数据集划分
///
/// 每个划分对应一组固定顺序的批次文件：
/// - 训练集：`data_batch_1` 到 `data_batch_4`（按此顺序拼接）
/// - 验证集：`data_batch_5`
/// - 测试集：`test_batch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    Training,
    Validation,
    Test,
}

impl Subset {
    /// 该划分对应的批次文件名（固定顺序）
    pub fn batch_files(self) -> &'static [&'static str] {
        match self {
            Subset::Training => &[
                "data_batch_1",
                "data_batch_2",
                "data_batch_3",
                "data_batch_4",
            ],
            Subset::Validation => &["data_batch_5"],
            Subset::Test => &["test_batch"],
        }
    }
}

/// 单个样本，构造后不可变
///
/// 图像为形状 (32, 32, 3) 的 u8 张量（BGR 通道序），标签为 0（猫）或 1（狗）。
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// 样本在数据集中的序号
    pub index: usize,
    /// 图像张量
    pub image: Tensor,
    /// 重映射后的标签
    pub label: u8,
}

/// 默认类别映射表：CIFAR-10 中猫（3）→0，狗（5）→1
///
/// 以静态映射表而非硬编码分支建模，换一对类别（或换一个标签全集）
/// 只需替换表项，不用动解码逻辑。
pub const PETS_CLASS_MAP: &[(u8, u8)] = &[(3, 0), (5, 1)];

/// 猫狗二分类数据集
///
/// 构造时一次性读取该划分的所有批次文件并解码，之后只读。
/// 样本顺序与源文件中记录出现的顺序一致（跨文件按划分声明的文件顺序拼接）。
#[derive(Debug, Clone)]
pub struct PetsDataset {
    images: Vec<Tensor>,
    labels: Vec<u8>,
}

impl PetsDataset {
    /// 从目录 `fdir` 加载 `subset` 划分（使用默认的猫狗映射表）
    ///
    /// # 错误
    /// 目录不存在或任一批次文件缺失时返回配置错误，不会返回部分数据集。
    pub fn new(fdir: impl AsRef<Path>, subset: Subset) -> Result<Self, DatasetError> {
        Self::with_class_map(fdir, subset, PETS_CLASS_MAP)
    }

    /// 使用自定义类别映射表加载
    ///
    /// # 参数
    /// - `class_map`: 表项为（原始标签，映射后标签）；原始标签不在表中的记录被丢弃
    pub fn with_class_map(
        fdir: impl AsRef<Path>,
        subset: Subset,
        class_map: &[(u8, u8)],
    ) -> Result<Self, DatasetError> {
        let fdir = fdir.as_ref();
        if !fdir.is_dir() {
            return Err(DatasetError::DirNotFound(fdir.to_path_buf()));
        }

        // 先整体校验所有文件是否存在，再开始读取
        let files: Vec<PathBuf> = subset
            .batch_files()
            .iter()
            .map(|name| fdir.join(name))
            .collect();
        for file in &files {
            if !file.is_file() {
                return Err(DatasetError::BatchFileMissing(file.clone()));
            }
        }

        let mut images = Vec::new();
        let mut labels = Vec::new();
        for file in &files {
            let batch = read_batch(file)?;
            for (buf, &label) in batch.data.iter().zip(batch.labels.iter()) {
                if let Some(mapped) = remap(class_map, label) {
                    images.push(decode_image(buf)?);
                    labels.push(mapped);
                }
            }
        }

        Ok(Self { images, labels })
    }

    /// 返回数据集中的样本数量
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// 数据集是否为空
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 获取第 index 个样本
    ///
    /// # 错误
    /// 索引超出 [0, len) 时返回越界错误
    /// （参数类型为usize，负索引在类型层面即不可表示）。
    pub fn get(&self, index: usize) -> Result<Sample, DatasetError> {
        if index >= self.len() {
            return Err(DatasetError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok(Sample {
            index,
            image: self.images[index].clone(),
            label: self.labels[index],
        })
    }

    /// 数据集中实际出现的类别数
    pub fn num_classes(&self) -> usize {
        self.labels.iter().collect::<HashSet<_>>().len()
    }

    /// 按样本顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).map(move |index| Sample {
            index,
            image: self.images[index].clone(),
            label: self.labels[index],
        })
    }
}

/// 在映射表中查找原始标签对应的映射后标签
fn remap(class_map: &[(u8, u8)], label: u8) -> Option<u8> {
    class_map
        .iter()
        .find(|(src, _)| *src == label)
        .map(|(_, dst)| *dst)
}
