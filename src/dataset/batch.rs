//! CIFAR-10 批次文件的（反）序列化
//!
//! 每个批次文件是一个 bincode 编码的 [`CifarBatch`]，对应官方 Python 版
//! CIFAR-10 批次文件（pickle 字典，含 `labels` 与 `data` 两个字段）。

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::DatasetError;

/// 单个批次文件的内容
///
/// `labels[i]` 是第 i 条记录的类别（CIFAR-10 共 10 类，取值 0-9），
/// `data[i]` 是对应的扁平图像缓冲区（3072 字节，按通道、行、列排列）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CifarBatch {
    pub labels: Vec<u8>,
    pub data: Vec<Vec<u8>>,
}

/// 从本地文件读取单个批次
///
/// # 错误
/// 文件不可读、内容无法反序列化、或标签数与记录数不一致时报错。
pub fn read_batch(path: &Path) -> Result<CifarBatch, DatasetError> {
    let file = File::open(path)?;
    let batch: CifarBatch =
        bincode::deserialize_from(BufReader::new(file)).map_err(|e| DatasetError::SerdeError {
            file: path.to_path_buf(),
            source: e,
        })?;
    if batch.labels.len() != batch.data.len() {
        return Err(DatasetError::InconsistentBatch {
            labels: batch.labels.len(),
            records: batch.data.len(),
        });
    }
    Ok(batch)
}

/// 将单个批次写入本地文件
///
/// 数据集本身只读不写；本函数主要用于构造测试夹具或转换既有数据。
pub fn write_batch(path: &Path, batch: &CifarBatch) -> Result<(), DatasetError> {
    let file = File::create(path)?;
    bincode::serialize_into(BufWriter::new(file), batch).map_err(|e| DatasetError::SerdeError {
        file: path.to_path_buf(),
        source: e,
    })
}
