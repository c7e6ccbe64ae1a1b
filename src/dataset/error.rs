//! 数据集错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 数据集加载与访问相关错误
///
/// 加载期的错误都是配置错误：只要目录或任一批次文件有问题，
/// 整个加载立即失败，不会返回部分数据集。
#[derive(Debug, Error)]
pub enum DatasetError {
    /// 数据集目录不存在（或不是目录）
    #[error("数据集目录不存在或不是目录: {0}")]
    DirNotFound(PathBuf),

    /// 缺少批次文件
    #[error("缺少批次文件: {0}")]
    BatchFileMissing(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 批次文件（反）序列化失败
    #[error("批次文件 {file} （反）序列化失败: {source}")]
    SerdeError {
        file: PathBuf,
        source: bincode::Error,
    },

    /// 批次内标签数与记录数不一致
    #[error("批次文件损坏: 标签数 {labels} 与记录数 {records} 不一致")]
    InconsistentBatch { labels: usize, records: usize },

    /// 单条记录的缓冲区长度错误
    #[error("记录损坏: 图像缓冲区长度为 {len}，应为 {expected}")]
    CorruptRecord { len: usize, expected: usize },

    /// 索引越界
    #[error("索引越界: 有效范围为 [0, {len})，实际为 {index}")]
    IndexOutOfBounds { index: usize, len: usize },
}
