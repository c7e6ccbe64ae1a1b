use std::path::{Path, PathBuf};

use super::{CifarBatch, IMAGE_BYTES, write_batch};


/// 生成本测试专用的临时目录（带进程号，避免并行测试互相干扰）
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("only_vision_{}_{}", name, std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// 构造一条内容可辨识的3072字节记录
fn make_buf(tag: u8) -> Vec<u8> {
    (0..IMAGE_BYTES).map(|i| (i as u8).wrapping_add(tag)).collect()
}

/// 以给定标签序列构造一个批次，第i条记录的内容标记为`base + i`
fn make_batch(labels: &[u8], base: u8) -> CifarBatch {
    CifarBatch {
        labels: labels.to_vec(),
        data: (0..labels.len())
            .map(|i| make_buf(base.wrapping_add(i as u8)))
            .collect(),
    }
}

/// 在dir下写出完整的6个批次文件
///
/// 各批次的标签固定如下（3=猫、5=狗）：
/// - data_batch_1: [3, 1, 5, 3]（内容标记从10起）
/// - data_batch_2: [0, 2]（从20起）
/// - data_batch_3: [5, 5, 9, 3]（从30起）
/// - data_batch_4: [7]（从40起）
/// - data_batch_5: [3, 5]（从50起）
/// - test_batch:   [5]（从60起）
fn write_full_dir(dir: &Path) {
    let batches: &[(&str, &[u8], u8)] = &[
        ("data_batch_1", &[3, 1, 5, 3], 10),
        ("data_batch_2", &[0, 2], 20),
        ("data_batch_3", &[5, 5, 9, 3], 30),
        ("data_batch_4", &[7], 40),
        ("data_batch_5", &[3, 5], 50),
        ("test_batch", &[5], 60),
    ];
    for (name, labels, base) in batches {
        write_batch(&dir.join(name), &make_batch(labels, *base)).unwrap();
    }
}
