use crate::ops::{HFlip, HFlipSpatial, OpError, Transform};
use crate::tensor::Tensor;

fn sample_image() -> Tensor {
    let data: Vec<f32> = (0..24).map(|x| x as f32).collect();
    Tensor::new(&data, &[2, 4, 3])
}

#[test]
fn test_hflip_output_is_input_or_double_mirror() {
    // 每次输出要么原样，要么同时沿行轴与通道轴镜像，不存在第三种结果
    let image = sample_image();
    let mirrored = image.flipped(&[0, 2]).unwrap();

    let mut op = HFlip::with_seed(42);
    for _ in 0..64 {
        let out = op.apply(image.clone()).unwrap();
        assert!(out == image || out == mirrored);
    }
}

#[test]
fn test_hflip_both_outcomes_occur() {
    // 64次抽签全部同向的概率约为2^-63，可视作不可能
    let image = sample_image();
    let mut op = HFlip::new();
    let mut kept = 0;
    let mut flipped = 0;
    for _ in 0..64 {
        if op.apply(image.clone()).unwrap() == image {
            kept += 1;
        } else {
            flipped += 1;
        }
    }
    assert!(kept > 0 && flipped > 0);
}

#[test]
fn test_hflip_seeded_is_reproducible() {
    let image = sample_image();
    let mut first = HFlip::with_seed(7);
    let mut second = HFlip::with_seed(7);
    for _ in 0..32 {
        assert_eq!(
            first.apply(image.clone()).unwrap(),
            second.apply(image.clone()).unwrap()
        );
    }
}

#[test]
fn test_hflip_spatial_only_touches_columns() {
    let image = sample_image();
    let mirrored = image.flipped(&[1]).unwrap();

    let mut op = HFlipSpatial::with_seed(3);
    for _ in 0..64 {
        let out = op.apply(image.clone()).unwrap();
        assert!(out == image || out == mirrored);
    }
}

#[test]
fn test_hflip_rejects_non_3d() {
    let mut op = HFlip::with_seed(0);
    let result = op.apply(Tensor::new(&[1., 2.], &[2]));
    assert!(matches!(result, Err(OpError::NotHwcImage(1))));

    let mut op = HFlipSpatial::with_seed(0);
    let result = op.apply(Tensor::new(&[1., 2.], &[2]));
    assert!(matches!(result, Err(OpError::NotHwcImage(1))));
}
