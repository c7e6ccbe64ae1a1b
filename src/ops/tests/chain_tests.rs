use crate::ops::{AddScalar, Chain, MulScalar, Transform, TypeCast, Vectorize};
use crate::tensor::{DType, Tensor};

#[test]
fn test_empty_chain_is_identity() {
    let mut chain = Chain::new(vec![]);
    let tensor = Tensor::new_u8(&[1, 2, 3, 4, 5, 6], &[2, 3]);
    assert_eq!(chain.apply(tensor.clone()).unwrap(), tensor);
}

#[test]
fn test_chain_equals_sequential_application() {
    // chain([add(1), mul(2)])(x) == mul(2)(add(1)(x))，且顺序敏感
    let tensor = Tensor::new(&[0., 1., -2.5], &[3]);

    let mut chained = Chain::new(vec![AddScalar::new(1.).into(), MulScalar::new(2.).into()]);
    let chained_out = chained.apply(tensor.clone()).unwrap();

    let mut add = AddScalar::new(1.);
    let mut mul = MulScalar::new(2.);
    let sequential_out = mul.apply(add.apply(tensor.clone()).unwrap()).unwrap();
    assert_eq!(chained_out, sequential_out);
    assert_eq!(chained_out, Tensor::new(&[2., 4., -3.], &[3]));

    // 交换顺序结果不同
    let mut reversed = Chain::new(vec![MulScalar::new(2.).into(), AddScalar::new(1.).into()]);
    assert_eq!(
        reversed.apply(tensor).unwrap(),
        Tensor::new(&[1., 3., -4.], &[3])
    );
}

#[test]
fn test_chain_nesting() {
    let inner = Chain::new(vec![AddScalar::new(1.).into()]);
    let mut outer = Chain::new(vec![inner.into(), MulScalar::new(3.).into()]);
    let out = outer.apply(Tensor::new(&[1.], &[1])).unwrap();
    assert_eq!(out, Tensor::new(&[6.], &[1]));
}

#[test]
fn test_chain_push_builder() {
    let mut chain = Chain::default()
        .push(TypeCast::new(DType::F32))
        .push(AddScalar::new(-127.5))
        .push(MulScalar::new(1. / 127.5))
        .push(Vectorize::new());
    let tensor = Tensor::new_u8(&[0, 255, 127, 128, 0, 255], &[1, 2, 3]);
    let out = chain.apply(tensor).unwrap();

    assert_eq!(out.shape(), &[6]);
    assert_eq!(out.dtype(), DType::F32);
    let values = out.as_f32().unwrap();
    assert!(values.iter().all(|v| (-1.0..=1.0).contains(v)));
}

#[test]
fn test_chain_propagates_errors() {
    use crate::ops::{Hwc2Chw, OpError};
    // 链中第二个算子要求3维输入，第一个算子已把输入展平
    let mut chain = Chain::new(vec![Vectorize::new().into(), Hwc2Chw::new().into()]);
    let tensor = Tensor::new_u8(&[0; 12], &[2, 2, 3]);
    let result = chain.apply(tensor);
    assert!(matches!(result, Err(OpError::NotHwcImage(1))));
}
