use approx::assert_abs_diff_eq;

use crate::errors::Operator;
use crate::tensor::Tensor;

#[test]
fn test_binary_ops_within_tensors() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = Tensor::new(&[4.0, 3.0, 2.0, 1.0], &[2, 2]);
    assert_eq!(&a + &b, Tensor::new(&[5.0, 5.0, 5.0, 5.0], &[2, 2]));
    assert_eq!(&a - &b, Tensor::new(&[-3.0, -1.0, 1.0, 3.0], &[2, 2]));
    assert_eq!(&a * &b, Tensor::new(&[4.0, 6.0, 6.0, 4.0], &[2, 2]));
    assert_eq!(&a / &b, Tensor::new(&[0.25, 2.0 / 3.0, 1.5, 4.0], &[2, 2]));
    // 不带引用
    assert_eq!(a.clone() + b.clone(), Tensor::new(&[5.0; 4], &[2, 2]));
    assert_eq!(a.clone() - &b, Tensor::new(&[-3.0, -1.0, 1.0, 3.0], &[2, 2]));
    assert_eq!(&a * b.clone(), Tensor::new(&[4.0, 6.0, 6.0, 4.0], &[2, 2]));
}

#[test]
fn test_binary_ops_with_f32() {
    let a = Tensor::new(&[1.0, 2.0, 4.0], &[3]);
    assert_eq!(&a + 1.0, Tensor::new(&[2.0, 3.0, 5.0], &[3]));
    assert_eq!(1.0 - &a, Tensor::new(&[0.0, -1.0, -3.0], &[3]));
    assert_eq!(2.0 * &a, Tensor::new(&[2.0, 4.0, 8.0], &[3]));
    assert_eq!(a.clone() / 2.0, Tensor::new(&[0.5, 1.0, 2.0], &[3]));
    assert_eq!(4.0 / a.clone(), Tensor::new(&[4.0, 2.0, 1.0], &[3]));
    assert_eq!(-&a, Tensor::new(&[-1.0, -2.0, -4.0], &[3]));
}

#[test]
fn test_binary_ops_with_scalar_tensor() {
    let a = Tensor::new(&[1.0, 2.0], &[2]);
    let scalar = Tensor::new(&[10.0], &[1]);
    assert_eq!(&a * &scalar, Tensor::new(&[10.0, 20.0], &[2]));
    assert_eq!(&scalar - &a, Tensor::new(&[9.0, 8.0], &[2]));
}

#[test]
fn test_division_by_zero_follows_ieee() {
    let a = Tensor::new(&[1.0, 0.0], &[2]);
    let zeros = Tensor::zeros(&[2]);
    let result = &a / &zeros;
    assert_eq!(result.get(&[0]), Some(f32::INFINITY));
    assert!(result.get(&[1]).unwrap().is_nan());
}

#[test]
#[should_panic(expected = "形状不一致，故无法相加（+）：第一个张量的形状为[2]，第二个张量的形状为[3]")]
fn test_add_with_incompatible_shapes() {
    let a = Tensor::new(&[1.0, 2.0], &[2]);
    let b = Tensor::new(&[1.0, 2.0, 3.0], &[3]);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "形状不一致，故无法相除（/）")]
fn test_div_does_not_broadcast_rows() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = Tensor::new(&[1.0, 2.0], &[1, 2]);
    let _ = a / b;
}

#[test]
fn test_assign_ops() {
    let mut tensor = Tensor::new(&[1.0, 2.0, 3.0], &[3]);
    tensor += &Tensor::new(&[1.0, 1.0, 1.0], &[3]);
    assert_eq!(tensor, Tensor::new(&[2.0, 3.0, 4.0], &[3]));
    tensor -= 1.0;
    assert_eq!(tensor, Tensor::new(&[1.0, 2.0, 3.0], &[3]));
    tensor *= Tensor::new(&[2.0, 2.0, 2.0], &[3]);
    assert_eq!(tensor, Tensor::new(&[2.0, 4.0, 6.0], &[3]));
    tensor *= 0.5;
    assert_eq!(tensor, Tensor::new(&[1.0, 2.0, 3.0], &[3]));
    tensor -= Tensor::new(&[1.0], &[1]);
    assert_eq!(tensor, Tensor::new(&[0.0, 1.0, 2.0], &[3]));
    tensor += 0.5;
    assert_eq!(tensor, Tensor::new(&[0.5, 1.5, 2.5], &[3]));
}

#[test]
#[should_panic(expected = "形状不一致，故无法自相减（-=）")]
fn test_sub_assign_with_incompatible_shapes() {
    let mut a = Tensor::new(&[1.0, 2.0], &[2]);
    a -= Tensor::new(&[1.0, 2.0, 3.0], &[3]);
}

#[test]
fn test_abs_diff_eq() {
    let a = Tensor::new(&[1.0, 2.0], &[2]);
    let b = Tensor::new(&[1.0 + 1e-7, 2.0 - 1e-7], &[2]);
    assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    // 形状不同则不相等
    let c = Tensor::new(&[1.0, 2.0], &[1, 2]);
    assert!(!approx::abs_diff_eq!(a, c, epsilon = 1.0));
}

#[test]
fn test_operator_display() {
    assert_eq!(Operator::Mul.to_string(), "相乘（*）");
    assert_eq!(Operator::AddAssign.to_string(), "自相加（+=）");
    assert_eq!(Operator::MulAssign.symbol(), "*=");
    assert!(Operator::SubAssign.is_inplace());
    assert!(!Operator::Div.is_inplace());
}
