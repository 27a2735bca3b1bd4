/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 张量的逐元素运算。两个张量参与运算时，形状须严格一致，或其中之一为标量；
 *                 除此之外一律panic，不做NumPy风格的隐式广播。
 *                 除法遵循IEEE语义（除以0得到Inf/NaN），不额外检查。
 */

use ndarray::Zip;

use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;

mod arithmetic;
mod assign;
mod others;

/// 两个张量逐元素运算，返回新的张量
fn elementwise<F>(lhs: &Tensor, rhs: &Tensor, operator: Operator, f: F) -> Tensor
where
    F: Fn(f32, f32) -> f32,
{
    if lhs.is_same_shape(rhs) {
        Tensor {
            data: Zip::from(&lhs.data)
                .and(&rhs.data)
                .map_collect(|&a, &b| f(a, b)),
        }
    } else if let Some(scalar) = rhs.number() {
        lhs.mapv(|a| f(a, scalar))
    } else if let Some(scalar) = lhs.number() {
        rhs.mapv(|b| f(scalar, b))
    } else {
        panic!(
            "{}",
            TensorError::OperatorError {
                operator,
                tensor1_shape: lhs.shape().to_vec(),
                tensor2_shape: rhs.shape().to_vec(),
            }
        )
    }
}

/// 两个张量逐元素运算，结果写回`lhs`
fn elementwise_inplace<F>(lhs: &mut Tensor, rhs: &Tensor, operator: Operator, f: F)
where
    F: Fn(f32, f32) -> f32,
{
    if lhs.is_same_shape(rhs) {
        Zip::from(&mut lhs.data)
            .and(&rhs.data)
            .for_each(|a, &b| *a = f(*a, b));
    } else if let Some(scalar) = rhs.number() {
        lhs.data.mapv_inplace(|a| f(a, scalar));
    } else {
        panic!(
            "{}",
            TensorError::OperatorError {
                operator,
                tensor1_shape: lhs.shape().to_vec(),
                tensor2_shape: rhs.shape().to_vec(),
            }
        )
    }
}
