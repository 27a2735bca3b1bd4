use std::ops::{AddAssign, MulAssign, SubAssign};

use super::elementwise_inplace;
use crate::errors::Operator;
use crate::tensor::Tensor;

/// 为`Tensor`实现原地运算符，右操作数可为（带引用或不带引用的）张量或`f32`
macro_rules! impl_assign_op {
    ($trait:ident, $method:ident, $operator:expr, $op:tt) => {
        impl $trait for Tensor {
            fn $method(&mut self, other: Tensor) {
                elementwise_inplace(self, &other, $operator, |a, b| a $op b);
            }
        }
        impl<'a> $trait<&'a Tensor> for Tensor {
            fn $method(&mut self, other: &'a Tensor) {
                elementwise_inplace(self, other, $operator, |a, b| a $op b);
            }
        }
        impl $trait<f32> for Tensor {
            fn $method(&mut self, scalar: f32) {
                self.data.mapv_inplace(|a| a $op scalar);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, Operator::AddAssign, +);
impl_assign_op!(SubAssign, sub_assign, Operator::SubAssign, -);
impl_assign_op!(MulAssign, mul_assign, Operator::MulAssign, *);
