/*
 * @Author       : 老董
 * @Date         : 2023-10-21 03:22:26
 * @Description  : 本类仅包含一些属性方法及逐元素的数学函数，均不修改自身，所以不会需要用到mut
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 */

use super::Tensor;

impl Tensor {
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]。
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// 张量的维（dim）数、阶（rank）数
    /// 即`shape()`的元素个数--如：形状为`[]`的标量阶数为0，向量阶数为1，矩阵阶数为2，以此类推
    pub fn dimension(&self) -> usize {
        self.data.ndim()
    }

    /// 计算张量中所有元素的数量
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// 判断两个张量的形状是否严格一致。如：形状为 [1, 4]，[1, 4]和[4]是不一致的，会返回false
    pub fn is_same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// 判断张量是否为标量
    pub fn is_scalar(&self) -> bool {
        self.shape().is_empty() || self.shape().iter().all(|x| *x == 1)
    }

    /// 转化为纯数（number）。若为标量，则返回Some(number)，否则返回None
    pub fn number(&self) -> Option<f32> {
        if self.is_scalar() {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// 按多维下标取单个元素，越界则返回None
    pub fn get(&self, index: &[usize]) -> Option<f32> {
        self.data.get(index).copied()
    }

    /// 以行优先顺序返回全部元素
    pub fn data_as_slice(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    /// 所有元素是否均为有限值（非NaN、非Inf）
    pub fn all_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// 逐元素开平方
    pub fn sqrt(&self) -> Self {
        self.mapv(f32::sqrt)
    }

    /// 逐元素平方
    pub fn square(&self) -> Self {
        self.mapv(|x| x * x)
    }

    /// 逐元素映射
    pub fn mapv<F: Fn(f32) -> f32>(&self, f: F) -> Self {
        Self {
            data: self.data.mapv(f),
        }
    }
}
