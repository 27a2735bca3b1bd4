/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 错误类型：张量运算错误（`TensorError`）与优化器使用错误（`OptimizerError`）
 */

use thiserror::Error;
mod ops;
pub use self::ops::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TensorError {
    // 张量二元运算
    #[error(
        "形状不一致，故无法{operator}：第一个张量的形状为{tensor1_shape:?}，第二个张量的形状为{tensor2_shape:?}"
    )]
    OperatorError {
        operator: Operator,
        tensor1_shape: Vec<usize>,
        tensor2_shape: Vec<usize>,
    },
    #[error("数据长度{data_len}与形状{shape:?}的元素个数不一致")]
    DataShapeMismatch { data_len: usize, shape: Vec<usize> },
}

/// 优化器的调用错误。均属调用方（训练循环）的使用错误，出错时参数与累积状态都保持原样。
#[derive(Error, Debug, PartialEq)]
pub enum OptimizerError {
    /// 参数集中存在、但梯度集中缺失的键
    #[error("参数`{key}`缺少对应的梯度")]
    MissingGradient { key: String },
    /// 梯度集中存在、但参数集中没有的键
    #[error("梯度`{key}`没有对应的参数")]
    UnexpectedGradient { key: String },
    /// 首次调用`update`时未出现过的参数键
    #[error("参数`{key}`在首次更新时不存在，优化器无法为其补建累积状态")]
    UnknownParameter { key: String },
    /// 首次调用`update`时存在、本次却缺失的参数键（参数键集不得改变）
    #[error("参数`{key}`在首次更新时存在，本次却缺失；参数键集不得改变")]
    MissingParameter { key: String },
    /// 梯度或累积量的形状与参数形状不一致
    #[error("参数`{key}`的形状为{expected:?}，但{target}的形状为{got:?}")]
    ShapeMismatch {
        key: String,
        target: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    /// 超参数取值非法（仅由配置校验产生）
    #[error("超参数`{name}`={value}非法：{reason}")]
    InvalidHyperParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
    /// 配置解析失败
    #[error("优化器配置解析失败：{0}")]
    Config(String),
}

impl From<serde_json::Error> for OptimizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
