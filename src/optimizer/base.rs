/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 优化器基础trait、累积状态及各优化器共用的输入校验
 */

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;

use crate::errors::OptimizerError;
use crate::tensor::Tensor;

/// 参数集：参数名 -> 张量。梯度集使用同一类型，键集须与参数集一致
pub type ParamSet = HashMap<String, Tensor>;

/// 优化器核心 trait
///
/// 外部训练循环每轮调用一次`update`：
/// ```ignore
/// let grads = model.backward(&batch)?;        // 梯度由外部计算
/// optimizer.update(&mut model.params, &grads)?; // ← 只更新参数
/// ```
///
/// # 并发
/// `update`需要`&mut self`与`&mut ParamSet`，即调用期间独占优化器及参数集。
/// 优化器内部状态没有任何同步措施，跨线程共享同一实例时须由调用方自行串行化。
#[enum_dispatch]
pub trait Optimizer {
    /// 根据梯度原地更新参数
    ///
    /// 首次调用时按各参数的形状惰性创建全零累积状态，此后参数键集须与首次调用时完全一致。
    ///
    /// # 错误
    /// - 参数与梯度的键集不一致
    /// - 梯度（或累积量）的形状与参数不一致
    /// - 出现首次调用时不存在的参数键，或缺少首次调用时存在的参数键
    ///
    /// 出错时参数、累积状态与迭代计数均保持调用前的值。
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError>;

    /// 获取学习率；Adadelta没有显式学习率，返回None
    fn learning_rate(&self) -> Option<f32>;

    /// 优化器名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 单个累积量（如动量的速度v、Adam的一阶矩m），按参数名索引，形状与对应参数一致
#[derive(Debug, Clone)]
pub(crate) struct Accumulator {
    name: &'static str,
    values: HashMap<String, Tensor>,
}

impl Accumulator {
    /// 按参数集中各参数的形状创建全零累积量
    pub(crate) fn zeros_like(name: &'static str, params: &ParamSet) -> Self {
        let values = params
            .iter()
            .map(|(key, param)| (key.clone(), Tensor::zeros_like(param)))
            .collect();
        Self { name, values }
    }

    fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Tensor> {
        self.values.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Result<&mut Tensor, OptimizerError> {
        self.values
            .get_mut(key)
            .ok_or_else(|| OptimizerError::UnknownParameter {
                key: key.to_string(),
            })
    }
}

/// 取出已存在的累积量，若尚未创建（首次调用），则按`params`创建
pub(crate) fn materialize<'a>(
    slot: &'a mut Option<Accumulator>,
    name: &'static str,
    params: &ParamSet,
) -> &'a mut Accumulator {
    slot.get_or_insert_with(|| {
        log::debug!("为{}个参数初始化累积量`{name}`", params.len());
        Accumulator::zeros_like(name, params)
    })
}

/// 更新前的完整校验。校验全部通过后才允许修改任何状态，从而不会出现“只更新了一部分参数”的情况
pub(crate) fn check_update_inputs(
    params: &ParamSet,
    grads: &ParamSet,
    accumulators: &[Option<&Accumulator>],
) -> Result<(), OptimizerError> {
    for (key, param) in params {
        let grad = gradient_of(grads, key)?;
        check_shape(key, param, grad, "梯度")?;

        for accumulator in accumulators.iter().flatten() {
            let value = accumulator
                .get(key)
                .ok_or_else(|| OptimizerError::UnknownParameter { key: key.clone() })?;
            check_shape(key, param, value, accumulator.name)?;
        }
    }

    if let Some(key) = grads.keys().find(|key| !params.contains_key(*key)) {
        return Err(OptimizerError::UnexpectedGradient { key: key.clone() });
    }

    // 累积量一旦创建，其键集即为首次调用的键集，之后每次调用都须与之完全一致
    for accumulator in accumulators.iter().flatten() {
        if let Some(key) = accumulator.keys().find(|key| !params.contains_key(*key)) {
            return Err(OptimizerError::MissingParameter { key: key.clone() });
        }
    }
    Ok(())
}

pub(crate) fn gradient_of<'a>(
    grads: &'a ParamSet,
    key: &str,
) -> Result<&'a Tensor, OptimizerError> {
    grads
        .get(key)
        .ok_or_else(|| OptimizerError::MissingGradient {
            key: key.to_string(),
        })
}

fn check_shape(
    key: &str,
    param: &Tensor,
    other: &Tensor,
    target: &'static str,
) -> Result<(), OptimizerError> {
    if param.is_same_shape(other) {
        Ok(())
    } else {
        Err(OptimizerError::ShapeMismatch {
            key: key.to_string(),
            target,
            expected: param.shape().to_vec(),
            got: other.shape().to_vec(),
        })
    }
}

/// 更新完成后的日志；若开启了warn级别日志，额外检查是否有参数出现NaN/Inf（仅提示，不影响更新结果）
pub(crate) fn log_update(name: &str, params: &ParamSet) {
    log::trace!("{name}：已更新{}个参数", params.len());
    if log::log_enabled!(log::Level::Warn) {
        for (key, param) in params {
            if !param.all_finite() {
                log::warn!("{name}：参数`{key}`更新后出现非有限值（NaN/Inf）");
            }
        }
    }
}
