/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:30:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Adam优化器实现
 */

use super::base::{
    check_update_inputs, gradient_of, log_update, materialize, Accumulator, Optimizer, ParamSet,
};
use super::config::AdamConfig;
use crate::errors::OptimizerError;

/// Adam: Adaptive Moment Estimation
/// - t = t + 1
/// - m = ρ1 * m + (1 - ρ1) * g
/// - v = ρ2 * v + (1 - ρ2) * g²
/// - `m_hat` = m / (1 - ρ1^t)，`v_hat` = v / (1 - ρ2^t)
/// - θ = θ - α * `m_hat` / (√`v_hat` + ε)
///
/// 偏差修正用于抵消m、v零初始化带来的早期偏小，t增大后修正系数趋于1。ε加在根号外。
#[derive(Debug, Clone, Default)]
pub struct Adam {
    config: AdamConfig,
    /// 一阶矩估计
    m: Option<Accumulator>,
    /// 二阶矩估计
    v: Option<Accumulator>,
    /// 时间步，只增不减
    t: usize,
}

impl Adam {
    pub fn new(lr: f32, rho1: f32, rho2: f32) -> Self {
        Self::new_with_config(AdamConfig {
            lr,
            rho1,
            rho2,
            ..AdamConfig::default()
        })
    }

    pub const fn new_with_config(config: AdamConfig) -> Self {
        Self {
            config,
            m: None,
            v: None,
            t: 0,
        }
    }

    pub const fn config(&self) -> AdamConfig {
        self.config
    }

    #[cfg(test)]
    pub(crate) fn first_moment(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.m.as_ref()?.get(key)
    }

    #[cfg(test)]
    pub(crate) fn second_moment(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.v.as_ref()?.get(key)
    }

    #[cfg(test)]
    pub(crate) const fn timestep(&self) -> usize {
        self.t
    }
}

impl Optimizer for Adam {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[self.m.as_ref(), self.v.as_ref()])?;
        let AdamConfig {
            lr,
            rho1,
            rho2,
            epsilon,
        } = self.config;
        let first_moment = materialize(&mut self.m, "一阶矩m", params);
        let second_moment = materialize(&mut self.v, "二阶矩v", params);

        self.t += 1;
        let t = i32::try_from(self.t).unwrap_or(i32::MAX);
        let m_correction = 1.0 - rho1.powi(t);
        let v_correction = 1.0 - rho2.powi(t);

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            let m = first_moment.get_mut(key)?;
            let v = second_moment.get_mut(key)?;

            *m *= rho1;
            *m += (1.0 - rho1) * grad;
            *v *= rho2;
            *v += (1.0 - rho2) * grad.square();

            let m_hat = &*m / m_correction;
            let v_hat = &*v / v_correction;
            *param -= lr * m_hat / (v_hat.sqrt() + epsilon);
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        Some(self.config.lr)
    }

    fn name(&self) -> &'static str {
        "Adam"
    }
}
