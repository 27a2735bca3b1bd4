/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Adadelta优化器实现
 */

use super::base::{
    check_update_inputs, gradient_of, log_update, materialize, Accumulator, Optimizer, ParamSet,
};
use super::config::AdadeltaConfig;
use crate::errors::OptimizerError;

/// Adadelta，每个参数按以下顺序计算：
/// 1. rms_update_prev = √(r + ε)（使用上一步的r）
/// 2. h = ρ * h + (1 - ρ) * g²
/// 3. rms_grad = √(h + ε)（使用本步更新后的h）
/// 4. Δθ = -(rms_update_prev / rms_grad) * g
/// 5. θ = θ + Δθ
/// 6. r = ρ * r + (1 - ρ) * Δθ²
///
/// r须先读后写，h须先写后读；两者之比自带量纲，因此不需要显式学习率。
#[derive(Debug, Clone, Default)]
pub struct Adadelta {
    config: AdadeltaConfig,
    /// 梯度平方的指数移动平均
    h: Option<Accumulator>,
    /// 更新量平方的指数移动平均
    r: Option<Accumulator>,
}

impl Adadelta {
    pub fn new(rho: f32) -> Self {
        Self::new_with_config(AdadeltaConfig {
            rho,
            ..AdadeltaConfig::default()
        })
    }

    pub const fn new_with_config(config: AdadeltaConfig) -> Self {
        Self {
            config,
            h: None,
            r: None,
        }
    }

    pub const fn config(&self) -> AdadeltaConfig {
        self.config
    }

    #[cfg(test)]
    pub(crate) fn mean_square_grad(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.h.as_ref()?.get(key)
    }

    #[cfg(test)]
    pub(crate) fn mean_square_update(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.r.as_ref()?.get(key)
    }
}

impl Optimizer for Adadelta {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[self.h.as_ref(), self.r.as_ref()])?;
        let AdadeltaConfig { rho, epsilon } = self.config;
        let mean_square_grad = materialize(&mut self.h, "累积量h", params);
        let mean_square_update = materialize(&mut self.r, "累积量r", params);

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            let h = mean_square_grad.get_mut(key)?;
            let r = mean_square_update.get_mut(key)?;

            let rms_update_prev = (&*r + epsilon).sqrt();
            *h *= rho;
            *h += (1.0 - rho) * grad.square();
            let rms_grad = (&*h + epsilon).sqrt();

            let delta = -(rms_update_prev / rms_grad) * grad;
            *param += &delta;

            *r *= rho;
            *r += (1.0 - rho) * delta.square();
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        None
    }

    fn name(&self) -> &'static str {
        "Adadelta"
    }
}
