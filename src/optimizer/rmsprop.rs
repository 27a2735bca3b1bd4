/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : RMSProp优化器实现
 */

use super::base::{
    check_update_inputs, gradient_of, log_update, materialize, Accumulator, Optimizer, ParamSet,
};
use super::config::RmsPropConfig;
use crate::errors::OptimizerError;

/// RMSProp：
/// - h = ρ * h + (1 - ρ) * g²
/// - θ = θ - α * g / √(h + ε)
///
/// NOTE: ε加在根号内（与原论文一致），不同于Adagrad/Adam。
#[derive(Debug, Clone, Default)]
pub struct RmsProp {
    config: RmsPropConfig,
    /// 梯度平方的指数移动平均
    h: Option<Accumulator>,
}

impl RmsProp {
    pub fn new(lr: f32, rho: f32) -> Self {
        Self::new_with_config(RmsPropConfig {
            lr,
            rho,
            ..RmsPropConfig::default()
        })
    }

    pub const fn new_with_config(config: RmsPropConfig) -> Self {
        Self { config, h: None }
    }

    pub const fn config(&self) -> RmsPropConfig {
        self.config
    }

    #[cfg(test)]
    pub(crate) fn mean_square(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.h.as_ref()?.get(key)
    }
}

impl Optimizer for RmsProp {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[self.h.as_ref()])?;
        let RmsPropConfig { lr, rho, epsilon } = self.config;
        let mean_square = materialize(&mut self.h, "累积量h", params);

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            let h = mean_square.get_mut(key)?;
            *h *= rho;
            *h += (1.0 - rho) * grad.square();
            *param -= lr * grad / (&*h + epsilon).sqrt();
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        Some(self.config.lr)
    }

    fn name(&self) -> &'static str {
        "RMSProp"
    }
}
