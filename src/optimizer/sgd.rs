/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:30:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : SGD优化器实现
 */

use super::base::{check_update_inputs, gradient_of, log_update, Optimizer, ParamSet};
use super::config::SgdConfig;
use crate::errors::OptimizerError;

/// 随机梯度下降：θ = θ - α * ∇θ，无状态
#[derive(Debug, Clone, Default)]
pub struct Sgd {
    config: SgdConfig,
}

impl Sgd {
    pub fn new(lr: f32) -> Self {
        Self::new_with_config(SgdConfig { lr })
    }

    pub const fn new_with_config(config: SgdConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> SgdConfig {
        self.config
    }
}

impl Optimizer for Sgd {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[])?;

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            *param -= self.config.lr * grad;
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        Some(self.config.lr)
    }

    fn name(&self) -> &'static str {
        "SGD"
    }
}
