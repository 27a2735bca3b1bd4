/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Adagrad优化器实现
 */

use super::base::{
    check_update_inputs, gradient_of, log_update, materialize, Accumulator, Optimizer, ParamSet,
};
use super::config::AdagradConfig;
use crate::errors::OptimizerError;

/// Adagrad：
/// - h = h + g²
/// - θ = θ - α * g / (ε + √h)
///
/// h只增不减，故每个参数的有效学习率单调缩小。ε加在根号外。
#[derive(Debug, Clone, Default)]
pub struct Adagrad {
    config: AdagradConfig,
    /// 梯度平方的累加和
    h: Option<Accumulator>,
}

impl Adagrad {
    pub fn new(lr: f32) -> Self {
        Self::new_with_config(AdagradConfig {
            lr,
            ..AdagradConfig::default()
        })
    }

    pub const fn new_with_config(config: AdagradConfig) -> Self {
        Self { config, h: None }
    }

    pub const fn config(&self) -> AdagradConfig {
        self.config
    }

    #[cfg(test)]
    pub(crate) fn accumulated_square(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.h.as_ref()?.get(key)
    }
}

impl Optimizer for Adagrad {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[self.h.as_ref()])?;
        let AdagradConfig { lr, epsilon } = self.config;
        let accumulated = materialize(&mut self.h, "累积量h", params);

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            let h = accumulated.get_mut(key)?;
            *h += grad.square();
            *param -= lr * grad / (epsilon + h.sqrt());
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        Some(self.config.lr)
    }

    fn name(&self) -> &'static str {
        "Adagrad"
    }
}
