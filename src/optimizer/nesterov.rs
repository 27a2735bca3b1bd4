/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Nesterov加速梯度（NAG）优化器实现
 */

use super::base::{
    check_update_inputs, gradient_of, log_update, materialize, Accumulator, Optimizer, ParamSet,
};
use super::config::MomentumConfig;
use crate::errors::OptimizerError;

/// Nesterov加速梯度：
/// - v_prev = v
/// - v = momentum * v_prev - α * g
/// - θ = θ - momentum * v_prev + (momentum + 1) * v
///
/// 这是“在预估位置求梯度”的等价改写，可直接使用在当前位置求得的梯度，无需第二次求梯度。
#[derive(Debug, Clone, Default)]
pub struct Nesterov {
    config: MomentumConfig,
    velocity: Option<Accumulator>,
}

impl Nesterov {
    pub fn new(lr: f32, momentum: f32) -> Self {
        Self::new_with_config(MomentumConfig { lr, momentum })
    }

    pub const fn new_with_config(config: MomentumConfig) -> Self {
        Self {
            config,
            velocity: None,
        }
    }

    pub const fn config(&self) -> MomentumConfig {
        self.config
    }

    #[cfg(test)]
    pub(crate) fn velocity(&self, key: &str) -> Option<&crate::tensor::Tensor> {
        self.velocity.as_ref()?.get(key)
    }
}

impl Optimizer for Nesterov {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[self.velocity.as_ref()])?;
        let MomentumConfig { lr, momentum } = self.config;
        let velocity = materialize(&mut self.velocity, "速度v", params);

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            let v = velocity.get_mut(key)?;
            let v_prev = v.clone();
            *v *= momentum;
            *v -= lr * grad;
            *param += -momentum * &v_prev + (momentum + 1.0) * &*v;
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        Some(self.config.lr)
    }

    fn name(&self) -> &'static str {
        "Nesterov"
    }
}
