/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : Momentum优化器实现
 */

use super::base::{
    check_update_inputs, gradient_of, log_update, materialize, Accumulator, Optimizer, ParamSet,
};
use super::config::MomentumConfig;
use crate::errors::OptimizerError;

/// 动量法：
/// - v = momentum * v - α * g
/// - θ = θ + v
///
/// 速度v是过去梯度的衰减累加，能抑制震荡，并在梯度方向一致时加速。
#[derive(Debug, Clone, Default)]
pub struct Momentum {
    config: MomentumConfig,
    /// 速度（首次`update`时创建）
    velocity: Option<Accumulator>,
}

impl Momentum {
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

impl Optimizer for Momentum {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimizerError> {
        check_update_inputs(params, grads, &[self.velocity.as_ref()])?;
        let MomentumConfig { lr, momentum } = self.config;
        let velocity = materialize(&mut self.velocity, "速度v", params);

        for (key, param) in params.iter_mut() {
            let grad = gradient_of(grads, key)?;
            let v = velocity.get_mut(key)?;
            *v *= momentum;
            *v -= lr * grad;
            *param += &*v;
        }

        log_update(self.name(), params);
        Ok(())
    }

    fn learning_rate(&self) -> Option<f32> {
        Some(self.config.lr)
    }

    fn name(&self) -> &'static str {
        "Momentum"
    }
}
