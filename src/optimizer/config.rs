/*
 * @Author       : 老董
 * @Date         : 2026-10-17
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 优化器的构造期配置（超参数）。构造后超参数不再改变
 */

use serde::{Deserialize, Serialize};

use super::{Adadelta, Adagrad, Adam, Momentum, Nesterov, OptimizerEnum, RmsProp, Sgd};
use crate::errors::OptimizerError;

/// SGD：`param -= lr * grad`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SgdConfig {
    pub lr: f32,
}

impl Default for SgdConfig {
    fn default() -> Self {
        Self { lr: 0.01 }
    }
}

/// Momentum与Nesterov共用
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    pub lr: f32,
    pub momentum: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            lr: 0.01,
            momentum: 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdagradConfig {
    pub lr: f32,
    /// 加在根号外
    pub epsilon: f32,
}

impl Default for AdagradConfig {
    fn default() -> Self {
        Self {
            lr: 0.01,
            epsilon: 1e-7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RmsPropConfig {
    pub lr: f32,
    /// 衰减率
    pub rho: f32,
    /// 加在根号内（与原论文一致）
    pub epsilon: f32,
}

impl Default for RmsPropConfig {
    fn default() -> Self {
        Self {
            lr: 0.01,
            rho: 0.9,
            epsilon: 1e-6,
        }
    }
}

/// Adadelta没有显式学习率
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdadeltaConfig {
    pub rho: f32,
    /// 加在根号内
    pub epsilon: f32,
}

impl Default for AdadeltaConfig {
    fn default() -> Self {
        Self {
            rho: 0.95,
            epsilon: 1e-6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdamConfig {
    pub lr: f32,
    /// 一阶矩衰减率（β1）
    pub rho1: f32,
    /// 二阶矩衰减率（β2）
    pub rho2: f32,
    /// 加在根号外
    pub epsilon: f32,
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            lr: 0.001,
            rho1: 0.9,
            rho2: 0.999,
            epsilon: 1e-8,
        }
    }
}

/// 按类型标记的优化器配置，可从JSON读取，如：
/// ```json
/// {"type": "adam", "lr": 0.0002, "rho1": 0.5}
/// ```
/// 未给出的字段取默认值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OptimizerConfig {
    Sgd(SgdConfig),
    Momentum(MomentumConfig),
    Nesterov(MomentumConfig),
    Adagrad(AdagradConfig),
    RmsProp(RmsPropConfig),
    Adadelta(AdadeltaConfig),
    Adam(AdamConfig),
}

impl OptimizerConfig {
    pub fn from_json(json: &str) -> Result<Self, OptimizerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptimizerError> {
        Ok(serde_json::to_string(self)?)
    }

    /// 校验超参数取值：学习率须为非负有限值，动量与衰减率须在[0, 1)内，epsilon须为正的有限值
    pub fn validate(&self) -> Result<(), OptimizerError> {
        match self {
            Self::Sgd(c) => check_learning_rate(c.lr),
            Self::Momentum(c) | Self::Nesterov(c) => {
                check_learning_rate(c.lr)?;
                check_decay_rate("momentum", c.momentum)
            }
            Self::Adagrad(c) => {
                check_learning_rate(c.lr)?;
                check_epsilon(c.epsilon)
            }
            Self::RmsProp(c) => {
                check_learning_rate(c.lr)?;
                check_decay_rate("rho", c.rho)?;
                check_epsilon(c.epsilon)
            }
            Self::Adadelta(c) => {
                check_decay_rate("rho", c.rho)?;
                check_epsilon(c.epsilon)
            }
            Self::Adam(c) => {
                check_learning_rate(c.lr)?;
                check_decay_rate("rho1", c.rho1)?;
                check_decay_rate("rho2", c.rho2)?;
                check_epsilon(c.epsilon)
            }
        }
    }

    /// 校验后构造对应的优化器
    pub fn build(self) -> Result<OptimizerEnum, OptimizerError> {
        self.validate()?;
        let optimizer: OptimizerEnum = match self {
            Self::Sgd(c) => Sgd::new_with_config(c).into(),
            Self::Momentum(c) => Momentum::new_with_config(c).into(),
            Self::Nesterov(c) => Nesterov::new_with_config(c).into(),
            Self::Adagrad(c) => Adagrad::new_with_config(c).into(),
            Self::RmsProp(c) => RmsProp::new_with_config(c).into(),
            Self::Adadelta(c) => Adadelta::new_with_config(c).into(),
            Self::Adam(c) => Adam::new_with_config(c).into(),
        };
        log::debug!("根据配置构造优化器：{self:?}");
        Ok(optimizer)
    }
}

fn check_learning_rate(lr: f32) -> Result<(), OptimizerError> {
    if lr.is_finite() && lr >= 0.0 {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperParameter {
            name: "lr",
            value: lr,
            reason: "须为非负有限值",
        })
    }
}

fn check_decay_rate(name: &'static str, value: f32) -> Result<(), OptimizerError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperParameter {
            name,
            value,
            reason: "须在[0, 1)内",
        })
    }
}

fn check_epsilon(epsilon: f32) -> Result<(), OptimizerError> {
    if epsilon.is_finite() && epsilon > 0.0 {
        Ok(())
    } else {
        Err(OptimizerError::InvalidHyperParameter {
            name: "epsilon",
            value: epsilon,
            reason: "须为正的有限值",
        })
    }
}
