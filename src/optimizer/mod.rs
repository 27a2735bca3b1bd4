/*
 * @Author       : 老董
 * @Date         : 2025-07-24 16:00:00
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 优化器模块，实现常用的一阶梯度优化算法
 */

use enum_dispatch::enum_dispatch;

use crate::errors::OptimizerError;

mod adadelta;
mod adagrad;
mod adam;
mod base;
mod config;
mod momentum;
mod nesterov;
mod rmsprop;
mod sgd;

#[cfg(test)]
mod tests;

pub use adadelta::Adadelta;
pub use adagrad::Adagrad;
pub use adam::Adam;
pub use base::{Optimizer, ParamSet};
pub use config::{
    AdadeltaConfig, AdagradConfig, AdamConfig, MomentumConfig, OptimizerConfig, RmsPropConfig,
    SgdConfig,
};
pub use momentum::Momentum;
pub use nesterov::Nesterov;
pub use rmsprop::RmsProp;
pub use sgd::Sgd;

/// 所有优化器的枚举，便于在运行期按配置选择优化器，同时避免`Box<dyn Optimizer>`的动态分发
#[enum_dispatch(Optimizer)]
#[derive(Debug, Clone)]
pub enum OptimizerEnum {
    Sgd,
    Momentum,
    Nesterov,
    Adagrad,
    RmsProp,
    Adadelta,
    Adam,
}
