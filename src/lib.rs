//! # Only Optim
//!
//! `only_optim`是一组一阶梯度优化器：给定参数集与同形状的梯度集，按各自的更新规则原地更新参数。
//! 包括SGD、Momentum、Nesterov、Adagrad、RMSProp、Adadelta与Adam。
//!
//! 参数与梯度的计算、训练循环的编排均由外部负责，本库只负责“更新”这一步：
//! ```
//! use only_optim::optimizer::{Optimizer, ParamSet, Sgd};
//! use only_optim::tensor::Tensor;
//!
//! let mut params = ParamSet::from([("w".to_string(), Tensor::from(1.0))]);
//! let grads = ParamSet::from([("w".to_string(), Tensor::from(0.5))]);
//!
//! let mut optimizer = Sgd::new(0.1);
//! optimizer.update(&mut params, &grads).unwrap();
//! assert!((params["w"].number().unwrap() - 0.95).abs() < 1e-6);
//! ```

pub mod errors;
pub mod optimizer;
pub mod tensor;
