use approx::assert_abs_diff_eq;

use super::{param_set, scalar_set, w_of};
use crate::optimizer::{Optimizer, Sgd, SgdConfig};
use crate::tensor::Tensor;

#[test]
fn test_sgd_creation() {
    assert_eq!(Sgd::default().config(), SgdConfig { lr: 0.01 });
    let sgd = Sgd::new(0.1);
    assert_eq!(sgd.learning_rate(), Some(0.1));
    assert_eq!(sgd.name(), "SGD");
}

#[test]
fn test_sgd_scalar_update() {
    // w = 1.0 - 0.1 * 0.5 = 0.95
    let mut params = scalar_set(1.0);
    let grads = scalar_set(0.5);
    let mut sgd = Sgd::new(0.1);
    sgd.update(&mut params, &grads).unwrap();
    assert_abs_diff_eq!(w_of(&params), 0.95, epsilon = 1e-7);
}

#[test]
fn test_sgd_matrix_update() {
    let mut params = param_set(&[
        ("w", Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2])),
        ("b", Tensor::new(&[0.5], &[1])),
    ]);
    let grads = param_set(&[
        ("w", Tensor::new(&[10.0, -10.0, 0.0, 20.0], &[2, 2])),
        ("b", Tensor::new(&[-5.0], &[1])),
    ]);
    let mut sgd = Sgd::new(0.1);
    sgd.update(&mut params, &grads).unwrap();

    assert_abs_diff_eq!(
        params["w"],
        Tensor::new(&[0.0, 3.0, 3.0, 2.0], &[2, 2]),
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(params["b"], Tensor::new(&[1.0], &[1]), epsilon = 1e-6);
}

#[test]
fn test_sgd_with_zero_learning_rate_keeps_params() {
    let initial = param_set(&[("w", Tensor::new(&[1.0, -2.0, 3.0], &[3]))]);
    let mut params = initial.clone();
    let grads = param_set(&[("w", Tensor::new(&[7.0, 8.0, 9.0], &[3]))]);
    let mut sgd = Sgd::new(0.0);
    for _ in 0..3 {
        sgd.update(&mut params, &grads).unwrap();
    }
    assert_eq!(params, initial);
}

#[test]
fn test_sgd_accepts_new_keys_between_calls() {
    // SGD无状态，不受首次键集限制
    let mut sgd = Sgd::new(1.0);
    let mut params = scalar_set(1.0);
    sgd.update(&mut params, &scalar_set(1.0)).unwrap();

    let mut params = param_set(&[("b", Tensor::from(3.0))]);
    let grads = param_set(&[("b", Tensor::from(1.0))]);
    sgd.update(&mut params, &grads).unwrap();
    assert_eq!(params["b"].number(), Some(2.0));
}
