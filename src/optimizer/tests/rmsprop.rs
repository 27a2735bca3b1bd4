use approx::assert_abs_diff_eq;

use super::{scalar_set, w_of};
use crate::optimizer::{Optimizer, RmsProp, RmsPropConfig};

#[test]
fn test_rmsprop_creation() {
    let rmsprop = RmsProp::default();
    assert_eq!(
        rmsprop.config(),
        RmsPropConfig {
            lr: 0.01,
            rho: 0.9,
            epsilon: 1e-6
        }
    );
    assert_eq!(RmsProp::new(0.1, 0.5).config().rho, 0.5);
    assert_eq!(rmsprop.name(), "RMSProp");
}

#[test]
fn test_rmsprop_regression_trace() {
    // lr=0.01, rho=0.9, w=1, g=1，连续3步，记录h与w的轨迹
    const TRACE: [(f32, f32); 3] = [
        (0.1, 0.968_377_4),
        (0.19, 0.945_435_9),
        (0.271, 0.926_226_4),
    ];
    let mut params = scalar_set(1.0);
    let grads = scalar_set(1.0);
    let mut rmsprop = RmsProp::new(0.01, 0.9);

    for &(expected_h, expected_w) in TRACE.iter() {
        rmsprop.update(&mut params, &grads).unwrap();
        let h = rmsprop.mean_square("w").unwrap().number().unwrap();
        assert_abs_diff_eq!(h, expected_h, epsilon = 1e-6);
        assert_abs_diff_eq!(w_of(&params), expected_w, epsilon = 1e-6);
    }
}

#[test]
fn test_rmsprop_epsilon_inside_square_root() {
    // g=1e-3: h = 0.1 * 1e-6 = 1e-7
    // ε在根号内：Δw = 0.01 * 1e-3 / √(1.1e-6) ≈ 0.0095346
    // （若ε在根号外，Δw ≈ 0.0315，差异明显）
    let mut params = scalar_set(1.0);
    let mut rmsprop = RmsProp::new(0.01, 0.9);
    rmsprop.update(&mut params, &scalar_set(1e-3)).unwrap();
    assert_abs_diff_eq!(w_of(&params), 1.0 - 0.009_534_626, epsilon = 1e-6);
}

#[test]
fn test_rmsprop_zero_gradient_decays_state() {
    let mut params = scalar_set(1.0);
    let mut rmsprop = RmsProp::new(0.01, 0.9);
    rmsprop.update(&mut params, &scalar_set(2.0)).unwrap();
    let h_before = rmsprop.mean_square("w").unwrap().number().unwrap();
    let w_before = w_of(&params);

    rmsprop.update(&mut params, &scalar_set(0.0)).unwrap();
    let h_after = rmsprop.mean_square("w").unwrap().number().unwrap();
    assert_abs_diff_eq!(h_after, 0.9 * h_before, epsilon = 1e-7);
    assert_eq!(w_of(&params), w_before);
}
