/*
 * @Author       : 老董
 * @Date         : 2025-12-20
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-17
 * @Description  : 优化器模块单元测试
 *
 * 测试按功能分组：
 * - contract: Optimizer trait 通用行为（键集、形状校验，零梯度等）
 * - config: 配置的默认值、JSON解析与校验
 * - 其余：各优化器的更新公式
 */

mod rmsprop;
mod sgd;

use crate::optimizer::ParamSet;
use crate::tensor::Tensor;

/// 由(参数名, 张量)列表构造参数集（或梯度集）
fn param_set(entries: &[(&str, Tensor)]) -> ParamSet {
    entries
        .iter()
        .map(|(key, tensor)| (key.to_string(), tensor.clone()))
        .collect()
}

/// 只含一个标量参数`w`的参数集
fn scalar_set(value: f32) -> ParamSet {
    param_set(&[("w", Tensor::from(value))])
}

/// 取出参数集中`w`的数值
fn w_of(params: &ParamSet) -> f32 {
    params["w"].number().unwrap()
}

/// 可复现的随机梯度集，键与形状同`params`。按键名排序后分配种子，与`HashMap`的遍历顺序无关
fn random_grads_like(params: &ParamSet, seed: u64) -> ParamSet {
    let mut keys: Vec<_> = params.keys().collect();
    keys.sort();
    keys.into_iter()
        .enumerate()
        .map(|(i, key)| {
            let shape = params[key].shape();
            let grad = Tensor::new_random_seeded(-1.0, 1.0, shape, seed * 100 + i as u64);
            (key.clone(), grad)
        })
        .collect()
}

#[test]
fn test_random_grads_like_ignores_insertion_order() {
    let w = Tensor::zeros(&[2, 3]);
    let b = Tensor::zeros(&[3]);
    let forward = param_set(&[("w", w.clone()), ("b", b.clone()), ("c", b.clone())]);
    let backward = param_set(&[("c", b.clone()), ("b", b), ("w", w)]);
    assert_eq!(random_grads_like(&forward, 7), random_grads_like(&backward, 7));
}
