#![allow(dead_code)]

use findiff::math::differentiation::evaluationfunction::EvaluationFunction;
use findiff::math::differentiation::stepsizesweep::StepSizeSweep;

pub fn exp() -> EvaluationFunction {
    EvaluationFunction::new("exp", f64::exp, f64::exp)
}

pub fn cos() -> EvaluationFunction {
    EvaluationFunction::new("cos", f64::cos, |x: f64| -x.sin())
}

pub fn square() -> EvaluationFunction {
    EvaluationFunction::new("square", |x: f64| x * x, |x: f64| 2.0 * x)
}

/// 永遠回傳 NaN 的函數，導數設為 1 以通過零導數檢查。
pub fn always_nan() -> EvaluationFunction {
    EvaluationFunction::new("nan", |_: f64| f64::NAN, |_: f64| 1.0)
}

/// 與原始示範相同的 sweep：1e-12 到 1e-1，共 200 點。
pub fn demo_sweep() -> StepSizeSweep {
    StepSizeSweep::new(1e-12, 1e-1, 200).unwrap()
}
