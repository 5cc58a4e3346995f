use nalgebra::{
    DMatrix,
    DVector
};
use serde::{
    Deserialize,
    Serialize
};

use crate::math::differentiation::errorcurve::ErrorCurve;

/// 步長區間 [min, max]（閉區間），用來挑選截斷誤差主導的區段。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepWindow {
    pub min: f64,
    pub max: f64,
}

impl StepWindow {
    pub fn new(min: f64, max: f64) -> StepWindow {
        StepWindow { min, max }
    }

    /// sweep 上端往下 `decades` 個數量級。
    ///
    /// sweep 最後一點由連乘產生，可能比 h_max 多出幾個 ulp，上界放寬 1e-9。
    pub fn top_decades(h_max: f64, decades: f64) -> StepWindow {
        StepWindow::new(h_max / 10f64.powf(decades), h_max * (1.0 + 1e-9))
    }

    pub fn contains(&self, h: f64) -> bool {
        self.min <= h && h <= self.max
    }
}

/// log10(error) = c + p·log10(h) 的最小平方解。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceFit {
    order: f64,
    log10_coefficient: f64,
    points_used: usize,
}

impl ConvergenceFit {
    /// 經驗收斂階數 p。
    pub fn order(&self) -> f64 {
        self.order
    }

    pub fn log10_coefficient(&self) -> f64 {
        self.log10_coefficient
    }

    pub fn points_used(&self) -> usize {
        self.points_used
    }
}

/// 在 `window` 內以 log–log 線性回歸估計經驗收斂階數。
///
/// 只使用有限且大於 0 的誤差（誤差為 0 無法取對數）。可用點少於 2 個，
/// 或所有點的 h 相同時回傳 `None`。
pub fn fit_convergence_order(curve: &ErrorCurve, window: StepWindow) -> Option<ConvergenceFit> {
    let (log_h, log_e): (Vec<f64>, Vec<f64>) = curve
        .points()
        .iter()
        .filter(|p| window.contains(p.h()))
        .filter(|p| p.relative_error().is_finite() && p.relative_error() > 0.0)
        .map(|p| (p.h().log10(), p.relative_error().log10()))
        .unzip();

    let n = log_h.len();
    if n < 2 || log_h.iter().all(|&v| v == log_h[0]) {
        return None;
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { 1.0 } else { log_h[i] });
    let observed = DVector::from_vec(log_e);
    let normal = design.transpose() * &design;
    let rhs = design.transpose() * observed;
    let solution = normal.lu().solve(&rhs)?;

    Some(ConvergenceFit {
        order: solution[1],
        log10_coefficient: solution[0],
        points_used: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::differentiation::derivativeestimator::DerivativeEstimator;
    use crate::math::differentiation::errorcurve::ErrorCurveBuilder;
    use crate::math::differentiation::evaluationfunction::EvaluationFunction;
    use crate::math::differentiation::stepsizesweep::StepSizeSweep;

    #[test]
    fn top_decades_window() {
        let window = StepWindow::top_decades(0.1, 2.0);
        assert!((window.min - 1e-3).abs() < 1e-18);
        assert!(window.contains(0.1));
        assert!(!window.contains(1e-4));
    }

    #[test]
    fn window_without_points_yields_no_fit() {
        let exp = EvaluationFunction::new("exp", f64::exp, f64::exp);
        let sweep = StepSizeSweep::new(1e-3, 1e-1, 10).unwrap();
        let curve = ErrorCurveBuilder::new(DerivativeEstimator::Forward)
            .build(&exp, 1.0, &sweep)
            .unwrap();
        assert!(fit_convergence_order(&curve, StepWindow::new(1.0, 2.0)).is_none());
        assert!(fit_convergence_order(&curve, StepWindow::new(1e-3, 1e-3)).is_none());
    }
}
