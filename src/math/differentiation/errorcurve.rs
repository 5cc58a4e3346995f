use serde::Serialize;

use crate::math::differentiation::derivativeestimator::DerivativeEstimator;
use crate::math::differentiation::domainerror::DomainError;
use crate::math::differentiation::evaluationfunction::EvaluationFunction;
use crate::math::differentiation::stepsizesweep::StepSizeSweep;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorPoint {
    h: f64,
    relative_error: f64,
}

impl ErrorPoint {
    pub fn new(h: f64, relative_error: f64) -> ErrorPoint {
        ErrorPoint { h, relative_error }
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn relative_error(&self) -> f64 {
        self.relative_error
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ErrorCurve
// ─────────────────────────────────────────────────────────────────────────────

/// 單一 estimator 在整個 sweep 上的相對誤差，順序與 sweep 逐點對齊。
///
/// 非有限值（`Inf`/`NaN`）保留在曲線中，不做過濾。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorCurve {
    estimator: DerivativeEstimator,
    points: Vec<ErrorPoint>,
}

impl ErrorCurve {
    pub fn estimator(&self) -> DerivativeEstimator {
        self.estimator
    }

    pub fn points(&self) -> &[ErrorPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn steps(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.h).collect()
    }

    pub fn relative_errors(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.relative_error).collect()
    }

    pub fn finite_errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.points
            .iter()
            .map(|p| p.relative_error)
            .filter(|e| e.is_finite())
    }

    /// 誤差最小的有限點，也就是 U 形曲線的底部。
    pub fn minimum(&self) -> Option<ErrorPoint> {
        self.points
            .iter()
            .filter(|p| p.relative_error.is_finite())
            .copied()
            .min_by(|a, b| a.relative_error.total_cmp(&b.relative_error))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ErrorCurveBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// |estimate - analytic| / |analytic|；analytic 恰為 0 時回傳 `DomainError`。
pub fn relative_error(
    estimator: DerivativeEstimator,
    function: &EvaluationFunction,
    x: f64,
    h: f64,
) -> Result<f64, DomainError> {
    let analytic = nonzero_analytic_derivative(function, x)?;
    let estimate = estimator.estimate(function.function(), x, h);
    Ok(relative_error_against(estimate, analytic))
}

fn nonzero_analytic_derivative(function: &EvaluationFunction, x: f64) -> Result<f64, DomainError> {
    let analytic = function.analytic_derivative(x);
    if analytic == 0.0 {
        Err(DomainError::ZeroAnalyticDerivative { x })
    } else {
        Ok(analytic)
    }
}

#[inline]
fn relative_error_against(estimate: f64, analytic: f64) -> f64 {
    (estimate - analytic).abs() / analytic.abs()
}

#[derive(Debug, Clone, Copy)]
pub struct ErrorCurveBuilder {
    estimator: DerivativeEstimator,
}

impl ErrorCurveBuilder {
    pub fn new(estimator: DerivativeEstimator) -> ErrorCurveBuilder {
        ErrorCurveBuilder { estimator }
    }

    pub fn estimator(&self) -> DerivativeEstimator {
        self.estimator
    }

    pub fn build(
        &self,
        function: &EvaluationFunction,
        x: f64,
        sweep: &StepSizeSweep,
    ) -> Result<ErrorCurve, DomainError> {
        // 解析導數與 h 無關，只需計算一次
        let analytic = nonzero_analytic_derivative(function, x)?;
        let f = function.function();
        let points = sweep
            .iter()
            .map(|h| {
                let estimate = self.estimator.estimate(f, x, h);
                ErrorPoint::new(h, relative_error_against(estimate, analytic))
            })
            .collect();
        Ok(ErrorCurve { estimator: self.estimator, points })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve_from(errors: &[f64]) -> ErrorCurve {
        ErrorCurve {
            estimator: DerivativeEstimator::Central,
            points: errors
                .iter()
                .enumerate()
                .map(|(i, &e)| ErrorPoint::new(10f64.powi(i as i32 - 5), e))
                .collect(),
        }
    }

    #[test]
    fn minimum_skips_non_finite_points() {
        let curve = curve_from(&[f64::NAN, 1e-3, f64::NEG_INFINITY, 1e-7, 1e-2, f64::INFINITY]);
        let best = curve.minimum().unwrap();
        assert_eq!(best.relative_error(), 1e-7);
        assert_eq!(best.h(), curve.points()[3].h());
    }

    #[test]
    fn minimum_of_all_non_finite_curve_is_none() {
        assert!(curve_from(&[f64::NAN, f64::INFINITY]).minimum().is_none());
    }

    #[test]
    fn exact_estimate_has_exactly_zero_error() {
        assert_eq!(relative_error_against(2.5, 2.5), 0.0);
        assert!(relative_error_against(2.5, 2.0) > 0.0);
    }
}
