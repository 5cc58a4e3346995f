use serde::{
    Deserialize,
    Serialize
};

use crate::math::differentiation::derivativeestimator::DerivativeEstimator;
use crate::math::differentiation::domainerror::DomainError;
use crate::math::differentiation::errorcurve::{
    ErrorCurve,
    ErrorCurveBuilder
};
use crate::math::differentiation::evaluationfunction::EvaluationFunction;
use crate::math::differentiation::stepsizesweep::StepSizeSweep;

/// 繪圖時 y 軸的顯示範圍提示。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    pub fn new(min: f64, max: f64) -> DisplayRange {
        DisplayRange { min, max }
    }

    /// 在所有有限值中找 min/max；沒有任何有限值時回傳 `None`。
    pub fn of_finite<I>(values: I) -> Option<DisplayRange>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|y| y.is_finite())
            .fold(None, |range, y| match range {
                None => Some(DisplayRange::new(y, y)),
                Some(r) => Some(DisplayRange::new(r.min.min(y), r.max.max(y))),
            })
    }
}

/// 單一 (function, x) 的三條誤差曲線與共同的顯示範圍。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    function_id: String,
    x: f64,
    curve_forward: ErrorCurve,
    curve_central: ErrorCurve,
    curve_extrapolated: ErrorCurve,
    y_range: Option<DisplayRange>,
}

impl SweepResult {
    pub fn aggregate(
        function: &EvaluationFunction,
        x: f64,
        sweep: &StepSizeSweep,
    ) -> Result<SweepResult, DomainError> {
        let build = |estimator| ErrorCurveBuilder::new(estimator).build(function, x, sweep);
        let curve_forward = build(DerivativeEstimator::Forward)?;
        let curve_central = build(DerivativeEstimator::Central)?;
        let curve_extrapolated = build(DerivativeEstimator::Extrapolated)?;

        let y_range = DisplayRange::of_finite(
            curve_forward
                .finite_errors()
                .chain(curve_central.finite_errors())
                .chain(curve_extrapolated.finite_errors()),
        );

        Ok(SweepResult {
            function_id: function.name().to_owned(),
            x,
            curve_forward,
            curve_central,
            curve_extrapolated,
            y_range,
        })
    }

    pub fn function_id(&self) -> &str {
        &self.function_id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn curve(&self, estimator: DerivativeEstimator) -> &ErrorCurve {
        match estimator {
            DerivativeEstimator::Forward => &self.curve_forward,
            DerivativeEstimator::Central => &self.curve_central,
            DerivativeEstimator::Extrapolated => &self.curve_extrapolated,
        }
    }

    pub fn curves(&self) -> [&ErrorCurve; 3] {
        [&self.curve_forward, &self.curve_central, &self.curve_extrapolated]
    }

    pub fn y_min(&self) -> Option<f64> {
        self.y_range.map(|r| r.min)
    }

    pub fn y_max(&self) -> Option<f64> {
        self.y_range.map(|r| r.max)
    }

    pub fn display_range(&self) -> Option<DisplayRange> {
        self.y_range
    }

    pub fn display_range_or(&self, fallback: DisplayRange) -> DisplayRange {
        self.y_range.unwrap_or(fallback)
    }
}
