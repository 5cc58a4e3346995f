use std::io::Write;

use serde::Serialize;

use crate::math::differentiation::convergence::{
    fit_convergence_order,
    StepWindow
};
use crate::math::differentiation::derivativeestimator::DerivativeEstimator;
use crate::math::differentiation::errorcurve::{
    ErrorCurve,
    ErrorPoint
};
use crate::math::differentiation::stepsizesweep::StepSizeSweep;
use crate::math::differentiation::sweepresult::{
    DisplayRange,
    SweepResult
};
use crate::math::round::round_significant;
use crate::study::differentiationstudy::CaseOutcome;

// ─────────────────────────────────────────────────────────────────────────────
// 繪圖端的輸入格式
// ─────────────────────────────────────────────────────────────────────────────
//
// 每個 case 提供三條與 sweep 等長、逐點對齊的 (h, error) 序列，以及 y 軸範圍。
// 非有限的誤差在 JSON 中輸出為 null。

#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    h_min: f64,
    h_max: f64,
    n_points: usize,
    ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveReport {
    estimator: DerivativeEstimator,
    truncation_order: u32,
    steps: Vec<f64>,
    relative_errors: Vec<f64>,
    best_step: Option<ErrorPoint>,
    fitted_order: Option<f64>,
}

impl CurveReport {
    fn new(curve: &ErrorCurve, fit_window: StepWindow) -> CurveReport {
        CurveReport {
            estimator: curve.estimator(),
            truncation_order: curve.estimator().truncation_order(),
            steps: curve.steps(),
            relative_errors: curve.relative_errors(),
            best_step: curve.minimum(),
            fitted_order: fit_convergence_order(curve, fit_window).map(|fit| fit.order()),
        }
    }

    pub fn estimator(&self) -> DerivativeEstimator {
        self.estimator
    }

    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    pub fn relative_errors(&self) -> &[f64] {
        &self.relative_errors
    }

    pub fn best_step(&self) -> Option<ErrorPoint> {
        self.best_step
    }

    pub fn fitted_order(&self) -> Option<f64> {
        self.fitted_order
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    name: String,
    function: String,
    x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    display_range: DisplayRange,
    display_range_is_fallback: bool,
    curves: Vec<CurveReport>,
}

impl CaseReport {
    fn new(outcome: &CaseOutcome, fallback_range: DisplayRange, fit_window: StepWindow) -> CaseReport {
        match outcome.result() {
            Ok(result) => CaseReport::from_result(outcome.name(), result, fallback_range, fit_window),
            Err(err) => CaseReport {
                name: outcome.name().to_owned(),
                function: outcome.function_id().to_owned(),
                x: outcome.x(),
                error: Some(err.to_string()),
                display_range: fallback_range,
                display_range_is_fallback: true,
                curves: Vec::new(),
            },
        }
    }

    fn from_result(
        name: &str,
        result: &SweepResult,
        fallback_range: DisplayRange,
        fit_window: StepWindow,
    ) -> CaseReport {
        CaseReport {
            name: name.to_owned(),
            function: result.function_id().to_owned(),
            x: result.x(),
            error: None,
            display_range: result.display_range_or(fallback_range),
            display_range_is_fallback: result.display_range().is_none(),
            curves: result
                .curves()
                .iter()
                .map(|curve| CurveReport::new(curve, fit_window))
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn display_range(&self) -> DisplayRange {
        self.display_range
    }

    pub fn display_range_is_fallback(&self) -> bool {
        self.display_range_is_fallback
    }

    pub fn curves(&self) -> &[CurveReport] {
        &self.curves
    }

    /// 一行摘要，例如
    /// `exp @ 1: forward best 1.2e-8 at h=2.3e-8 (order 1.0); ...`
    pub fn summary(&self) -> String {
        if let Some(error) = &self.error {
            return format!("{}: rejected ({})", self.name, error);
        }
        let parts: Vec<String> = self.curves
            .iter()
            .map(|curve| {
                let best = match curve.best_step {
                    Some(p) => format!(
                        "best {:e} at h={:e}",
                        round_significant(p.relative_error(), 3),
                        round_significant(p.h(), 3)
                    ),
                    None => "no finite error".to_owned(),
                };
                let order = match curve.fitted_order {
                    Some(p) => format!("order {:.2}", p),
                    None => "order n/a".to_owned(),
                };
                format!("{} {} ({})", curve.estimator, best, order)
            })
            .collect();
        format!("{}: {}", self.name, parts.join("; "))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    sweep: SweepSummary,
    fit_window: StepWindow,
    cases: Vec<CaseReport>,
}

impl SweepReport {
    pub fn new(
        sweep: &StepSizeSweep,
        outcomes: &[CaseOutcome],
        fallback_range: DisplayRange,
        fit_window: StepWindow,
    ) -> SweepReport {
        SweepReport {
            sweep: SweepSummary {
                h_min: sweep.h_min(),
                h_max: sweep.h_max(),
                n_points: sweep.n_points(),
                ratio: sweep.ratio(),
            },
            fit_window,
            cases: outcomes
                .iter()
                .map(|outcome| CaseReport::new(outcome, fallback_range, fit_window))
                .collect(),
        }
    }

    pub fn cases(&self) -> &[CaseReport] {
        &self.cases
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
