use thiserror::Error;

/// 輸入不合法時回傳的錯誤。
///
/// 數值退化（cancellation、overflow）不屬於這裡：那些會以 `Inf`/`NaN`
/// 留在 error curve 中，由呼叫方觀察。
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("minimum step size must be positive (got {0})")]
    NonPositiveMinimumStep(f64),

    #[error("step size bounds must be finite (got h_min = {h_min}, h_max = {h_max})")]
    NonFiniteBound { h_min: f64, h_max: f64 },

    #[error("maximum step size {h_max} must be greater than minimum step size {h_min}")]
    MaximumNotAboveMinimum { h_min: f64, h_max: f64 },

    #[error("a sweep needs at least 2 points (got {0})")]
    TooFewPoints(usize),

    #[error("bounds [{h_min}, {h_max}] are too close for {n_points} points: steps stop increasing")]
    DegenerateRatio { h_min: f64, h_max: f64, n_points: usize },

    #[error("analytic derivative is exactly zero at x = {x}; relative error is undefined")]
    ZeroAnalyticDerivative { x: f64 },
}
