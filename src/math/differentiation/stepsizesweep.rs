use serde::{
    Deserialize,
    Serialize
};

use crate::math::differentiation::domainerror::DomainError;

/// 尚未驗證的 sweep 設定，JSON 中的 `{ "h_min", "h_max", "n_points" }`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepBounds {
    pub h_min: f64,
    pub h_max: f64,
    pub n_points: usize,
}

impl SweepBounds {
    pub fn new(h_min: f64, h_max: f64, n_points: usize) -> SweepBounds {
        SweepBounds { h_min, h_max, n_points }
    }

    pub fn sweep(&self) -> Result<StepSizeSweep, DomainError> {
        StepSizeSweep::new(self.h_min, self.h_max, self.n_points)
    }
}

impl TryFrom<SweepBounds> for StepSizeSweep {
    type Error = DomainError;

    fn try_from(bounds: SweepBounds) -> Result<Self, Self::Error> {
        bounds.sweep()
    }
}

/// 對數等距的步長序列 h_min, h_min·r, h_min·r², …
///
/// 相鄰兩項比值 r 固定，序列嚴格遞增。建構時即驗證邊界，
/// 建構後不可變，可在多個 case 之間唯讀共享。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SweepBounds")]
pub struct StepSizeSweep {
    h_min: f64,
    h_max: f64,
    n_points: usize,
    #[serde(skip)]
    ratio: f64,
    #[serde(skip)]
    steps: Vec<f64>,
}

impl StepSizeSweep {
    pub fn new(h_min: f64, h_max: f64, n_points: usize) -> Result<StepSizeSweep, DomainError> {
        let ratio = Self::checked_ratio(h_min, h_max, n_points)?;
        let mut steps = Vec::with_capacity(n_points);
        let mut h = h_min;
        steps.push(h);
        for _ in 1..n_points {
            let next = h * ratio;
            // 次正規數附近 h·r 可能捨入回 h 本身
            if next <= h {
                return Err(DomainError::DegenerateRatio { h_min, h_max, n_points });
            }
            steps.push(next);
            h = next;
        }
        Ok(StepSizeSweep { h_min, h_max, n_points, ratio, steps })
    }

    pub fn generate(h_min: f64, h_max: f64, n_points: usize) -> Result<Vec<f64>, DomainError> {
        StepSizeSweep::new(h_min, h_max, n_points).map(|sweep| sweep.steps)
    }

    /// r = exp((ln h_max - ln h_min) / (n - 1))，必須嚴格大於 1。
    /// 逐項是否嚴格遞增另於 `new` 中檢查。
    fn checked_ratio(h_min: f64, h_max: f64, n_points: usize) -> Result<f64, DomainError> {
        if !h_min.is_finite() || !h_max.is_finite() {
            return Err(DomainError::NonFiniteBound { h_min, h_max });
        }
        if h_min <= 0.0 {
            return Err(DomainError::NonPositiveMinimumStep(h_min));
        }
        if h_max <= h_min {
            return Err(DomainError::MaximumNotAboveMinimum { h_min, h_max });
        }
        if n_points < 2 {
            return Err(DomainError::TooFewPoints(n_points));
        }
        let ratio = ((h_max.ln() - h_min.ln()) / (n_points - 1) as f64).exp();
        if ratio <= 1.0 {
            return Err(DomainError::DegenerateRatio { h_min, h_max, n_points });
        }
        Ok(ratio)
    }

    pub fn bounds(&self) -> SweepBounds {
        SweepBounds::new(self.h_min, self.h_max, self.n_points)
    }

    pub fn h_min(&self) -> f64 {
        self.h_min
    }

    pub fn h_max(&self) -> f64 {
        self.h_max
    }

    pub fn n_points(&self) -> usize {
        self.n_points
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().copied()
    }
}
