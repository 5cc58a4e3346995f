use serde::{
    Deserialize,
    Serialize
};

// ─────────────────────────────────────────────────────────────────────────────
// 有限差分公式
// ─────────────────────────────────────────────────────────────────────────────
//
//   Forward:       D_f(h) = (f(x+h) - f(x)) / h                      O(h)
//   Central:       D_c(h) = (f(x+h/2) - f(x-h/2)) / h                O(h²)
//   Extrapolated:  D_e(h) = (4·D_c(h/2) - D_c(h)) / 3                O(h⁴)
//
// Extrapolated 是對 central 的 Richardson 外插：D_c 的誤差展開只含偶次項，
// 4·D_c(h/2) - D_c(h) 消去 h² 項。
//
// 三者皆為純函數，不保留任何狀態，也不回報錯誤。

pub fn forward_derivative<F>(f: &F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    (f(x + h) - f(x)) / h
}

pub fn central_derivative<F>(f: &F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    (f(x + h / 2.0) - f(x - h / 2.0)) / h
}

pub fn extrapolated_derivative<F>(f: &F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64 + ?Sized,
{
    (4.0 * central_derivative(f, x, h / 2.0) - central_derivative(f, x, h)) / 3.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivativeEstimator {
    Forward,
    Central,
    Extrapolated,
}

impl DerivativeEstimator {
    pub const ALL: [DerivativeEstimator; 3] = [
        DerivativeEstimator::Forward,
        DerivativeEstimator::Central,
        DerivativeEstimator::Extrapolated,
    ];

    pub fn estimate<F>(&self, f: &F, x: f64, h: f64) -> f64
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        match self {
            DerivativeEstimator::Forward => forward_derivative(f, x, h),
            DerivativeEstimator::Central => central_derivative(f, x, h),
            DerivativeEstimator::Extrapolated => extrapolated_derivative(f, x, h),
        }
    }

    /// 截斷誤差的階數 p，誤差 ~ O(h^p)。
    pub fn truncation_order(&self) -> u32 {
        match self {
            DerivativeEstimator::Forward => 1,
            DerivativeEstimator::Central => 2,
            DerivativeEstimator::Extrapolated => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DerivativeEstimator::Forward => "forward",
            DerivativeEstimator::Central => "central",
            DerivativeEstimator::Extrapolated => "extrapolated",
        }
    }
}

impl std::fmt::Display for DerivativeEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
