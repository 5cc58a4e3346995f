use std::fmt;
use std::sync::Arc;

/// 實數函數 ℝ → ℝ。
///
/// `Send + Sync` 讓同一個函數可以在多個 case 之間跨執行緒共享。
pub type RealFunction = dyn Fn(f64) -> f64 + Send + Sync;

/// 受測函數：數值函數 f 與其解析導數 f'。
///
/// 兩者皆以 `Arc` 持有，clone 只複製指標；建構後不可變。
#[derive(Clone)]
pub struct EvaluationFunction {
    name: String,
    f: Arc<RealFunction>,
    f_prime: Arc<RealFunction>,
}

impl EvaluationFunction {
    pub fn new<F, D>(name: impl Into<String>, f: F, f_prime: D) -> EvaluationFunction
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        EvaluationFunction {
            name: name.into(),
            f: Arc::new(f),
            f_prime: Arc::new(f_prime),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    pub fn analytic_derivative(&self, x: f64) -> f64 {
        (self.f_prime)(x)
    }

    /// 提供給 estimator 使用的函數本體。
    pub fn function(&self) -> &RealFunction {
        self.f.as_ref()
    }
}

impl fmt::Debug for EvaluationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluationFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_callables() {
        let cos = EvaluationFunction::new("cos", f64::cos, |x: f64| -x.sin());
        let copy = cos.clone();
        assert_eq!(copy.name(), "cos");
        assert_eq!(copy.value(0.0), 1.0);
        assert_eq!(copy.analytic_derivative(0.0), 0.0);
        assert_eq!((copy.function())(0.0), cos.value(0.0));
    }
}
