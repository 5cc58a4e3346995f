use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};

use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::math::differentiation::convergence::StepWindow;
use crate::math::differentiation::evaluationfunction::EvaluationFunction;
use crate::math::differentiation::stepsizesweep::SweepBounds;
use crate::math::differentiation::sweepresult::DisplayRange;
use crate::study::differentiationstudy::{
    DifferentiationStudy,
    StudyCase
};


/// 所有誤差都不是有限值時，繪圖端使用的 y 軸範圍。
pub const DEFAULT_FALLBACK_RANGE: DisplayRange = DisplayRange { min: 1e-16, max: 1.0 };

/// 未指定 `fit_window` 時，取 sweep 最上面一個數量級做收斂階數回歸。
pub const DEFAULT_FIT_DECADES: f64 = 1.0;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseConfiguration {
    #[serde(default)]
    pub name: Option<String>,
    pub function: String,
    pub x: f64,
}

impl CaseConfiguration {
    pub fn new(function: impl Into<String>, x: f64) -> CaseConfiguration {
        CaseConfiguration { name: None, function: function.into(), x }
    }
}


/// 一次 differentiation study 的設定，可由 JSON 檔讀入：
///
/// ```json
/// {
///   "sweep": { "h_min": 1e-12, "h_max": 0.1, "n_points": 200 },
///   "cases": [ { "function": "exp", "x": 1.0 } ],
///   "fallback_range": { "min": 1e-16, "max": 1.0 },
///   "fit_window": { "min": 1e-3, "max": 0.1 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    sweep: SweepBounds,
    cases: Vec<CaseConfiguration>,
    #[serde(default)]
    fallback_range: Option<DisplayRange>,
    #[serde(default)]
    fit_window: Option<StepWindow>,
}


impl Configuration {
    pub fn new(sweep: SweepBounds, cases: Vec<CaseConfiguration>) -> Configuration {
        Configuration { sweep, cases, fallback_range: None, fit_window: None }
    }

    /// exp(x) 與 cos(x) 各在 x = 0.1, 1, 100 求導，h 從 1e-12 到 1e-1 共 200 點。
    pub fn demo() -> Configuration {
        let points = [0.1, 1.0, 100.0];
        let cases = ["exp", "cos"]
            .iter()
            .flat_map(|function| points.iter().map(move |&x| CaseConfiguration::new(*function, x)))
            .collect();
        Configuration::new(SweepBounds::new(1e-12, 1e-1, 200), cases)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_json(json_value)
    }

    /// 只解析 JSON；sweep 的邊界在 `build_study` 建立步長序列時才驗證。
    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        ManagerError::from_json_or_json_parse_error(json_value)
    }

    pub fn with_fallback_range(mut self, fallback_range: DisplayRange) -> Configuration {
        self.fallback_range = Some(fallback_range);
        self
    }

    pub fn with_fit_window(mut self, fit_window: StepWindow) -> Configuration {
        self.fit_window = Some(fit_window);
        self
    }

    pub fn sweep(&self) -> SweepBounds {
        self.sweep
    }

    pub fn cases(&self) -> &[CaseConfiguration] {
        &self.cases
    }

    pub fn fallback_range(&self) -> DisplayRange {
        self.fallback_range.unwrap_or(DEFAULT_FALLBACK_RANGE)
    }

    pub fn fit_window(&self) -> StepWindow {
        self.fit_window
            .unwrap_or_else(|| StepWindow::top_decades(self.sweep.h_max, DEFAULT_FIT_DECADES))
    }

    /// 驗證 sweep 並以 `functions` 解析函數名稱，建立 study。
    pub fn build_study<M>(&self, functions: &M) -> Result<DifferentiationStudy, ManagerError>
    where
        M: IManager<EvaluationFunction>,
    {
        let sweep = self.sweep.sweep()?;
        let cases = self.cases
            .iter()
            .map(|case| {
                let function = functions.get(&case.function)?;
                Ok(match &case.name {
                    Some(name) => StudyCase::new(name.clone(), function, case.x),
                    None => StudyCase::at(function, case.x),
                })
            })
            .collect::<Result<Vec<StudyCase>, ManagerError>>()?;
        Ok(DifferentiationStudy::new(sweep, cases))
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::demo()
    }
}
