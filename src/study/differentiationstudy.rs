use rayon::prelude::*;

use crate::math::differentiation::domainerror::DomainError;
use crate::math::differentiation::evaluationfunction::EvaluationFunction;
use crate::math::differentiation::stepsizesweep::StepSizeSweep;
use crate::math::differentiation::sweepresult::SweepResult;

#[derive(Debug, Clone)]
pub struct StudyCase {
    name: String,
    function: EvaluationFunction,
    x: f64,
}

impl StudyCase {
    pub fn new(name: impl Into<String>, function: EvaluationFunction, x: f64) -> StudyCase {
        StudyCase { name: name.into(), function, x }
    }

    /// 以 `"<function> @ <x>"` 命名。
    pub fn at(function: EvaluationFunction, x: f64) -> StudyCase {
        let name = format!("{} @ {}", function.name(), x);
        StudyCase::new(name, function, x)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &EvaluationFunction {
        &self.function
    }

    pub fn x(&self) -> f64 {
        self.x
    }
}

/// 單一 case 的結果。某個 case 的 `DomainError` 不會影響其他 case。
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    name: String,
    function_id: String,
    x: f64,
    result: Result<SweepResult, DomainError>,
}

impl CaseOutcome {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function_id(&self) -> &str {
        &self.function_id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn result(&self) -> &Result<SweepResult, DomainError> {
        &self.result
    }

    pub fn into_result(self) -> Result<SweepResult, DomainError> {
        self.result
    }
}

/// 一組共用同一個 sweep 的 (function, x) case。
pub struct DifferentiationStudy {
    sweep: StepSizeSweep,
    cases: Vec<StudyCase>,
}

impl DifferentiationStudy {
    pub fn new(sweep: StepSizeSweep, cases: Vec<StudyCase>) -> DifferentiationStudy {
        DifferentiationStudy { sweep, cases }
    }

    pub fn sweep(&self) -> &StepSizeSweep {
        &self.sweep
    }

    pub fn cases(&self) -> &[StudyCase] {
        &self.cases
    }

    /// 各 case 平行計算，輸出順序與 `cases` 相同。
    pub fn run(&self) -> Vec<CaseOutcome> {
        tracing::info!(
            target: "findiff::study",
            cases = self.cases.len(),
            n_points = self.sweep.n_points(),
            "running differentiation study"
        );
        let sweep = &self.sweep;
        self.cases
            .par_iter()
            .map(|case| Self::run_case(case, sweep))
            .collect()
    }

    fn run_case(case: &StudyCase, sweep: &StepSizeSweep) -> CaseOutcome {
        let result = SweepResult::aggregate(&case.function, case.x, sweep);
        match &result {
            Ok(sweep_result) => {
                tracing::debug!(
                    target: "findiff::study",
                    case = case.name.as_str(),
                    y_min = ?sweep_result.y_min(),
                    y_max = ?sweep_result.y_max(),
                    "case finished"
                );
            }
            Err(err) => {
                tracing::warn!(target: "findiff::study", case = case.name.as_str(), "case rejected: {err}");
            }
        }
        CaseOutcome {
            name: case.name.clone(),
            function_id: case.function.name().to_owned(),
            x: case.x,
            result,
        }
    }
}
