use crate::manager::manager::Manager;
use crate::math::differentiation::evaluationfunction::EvaluationFunction;


fn builtin_functions() -> Vec<EvaluationFunction> {
    vec![
        EvaluationFunction::new("exp", f64::exp, f64::exp),
        EvaluationFunction::new("cos", f64::cos, |x: f64| -x.sin()),
        EvaluationFunction::new("sin", f64::sin, f64::cos),
        EvaluationFunction::new("square", |x: f64| x * x, |x: f64| 2.0 * x),
        EvaluationFunction::new("cube", |x: f64| x * x * x, |x: f64| 3.0 * x * x),
    ]
}


pub struct FunctionManager;


impl FunctionManager {
    /// 已註冊所有內建函數的 manager，key 為函數名稱。
    pub fn new() -> Manager<EvaluationFunction> {
        let mut manager = Manager::new();
        for function in builtin_functions() {
            manager.insert(function.name().to_owned(), function);
        }
        manager
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::manager::IManager;
    use crate::manager::managererror::ManagerError;

    #[test]
    fn builtins_are_registered_by_name() {
        let manager = FunctionManager::new();
        assert_eq!(manager.names(), vec!["cos", "cube", "exp", "sin", "square"]);
        let cos = manager.get("cos").unwrap();
        assert_eq!(cos.analytic_derivative(0.0), -0.0);
    }

    #[test]
    fn unknown_name_is_reported() {
        let manager = FunctionManager::new();
        match manager.get("tan") {
            Err(ManagerError::NameNotFoundError(name)) => assert_eq!(name, "tan"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
