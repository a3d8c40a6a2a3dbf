//! Benchmark summary of a solved instance.
//!
//! A [`SolveReport`] carries everything a results table needs: the found
//! cost, an optional known optimum with the relative deviation, run time,
//! and the fleet actually used. The search itself never looks at the
//! optimum; a missing baseline just leaves those fields empty.

use std::time::Duration;

use serde::Serialize;

use crate::tabu::TabuResult;

/// One row of benchmark output.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cvrp_tabu::models::{Node, ProblemInstance};
/// use cvrp_tabu::distance::DistanceMatrix;
/// use cvrp_tabu::report::SolveReport;
/// use cvrp_tabu::tabu::{TabuConfig, TabuSearch};
///
/// let instance = ProblemInstance::from_nodes(
///     1,
///     20,
///     &[
///         Node::depot(1, 0.0, 0.0),
///         Node::new(2, 1.0, 0.0, 10),
///         Node::new(3, 2.0, 0.0, 10),
///     ],
/// )
/// .unwrap()
/// .with_name("L-n3-k1");
/// let dm = DistanceMatrix::from_instance(&instance);
/// let config = TabuConfig::default().with_max_iter(5).with_seed(1);
/// let result = TabuSearch::new(&instance, &dm, config).unwrap().run();
///
/// let report = SolveReport::from_result(&result, Duration::from_millis(250))
///     .with_optimal_cost(Some(4.0));
/// assert_eq!(report.problem_type, "L");
/// assert_eq!(report.num_vehicles, 1);
/// assert_eq!(report.deviation_pct, Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    /// Instance name.
    pub instance_name: String,
    /// Benchmark family: the part of the name before the first `-`.
    pub problem_type: String,
    /// Number of nodes, depot included.
    pub dimension: usize,
    /// Known optimal cost, if a baseline was available.
    pub optimal_cost: Option<f64>,
    /// Cost of the best solution found.
    pub found_cost: f64,
    /// `100 × (found − optimal) / optimal`, when the optimum is positive.
    pub deviation_pct: Option<f64>,
    /// Wall-clock seconds measured by the caller.
    pub execution_time_secs: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Non-empty routes in the best solution.
    pub num_vehicles: usize,
    /// Load of each vehicle.
    pub vehicle_loads: Vec<i32>,
}

impl SolveReport {
    /// Summarises a finished run.
    pub fn from_result(result: &TabuResult<'_>, elapsed: Duration) -> Self {
        let best = &result.best;
        let name = best.instance().name().to_string();
        let problem_type = name.split('-').next().unwrap_or_default().to_string();
        Self {
            problem_type,
            instance_name: name,
            dimension: best.instance().dimension(),
            optimal_cost: None,
            found_cost: result.best_cost,
            deviation_pct: None,
            execution_time_secs: elapsed.as_secs_f64(),
            iterations: result.iterations,
            num_vehicles: best.num_vehicles(),
            vehicle_loads: best.vehicle_loads(),
        }
    }

    /// Attaches a known optimal cost and the resulting deviation.
    pub fn with_optimal_cost(mut self, optimal: Option<f64>) -> Self {
        self.optimal_cost = optimal;
        self.deviation_pct = optimal.and_then(|opt| deviation_pct(self.found_cost, opt));
        self
    }
}

/// Relative gap to a known optimum in percent; `None` unless `optimal > 0`.
pub fn deviation_pct(found: f64, optimal: f64) -> Option<f64> {
    (optimal > 0.0).then(|| 100.0 * (found - optimal) / optimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Node, ProblemInstance};
    use crate::tabu::{TabuConfig, TabuSearch};

    fn instance() -> ProblemInstance {
        let mut nodes = vec![Node::depot(1, 0.0, 0.0)];
        nodes.extend((2..=5).map(|i| Node::new(i, (i - 1) as f64, 0.0, 10)));
        ProblemInstance::from_nodes(1, 20, &nodes)
            .expect("valid")
            .with_name("P-n5-k2")
    }

    #[test]
    fn test_deviation() {
        assert_eq!(deviation_pct(110.0, 100.0), Some(10.0));
        assert_eq!(deviation_pct(100.0, 100.0), Some(0.0));
        assert_eq!(deviation_pct(5.0, 0.0), None);
        assert_eq!(deviation_pct(5.0, -1.0), None);
    }

    #[test]
    fn test_report_fields() {
        let inst = instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let config = TabuConfig::default().with_max_iter(10).with_seed(3);
        let result = TabuSearch::new(&inst, &dm, config).expect("valid").run();
        let report = SolveReport::from_result(&result, Duration::from_secs(2));

        assert_eq!(report.instance_name, "P-n5-k2");
        assert_eq!(report.problem_type, "P");
        assert_eq!(report.dimension, 5);
        assert_eq!(report.iterations, 10);
        assert_eq!(report.num_vehicles, 2);
        assert_eq!(report.vehicle_loads, vec![20, 20]);
        assert!((report.found_cost - 12.0).abs() < 1e-10);
        assert_eq!(report.execution_time_secs, 2.0);
        assert_eq!(report.optimal_cost, None);
        assert_eq!(report.deviation_pct, None);
    }

    #[test]
    fn test_missing_baseline_is_not_an_error() {
        let inst = instance();
        let dm = DistanceMatrix::from_instance(&inst);
        let config = TabuConfig::default().with_max_iter(1).with_seed(3);
        let result = TabuSearch::new(&inst, &dm, config).expect("valid").run();
        let report = SolveReport::from_result(&result, Duration::ZERO).with_optimal_cost(None);
        assert_eq!(report.deviation_pct, None);

        let json = serde_json::to_value(&report).expect("serializable");
        assert!(json["optimal_cost"].is_null());
        assert_eq!(json["num_vehicles"], 2);
    }
}
