use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::grid2d::{DomainExtents2D, GridDimensions2D};
use crate::error::ConfigError;
use crate::poisson::PoissonProblem;
use crate::scenario::{self, REFERENCE_LX, REFERENCE_LY, REFERENCE_M, REFERENCE_N};
use crate::solver::{SolverConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    #[default]
    Reference,
    Analytic,
}

impl ScenarioKind {
    /// The reference edges are fixed functions; the analytic ones follow `extents`.
    pub fn problem(&self, extents: DomainExtents2D) -> PoissonProblem {
        match self {
            ScenarioKind::Reference => scenario::reference_problem(),
            ScenarioKind::Analytic => scenario::analytic_problem(extents),
        }
    }
}

/// Run parameters. Every field is optional in the JSON; missing ones take the
/// reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub scenario: ScenarioKind,
    pub n: usize,
    pub m: usize,
    pub lx: f64,
    pub ly: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub output_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scenario: ScenarioKind::Reference,
            n: REFERENCE_N,
            m: REFERENCE_M,
            lx: REFERENCE_LX,
            ly: REFERENCE_LY,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            output_path: None,
        }
    }
}

impl RunConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading run config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.extents()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.solver_config()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    pub fn dimensions(&self) -> GridDimensions2D {
        GridDimensions2D(self.n, self.m)
    }

    pub fn extents(&self) -> DomainExtents2D {
        DomainExtents2D(self.lx, self.ly)
    }

    pub fn problem(&self) -> PoissonProblem {
        self.scenario.problem(self.extents())
    }

    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::analytic_solution;
    use crate::solver::GaussSeidelSolver;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = RunConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.dimensions(), GridDimensions2D(50, 25));
        assert_eq!(config.extents(), DomainExtents2D(2.0, 1.0));
        assert_eq!(config.solver_config(), SolverConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = RunConfig::from_json_str(
            r#"{ "n": 10, "tolerance": 1e-9, "scenario": "analytic", "output_path": "out/u.json" }"#,
        )
        .unwrap();
        assert_eq!(config.n, 10);
        assert_eq!(config.m, REFERENCE_M);
        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.scenario, ScenarioKind::Analytic);
        assert_eq!(config.output_path.as_deref(), Some("out/u.json"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(RunConfig::from_json_str(r#"{ "n": 0 }"#), Err(ConfigError::Invalid(_))));
        assert!(matches!(RunConfig::from_json_str(r#"{ "ly": -1.0 }"#), Err(ConfigError::Invalid(_))));
        assert!(matches!(RunConfig::from_json_str(r#"{ "tolerance": 0.0 }"#), Err(ConfigError::Invalid(_))));
        assert!(matches!(RunConfig::from_json_str(r#"{ "max_iterations": 0 }"#), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(RunConfig::from_json_str("{ n: 3"), Err(ConfigError::Parse(_))));
        assert!(matches!(RunConfig::from_json_str(r#"{ "scenario": "bogus" }"#), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("run.json");
        let mut file = std::fs::File::create(&path)?;
        file.write_all(br#"{ "n": 8, "m": 4 }"#)?;
        drop(file);

        let config = RunConfig::from_json_file(&path)?;
        assert_eq!(config.dimensions(), GridDimensions2D(8, 4));

        assert!(matches!(
            RunConfig::from_json_file(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
        Ok(())
    }

    #[test]
    fn test_scenario_problem() {
        let extents = DomainExtents2D(2.0, 1.0);
        assert!(ScenarioKind::Reference.problem(extents).is_laplace());
        let problem = ScenarioKind::Analytic.problem(extents);
        assert!(!problem.is_laplace());
        assert_eq!(problem.boundary.top(0.0), 0.0);
    }

    #[test]
    fn test_analytic_run_with_custom_extents() {
        let config = RunConfig::from_json_str(
            r#"{ "scenario": "analytic", "n": 30, "m": 10, "lx": 3.0, "ly": 0.5 }"#,
        )
        .unwrap();
        let solver = GaussSeidelSolver::new(config.solver_config()).unwrap();
        let solution = solver.solve(config.dimensions(), config.extents(), &config.problem()).unwrap();
        assert!(solution.report.converged);
        assert!(solution.buffer.max_error(analytic_solution) < 1e-3);
    }
}
