pub mod gauss_seidel;

use nalgebra::DMatrix;
use tracing::{debug, info, info_span, warn};

use crate::domain::grid2d::{DomainExtents2D, Grid2D, GridDimensions2D};
use crate::error::SolverError;
use crate::numerical::StencilCoefficients;
use crate::poisson::PoissonProblem;
use crate::solution::SolutionBuffer;
use gauss_seidel::{max_residual, sweep};

/// Sweep-to-sweep change below which the iteration stops.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;
/// Sweep cap; reaching it returns the current estimate unconverged.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

const PROGRESS_INTERVAL: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), SolverError> {
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(SolverError::InvalidParameter(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// What happened during a solve. `residual_history[s]` is the max change of sweep `s`;
/// `residual` is the largest `|∇²u - f|` of the final iterate.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub iterations: usize,
    pub max_diff: f64,
    pub converged: bool,
    pub residual: f64,
    pub residual_history: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct Solution {
    pub buffer: SolutionBuffer,
    pub report: SolveReport,
}

/// Gauss-Seidel relaxation of the five-point stencil with Dirichlet edges.
#[derive(Debug, Clone)]
pub struct GaussSeidelSolver {
    config: SolverConfig,
}

impl GaussSeidelSolver {
    pub fn new(config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Fresh grid with boundary values written and the interior seeded.
    pub fn prepare_grid(
        &self,
        dimensions: GridDimensions2D,
        extents: DomainExtents2D,
        problem: &PoissonProblem,
    ) -> Result<Grid2D, SolverError> {
        let mut grid = Grid2D::new(dimensions, extents)?;
        grid.apply_dirichlet_bcs(&problem.boundary);
        grid.seed_interior();
        Ok(grid)
    }

    /// Runs sweeps on `grid` until the change drops below the tolerance or the cap is hit.
    pub fn iterate(&self, grid: &mut Grid2D, problem: &PoissonProblem) -> SolveReport {
        let GridDimensions2D(n, m) = grid.dimensions;
        if n < 2 || m < 2 {
            debug!("No interior nodes, nothing to iterate");
            return SolveReport {
                iterations: 0,
                max_diff: 0.0,
                converged: true,
                residual: 0.0,
                residual_history: Vec::new(),
            };
        }

        let coeffs = StencilCoefficients::new(grid.cell_size);
        let source = self.sample_source(grid, problem);

        let mut history = Vec::new();
        let mut max_diff = f64::INFINITY;
        let mut converged = false;

        for iter in 0..self.config.max_iterations {
            max_diff = sweep(&mut grid.u, &coeffs, source.as_ref());
            history.push(max_diff);

            if (iter + 1) % PROGRESS_INTERVAL == 0 {
                debug!("Sweep {}: max_diff={:.3e}", iter + 1, max_diff);
            }
            if max_diff < self.config.tolerance {
                converged = true;
                break;
            }
        }

        let iterations = history.len();
        let residual = max_residual(&grid.u, &coeffs, source.as_ref());
        if converged {
            info!("Converged in {} sweeps (max_diff {:.3e}, residual {:.3e})", iterations, max_diff, residual);
        } else {
            warn!(
                "Sweep cap {} reached without convergence (max_diff {:.3e}, residual {:.3e}, tolerance {:.1e})",
                self.config.max_iterations, max_diff, residual, self.config.tolerance
            );
        }

        SolveReport {
            iterations,
            max_diff,
            converged,
            residual,
            residual_history: history,
        }
    }

    pub fn solve(
        &self,
        dimensions: GridDimensions2D,
        extents: DomainExtents2D,
        problem: &PoissonProblem,
    ) -> Result<Solution, SolverError> {
        let _span = info_span!("gauss_seidel_solve", n = dimensions.0, m = dimensions.1).entered();

        let mut grid = self.prepare_grid(dimensions, extents, problem)?;
        info!(
            "Solving {} problem on {}x{} divisions, h={:.4}, k={:.4}",
            if problem.is_laplace() { "Laplace" } else { "Poisson" },
            dimensions.0, dimensions.1, grid.cell_size.0, grid.cell_size.1
        );

        let report = self.iterate(&mut grid, problem);
        let buffer = SolutionBuffer::from_grid(&grid);
        Ok(Solution { buffer, report })
    }

    fn sample_source(&self, grid: &Grid2D, problem: &PoissonProblem) -> Option<DMatrix<f64>> {
        let f = problem.source.as_ref()?;
        let (rows, cols) = grid.u.shape();
        Some(DMatrix::from_fn(rows, cols, |i, j| f(grid.x(i), grid.y(j))))
    }
}

/// Solves with the default tolerance and sweep cap.
pub fn solve(
    dimensions: GridDimensions2D,
    extents: DomainExtents2D,
    problem: &PoissonProblem,
) -> Result<Solution, SolverError> {
    GaussSeidelSolver::new(SolverConfig::default())?.solve(dimensions, extents, problem)
}
