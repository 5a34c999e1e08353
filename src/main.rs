use laplace_rs::config::{RunConfig, ScenarioKind};
use laplace_rs::json_io::SolutionWriter;
use laplace_rs::scenario::analytic_solution;
use laplace_rs::solver::GaussSeidelSolver;
use tracing::{info, Level};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Optional single argument: path to a JSON run config.
    let config = match std::env::args().nth(1) {
        Some(path) => RunConfig::from_json_file(path)?,
        None => RunConfig::default(),
    };

    let problem = config.problem();
    let solver = GaussSeidelSolver::new(config.solver_config())?;
    let solution = solver.solve(config.dimensions(), config.extents(), &problem)?;

    let report = &solution.report;
    info!(
        "Finished after {} sweeps, converged={}, max_diff={:.3e}, residual={:.3e}",
        report.iterations, report.converged, report.max_diff, report.residual
    );
    info!(
        "Interior values: {}, max |u| incl. boundary: {:.4}",
        solution.buffer.len(),
        solution.buffer.max_abs_value(&problem.boundary)
    );
    if config.scenario == ScenarioKind::Analytic {
        info!("Max error against x*e^y: {:.3e}", solution.buffer.max_error(analytic_solution));
    }

    if let Some(path) = &config.output_path {
        SolutionWriter::new(path)?.write(&solution, solver.config())?;
    }

    Ok(())
}
