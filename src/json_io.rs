// src/json_io.rs

use crate::solver::{Solution, SolverConfig};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Serialize, Debug)]
struct Metadata {
    n: usize,
    m: usize,
    lx: f64,
    ly: f64,
    h: f64,
    k: f64,
    iterations: usize,
    converged: bool,
    max_diff: f64,
    residual: f64,
    tolerance: f64,
    max_iterations: usize,
    layout: &'static str,
}

#[derive(Serialize, Debug)]
struct SolutionOutput<'a> {
    metadata: Metadata,
    values: &'a [f32],
}

/// Writes a solved interior buffer and its run metadata as pretty JSON.
#[derive(Debug)]
pub struct SolutionWriter {
    pub output_filepath: PathBuf,
}

impl SolutionWriter {
    /// Ensures the parent directory for the output file exists.
    pub fn new<P: AsRef<Path>>(output_filepath: P) -> Result<Self, io::Error> {
        let path = output_filepath.as_ref();
        if let Some(parent_dir) = path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir)?;
                info!("Ensured output directory exists: {}", parent_dir.display());
            }
        }
        Ok(Self { output_filepath: path.to_path_buf() })
    }

    pub fn write(&self, solution: &Solution, config: &SolverConfig) -> Result<(), io::Error> {
        info!("Writing solution to JSON file: {}...", self.output_filepath.display());
        let output_start = Instant::now();

        let buffer = &solution.buffer;
        let dims = buffer.dimensions();
        let extents = buffer.extents();
        let cell = buffer.cell_size();
        let metadata = Metadata {
            n: dims.0,
            m: dims.1,
            lx: extents.0,
            ly: extents.1,
            h: cell.0,
            k: cell.1,
            iterations: solution.report.iterations,
            converged: solution.report.converged,
            max_diff: solution.report.max_diff,
            residual: solution.report.residual,
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
            layout: "i-fastest",
        };
        let output = SolutionOutput { metadata, values: buffer.values() };

        let json_string = serde_json::to_string_pretty(&output).map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Failed to serialize solution to JSON: {}", e))
        })?;
        let file = File::create(&self.output_filepath)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_string.as_bytes())?;
        writer.flush()?;

        info!("JSON output finished in {}ms", output_start.elapsed().as_millis());
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::grid2d::{DomainExtents2D, GridDimensions2D};
    use crate::scenario::reference_problem;
    use crate::solver::GaussSeidelSolver;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn test_writer_new_creates_dir() -> io::Result<()> {
        let dir = tempdir()?;
        let filepath = dir.path().join("subdir").join("solution.json");
        assert!(!dir.path().join("subdir").exists());
        let writer = SolutionWriter::new(&filepath)?;
        assert!(dir.path().join("subdir").exists());
        assert_eq!(writer.output_filepath, filepath);
        dir.close()?;
        Ok(())
    }

    #[test]
    fn test_write_solution() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let filepath = dir.path().join("solution.json");

        let config = SolverConfig::default();
        let solver = GaussSeidelSolver::new(config)?;
        let solution = solver.solve(GridDimensions2D(4, 3), DomainExtents2D(2.0, 1.0), &reference_problem())?;

        let writer = SolutionWriter::new(&filepath)?;
        writer.write(&solution, &config)?;

        let content = fs::read_to_string(&filepath)?;
        let output: serde_json::Value = serde_json::from_str(&content)?;
        assert_eq!(output["metadata"]["n"], 4);
        assert_eq!(output["metadata"]["m"], 3);
        assert_eq!(output["metadata"]["layout"], "i-fastest");
        assert_eq!(output["metadata"]["converged"], true);
        assert_eq!(output["metadata"]["iterations"], solution.report.iterations);
        assert!(output["metadata"]["residual"].is_number());

        let values = output["values"].as_array().unwrap();
        assert_eq!(values.len(), 6);
        for (v, expected) in values.iter().zip(solution.buffer.values()) {
            assert_relative_eq!(v.as_f64().unwrap(), *expected as f64, epsilon = 1e-6);
        }
        dir.close()?;
        Ok(())
    }
}
