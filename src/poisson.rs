use std::fmt;
use crate::boundary::bc2d::SquareBoundary;

/// Right-hand side `f(x, y)` of `∇²u = f`.
pub type SourceFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Dirichlet problem `∇²u = f` on a rectangle. Without a source it is Laplace's equation.
pub struct PoissonProblem {
    pub boundary: SquareBoundary,
    pub source: Option<SourceFn>,
}

impl PoissonProblem {
    pub fn laplace(boundary: SquareBoundary) -> Self {
        Self { boundary, source: None }
    }

    pub fn with_source<F>(mut self, f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        self.source = Some(Box::new(f));
        self
    }

    pub fn is_laplace(&self) -> bool {
        self.source.is_none()
    }

    #[inline]
    pub fn source_at(&self, x: f64, y: f64) -> f64 {
        match &self.source {
            Some(f) => f(x, y),
            None => 0.0,
        }
    }
}

impl fmt::Debug for PoissonProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoissonProblem")
            .field("boundary", &self.boundary)
            .field("source", &self.source.as_ref().map(|_| "f(x, y)"))
            .finish()
    }
}

/// Direct sparse LU solve of the same five-point system, used as a reference
/// for the iterative solver. Returns the interior values, `i` fastest.
#[cfg(test)]
pub(crate) fn solve_direct(
    problem: &PoissonProblem,
    n: usize,
    m: usize,
    lx: f64,
    ly: f64,
) -> Result<Vec<f64>, String> {
    use rsparse::data::{Sprs, Trpl};
    use rsparse::lusol;

    let ni = n - 1;
    let nj = m - 1;
    let size = ni * nj;
    if size == 0 {
        return Ok(Vec::new());
    }

    let h = lx / n as f64;
    let k = ly / m as f64;
    let h2 = 1.0 / (h * h);
    let k2 = 1.0 / (k * k);
    let bc = &problem.boundary;

    let mut collected_triplets: Vec<(usize, usize, f64)> = Vec::with_capacity(5 * size);
    let mut rhs = vec![0.0; size];

    for j in 1..m {
        for i in 1..n {
            let q = (i - 1) + (j - 1) * ni;
            let x = i as f64 * h;
            let y = j as f64 * k;

            collected_triplets.push((q, q, 2.0 * (h2 + k2)));
            rhs[q] = -problem.source_at(x, y);

            if i > 1 { collected_triplets.push((q, q - 1, -h2)); } else { rhs[q] += h2 * bc.left(y); }
            if i < n - 1 { collected_triplets.push((q, q + 1, -h2)); } else { rhs[q] += h2 * bc.right(y); }
            if j > 1 { collected_triplets.push((q, q - ni, -k2)); } else { rhs[q] += k2 * bc.bottom(x); }
            if j < m - 1 { collected_triplets.push((q, q + ni, -k2)); } else { rhs[q] += k2 * bc.top(x); }
        }
    }

    let num_triplets = collected_triplets.len();
    let mut trpl_mat = Trpl::<f64> {
        m: size,
        n: size,
        p: Vec::with_capacity(num_triplets),
        i: Vec::with_capacity(num_triplets),
        x: Vec::with_capacity(num_triplets),
    };
    for (row_idx, col_idx, value) in collected_triplets.iter() {
        trpl_mat.i.push(*row_idx);
        trpl_mat.p.push(*col_idx as isize);
        trpl_mat.x.push(*value);
    }

    let mut sprs_mat = Sprs::<f64>::new();
    sprs_mat.from_trpl(&trpl_mat);

    match lusol(&sprs_mat, &mut rhs, 1, 1e-10) {
        Ok(()) => Ok(rhs),
        Err(error_code) => Err(format!("Sparse LU solver failed with error code: {}", error_code)),
    }
}
