use nalgebra::DMatrix;
use crate::numerical::StencilCoefficients;

/// One Gauss-Seidel sweep over the interior of `u`, in place.
///
/// Scan order is `i` outer, `j` inner; updates read neighbours already
/// refreshed in this sweep. Returns the largest absolute change.
pub fn sweep(u: &mut DMatrix<f64>, coeffs: &StencilCoefficients, source: Option<&DMatrix<f64>>) -> f64 {
    let n = u.nrows() - 1;
    let m = u.ncols() - 1;
    let mut max_diff: f64 = 0.0;

    for i in 1..n {
        for j in 1..m {
            let old = u[(i, j)];
            let f = source.map_or(0.0, |s| s[(i, j)]);
            let new = coeffs.point_update(u[(i + 1, j)], u[(i - 1, j)], u[(i, j + 1)], u[(i, j - 1)], f);
            u[(i, j)] = new;
            max_diff = max_diff.max((new - old).abs());
        }
    }
    max_diff
}

/// Largest `|∇²u - f|` of the five-point stencil over the interior of `u`.
pub fn max_residual(u: &DMatrix<f64>, coeffs: &StencilCoefficients, source: Option<&DMatrix<f64>>) -> f64 {
    let n = u.nrows() - 1;
    let m = u.ncols() - 1;
    let mut residual: f64 = 0.0;

    for i in 1..n {
        for j in 1..m {
            let f = source.map_or(0.0, |s| s[(i, j)]);
            let lap = coeffs.laplacian(u[(i, j)], u[(i + 1, j)], u[(i - 1, j)], u[(i, j + 1)], u[(i, j - 1)]);
            residual = residual.max((lap - f).abs());
        }
    }
    residual
}
