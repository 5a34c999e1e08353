//! Built-in problems: the reference one on `[0, 2] x [0, 1]` and an analytic one.
//!
//! The reference problem uses `left(y) = 0`, `right(y) = 2e^y`, `bottom(x) = x`,
//! `top(x) = e^x`. Its left/top and right/top corners disagree, so the corner
//! order of the grid matters there. The analytic problem is the Poisson
//! problem `∇²u = x * e^y` whose solution is `u(x, y) = x * e^y`, with edges
//! taken from that solution on any rectangle.

use crate::boundary::bc2d::SquareBoundary;
use crate::domain::grid2d::{DomainExtents2D, GridDimensions2D};
use crate::poisson::PoissonProblem;

pub const REFERENCE_N: usize = 50;
pub const REFERENCE_M: usize = 25;
pub const REFERENCE_LX: f64 = 2.0;
pub const REFERENCE_LY: f64 = 1.0;

pub fn reference_dimensions() -> GridDimensions2D {
    GridDimensions2D(REFERENCE_N, REFERENCE_M)
}

pub fn reference_extents() -> DomainExtents2D {
    DomainExtents2D(REFERENCE_LX, REFERENCE_LY)
}

pub fn reference_boundary() -> SquareBoundary {
    SquareBoundary::new(
        |_| 0.0,
        |y: f64| 2.0 * y.exp(),
        |x| x,
        |x: f64| x.exp(),
    )
}

pub fn reference_problem() -> PoissonProblem {
    PoissonProblem::laplace(reference_boundary())
}

/// `x * e^y`. Its Laplacian is itself, so it solves `∇²u = x * e^y`.
pub fn analytic_solution(x: f64, y: f64) -> f64 {
    x * y.exp()
}

/// `∇²u = x * e^y` on `[0, Lx] x [0, Ly]` with edges from `analytic_solution`.
pub fn analytic_problem(extents: DomainExtents2D) -> PoissonProblem {
    let DomainExtents2D(lx, ly) = extents;
    PoissonProblem::laplace(SquareBoundary::new(
        |y| analytic_solution(0.0, y),
        move |y| analytic_solution(lx, y),
        |x| analytic_solution(x, 0.0),
        move |x| analytic_solution(x, ly),
    ))
    .with_source(analytic_solution)
}
