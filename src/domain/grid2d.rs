use nalgebra::DMatrix;
use crate::boundary::bc2d::SquareBoundary;
use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions2D(pub usize, pub usize); // n, m (divisions along x, y)

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainExtents2D(pub f64, pub f64); // Lx, Ly

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize2D(pub f64, pub f64); // h, k

impl GridDimensions2D {
    /// Number of interior nodes, `(n-1) * (m-1)`.
    pub fn interior_len(&self) -> usize {
        self.0.saturating_sub(1) * self.1.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        let GridDimensions2D(n, m) = *self;
        if n < 1 || m < 1 {
            return Err(GridError::InvalidGridSize(format!(
                "divisions (n, m) must both be positive, got ({}, {})",
                n, m
            )));
        }
        Ok(())
    }
}

impl DomainExtents2D {
    pub fn validate(&self) -> Result<(), GridError> {
        let DomainExtents2D(lx, ly) = *self;
        if !(lx.is_finite() && ly.is_finite()) || lx <= 0.0 || ly <= 0.0 {
            return Err(GridError::InvalidExtents(format!(
                "extents (Lx, Ly) must be positive and finite, got ({}, {})",
                lx, ly
            )));
        }
        Ok(())
    }
}

/// Node-centred grid over `[0, Lx] x [0, Ly]`.
///
/// `u` is `(n+1) x (m+1)`; row `i` is the node at `x = i*h`, column `j` the node
/// at `y = j*k`. Rows `0`, `n` and columns `0`, `m` are the Dirichlet boundary.
///
/// ```text
///   j=m  T - T - T - T - T
///        |   |   |   |   |
///        L - • - • - • - R
///        |   |   |   |   |
///        L - • - • - • - R
///        |   |   |   |   |
///   j=0  B - B - B - B - B
///       i=0             i=n
/// ```
#[derive(Debug, Clone)]
pub struct Grid2D {
    pub dimensions: GridDimensions2D,
    pub extents: DomainExtents2D,
    pub cell_size: CellSize2D,
    pub u: DMatrix<f64>,
}

impl Grid2D {
    pub fn new(dimensions: GridDimensions2D, extents: DomainExtents2D) -> Result<Self, GridError> {
        dimensions.validate()?;
        extents.validate()?;
        let GridDimensions2D(n, m) = dimensions;
        let DomainExtents2D(lx, ly) = extents;
        Ok(Self {
            dimensions,
            extents,
            cell_size: CellSize2D(lx / n as f64, ly / m as f64),
            u: DMatrix::<f64>::zeros(n + 1, m + 1),
        })
    }

    pub fn x(&self, i: usize) -> f64 {
        i as f64 * self.cell_size.0
    }

    pub fn y(&self, j: usize) -> f64 {
        j as f64 * self.cell_size.1
    }

    /// Writes the boundary rows and columns.
    ///
    /// Left and right columns go first over `j = 0..=m`, then bottom and top rows
    /// over `i = 0..=n`, so the corners carry the bottom/top values.
    pub fn apply_dirichlet_bcs(&mut self, bcs: &SquareBoundary) {
        let GridDimensions2D(n, m) = self.dimensions;

        for j in 0..=m {
            let y = self.y(j);
            self.u[(0, j)] = bcs.left(y);
            self.u[(n, j)] = bcs.right(y);
        }
        for i in 0..=n {
            let x = self.x(i);
            self.u[(i, 0)] = bcs.bottom(x);
            self.u[(i, m)] = bcs.top(x);
        }
    }

    /// Initial guess: each interior node gets the mean of its four boundary projections.
    pub fn seed_interior(&mut self) {
        let GridDimensions2D(n, m) = self.dimensions;
        for i in 1..n {
            for j in 1..m {
                self.u[(i, j)] =
                    (self.u[(0, j)] + self.u[(n, j)] + self.u[(i, 0)] + self.u[(i, m)]) * 0.25;
            }
        }
    }

    /// Largest `|U - g|` over boundary nodes, `g` being the edge function that
    /// owns the node under the assignment order of `apply_dirichlet_bcs`.
    pub fn max_boundary_deviation(&self, bcs: &SquareBoundary) -> f64 {
        let GridDimensions2D(n, m) = self.dimensions;
        let mut dev: f64 = 0.0;
        for j in 1..m {
            let y = self.y(j);
            dev = dev.max((self.u[(0, j)] - bcs.left(y)).abs());
            dev = dev.max((self.u[(n, j)] - bcs.right(y)).abs());
        }
        for i in 0..=n {
            let x = self.x(i);
            dev = dev.max((self.u[(i, 0)] - bcs.bottom(x)).abs());
            dev = dev.max((self.u[(i, m)] - bcs.top(x)).abs());
        }
        dev
    }

    /// `(min, max)` over every boundary node.
    pub fn boundary_range(&self) -> (f64, f64) {
        let GridDimensions2D(n, m) = self.dimensions;
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for j in 0..=m {
            for v in [self.u[(0, j)], self.u[(n, j)]] {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        for i in 0..=n {
            for v in [self.u[(i, 0)], self.u[(i, m)]] {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo, hi)
    }

    /// Interior nodes as `f32`, `i` fastest: node `(i, j)` lands at `(i-1) + (j-1)*(n-1)`.
    pub fn interior_values(&self) -> Vec<f32> {
        let GridDimensions2D(n, m) = self.dimensions;
        if n < 2 || m < 2 {
            return Vec::new();
        }
        // DMatrix storage is column-major, so the view iterates with i fastest.
        self.u
            .view((1, 1), (n - 1, m - 1))
            .iter()
            .map(|&v| v as f32)
            .collect()
    }
}
