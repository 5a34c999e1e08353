use crate::boundary::bc2d::SquareBoundary;
use crate::domain::grid2d::{CellSize2D, DomainExtents2D, Grid2D, GridDimensions2D};

/// Interior solution handed to renderers and writers.
///
/// Holds `(n-1) * (m-1)` values with `i` fastest: interior node `(i, j)`,
/// `1 <= i <= n-1`, `1 <= j <= m-1`, is stored at `(i-1) + (j-1)*(n-1)`.
/// Boundary values are not stored; `value_at` re-evaluates them.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionBuffer {
    dimensions: GridDimensions2D,
    extents: DomainExtents2D,
    cell_size: CellSize2D,
    values: Vec<f32>,
}

impl SolutionBuffer {
    pub fn from_grid(grid: &Grid2D) -> Self {
        Self {
            dimensions: grid.dimensions,
            extents: grid.extents,
            cell_size: grid.cell_size,
            values: grid.interior_values(),
        }
    }

    pub fn dimensions(&self) -> GridDimensions2D {
        self.dimensions
    }

    pub fn extents(&self) -> DomainExtents2D {
        self.extents
    }

    pub fn cell_size(&self) -> CellSize2D {
        self.cell_size
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index(&self, i: usize, j: usize) -> Option<usize> {
        let GridDimensions2D(n, m) = self.dimensions;
        if i == 0 || j == 0 || i >= n || j >= m {
            return None;
        }
        Some((i - 1) + (j - 1) * (n - 1))
    }

    /// Value at interior node `(i, j)`, `None` on or outside the boundary.
    pub fn interior(&self, i: usize, j: usize) -> Option<f32> {
        self.index(i, j).map(|idx| self.values[idx])
    }

    /// Value at any grid node. Edge nodes are recomputed from `bcs` with the
    /// corner order of the grid: bottom/top own the corners.
    pub fn value_at(&self, i: usize, j: usize, bcs: &SquareBoundary) -> Option<f32> {
        let GridDimensions2D(n, m) = self.dimensions;
        if i > n || j > m {
            return None;
        }
        if let Some(v) = self.interior(i, j) {
            return Some(v);
        }
        let x = i as f64 * self.cell_size.0;
        let y = j as f64 * self.cell_size.1;
        let v = if j == 0 {
            bcs.bottom(x)
        } else if j == m {
            bcs.top(x)
        } else if i == 0 {
            bcs.left(y)
        } else {
            bcs.right(y)
        };
        Some(v as f32)
    }

    /// Largest `|U|` over interior and boundary nodes, for colour normalization.
    pub fn max_abs_value(&self, bcs: &SquareBoundary) -> f32 {
        let GridDimensions2D(n, m) = self.dimensions;
        let mut max_val = self.values.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
        for i in 0..=n {
            for j in [0, m] {
                if let Some(v) = self.value_at(i, j, bcs) {
                    max_val = max_val.max(v.abs());
                }
            }
        }
        for j in 1..m {
            for i in [0, n] {
                if let Some(v) = self.value_at(i, j, bcs) {
                    max_val = max_val.max(v.abs());
                }
            }
        }
        max_val
    }

    /// Largest `|U - exact(x, y)|` over interior nodes.
    pub fn max_error<F>(&self, exact: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        let GridDimensions2D(n, m) = self.dimensions;
        let mut err: f64 = 0.0;
        for j in 1..m {
            for i in 1..n {
                let v = self.values[(i - 1) + (j - 1) * (n - 1)] as f64;
                let x = i as f64 * self.cell_size.0;
                let y = j as f64 * self.cell_size.1;
                err = err.max((v - exact(x, y)).abs());
            }
        }
        err
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn filled_buffer() -> SolutionBuffer {
        // n = 3, m = 4: interior is 2 x 3.
        let mut grid = Grid2D::new(GridDimensions2D(3, 4), DomainExtents2D(3.0, 4.0)).unwrap();
        for i in 1..3 {
            for j in 1..4 {
                grid.u[(i, j)] = (10 * i + j) as f64;
            }
        }
        SolutionBuffer::from_grid(&grid)
    }

    fn edges() -> SquareBoundary {
        SquareBoundary::new(|y| -y, |y| 100.0 + y, |x| 200.0 + x, |x| -300.0 - x)
    }

    #[test]
    fn test_layout_is_i_fastest() {
        let buf = filled_buffer();
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.values().to_vec(), vec![11.0f32, 21.0, 12.0, 22.0, 13.0, 23.0]);
        assert_eq!(buf.interior(2, 3), Some(23.0));
        assert_eq!(buf.interior(0, 1), None);
        assert_eq!(buf.interior(3, 1), None);
        assert_eq!(buf.interior(1, 4), None);
    }

    #[test]
    fn test_value_at_edges() {
        let buf = filled_buffer();
        let bc = edges();
        assert_eq!(buf.value_at(1, 2, &bc), Some(12.0));
        assert_eq!(buf.value_at(0, 2, &bc), Some(-2.0));
        assert_eq!(buf.value_at(3, 2, &bc), Some(102.0));
        assert_eq!(buf.value_at(2, 0, &bc), Some(202.0));
        assert_eq!(buf.value_at(2, 4, &bc), Some(-302.0));
        // Corners follow bottom/top.
        assert_eq!(buf.value_at(0, 0, &bc), Some(200.0));
        assert_eq!(buf.value_at(3, 4, &bc), Some(-303.0));
        assert_eq!(buf.value_at(4, 0, &bc), None);
        assert_eq!(buf.value_at(0, 5, &bc), None);
    }

    #[test]
    fn test_max_abs_value_includes_boundary() {
        let buf = filled_buffer();
        assert_relative_eq!(buf.max_abs_value(&edges()), 303.0);
        assert_relative_eq!(buf.max_abs_value(&SquareBoundary::uniform(1.0)), 23.0);
    }

    #[test]
    fn test_max_error() {
        let buf = filled_buffer();
        // exact(x, y) = 10x + y matches every node since h = k = 1.
        assert_relative_eq!(buf.max_error(|x, y| 10.0 * x + y), 0.0);
        assert_relative_eq!(buf.max_error(|x, y| 10.0 * x + y + 0.5), 0.5);
    }
}
