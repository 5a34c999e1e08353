use crate::domain::grid2d::CellSize2D;

/// Weights of the five-point Laplacian for step sizes `(h, k)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilCoefficients {
    pub h2: f64, // 1/h^2
    pub k2: f64, // 1/k^2
    pub diag: f64, // 2*(h2 + k2)
}

impl StencilCoefficients {
    pub fn new(cell_size: CellSize2D) -> Self {
        let CellSize2D(h, k) = cell_size;
        let h2 = 1.0 / (h * h);
        let k2 = 1.0 / (k * k);
        Self { h2, k2, diag: 2.0 * (h2 + k2) }
    }

    /// Value at the centre node that satisfies the discrete `∇²u = f` given its
    /// four neighbours:
    ///
    /// \[
    /// u_{ij} = \frac{h_2 (u_{i+1,j} + u_{i-1,j}) + k_2 (u_{i,j+1} + u_{i,j-1}) - f_{ij}}{2 (h_2 + k_2)}
    /// \]
    #[inline]
    pub fn point_update(&self, east: f64, west: f64, north: f64, south: f64, f: f64) -> f64 {
        (self.h2 * (east + west) + self.k2 * (north + south) - f) / self.diag
    }

    /// Discrete Laplacian at the centre node.
    #[inline]
    pub fn laplacian(&self, center: f64, east: f64, west: f64, north: f64, south: f64) -> f64 {
        self.h2 * (east - 2.0 * center + west) + self.k2 * (north - 2.0 * center + south)
    }
}
