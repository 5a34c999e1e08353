use std::fmt;

/// Dirichlet value along one edge, as a function of the coordinate running along it.
pub type EdgeFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Low and high edges of one axis: `FaceBoundary(low, high)`.
pub struct FaceBoundary(pub EdgeFn, pub EdgeFn);

/// Dirichlet data on the four edges of the rectangle `[0, Lx] x [0, Ly]`.
///
/// `x` holds the faces normal to the x axis, `left(y)` at `x = 0` and `right(y)`
/// at `x = Lx`. `y` holds `bottom(x)` at `y = 0` and `top(x)` at `y = Ly`.
pub struct SquareBoundary {
    pub x: FaceBoundary,
    pub y: FaceBoundary,
}

impl SquareBoundary {
    pub fn new<L, R, B, T>(left: L, right: R, bottom: B, top: T) -> Self
    where
        L: Fn(f64) -> f64 + Send + Sync + 'static,
        R: Fn(f64) -> f64 + Send + Sync + 'static,
        B: Fn(f64) -> f64 + Send + Sync + 'static,
        T: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            x: FaceBoundary(Box::new(left), Box::new(right)),
            y: FaceBoundary(Box::new(bottom), Box::new(top)),
        }
    }

    /// Same constant value on every edge.
    pub fn uniform(value: f64) -> Self {
        Self::new(move |_| value, move |_| value, move |_| value, move |_| value)
    }

    pub fn left(&self, y: f64) -> f64 {
        (self.x.0)(y)
    }

    pub fn right(&self, y: f64) -> f64 {
        (self.x.1)(y)
    }

    pub fn bottom(&self, x: f64) -> f64 {
        (self.y.0)(x)
    }

    pub fn top(&self, x: f64) -> f64 {
        (self.y.1)(x)
    }
}

impl fmt::Debug for SquareBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SquareBoundary")
            .field("x", &"FaceBoundary(left, right)")
            .field("y", &"FaceBoundary(bottom, top)")
            .finish()
    }
}
