//! Immutable 2-D vector algebra.
//!
//! All operations return new vectors; nothing here mutates in place. The
//! engine treats an absent vector as the zero vector, so `Option<Vec2>`
//! converts losslessly via `From` (a compatibility quirk of the original
//! interface, kept on purpose).

/// A 2-D vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }

    /// Sum of every vector in the iterator; absent entries count as zero.
    pub fn add_all<I>(vectors: I) -> Vec2
    where
        I: IntoIterator<Item = Option<Vec2>>,
    {
        vectors
            .into_iter()
            .map(Vec2::from)
            .fold(Vec2::ZERO, Vec2::add)
    }

    pub fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Component-wise division by a scalar.
    ///
    /// Returns `None` when `divisor` is zero; the caller keeps the original
    /// vector unchanged.
    pub fn div(self, divisor: f64) -> Option<Vec2> {
        if divisor == 0.0 {
            return None;
        }
        Some(Vec2::new(self.x / divisor, self.y / divisor))
    }

    /// Rotate counter-clockwise by `radians` (standard rotation matrix).
    pub fn rotate(self, radians: f64) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn flip_x(self) -> Vec2 {
        Vec2::new(-self.x, self.y)
    }

    pub fn flip_y(self) -> Vec2 {
        Vec2::new(self.x, -self.y)
    }

    /// Flip both axes (same as negation).
    pub fn flip(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm; 0.0 for the zero vector.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle from the positive x axis via `atan2(y, x)`; 0.0 for the zero
    /// vector.
    pub fn angle(self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        self.y.atan2(self.x)
    }
}

impl From<Option<Vec2>> for Vec2 {
    fn from(v: Option<Vec2>) -> Self {
        v.unwrap_or(Vec2::ZERO)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::add(self, rhs)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::sub(self, rhs)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        self.flip()
    }
}
