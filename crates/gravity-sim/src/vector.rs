use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use crate::error::{Result, SimError};

/// An immutable 2D vector in simulation units.
///
/// Every operation returns a new value; the components of an existing
/// `Vector2` can never change. `+=` and `-=` rebind the left-hand variable to
/// a fresh value, they do not mutate anything shared.
///
/// There is deliberately no `Div` operator. Division goes through
/// [`Vector2::divide`], which rejects a zero divisor instead of producing
/// non-finite components.
///
/// # Examples
///
/// ```
/// use gravity_sim::vector::Vector2;
///
/// let a = Vector2::new(3.0, 4.0);
/// let b = Vector2::new(1.0, -1.0);
///
/// assert_eq!(a + b, Vector2::new(4.0, 3.0));
/// assert_eq!(a.magnitude(), 5.0);
/// assert_eq!(a.dot(b), -1.0);
/// assert!(a.divide(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zeros() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Components as `[x, y]`
    pub fn components(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        self + other
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        self - other
    }

    pub fn scale(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Divides both components by `scalar`
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Arithmetic`] when `scalar` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::vector::Vector2;
    ///
    /// let v = Vector2::new(4.0, -2.0).divide(2.0).unwrap();
    /// assert_eq!(v, Vector2::new(2.0, -1.0));
    /// ```
    pub fn divide(self, scalar: f64) -> Result<Vector2> {
        if scalar == 0.0 {
            return Err(SimError::Arithmetic {
                operation: "vector division",
            });
        }
        Ok(Vector2::new(self.x / scalar, self.y / scalar))
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector normalizes to the zero vector, so callers get no
    /// direction back for exactly coincident points.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity_sim::vector::Vector2;
    ///
    /// assert_eq!(Vector2::zeros().normalize(), Vector2::zeros());
    /// assert_eq!(Vector2::new(0.0, -7.0).normalize(), Vector2::new(0.0, -1.0));
    /// ```
    pub fn normalize(self) -> Vector2 {
        // A zero magnitude is the only divide error, so fall back to zero
        self.divide(self.magnitude()).unwrap_or_default()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs.scale(self)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {index}"),
        }
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    fn from(v: Vector2) -> Self {
        v.components()
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
