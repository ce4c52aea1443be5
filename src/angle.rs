use std::ops::{Div, Mul};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{DMatrix, RealField};
use num_traits::{Float, One, Zero};

use crate::error::{ShapeError, UnitError};
use crate::matrix::RotationMatrix2;
use crate::rotation::PlanarRotation;
use crate::types::{Matrix2, Vector2};
use crate::units::{AngleMeasure, Quantity};

/// Minimal representation of a 2D rotation: just the angle in radians.
/// The matrix is derived on demand via cosine/sine.
///
/// The stored angle is never normalized to any interval; composition and
/// exponentiation can grow it without bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationAngle2<T> {
    theta: T,
}

impl<T: RealField + Float> RotationAngle2<T> {
    pub fn new(theta: T) -> Self {
        RotationAngle2 { theta }
    }

    pub fn from_angle(theta: T) -> Self {
        Self::new(theta)
    }

    /// Builds from anything carrying an angle. A degree quantity is
    /// converted to radians and stripped; the stored value is always a
    /// plain real magnitude.
    pub fn from_measure<M: AngleMeasure<T>>(measure: &M) -> Result<Self, UnitError> {
        Ok(Self::new(measure.to_radians()?))
    }

    /// Column-major component sequence; the angle is extracted by atan2.
    /// Fails unless the length is exactly 4.
    pub fn try_from_slice(components: &[T]) -> Result<Self, ShapeError> {
        match components {
            [a, b, _, _] => Ok(Self::new(Float::atan2(*b, *a))),
            _ => Err(ShapeError::from_len(components.len())),
        }
    }

    /// Array-like input; fails unless the shape is exactly 2x2.
    pub fn try_from_matrix(matrix: &DMatrix<T>) -> Result<Self, ShapeError> {
        if matrix.shape() != (2, 2) {
            return Err(ShapeError {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        Ok(Self::new(Float::atan2(matrix[(1, 0)], matrix[(0, 0)])))
    }

    /// Conversion from any other representation. For a value already of this
    /// representation the angle is taken over exactly.
    pub fn from_rotation<R: PlanarRotation<T>>(rotation: &R) -> Self {
        Self::new(rotation.angle())
    }

    pub fn identity() -> Self {
        Self::new(T::zero())
    }

    /// Returns the stored angle directly, with no trigonometric round-trip.
    pub fn angle(&self) -> T {
        self.theta
    }

    pub fn matrix(&self) -> Matrix2<T> {
        let cos = Float::cos(self.theta);
        let sin = Float::sin(self.theta);
        #[rustfmt::skip]
        let matrix = Matrix2::new(
            cos, -sin,
            sin, cos,
        );
        matrix
    }

    pub fn shape(&self) -> (usize, usize) {
        (2, 2)
    }

    /// The 2x2 additive zero, distinct from the group identity. A raw
    /// matrix: the zero matrix is not a rotation.
    pub fn zero() -> Matrix2<T>
    where
        T: Zero,
    {
        Matrix2::zeros()
    }

    pub fn inverse(&self) -> Self {
        Self::new(-self.theta)
    }

    /// Alias of [`RotationAngle2::inverse`].
    pub fn transpose(&self) -> Self {
        self.inverse()
    }

    /// Alias of [`RotationAngle2::inverse`].
    pub fn adjoint(&self) -> Self {
        self.inverse()
    }

    /// The rotation by `theta * exponent`. Satisfies
    /// `r.powf(x + y) == r.powf(x) * r.powf(y)` exactly in the angle.
    pub fn powf(&self, exponent: T) -> Self {
        Self::new(self.theta * exponent)
    }
}

impl RotationAngle2<f64> {
    pub fn to_f32(&self) -> RotationAngle2<f32> {
        RotationAngle2 {
            theta: self.theta as f32,
        }
    }
}

impl RotationAngle2<f32> {
    pub fn to_f64(&self) -> RotationAngle2<f64> {
        RotationAngle2 {
            theta: f64::from(self.theta),
        }
    }
}

impl<T: RealField + Float> From<RotationMatrix2<T>> for RotationAngle2<T> {
    fn from(rotation: RotationMatrix2<T>) -> Self {
        Self::new(rotation.angle())
    }
}

/// Composition: angles add.
impl<T: RealField + Float> Mul for RotationAngle2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.theta + rhs.theta)
    }
}

/// Vector application through the materialized matrix.
impl<T: RealField + Float> Mul<Vector2<T>> for RotationAngle2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.matrix() * rhs
    }
}

/// A unitted vector rotates like a plain one; the unit passes through.
impl<T: RealField + Float> Mul<Quantity<Vector2<T>>> for RotationAngle2<T> {
    type Output = Quantity<Vector2<T>>;

    fn mul(self, rhs: Quantity<Vector2<T>>) -> Quantity<Vector2<T>> {
        Quantity::new(self.matrix() * rhs.value, rhs.unit)
    }
}

/// `r1 / r2 = r1 * inverse(r2)`: angles subtract.
impl<T: RealField + Float> Div for RotationAngle2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

/// The multiplicative (group) identity.
impl<T: RealField + Float> One for RotationAngle2<T> {
    fn one() -> Self {
        Self::identity()
    }
}

impl<T: RealField + Float> PlanarRotation<T> for RotationAngle2<T> {
    fn from_angle(theta: T) -> Self {
        RotationAngle2::new(theta)
    }

    fn matrix(&self) -> Matrix2<T> {
        RotationAngle2::matrix(self)
    }

    fn angle(&self) -> T {
        self.theta
    }

    fn inverse(&self) -> Self {
        RotationAngle2::inverse(self)
    }

    fn compose(&self, other: &Self) -> Self {
        *self * *other
    }

    fn powf(&self, exponent: T) -> Self {
        RotationAngle2::powf(self, exponent)
    }
}

impl<T> AbsDiffEq for RotationAngle2<T>
where
    T: RealField + Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.theta.abs_diff_eq(&other.theta, epsilon)
    }
}

impl<T> RelativeEq for RotationAngle2<T>
where
    T: RealField + Float + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.theta.relative_eq(&other.theta, epsilon, max_relative)
    }
}
