use nalgebra::RealField;
use num_traits::Float;

use crate::norm;
use crate::types::{Matrix2, Vector2};

/// Common contract of the two rotation representations.
///
/// The implementor set is closed (dense matrix and single angle), so the
/// shared operations are dispatched statically. Every provided method is
/// defined once against the materialized matrix, which is what makes the two
/// representations numerically interchangeable.
pub trait PlanarRotation<T: RealField + Float>: Copy {
    /// Rotations in the plane are always 2x2.
    const SHAPE: (usize, usize) = (2, 2);

    fn from_angle(theta: T) -> Self;

    /// Materializes the 2x2 orthonormal matrix.
    fn matrix(&self) -> Matrix2<T>;

    /// The rotation angle in radians. Not normalized to any interval.
    fn angle(&self) -> T;

    fn inverse(&self) -> Self;

    fn compose(&self, other: &Self) -> Self;

    /// Fractional power: the rotation by `angle * exponent`.
    fn powf(&self, exponent: T) -> Self;

    fn identity() -> Self {
        Self::from_angle(T::zero())
    }

    fn apply(&self, v: &Vector2<T>) -> Vector2<T> {
        self.matrix() * v
    }

    /// `self * inverse(other)`, the rotation by the angle difference.
    /// Also available as the `/` operator on each representation.
    fn right_div(&self, other: &Self) -> Self {
        self.compose(&other.inverse())
    }

    /// `inverse(self) * other`, the left division of the source system's
    /// backslash operator.
    fn left_div(&self, other: &Self) -> Self {
        self.inverse().compose(other)
    }

    /// Frobenius norm of the materialized matrix. Not rotation-aware; for a
    /// valid rotation this is always sqrt(2).
    fn norm(&self) -> T {
        norm::norm(&self.matrix())
    }

    /// The materialized matrix divided by its Frobenius norm. The result is
    /// a raw matrix, not a rotation.
    fn normalize(&self) -> Matrix2<T> {
        let m = self.matrix();
        m / norm::norm(&m)
    }

    /// Orthonormality and determinant +1, within floating tolerance.
    fn is_rotation(&self) -> bool {
        let m = self.matrix();
        let tol = Float::sqrt(T::epsilon());
        let gram = m * m.transpose();
        norm::norm(&(gram - Matrix2::identity())) < tol
            && Float::abs(m.determinant() - T::one()) < tol
    }
}
