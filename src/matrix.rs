use std::ops::{Div, Mul};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{DMatrix, RealField, Scalar};
use num_traits::{Float, One, Zero};

use crate::angle::RotationAngle2;
use crate::error::{ShapeError, UnitError};
use crate::rotation::PlanarRotation;
use crate::types::{Matrix2, Vector2};
use crate::units::{AngleMeasure, Quantity};

/// Dense representation of a 2D rotation: the full 2x2 orthonormal matrix,
/// stored explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix2<T: Scalar> {
    matrix: Matrix2<T>,
}

impl<T: Scalar> RotationMatrix2<T> {
    /// Builds `[[a, c], [b, d]]` from components in column-major order.
    ///
    /// Orthonormality is not re-verified here; when bypassing the angle
    /// constructor, validity is the caller's responsibility.
    pub fn from_components(a: T, b: T, c: T, d: T) -> Self {
        #[rustfmt::skip]
        let matrix = Matrix2::new(
            a, c,
            b, d,
        );
        RotationMatrix2 { matrix }
    }

    /// Column-major component sequence; fails unless the length is exactly 4.
    pub fn try_from_slice(components: &[T]) -> Result<Self, ShapeError> {
        match components {
            [a, b, c, d] => Ok(Self::from_components(
                a.clone(),
                b.clone(),
                c.clone(),
                d.clone(),
            )),
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
        #[rustfmt::skip]
        let block = Matrix2::new(
            matrix[(0, 0)].clone(), matrix[(0, 1)].clone(),
            matrix[(1, 0)].clone(), matrix[(1, 1)].clone(),
        );
        Ok(RotationMatrix2 { matrix: block })
    }

    /// Trusted construction from an already-valid rotation matrix.
    pub fn from_matrix(matrix: Matrix2<T>) -> Self {
        RotationMatrix2 { matrix }
    }

    pub fn matrix(&self) -> Matrix2<T> {
        self.matrix.clone()
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
}

impl<T: RealField + Float> RotationMatrix2<T> {
    /// `[[cos, sin], [-sin, cos]]` in column-major terms.
    pub fn from_angle(theta: T) -> Self {
        let cos = Float::cos(theta);
        let sin = Float::sin(theta);
        #[rustfmt::skip]
        let matrix = Matrix2::new(
            cos, -sin,
            sin, cos,
        );
        RotationMatrix2 { matrix }
    }

    /// Builds from anything carrying an angle; the unit is checked and
    /// stripped before the trigonometry, so the element type stays plain.
    pub fn from_measure<M: AngleMeasure<T>>(measure: &M) -> Result<Self, UnitError> {
        Ok(Self::from_angle(measure.to_radians()?))
    }

    /// Conversion from any other representation. For a value already of this
    /// representation the result is exactly equal.
    pub fn from_rotation<R: PlanarRotation<T>>(rotation: &R) -> Self {
        RotationMatrix2 {
            matrix: rotation.matrix(),
        }
    }

    pub fn identity() -> Self {
        RotationMatrix2 {
            matrix: Matrix2::identity(),
        }
    }

    /// Recovered via atan2 of the first column, subject to floating-point
    /// rounding, unlike [`RotationAngle2::angle`].
    pub fn angle(&self) -> T {
        Float::atan2(self.matrix[(1, 0)], self.matrix[(0, 0)])
    }

    /// By orthonormality the inverse is the transpose.
    pub fn inverse(&self) -> Self {
        RotationMatrix2 {
            matrix: self.matrix.transpose(),
        }
    }

    /// Alias of [`RotationMatrix2::inverse`].
    pub fn transpose(&self) -> Self {
        self.inverse()
    }

    /// Alias of [`RotationMatrix2::inverse`]; the matrix is real, so the
    /// adjoint is the transpose.
    pub fn adjoint(&self) -> Self {
        self.inverse()
    }

    pub fn powf(&self, exponent: T) -> Self {
        Self::from_angle(self.angle() * exponent)
    }
}

impl RotationMatrix2<f64> {
    pub fn to_f32(&self) -> RotationMatrix2<f32> {
        RotationMatrix2 {
            matrix: self.matrix.map(|x| x as f32),
        }
    }
}

impl RotationMatrix2<f32> {
    pub fn to_f64(&self) -> RotationMatrix2<f64> {
        RotationMatrix2 {
            matrix: self.matrix.map(f64::from),
        }
    }
}

impl<T: RealField + Float> From<RotationAngle2<T>> for RotationMatrix2<T> {
    fn from(rotation: RotationAngle2<T>) -> Self {
        Self::from_angle(rotation.angle())
    }
}

/// Composition: the 2x2 matrix product.
impl<T: RealField + Float> Mul for RotationMatrix2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        RotationMatrix2 {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

/// Vector application: the matrix-vector product.
impl<T: RealField + Float> Mul<Vector2<T>> for RotationMatrix2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.matrix * rhs
    }
}

/// A unitted vector rotates like a plain one; the unit passes through.
impl<T: RealField + Float> Mul<Quantity<Vector2<T>>> for RotationMatrix2<T> {
    type Output = Quantity<Vector2<T>>;

    fn mul(self, rhs: Quantity<Vector2<T>>) -> Quantity<Vector2<T>> {
        Quantity::new(self.matrix * rhs.value, rhs.unit)
    }
}

/// `r1 / r2 = r1 * inverse(r2)`.
impl<T: RealField + Float> Div for RotationMatrix2<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

/// The multiplicative (group) identity.
impl<T: RealField + Float> One for RotationMatrix2<T> {
    fn one() -> Self {
        Self::identity()
    }
}

impl<T: RealField + Float> PlanarRotation<T> for RotationMatrix2<T> {
    fn from_angle(theta: T) -> Self {
        RotationMatrix2::from_angle(theta)
    }

    fn matrix(&self) -> Matrix2<T> {
        self.matrix
    }

    fn angle(&self) -> T {
        RotationMatrix2::angle(self)
    }

    fn inverse(&self) -> Self {
        RotationMatrix2::inverse(self)
    }

    fn compose(&self, other: &Self) -> Self {
        *self * *other
    }

    fn powf(&self, exponent: T) -> Self {
        RotationMatrix2::powf(self, exponent)
    }
}

impl<T> AbsDiffEq for RotationMatrix2<T>
where
    T: RealField + Float + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, epsilon)
    }
}

impl<T> RelativeEq for RotationMatrix2<T>
where
    T: RealField + Float + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.matrix.relative_eq(&other.matrix, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::norm::norm;

    #[test]
    fn test_from_angle() {
        let theta = 0.3;
        let rot = RotationMatrix2::from_angle(theta);
        assert_eq!(rot.shape(), (2, 2));
        let m = rot.matrix();
        assert_eq!(m[(0, 0)], f64::cos(theta));
        assert_eq!(m[(0, 1)], -f64::sin(theta));
        assert_eq!(m[(1, 0)], f64::sin(theta));
        assert_eq!(m[(1, 1)], f64::cos(theta));
    }

    #[test]
    fn test_from_components_column_major() {
        let rot = RotationMatrix2::from_components(1., 2., 3., 4.);
        let m = rot.matrix();
        // First two components fill the first column.
        assert_eq!(m[(0, 0)], 1.);
        assert_eq!(m[(1, 0)], 2.);
        assert_eq!(m[(0, 1)], 3.);
        assert_eq!(m[(1, 1)], 4.);
    }

    #[test]
    fn test_integer_components() {
        let rot = RotationMatrix2::from_components(1, 0, 0, 1);
        assert_eq!(rot.matrix(), Matrix2::<i32>::identity());
        assert_eq!(rot.shape(), (2, 2));
        assert_eq!(RotationMatrix2::<i32>::zero(), Matrix2::<i32>::zeros());
    }

    #[test]
    fn test_try_from_slice() {
        let theta = 0.3_f64;
        let (sin, cos) = theta.sin_cos();
        let rot = RotationMatrix2::try_from_slice(&[cos, sin, -sin, cos]).unwrap();
        assert!((rot.angle() - theta).abs() < 1e-15);

        let err = RotationMatrix2::try_from_slice(&[1., 0., 0., 1., 0.]).unwrap_err();
        assert_eq!(err, ShapeError::from_len(5));

        assert!(RotationMatrix2::try_from_slice(&[1., 0.]).is_err());
    }

    #[test]
    fn test_try_from_matrix() {
        let input = DMatrix::from_row_slice(2, 2, &[0., -1., 1., 0.]);
        let rot = RotationMatrix2::try_from_matrix(&input).unwrap();
        assert!((rot.angle() - FRAC_PI_2).abs() < 1e-15);

        let wide = DMatrix::from_element(2, 3, 0.0);
        let err = RotationMatrix2::try_from_matrix(&wide).unwrap_err();
        assert_eq!(err, ShapeError { rows: 2, cols: 3 });
    }

    #[test]
    fn test_from_measure() {
        let exact = RotationMatrix2::from_angle(FRAC_PI_2);

        let rot = RotationMatrix2::from_measure(&Quantity::degrees(90.0)).unwrap();
        assert_abs_diff_eq!(rot, exact, epsilon = 1e-15);

        let rot = RotationMatrix2::from_measure(&Quantity::radians(FRAC_PI_2)).unwrap();
        assert_eq!(rot, exact);

        let rot = RotationMatrix2::from_measure(&FRAC_PI_2).unwrap();
        assert_eq!(rot, exact);

        assert!(RotationMatrix2::<f64>::from_measure(&Quantity::meters(1.0)).is_err());
    }

    #[test]
    fn test_identity_is_one() {
        assert_eq!(
            RotationMatrix2::<f64>::identity().matrix(),
            Matrix2::identity()
        );
        assert_eq!(
            RotationMatrix2::<f64>::one(),
            RotationMatrix2::<f64>::identity()
        );
        assert!(RotationMatrix2::<f64>::one().is_one());

        let rot = RotationMatrix2::from_angle(0.3);
        assert_eq!(rot * RotationMatrix2::one(), rot);
        assert_eq!(RotationMatrix2::one() * rot, rot);
    }

    #[test]
    fn test_quarter_turn_twice() {
        let rot = RotationMatrix2::from_angle(FRAC_PI_4);
        let half = rot * rot;
        #[rustfmt::skip]
        let expected = Matrix2::new(
            0., -1.,
            1., 0.,
        );
        assert!(norm(&(half.matrix() - expected)) < 1e-15);
    }

    #[test]
    fn test_angle_extraction() {
        assert_eq!(RotationMatrix2::from_angle(0.).angle(), 0.);
        for theta in [0.3, -0.7, 0.9 * PI, -0.99 * PI] {
            let rot = RotationMatrix2::from_angle(theta);
            assert!((rot.angle() - theta).abs() < 1e-12);
        }
    }

    #[test]
    fn test_inverse_aliases() {
        let rot = RotationMatrix2::from_angle(0.3);
        assert_eq!(rot.inverse(), rot.transpose());
        assert_eq!(rot.inverse(), rot.adjoint());
        assert_eq!(rot.inverse().matrix(), rot.matrix().transpose());
    }

    #[test]
    fn test_division() {
        let r1 = RotationMatrix2::from_angle(0.9);
        let r2 = RotationMatrix2::from_angle(0.4);
        assert_abs_diff_eq!(r1 / r2, RotationMatrix2::from_angle(0.5), epsilon = 1e-15);
        assert_eq!(r1 / r2, r1 * r2.inverse());
    }

    #[test]
    fn test_powf() {
        let rot = RotationMatrix2::from_angle(0.3);
        assert_abs_diff_eq!(rot.powf(2.), rot * rot, epsilon = 1e-15);
        assert_abs_diff_eq!(rot.powf(1.), rot, epsilon = 1e-15);
        assert_abs_diff_eq!(rot.powf(-1.), rot.inverse(), epsilon = 1e-15);
    }

    #[test]
    fn test_apply_with_unit() {
        let rot = RotationMatrix2::from_angle(FRAC_PI_2);
        let v = Quantity::meters(Vector2::new(1., 0.));
        let rotated = rot * v;
        assert_eq!(rotated.unit, v.unit);
        assert!((rotated.value - Vector2::new(0., 1.)).norm() < 1e-15);
    }

    #[test]
    fn test_round_trip_through_angle_form() {
        for theta in [0., 0.3, -2.9, 1.7] {
            let rot = RotationMatrix2::from_angle(theta);
            let back = RotationMatrix2::from(RotationAngle2::from(rot));
            assert_abs_diff_eq!(back, rot, epsilon = 1e-12);

            // Identity conversion is exact.
            assert_eq!(RotationMatrix2::from_rotation(&rot), rot);
        }
    }

    #[test]
    fn test_precision_conversion() {
        let rot = RotationMatrix2::from_angle(0.3_f64);
        let narrowed = rot.to_f32();
        assert!((narrowed.angle() - 0.3_f32).abs() < 1e-6);
        let widened = narrowed.to_f64();
        assert!((widened.angle() - 0.3).abs() < 1e-6);

        let rot = RotationMatrix2::from_angle(0.3_f32);
        assert!((rot.to_f64().angle() - 0.3).abs() < 1e-6);
    }
}
