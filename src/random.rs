//! Uniform random rotations: the angle is drawn uniformly over (-pi, pi],
//! which is the uniform distribution over the circle. The random source is
//! injected through [`rand::Rng`], so seeded generators reproduce exactly.

use nalgebra::RealField;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::angle::RotationAngle2;
use crate::matrix::RotationMatrix2;

impl<T> Distribution<RotationAngle2<T>> for Standard
where
    T: RealField + Float,
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RotationAngle2<T> {
        let u: T = rng.gen();
        RotationAngle2::new(T::pi() - u * T::two_pi())
    }
}

impl<T> Distribution<RotationMatrix2<T>> for Standard
where
    T: RealField + Float,
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RotationMatrix2<T> {
        let rotation: RotationAngle2<T> =
            <Standard as Distribution<RotationAngle2<T>>>::sample(self, rng);
        RotationMatrix2::from_angle(rotation.angle())
    }
}
