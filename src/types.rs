use nalgebra::base::dimension::Const;
use nalgebra::{ArrayStorage, Matrix, Scalar, U1};

pub type VectorN<T, const D: usize> = Matrix<T, Const<D>, U1, ArrayStorage<T, D, 1>>;
pub type MatrixN<T, const N: usize> = Matrix<T, Const<N>, Const<N>, ArrayStorage<T, N, N>>;

pub type Matrix2<T> = MatrixN<T, 2>;
pub type Vector2<T> = VectorN<T, 2>;

/// Additive zero of an N x N block. Zeros and identities at other shapes
/// come straight from nalgebra's generators.
pub fn zeros<T: Scalar + num_traits::Zero, const N: usize>() -> MatrixN<T, N> {
    MatrixN::<T, N>::zeros()
}
