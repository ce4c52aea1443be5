use nalgebra::{Dim, Matrix, RealField, Storage};

pub fn norm_squared<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> T
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    let mut res = T::zero();

    for i in 0..matrix.ncols() {
        let col = matrix.column(i);
        res += col.dot(&col);
    }

    res
}

pub fn norm<T, R, C, S>(matrix: &Matrix<T, R, C, S>) -> T
where
    T: RealField + Copy,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
{
    norm_squared(matrix).sqrt()
}
