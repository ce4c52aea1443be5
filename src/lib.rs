//! Two representations of a rotation in the 2D plane, unified by the
//! [`PlanarRotation`] contract:
//!
//! - [`RotationMatrix2`] stores the full 2x2 orthonormal matrix;
//! - [`RotationAngle2`] stores only the angle and derives the matrix on
//!   demand.
//!
//! Composition, inversion, division, fractional powers, Frobenius norm and
//! vector application agree numerically across the two forms. Constructors
//! also accept unitted angles ([`Quantity`] in degrees or radians); the unit
//! is checked and stripped so the stored element type is always a plain
//! real.

pub mod angle;
pub mod error;
pub mod matrix;
pub mod norm;
pub mod rotation;
pub mod types;
pub mod units;

mod random;

pub use crate::angle::RotationAngle2;
pub use crate::error::{ShapeError, UnitError};
pub use crate::matrix::RotationMatrix2;
pub use crate::rotation::PlanarRotation;
pub use crate::units::{AngleMeasure, Dimension, Quantity, Unit};
