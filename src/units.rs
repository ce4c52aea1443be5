//! Minimal physical quantities, just enough to accept an angle in degrees or
//! radians and strip the unit down to a plain radian magnitude.

use core::fmt;

use num_traits::Float;

use crate::error::UnitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Angle,
    Length,
    Time,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Angle => "angle",
            Dimension::Length => "length",
            Dimension::Time => "time",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Radian,
    Degree,
    Meter,
    Second,
}

impl Unit {
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Radian | Unit::Degree => Dimension::Angle,
            Unit::Meter => Dimension::Length,
            Unit::Second => Dimension::Time,
        }
    }
}

/// A value tagged with a unit. The tag is data rather than part of the type,
/// so a dimension mismatch surfaces as a [`UnitError`] at the point of use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<V> {
    pub value: V,
    pub unit: Unit,
}

impl<V> Quantity<V> {
    pub fn new(value: V, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn radians(value: V) -> Self {
        Quantity::new(value, Unit::Radian)
    }

    pub fn degrees(value: V) -> Self {
        Quantity::new(value, Unit::Degree)
    }

    pub fn meters(value: V) -> Self {
        Quantity::new(value, Unit::Meter)
    }

    pub fn seconds(value: V) -> Self {
        Quantity::new(value, Unit::Second)
    }
}

/// Anything that can yield a plain radian magnitude. Rotation constructors
/// accept this instead of a concrete unit system, so the representations
/// themselves carry no unit coupling.
pub trait AngleMeasure<T> {
    fn to_radians(&self) -> Result<T, UnitError>;
}

/// A plain number is taken as radians, infallibly.
impl<T: Float> AngleMeasure<T> for T {
    fn to_radians(&self) -> Result<T, UnitError> {
        Ok(*self)
    }
}

impl<T: Float> AngleMeasure<T> for Quantity<T> {
    fn to_radians(&self) -> Result<T, UnitError> {
        match self.unit {
            Unit::Radian => Ok(self.value),
            Unit::Degree => Ok(Float::to_radians(self.value)),
            other => Err(UnitError {
                expected: Dimension::Angle,
                got: other.dimension(),
            }),
        }
    }
}
