use thiserror::Error;

use crate::units::Dimension;

/// The input was not a 2x2 rotation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a 2x2 rotation block, got {rows}x{cols}")]
pub struct ShapeError {
    pub rows: usize,
    pub cols: usize,
}

impl ShapeError {
    /// Shape error for a flat component sequence whose length is not 4.
    pub fn from_len(len: usize) -> Self {
        ShapeError { rows: len, cols: 1 }
    }
}

/// A unitted input had the wrong physical dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a quantity of dimension {expected}, got {got}")]
pub struct UnitError {
    pub expected: Dimension,
    pub got: Dimension,
}
