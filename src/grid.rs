//! The bounded lawn every mower moves on.

use glam::IVec2;
use serde::Serialize;

/// Dimensions of the rectangular lawn.
///
/// Valid cells are `x ∈ [0, width - 1]` and `y ∈ [0, height - 1]`. Both dimensions are
/// strictly positive, which [`GridSize::new`] enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GridSize {
    width: i32,
    height: i32,
}

impl GridSize {
    /// Returns `None` unless both dimensions are greater than zero.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The top-right cell, `(width - 1, height - 1)`.
    pub fn max_cell(&self) -> IVec2 {
        IVec2::new(self.width - 1, self.height - 1)
    }

    /// Whether `cell` lies inside the lawn.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.cmpge(IVec2::ZERO).all() && cell.cmple(self.max_cell()).all()
    }

    /// Pulls each coordinate of `cell` independently to the nearest in-bounds value.
    pub fn clamp(&self, cell: IVec2) -> IVec2 {
        cell.clamp(IVec2::ZERO, self.max_cell())
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.width, self.height)
    }
}
