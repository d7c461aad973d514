//! Mower state and the operations that move it.

use crate::grid::GridSize;
use glam::IVec2;
use serde::Serialize;
use std::fmt;

/// Cardinal heading of a mower.
///
/// Variants are declared clockwise so that a right turn is `ordinal + 1 (mod 4)` and a
/// left turn is `ordinal + 3 (mod 4)`, giving the left cycle N → W → S → E → N.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    /// All headings, in ordinal (clockwise) order.
    pub const ALL: [Orientation; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit step for each heading, indexed by ordinal.
    const DIRECTIONS: [IVec2; 4] = [IVec2::Y, IVec2::X, IVec2::NEG_Y, IVec2::NEG_X];

    /// Parses the exact, case-sensitive letters `N`, `E`, `S`, `W`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The single-letter form used in instruction files and output.
    pub fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }

    /// The unit vector a forward step adds to the position.
    pub fn direction(self) -> IVec2 {
        Self::DIRECTIONS[self.ordinal()]
    }

    /// Heading after a quarter turn counter-clockwise.
    pub fn rotated_left(self) -> Self {
        Self::ALL[(self.ordinal() + 3) % 4]
    }

    /// Heading after a quarter turn clockwise.
    pub fn rotated_right(self) -> Self {
        Self::ALL[(self.ordinal() + 1) % 4]
    }

    /// Turns this heading a quarter counter-clockwise in place.
    pub fn rotate_left(&mut self) {
        *self = self.rotated_left();
    }

    /// Turns this heading a quarter clockwise in place.
    pub fn rotate_right(&mut self) {
        *self = self.rotated_right();
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A cell on the lawn.
///
/// The value itself is unconstrained; it is the [`Mower`] that keeps its position inside
/// the grid by going through [`Position::clamped`] and [`Position::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Position(pub IVec2);

impl Position {
    /// A position at column `x`, row `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    /// Column.
    pub fn x(&self) -> i32 {
        self.0.x
    }

    /// Row.
    pub fn y(&self) -> i32 {
        self.0.y
    }

    /// Clamps each coordinate independently into `grid`. Idempotent.
    pub fn clamped(self, grid: &GridSize) -> Self {
        Self(grid.clamp(self.0))
    }

    /// Moves one unit along `direction`, stopping at the boundary instead of leaving the grid.
    pub fn step(self, direction: IVec2, grid: &GridSize) -> Self {
        Self(self.0.saturating_add(direction)).clamped(grid)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.x, self.0.y)
    }
}

/// Instructions a mower understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MowerOp {
    /// Quarter turn counter-clockwise (`L`).
    RotateLeft,
    /// Quarter turn clockwise (`R`).
    RotateRight,
    /// One cell forward along the current heading (`F`).
    Forward,
}

impl MowerOp {
    /// Maps a move token to its operation. Only `L`, `R` and `F` are recognised.
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'L' => Some(Self::RotateLeft),
            'R' => Some(Self::RotateRight),
            'F' => Some(Self::Forward),
            _ => None,
        }
    }

    /// The instruction-file letter for this operation.
    pub fn token(self) -> char {
        match self {
            Self::RotateLeft => 'L',
            Self::RotateRight => 'R',
            Self::Forward => 'F',
        }
    }
}

/// Fault raised when a mower is handed a token outside its instruction set.
///
/// Parsed input never produces one: the parser already rejects such tokens with
/// [`ParseError::InvalidMove`](crate::ParseError::InvalidMove).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MotionError {
    #[error("unsupported move token '{0}'")]
    UnsupportedMove(char),
}

/// A single mower on a lawn of known size.
///
/// Each mower keeps its own copy of the [`GridSize`]; mowers never share mutable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mower {
    position: Position,
    orientation: Orientation,
    #[serde(skip)]
    grid: GridSize,
}

impl Mower {
    /// Places a mower on `grid`.
    ///
    /// The starting position is always clamped into the grid, even when it already looks
    /// in-bounds. Out-of-grid starts are therefore silently moved to the nearest edge cell.
    pub fn new(position: Position, orientation: Orientation, grid: GridSize) -> Self {
        Self {
            position: position.clamped(&grid),
            orientation,
            grid,
        }
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current column.
    pub fn x(&self) -> i32 {
        self.position.x()
    }

    /// Current row.
    pub fn y(&self) -> i32 {
        self.position.y()
    }

    /// Current heading.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The lawn this mower is confined to.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Turns a quarter counter-clockwise without moving.
    pub fn rotate_left(&mut self) {
        self.orientation.rotate_left();
    }

    /// Turns a quarter clockwise without moving.
    pub fn rotate_right(&mut self) {
        self.orientation.rotate_right();
    }

    /// Advances one cell along the heading, stopping at the lawn edge.
    pub fn step_forward(&mut self) {
        self.position = self.position.step(self.orientation.direction(), &self.grid);
    }

    /// Performs one validated operation. Never fails.
    pub fn execute(&mut self, op: MowerOp) {
        match op {
            MowerOp::RotateLeft => self.rotate_left(),
            MowerOp::RotateRight => self.rotate_right(),
            MowerOp::Forward => self.step_forward(),
        }
    }

    /// Applies a raw move token.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::UnsupportedMove`] for anything but `L`, `R` or `F`; the mower is
    /// left untouched in that case.
    pub fn apply(&mut self, token: char) -> Result<(), MotionError> {
        let op = MowerOp::from_token(token).ok_or(MotionError::UnsupportedMove(token))?;
        self.execute(op);
        Ok(())
    }
}

impl fmt::Display for Mower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.orientation)
    }
}
