//! Line-oriented parser for mower instruction files.
//!
//! The input is a grid-size line followed by zero or more two-line blocks:
//!
//! ```text
//! 5 5
//! 1 2 N
//! LFLFLFLFF
//! 3 3 E
//! FFRFFRFRRF
//! ```
//!
//! Every line is trimmed before interpretation. Parsing stops at the first absent or blank
//! initial-state line. A mower whose moves line is absent gets an empty move sequence unless
//! [`ParserConfig::strict`] is set.

use crate::grid::GridSize;
use crate::mower::{Mower, MowerOp, Orientation, Position};
use log::debug;
use std::fmt;
use std::io::BufRead;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Errors raised while reading an instruction file.
///
/// Line numbers are 1-based and the raw (trimmed) line is quoted verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line_no}: invalid grid size: \"{line}\"")]
    InvalidGridSize { line_no: usize, line: String },

    #[error("line {line_no}: invalid mower state: \"{line}\"")]
    InvalidMowerState { line_no: usize, line: String },

    #[error("line {line_no}: invalid move '{token}' in \"{line}\"; expected one of L, R, F")]
    InvalidMove {
        line_no: usize,
        token: char,
        line: String,
    },

    #[error("line {line_no}: missing moves line after mower state \"{line}\"")]
    MissingMoves { line_no: usize, line: String },

    #[error("failed to read instructions: {0}")]
    Io(#[from] std::io::Error),
}

/// Parser behaviour switches.
#[derive(Clone, Debug, Default)]
pub struct ParserConfig {
    /// Reject a missing moves line and out-of-grid starting positions instead of
    /// defaulting to no moves and clamping.
    pub strict: bool,
}

/// A validated, ordered move sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Moves(Vec<MowerOp>);

impl Moves {
    /// Wraps already-validated operations.
    pub fn new(ops: Vec<MowerOp>) -> Self {
        Self(ops)
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a blank moves line.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Operations in the order they are applied.
    pub fn iter(&self) -> impl Iterator<Item = MowerOp> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Moves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|op| write!(f, "{}", op.token()))
    }
}

/// One mower as declared in the input: its initial state and the moves assigned to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRecord {
    pub mower: Mower,
    pub moves: Moves,
}

/// A fully parsed instruction file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instructions {
    pub grid: GridSize,
    /// Records in declaration order.
    pub records: Vec<ParsedRecord>,
}

impl FromStr for Instructions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new(s.as_bytes()).parse_instructions()
    }
}

/// Streaming parser over any buffered reader.
///
/// Each `parse_*` call consumes exactly one line.
pub struct Parser<R> {
    reader: R,
    config: ParserConfig,
    line_no: usize,
    buf: String,
    last_line: String,
}

impl<R: BufRead> Parser<R> {
    /// Creates a lenient parser.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ParserConfig::default())
    }

    /// Creates a parser with explicit behaviour switches.
    pub fn with_config(reader: R, config: ParserConfig) -> Self {
        Self {
            reader,
            config,
            line_no: 0,
            buf: String::new(),
            last_line: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    /// Reads the next line, trimmed. `None` once the stream is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, ParseError> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;
        self.last_line = self.buf.trim().to_owned();
        Ok(Some(self.last_line.clone()))
    }

    /// Consumes the grid-size line: two integers `W H`, both greater than zero.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidGridSize`] on a missing line, a wrong token count, a non-integer
    /// token or a non-positive dimension.
    pub fn parse_grid_size(&mut self) -> Result<GridSize, ParseError> {
        let line = self.next_line()?.unwrap_or_default();
        let grid = match tokens::<2>(&line) {
            Some([w, h]) => parse_int(w)
                .zip(parse_int(h))
                .and_then(|(w, h)| GridSize::new(w, h)),
            None => None,
        };
        let grid = grid.ok_or_else(|| ParseError::InvalidGridSize {
            line_no: self.line_no,
            line,
        })?;
        debug!("parsed grid size: {grid}");
        Ok(grid)
    }

    /// Consumes one initial-state line `X Y C` and places the mower on `grid`.
    ///
    /// Returns `Ok(None)` when the stream is exhausted or the line is blank, which marks the
    /// end of the mower list.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidMowerState`] on a wrong token count, a non-integer or negative
    /// coordinate, or a heading other than `N`, `S`, `E`, `W`. In strict mode a position
    /// outside `grid` is rejected the same way.
    pub fn parse_mower(&mut self, grid: GridSize) -> Result<Option<Mower>, ParseError> {
        let line = match self.next_line()? {
            Some(line) if !line.is_empty() => line,
            _ => return Ok(None),
        };
        let state = tokens::<3>(&line).and_then(|[x, y, c]| {
            let x = parse_int(x).filter(|x| *x >= 0)?;
            let y = parse_int(y).filter(|y| *y >= 0)?;
            let orientation = single_char(c).and_then(Orientation::from_char)?;
            Some((Position::new(x, y), orientation))
        });
        let (position, orientation) = state
            .filter(|(position, _)| !self.config.strict || grid.contains(position.0))
            .ok_or_else(|| ParseError::InvalidMowerState {
                line_no: self.line_no,
                line,
            })?;

        let mower = Mower::new(position, orientation, grid);
        if mower.position() != position {
            debug!("line {}: clamped start {position} to {}", self.line_no, mower.position());
        }
        debug!("parsed mower: {mower}");
        Ok(Some(mower))
    }

    /// Consumes one moves line. A blank line is an empty sequence; so is an absent line
    /// unless the parser is strict.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidMove`] for the first character outside `L`, `R`, `F`;
    /// [`ParseError::MissingMoves`] for an absent line in strict mode.
    pub fn parse_moves(&mut self) -> Result<Moves, ParseError> {
        let Some(line) = self.next_line()? else {
            if self.config.strict {
                return Err(ParseError::MissingMoves {
                    line_no: self.line_no,
                    line: self.last_line.clone(),
                });
            }
            return Ok(Moves::default());
        };
        let moves = line
            .chars()
            .map(|token| {
                MowerOp::from_token(token).ok_or_else(|| ParseError::InvalidMove {
                    line_no: self.line_no,
                    token,
                    line: line.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Moves::new)?;
        debug!("parsed moves: \"{moves}\"");
        Ok(moves)
    }

    /// Alternates [`parse_mower`](Self::parse_mower) and [`parse_moves`](Self::parse_moves)
    /// until no mower line remains.
    ///
    /// # Errors
    ///
    /// Propagates the first error encountered; nothing parsed before it is returned.
    pub fn parse_records(&mut self, grid: GridSize) -> Result<Vec<ParsedRecord>, ParseError> {
        let mut records = Vec::new();
        while let Some(mower) = self.parse_mower(grid)? {
            let moves = self.parse_moves()?;
            records.push(ParsedRecord { mower, moves });
        }
        Ok(records)
    }

    /// Parses a whole instruction file: the grid line, then every mower record.
    ///
    /// # Errors
    ///
    /// Any [`ParseError`]; parsing stops at the first offending line.
    pub fn parse_instructions(mut self) -> Result<Instructions, ParseError> {
        let grid = self.parse_grid_size()?;
        let records = self.parse_records(grid)?;
        debug!("parsed {} mower(s) over {} line(s)", records.len(), self.line_no);
        Ok(Instructions { grid, records })
    }
}

/// Splits `line` on whitespace and returns exactly `N` tokens, or `None` for any other count.
fn tokens<const N: usize>(line: &str) -> Option<[&str; N]> {
    let mut out = [""; N];
    let mut it = line.split_whitespace();
    for slot in &mut out {
        *slot = it.next()?;
    }
    it.next().is_none().then_some(out)
}

/// Strict base-10 integer: an optional sign followed by ASCII digits only.
///
/// Values beyond the `i32` range saturate rather than fail, so oversized coordinates end up
/// clamped onto the grid like any other out-of-bounds start.
fn parse_int(token: &str) -> Option<i32> {
    match token.parse::<i32>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i32::MAX),
            IntErrorKind::NegOverflow => Some(i32::MIN),
            _ => None,
        },
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
