//! # mower
//!
//! Simulates robotic lawn mowers on a bounded rectangular lawn.
//!
//! An instruction file declares the lawn size followed by, for each mower, its starting
//! cell and heading and a string of `L`/`R`/`F` moves. The [`Parser`] validates the whole
//! file up front; the interpreter then drives each [`Mower`] through its moves, one mower at
//! a time and in declaration order, and the final states are reported in that same order.
//!
//! Mowers turn in quarter steps and move one cell at a time. A move that would leave the
//! lawn stops at the edge instead.
//!
//! ```
//! let finals = mower::simulate_str("5 5\n3 3 E\nFFRFFRFRRF\n").unwrap();
//! assert_eq!(finals[0].to_string(), "4 1 E");
//! ```

pub mod grid;
pub mod interpreter;
pub mod mower;
pub mod parser;
pub mod report;

pub use grid::*;
pub use interpreter::*;
pub use mower::*;
pub use parser::*;
pub use report::*;
