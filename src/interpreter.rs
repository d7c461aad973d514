//! Drives parsed mowers through their move sequences.
//!
//! The whole input is parsed before anything moves, so a malformed record anywhere in the
//! file aborts the run with no partial results. Mowers are then driven one at a time, each to
//! completion, in declaration order.

use crate::mower::Mower;
use crate::parser::{Instructions, Moves, ParseError, Parser, ParserConfig};
use log::{info, trace};
use std::io::BufRead;

/// Applies every move in `moves` to `mower`, left to right.
pub fn drive_mower(mower: &mut Mower, moves: &Moves) {
    for op in moves.iter() {
        mower.execute(op);
        trace!("{} -> {mower}", op.token());
    }
}

/// Drives every record of `instructions` and returns the final mower states in input order.
pub fn run(instructions: Instructions) -> Vec<Mower> {
    let Instructions { grid, records } = instructions;
    let total = records.len();

    let finals: Vec<Mower> = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let mut mower = record.mower;
            trace!("mower {}/{total} starts at {mower}", i + 1);
            drive_mower(&mut mower, &record.moves);
            mower
        })
        .collect();

    info!("drove {total} mower(s) on a {grid} grid");
    finals
}

/// Parses the full instruction stream, then runs it.
///
/// # Errors
///
/// Returns the first [`ParseError`] found; no mower is driven in that case.
pub fn simulate<R: BufRead>(reader: R, config: ParserConfig) -> Result<Vec<Mower>, ParseError> {
    let instructions = Parser::with_config(reader, config).parse_instructions()?;
    Ok(run(instructions))
}

/// Lenient [`simulate`] over an in-memory instruction file.
///
/// # Errors
///
/// Returns the first [`ParseError`] found.
pub fn simulate_str(input: &str) -> Result<Vec<Mower>, ParseError> {
    simulate(input.as_bytes(), ParserConfig::default())
}
