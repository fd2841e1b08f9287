//! Console Input
//!
//! Line reading and guess parsing, kept apart from the loop so both can be
//! tested with in-memory buffers.

use std::io::BufRead;

use crate::error::GameError;

/// Read one line, without its line terminator.
///
/// Returns [`GameError::InputClosed`] at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String, GameError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GameError::InputClosed);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Parse a guess. Surrounding whitespace is ignored.
pub fn parse_guess(line: &str) -> Result<i32, GameError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|source| GameError::InvalidInput {
        input: trimmed.to_string(),
        source,
    })
}
