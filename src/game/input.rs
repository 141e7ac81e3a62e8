//! Column selection: turns raw answers from an input collaborator into a
//! playable zero-based column, re-asking until one is valid.

use std::io;

use super::board::{Board, COLS};
use crate::error::InputError;

/// Why an answer was refused. The message is shown to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColumnRejection {
    #[error("Choice is not between 1-7! Please try again.")]
    OutOfRange,

    #[error("That column is full! Please try again.")]
    ColumnFull,
}

/// Something that can be asked for a column, e.g. a prompt on a terminal.
pub trait ColumnSource {
    /// Next raw answer, one-based. `Ok(None)` means no more input will come.
    fn request_column(&mut self) -> io::Result<Option<String>>;

    /// Report a refused answer before the next request.
    fn reject(&mut self, rejection: ColumnRejection) -> io::Result<()>;
}

/// Parse a one-based column answer into a zero-based index.
///
/// The whole trimmed answer must be a number: `"3abc"` is out of range rather
/// than column 3.
pub fn parse_column(answer: &str) -> Option<usize> {
    let number: usize = answer.trim().parse().ok()?;
    (1..=COLS).contains(&number).then(|| number - 1)
}

/// Check one answer against the board.
pub fn validate_column(board: &Board, answer: &str) -> Result<usize, ColumnRejection> {
    let column = parse_column(answer).ok_or(ColumnRejection::OutOfRange)?;
    if board.is_column_full(column) {
        return Err(ColumnRejection::ColumnFull);
    }
    Ok(column)
}

/// Ask `source` until it yields a playable column. There is no retry limit.
pub fn choose_column<S: ColumnSource + ?Sized>(
    board: &Board,
    source: &mut S,
) -> Result<usize, InputError> {
    loop {
        let answer = source.request_column()?.ok_or(InputError::Closed)?;
        match validate_column(board, &answer) {
            Ok(column) => return Ok(column),
            Err(rejection) => {
                tracing::debug!(answer = answer.trim(), ?rejection, "column rejected");
                source.reject(rejection)?;
            }
        }
    }
}
