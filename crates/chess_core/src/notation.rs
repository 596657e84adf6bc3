//! The four-character move text typed at the prompt.
//!
//! A move is written `<rank><file><rank><file>`, e.g. `2e4e` for e2-e4.
//! Files are case-insensitive.

use crate::{error::NotationError, types::Coord};

/// Decodes move text into origin and destination.
///
/// `Coord::code` of the results gives the `row * 10 + col` integers, with
/// rank 8 on row 0.
pub fn parse_move(text: &str) -> Result<(Coord, Coord), NotationError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 4 {
        return Err(NotationError::WrongLength(chars.len()));
    }

    let square = |rank: char, file: char| -> Option<Coord> {
        let file = file.to_ascii_lowercase();
        if !('1'..='8').contains(&rank) || !('a'..='h').contains(&file) {
            return None;
        }
        let row = 7 - (rank as u8 - b'1') as i8;
        let col = (file as u8 - b'a') as i8;
        Coord::new(row, col)
    };

    let from = square(chars[0], chars[1]);
    let to = square(chars[2], chars[3]);
    let (Some(from), Some(to)) = (from, to) else {
        return Err(NotationError::OutOfRange(text.to_string()));
    };
    if from == to {
        return Err(NotationError::SameSquare);
    }
    Ok((from, to))
}

/// Inverse of `parse_move`: `e2 -> e4` becomes `2e4e`.
pub fn format_move(from: Coord, to: Coord) -> String {
    format!(
        "{}{}{}{}",
        from.rank(),
        from.file_char(),
        to.rank(),
        to.file_char()
    )
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
