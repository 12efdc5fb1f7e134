//! Text codes naming a chip, `<Letter><Digit>`.
//!
//! The letter selects the column (`A` = first column) and the digit selects the
//! row (`1` = first row). The same two-character code is used for move entry and
//! as the wire payload sent to the remote player.

use crate::{BoardSize, MoveError};

/// Parses a chip code into a row-major chip index.
///
/// The code must be exactly two characters, an uppercase column letter followed
/// by a row digit, both within the board.
///
/// ```
/// use chipflip_engine::{BoardSize, chip_id};
///
/// let size = BoardSize::new(3).unwrap();
/// assert_eq!(chip_id::decode("C1", size), Ok(2));
/// assert!(chip_id::decode("D1", size).is_err());
/// ```
pub fn decode(text: &str, size: BoardSize) -> Result<usize, MoveError> {
    let &[letter, digit] = text.as_bytes() else {
        return Err(MoveError::InvalidChip);
    };
    let x = size.get();
    let col = usize::from(letter.wrapping_sub(b'A'));
    let row = usize::from(digit.wrapping_sub(b'1'));
    if row >= x || col >= x {
        return Err(MoveError::InvalidChip);
    }
    Ok(row * x + col)
}

/// Formats a chip index as its code.
///
/// The index is first reduced modulo the number of chips, so any `usize` yields
/// a valid code. This means `encode` is not the inverse of [`decode`] outside
/// the board.
#[must_use]
pub fn encode(index: usize, size: BoardSize) -> String {
    let x = size.get();
    let index = index % size.cell_count();
    let letter = char::from(b'A' + u8::try_from(index % x).unwrap_or_default());
    let digit = index / x + 1;
    format!("{letter}{digit}")
}
