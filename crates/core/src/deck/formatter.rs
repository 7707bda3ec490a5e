//! Card placement fragments
//!
//! A placement is written as `index/{pos/name,...}/leftRook/rightRook/king`,
//! the shape the card macro `\wholeCard` iterates over.

use shakmaty::File;
use std::fmt;

use crate::arrangement::{Arrangement, RANK_LEN};
use crate::error::{Error, Result};

/// Arrangements per card.
pub const BATCH_SIZE: usize = 4;

/// The macro a card template defines with the generated placements.
pub const CARD_MACRO: &str = "\\def\\wholeCard";

/// One arrangement laid out for a card slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    /// `(square index, piece macro)` for squares 0..8.
    pub squares: Vec<(usize, String)>,
    pub left_rook: Option<usize>,
    pub right_rook: Option<usize>,
    pub king: Option<usize>,
}

impl Placement {
    pub fn new(index: usize, arrangement: &Arrangement) -> Self {
        let squares = arrangement
            .symbols()
            .iter()
            .zip(File::ALL)
            .enumerate()
            .map(|(pos, (symbol, file))| (pos, symbol.display_name(file)))
            .collect();

        Self {
            index,
            squares,
            left_rook: arrangement.left_rook(),
            right_rook: arrangement.right_rook(),
            king: arrangement.king(),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{{", self.index)?;
        for (pos, name) in &self.squares {
            write!(f, "{}/{}", pos, name)?;
            if *pos < RANK_LEN - 1 {
                write!(f, ",")?;
            }
        }
        write!(
            f,
            "}}/{}/{}/{}",
            square_or_missing(self.left_rook),
            square_or_missing(self.right_rook),
            square_or_missing(self.king)
        )
    }
}

// -1 marks a piece that is not on the rank
fn square_or_missing(square: Option<usize>) -> i64 {
    square.map_or(-1, |s| s as i64)
}

pub fn placement_fragment(index: usize, arrangement: &Arrangement) -> String {
    Placement::new(index, arrangement).to_string()
}

/// `\def\wholeCard{...}` line for the four arrangements starting at `offset`.
/// Slots are numbered 0..4 regardless of the offset.
pub fn batch_fragment(accepted: &[Arrangement], offset: usize) -> Result<String> {
    let batch = offset
        .checked_add(BATCH_SIZE)
        .and_then(|end| accepted.get(offset..end))
        .ok_or_else(|| Error::InsufficientArrangements {
            offset,
            needed: BATCH_SIZE,
            available: accepted.len().saturating_sub(offset),
        })?;

    let placements: Vec<String> = batch
        .iter()
        .enumerate()
        .map(|(slot, arrangement)| placement_fragment(slot, arrangement))
        .collect();

    Ok(format!("{}{{{}}}\n", CARD_MACRO, placements.join(",")))
}
