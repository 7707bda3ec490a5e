//! Back-rank piece symbols and square shades

use serde::{Deserialize, Serialize};
use shakmaty::{Color, File, Rank, Role, Square};

use crate::error::{Error, Result};

/// One of the five piece kinds found on a back rank.
///
/// Variants are declared in the order of their letters (B < K < N < Q < R),
/// so the derived `Ord` matches the lexicographic order of arrangement strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Bishop,
    King,
    Knight,
    Queen,
    Rook,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Bishop,
        Symbol::King,
        Symbol::Knight,
        Symbol::Queen,
        Symbol::Rook,
    ];

    pub fn from_char(ch: char) -> Result<Self> {
        match ch {
            'B' => Ok(Symbol::Bishop),
            'K' => Ok(Symbol::King),
            'N' => Ok(Symbol::Knight),
            'Q' => Ok(Symbol::Queen),
            'R' => Ok(Symbol::Rook),
            other => Err(Error::InvalidArrangement(format!(
                "unknown piece letter '{}'",
                other
            ))),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Symbol::Bishop => 'B',
            Symbol::King => 'K',
            Symbol::Knight => 'N',
            Symbol::Queen => 'Q',
            Symbol::Rook => 'R',
        }
    }

    pub fn role(self) -> Role {
        match self {
            Symbol::Bishop => Role::Bishop,
            Symbol::King => Role::King,
            Symbol::Knight => Role::Knight,
            Symbol::Queen => Role::Queen,
            Symbol::Rook => Role::Rook,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Bishop => "Bishop",
            Symbol::King => "King",
            Symbol::Knight => "Knight",
            Symbol::Queen => "Queen",
            Symbol::Rook => "Rook",
        }
    }

    /// Card macro for this piece standing on the first-rank square of
    /// `file`, e.g. `\WhiteRookOnBlack`.
    pub fn display_name(self, file: File) -> String {
        format!("\\White{}On{}", self.name(), shade_name(file))
    }
}

/// Shade of the first-rank square on `file`.
///
/// a1 is a dark square, so even back-rank indices are black and odd ones white.
pub fn square_shade(file: File) -> Color {
    let square = Square::from_coords(file, Rank::First);
    if square.is_light() {
        Color::White
    } else {
        Color::Black
    }
}

pub fn shade_name(file: File) -> &'static str {
    if square_shade(file) == Color::White {
        "White"
    } else {
        "Black"
    }
}
