// crates/core/src/arrangement/mod.rs
//! Back-rank arrangements: generation, filtering and FEN export

mod fen;
pub mod filter;
pub mod generator;
mod sample;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::pieces::Symbol;

pub use filter::{accepted_set, accepts, bishops_pass, king_between_rooks, BishopRule};
pub use generator::{all_arrangements, multiset_permutations, MultisetPermutations};
pub use sample::sample;

/// Number of squares on a back rank.
pub const RANK_LEN: usize = 8;

/// The multiset every back rank is drawn from.
pub const BACK_RANK: [Symbol; RANK_LEN] = [
    Symbol::Rook,
    Symbol::Rook,
    Symbol::Knight,
    Symbol::Knight,
    Symbol::Bishop,
    Symbol::Bishop,
    Symbol::King,
    Symbol::Queen,
];

/// One ordering of the back-rank multiset. Index 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Arrangement([Symbol; RANK_LEN]);

impl Arrangement {
    /// Builds an arrangement, checking it is a permutation of [`BACK_RANK`].
    pub fn new(symbols: &[Symbol]) -> Result<Self> {
        if symbols.len() != RANK_LEN {
            return Err(Error::InvalidArrangement(format!(
                "expected {} pieces, got {}",
                RANK_LEN,
                symbols.len()
            )));
        }

        for symbol in Symbol::ALL {
            let expected = BACK_RANK.iter().filter(|&&s| s == symbol).count();
            let found = symbols.iter().filter(|&&s| s == symbol).count();
            if expected != found {
                return Err(Error::InvalidArrangement(format!(
                    "expected {} {}(s), got {}",
                    expected,
                    symbol.name(),
                    found
                )));
            }
        }

        let mut squares = [Symbol::Rook; RANK_LEN];
        squares.copy_from_slice(symbols);
        Ok(Self(squares))
    }

    pub fn symbols(&self) -> &[Symbol; RANK_LEN] {
        &self.0
    }

    pub fn position_of(&self, symbol: Symbol) -> Option<usize> {
        self.0.iter().position(|&s| s == symbol)
    }

    pub fn positions_of(&self, symbol: Symbol) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == symbol)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn left_rook(&self) -> Option<usize> {
        self.position_of(Symbol::Rook)
    }

    pub fn right_rook(&self) -> Option<usize> {
        self.positions_of(Symbol::Rook).get(1).copied()
    }

    pub fn king(&self) -> Option<usize> {
        self.position_of(Symbol::King)
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Arrangement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let symbols = s
            .trim()
            .chars()
            .map(Symbol::from_char)
            .collect::<Result<Vec<_>>>()?;
        Self::new(&symbols)
    }
}

impl From<Arrangement> for String {
    fn from(arrangement: Arrangement) -> Self {
        arrangement.to_string()
    }
}

impl TryFrom<String> for Arrangement {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
