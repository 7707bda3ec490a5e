//! Placement rules an arrangement must satisfy to make it into the deck

use serde::{Deserialize, Serialize};

use super::{all_arrangements, Arrangement};
use crate::error::Result;
use crate::pieces::Symbol;

/// How the two bishops are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BishopRule {
    /// Accept when the bishop square indices sum to an even number.
    /// Even sums mean both bishops share a square shade; this is the
    /// rule the reference deck was printed with.
    #[default]
    EvenSum,
    /// Accept when the bishops stand on squares of different shades.
    OppositeColors,
}

impl BishopRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            BishopRule::EvenSum => "even-sum",
            BishopRule::OppositeColors => "opposite-colors",
        }
    }
}

/// Walks the rank toggling at each rook; the king has to turn up while the
/// toggle is on, i.e. after the first rook and before the second.
pub fn king_between_rooks(arrangement: &Arrangement) -> bool {
    let mut between_rooks = false;
    let mut king_between = false;

    for &symbol in arrangement.symbols() {
        if symbol == Symbol::Rook {
            between_rooks = !between_rooks;
        }
        if between_rooks && symbol == Symbol::King {
            king_between = true;
        }
    }

    king_between
}

pub fn bishop_sum(arrangement: &Arrangement) -> usize {
    arrangement.positions_of(Symbol::Bishop).iter().sum()
}

pub fn bishops_pass(arrangement: &Arrangement, rule: BishopRule) -> bool {
    let even = bishop_sum(arrangement) % 2 == 0;
    match rule {
        BishopRule::EvenSum => even,
        BishopRule::OppositeColors => !even,
    }
}

pub fn accepts(arrangement: &Arrangement, rule: BishopRule) -> bool {
    king_between_rooks(arrangement) && bishops_pass(arrangement, rule)
}

/// All arrangements passing both rules, in generation order.
pub fn accepted_set(rule: BishopRule) -> Result<Vec<Arrangement>> {
    let accepted: Vec<Arrangement> = all_arrangements()?
        .into_iter()
        .filter(|arrangement| accepts(arrangement, rule))
        .collect();

    tracing::debug!(
        rule = rule.as_str(),
        accepted = accepted.len(),
        "filtered back ranks"
    );
    Ok(accepted)
}
