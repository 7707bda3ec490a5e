//! Chess960 start positions for arrangements

use shakmaty::{fen::Fen, CastlingMode, Chess, EnPassantMode};

use super::Arrangement;
use crate::error::{Error, Result};

impl Arrangement {
    /// FEN of the start position with this back rank for both sides.
    pub fn fen_string(&self) -> String {
        let white = self.to_string();
        let black = white.to_lowercase();
        format!("{}/pppppppp/8/8/8/8/PPPPPPPP/{} w KQkq - 0 1", black, white)
    }

    /// Parses [`Self::fen_string`] into a playable Chess960 position.
    ///
    /// Two bishops on one shade next to eight pawns count as too much
    /// material for a game that started from a normal setup. That is
    /// expected here, so only that check is waived.
    pub fn to_position(&self) -> Result<Chess> {
        let fen: Fen = self
            .fen_string()
            .parse()
            .map_err(|e| Error::Fen(format!("Invalid FEN: {}", e)))?;
        fen.into_position(CastlingMode::Chess960)
            .or_else(|e| e.ignore_too_much_material())
            .map_err(|e| Error::Fen(format!("Invalid position: {}", e)))
    }

    /// FEN as shakmaty writes it back out for the validated position.
    pub fn to_fen(&self) -> Result<String> {
        let position = self.to_position()?;
        Ok(Fen::from_position(&position, EnPassantMode::Legal).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrangement::{accepted_set, BishopRule};
    use shakmaty::{Color, Piece, Position, Role, Square};

    #[test]
    fn test_standard_rank_fen() {
        let arrangement: Arrangement = "RNBQKBNR".parse().unwrap();
        assert_eq!(
            arrangement.fen_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );

        let fen = arrangement.to_fen().unwrap();
        assert!(fen.starts_with("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w "));
    }

    #[test]
    fn test_position_places_back_rank() {
        // bishops on b1 and d1, both light
        let arrangement: Arrangement = "RBNBKQNR".parse().unwrap();
        let position = arrangement.to_position().unwrap();
        let board = position.board();

        assert_eq!(
            board.piece_at(Square::A1),
            Some(Piece { color: Color::White, role: Role::Rook })
        );
        assert_eq!(
            board.piece_at(Square::E8),
            Some(Piece { color: Color::Black, role: Role::King })
        );
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(position.turn(), Color::White);
    }

    #[test]
    fn test_every_accepted_rank_has_a_fen() {
        for rule in [BishopRule::EvenSum, BishopRule::OppositeColors] {
            for arrangement in accepted_set(rule).unwrap() {
                let fen = arrangement
                    .to_fen()
                    .unwrap_or_else(|e| panic!("{} ({:?}): {}", arrangement, rule, e));
                let back_rank = fen.split(['/', ' ']).nth(7).unwrap();
                assert_eq!(back_rank, arrangement.to_string());
            }
        }
    }
}
