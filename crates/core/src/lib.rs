//! Chess Deck Core Library
//!
//! Enumerates shuffled back ranks that keep the king between the rooks and
//! pass a bishop placement rule, then renders them four to a card into a
//! LaTeX card template.

pub mod arrangement;
pub mod deck;
pub mod error;
pub mod pieces;

pub use arrangement::{accepted_set, Arrangement, BishopRule};
pub use deck::{render_deck, BatchOffsets, DeckConfig, DeckRenderer, RenderSummary, Template};
pub use error::{Error, Result};
pub use pieces::Symbol;
