//! Card deck rendering: placement fragments, template contract, file output

mod config;
mod formatter;
mod renderer;
mod template;

pub use config::DeckConfig;
pub use formatter::{batch_fragment, placement_fragment, Placement, BATCH_SIZE, CARD_MACRO};
pub use renderer::{render_deck, BatchOffsets, DeckRenderer, RenderSummary};
pub use template::Template;
