//! Deck generation settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::renderer::BatchOffsets;
use crate::arrangement::BishopRule;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeckConfig {
    /// Card template containing the `\def\wholeCard` line.
    pub template: PathBuf,
    /// Directory the rendered cards go into.
    pub out_dir: PathBuf,
    pub file_prefix: String,
    pub extension: String,
    /// Cards to render. `None` renders every complete card the accepted
    /// arrangements allow.
    pub batches: Option<usize>,
    pub bishops: BishopRule,
    pub offsets: BatchOffsets,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from("chess_card.tex"),
            out_dir: PathBuf::from("deckTex"),
            file_prefix: "chess_card".to_string(),
            extension: "tex".to_string(),
            batches: None,
            bishops: BishopRule::default(),
            offsets: BatchOffsets::default(),
        }
    }
}

impl DeckConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batches == Some(0) {
            return Err(Error::Config("batches must be > 0".to_string()));
        }
        if self.file_prefix.trim().is_empty() {
            return Err(Error::Config("file_prefix must not be empty".to_string()));
        }
        if self.extension.trim().is_empty() || self.extension.contains('.') {
            return Err(Error::Config(
                "extension must be non-empty and given without a dot".to_string(),
            ));
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(Error::Config(
                "file_prefix must not contain path separators".to_string(),
            ));
        }
        Ok(())
    }
}
