//! Writes one card document per batch of accepted arrangements

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::config::DeckConfig;
use super::formatter::{batch_fragment, BATCH_SIZE};
use super::template::Template;
use crate::arrangement::{accepted_set, Arrangement};
use crate::error::{Error, Result};

/// Where each card starts in the accepted set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchOffsets {
    /// Card `b` takes arrangements `[4b, 4b + 4)`; no two cards share one.
    #[default]
    Disjoint,
    /// Card `b` takes arrangements `[b, b + 4)`, the layout the reference
    /// deck was printed with. Neighbouring cards overlap by three.
    Reference,
}

impl BatchOffsets {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchOffsets::Disjoint => "disjoint",
            BatchOffsets::Reference => "reference",
        }
    }

    /// First accepted index of card `batch`, `None` on overflow.
    pub fn offset(self, batch: usize) -> Option<usize> {
        match self {
            BatchOffsets::Disjoint => batch.checked_mul(BATCH_SIZE),
            BatchOffsets::Reference => Some(batch),
        }
    }

    /// One past the last accepted index used by the first `batches` cards.
    pub fn span(self, batches: usize) -> Option<usize> {
        match batches {
            0 => Some(0),
            n => self.offset(n - 1)?.checked_add(BATCH_SIZE),
        }
    }
}

/// Result of a render run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderSummary {
    pub files_written: usize,
    pub files_overwritten: usize,
    /// Distinct accepted arrangements that appear on some card.
    pub arrangements_used: usize,
    pub paths: Vec<PathBuf>,
}

pub struct DeckRenderer {
    template: Template,
    accepted: Vec<Arrangement>,
    offsets: BatchOffsets,
    file_prefix: String,
    extension: String,
}

impl DeckRenderer {
    pub fn new(template: Template, accepted: Vec<Arrangement>) -> Self {
        let defaults = DeckConfig::default();
        Self {
            template,
            accepted,
            offsets: defaults.offsets,
            file_prefix: defaults.file_prefix,
            extension: defaults.extension,
        }
    }

    pub fn with_offsets(mut self, offsets: BatchOffsets) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn with_file_name(mut self, prefix: &str, extension: &str) -> Self {
        self.file_prefix = prefix.to_string();
        self.extension = extension.to_string();
        self
    }

    pub fn accepted(&self) -> &[Arrangement] {
        &self.accepted
    }

    pub fn offsets(&self) -> BatchOffsets {
        self.offsets
    }

    /// Number of complete cards the accepted arrangements fill.
    pub fn available_batches(&self) -> usize {
        match self.offsets {
            BatchOffsets::Disjoint => self.accepted.len() / BATCH_SIZE,
            BatchOffsets::Reference => (self.accepted.len() + 1).saturating_sub(BATCH_SIZE),
        }
    }

    /// Fails unless every one of `batches` cards finds four arrangements.
    /// The error reports the whole run: arrangements needed from the start
    /// of the accepted set against those available.
    pub fn check_capacity(&self, batches: usize) -> Result<()> {
        match self.offsets.span(batches) {
            Some(needed) if needed <= self.accepted.len() => Ok(()),
            needed => Err(Error::InsufficientArrangements {
                offset: 0,
                needed: needed.unwrap_or(usize::MAX),
                available: self.accepted.len(),
            }),
        }
    }

    /// Cards are named after `4 * batch` whatever the offset layout.
    pub fn file_name(&self, batch: usize) -> String {
        format!(
            "{}{}.{}",
            self.file_prefix,
            batch.saturating_mul(BATCH_SIZE),
            self.extension
        )
    }

    pub fn render_batch(&self, batch: usize) -> Result<String> {
        let offset = self.offsets.offset(batch).unwrap_or(usize::MAX);
        let fragment = batch_fragment(&self.accepted, offset)?;
        Ok(self.template.render(&fragment))
    }

    /// Renders `batches` cards into `out_dir`, replacing files of the same
    /// name. Nothing is written if the arrangements cannot fill every card.
    pub fn write_all(&self, out_dir: &Path, batches: usize) -> Result<RenderSummary> {
        self.check_capacity(batches)?;

        fs::create_dir_all(out_dir).map_err(|source| Error::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut summary = RenderSummary::default();
        for batch in 0..batches {
            let document = self.render_batch(batch)?;
            let path = out_dir.join(self.file_name(batch));

            if path.exists() {
                summary.files_overwritten += 1;
            }
            fs::write(&path, document).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), batch, "wrote card");

            summary.files_written += 1;
            summary.paths.push(path);
        }
        summary.arrangements_used = self.offsets.span(batches).unwrap_or_default();

        Ok(summary)
    }
}

/// Loads the template, builds the accepted arrangements and writes the deck.
pub fn render_deck(config: &DeckConfig) -> Result<RenderSummary> {
    config.validate()?;

    let template = Template::load(&config.template)?;
    let accepted = accepted_set(config.bishops)?;
    let renderer = DeckRenderer::new(template, accepted)
        .with_offsets(config.offsets)
        .with_file_name(&config.file_prefix, &config.extension);

    let batches = config
        .batches
        .unwrap_or_else(|| renderer.available_batches());

    tracing::info!(
        accepted = renderer.accepted().len(),
        batches,
        rule = config.bishops.as_str(),
        offsets = config.offsets.as_str(),
        out_dir = %config.out_dir.display(),
        "rendering deck"
    );

    let summary = renderer.write_all(&config.out_dir, batches)?;

    if summary.files_overwritten > 0 {
        tracing::warn!(
            count = summary.files_overwritten,
            "replaced existing card files"
        );
    }
    tracing::info!(
        files = summary.files_written,
        arrangements = summary.arrangements_used,
        "deck rendered"
    );

    Ok(summary)
}
