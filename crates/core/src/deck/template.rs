//! Card template with a single substitution line
//!
//! Template format: any text file in which at least one line contains the
//! card marker `\def\wholeCard`. The first such line is the substitution
//! line. It is dropped and replaced by the generated card definition; every
//! other byte of the file is kept as-is.

use std::fs;
use std::path::Path;

use super::formatter::CARD_MACRO;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    suffix: String,
    marker_line: usize,
}

impl Template {
    /// Zero-based index of the substitution line, if the text has one.
    pub fn find_marker(text: &str) -> Option<usize> {
        text.split_inclusive('\n')
            .position(|line| line.contains(CARD_MACRO))
    }

    /// Checks the template contract without keeping the parsed parts.
    pub fn validate(text: &str) -> Result<usize> {
        Self::find_marker(text).ok_or(Error::MarkerNotFound { marker: CARD_MACRO })
    }

    pub fn parse(text: &str) -> Result<Self> {
        let marker_line = Self::validate(text)?;
        let lines: Vec<&str> = text.split_inclusive('\n').collect();

        Ok(Self {
            prefix: lines[..marker_line].concat(),
            suffix: lines[marker_line + 1..].concat(),
            marker_line,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let template = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            marker_line = template.marker_line + 1,
            "loaded card template"
        );
        Ok(template)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn marker_line(&self) -> usize {
        self.marker_line
    }

    pub fn render(&self, fragment: &str) -> String {
        let mut document =
            String::with_capacity(self.prefix.len() + fragment.len() + self.suffix.len());
        document.push_str(&self.prefix);
        document.push_str(fragment);
        document.push_str(&self.suffix);
        document
    }
}
