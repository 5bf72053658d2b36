//! Post conversion
//!
//! Derives every output field from the input path and an injected timestamp,
//! then writes the front-matter header plus the untouched body.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::consts::{DATE_FORMAT, TIMESTAMP_FORMAT, TITLE_MARKER};
use crate::error::AppError;

/// Everything needed to produce one post, computed up front.
///
/// Fields are never mutated after `prepare`; `write` only reads them.
#[derive(Debug)]
pub(crate) struct ConversionRequest {
    pub(crate) input_path: PathBuf,
    pub(crate) base_name: String,
    pub(crate) title: String,
    pub(crate) timestamp: String,
    pub(crate) output_path: PathBuf,
    body: String,
}

impl ConversionRequest {
    /// Read the input file and derive all conversion fields.
    ///
    /// The clock and output directory are parameters so the derivation is
    /// deterministic under test. A missing input is the only error callers
    /// are expected to recover from.
    pub(crate) fn prepare(
        input_path: &Path,
        posts_dir: &Path,
        now: DateTime<FixedOffset>,
    ) -> Result<Self, AppError> {
        let content = fs::read_to_string(input_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AppError::InputNotFound {
                path: input_path.to_path_buf(),
            },
            _ => AppError::Io(e),
        })?;

        let (first_line, body) = match content.split_once('\n') {
            Some((first, rest)) => (first, rest),
            None => (content.as_str(), ""),
        };
        let first_line = first_line.trim_end_matches('\r');

        let file_name = input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // Keep only the portion before the first dot: "draft.old.md" -> "draft"
        let base_name = file_name
            .split('.')
            .next()
            .unwrap_or(file_name.as_str())
            .to_string();

        let title = match first_line.strip_prefix(TITLE_MARKER) {
            Some(stripped) if !stripped.is_empty() => stripped.to_string(),
            _ => base_name.clone(),
        };

        let date = now.format(DATE_FORMAT).to_string();
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let output_path = posts_dir.join(format!("{date}-{base_name}.md"));

        Ok(ConversionRequest {
            input_path: input_path.to_path_buf(),
            base_name,
            title,
            timestamp,
            output_path,
            body: body.to_string(),
        })
    }

    fn front_matter(&self) -> String {
        format!("---\ntitle: {}\ndate: {}\n---\n", self.title, self.timestamp)
    }

    /// Create the posts directory if needed and write the post.
    ///
    /// An existing file at the output path is overwritten: re-running the
    /// conversion the same day refreshes the post in place.
    pub(crate) fn write(&self) -> Result<&Path, AppError> {
        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut contents = self.front_matter();
        contents.push_str(&self.body);
        fs::write(&self.output_path, contents)?;
        Ok(&self.output_path)
    }
}
