use crate::chunking::{self, Part};
use crate::config::Config;
use crate::error::Result;
use crate::gather::{self, SelectedFile};
use crate::render;
use log;

/// The result of one run: selected files, the rendered document and its
/// parts.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub files: Vec<SelectedFile>,
    pub document: String,
    pub parts: Vec<String>,
    pub chunked: bool,
}

impl Prompt {
    pub fn numbered_parts(&self) -> Vec<Part> {
        chunking::into_parts(self.parts.clone())
    }

    /// Text for stdout: the raw document when unchunked, otherwise every part
    /// wrapped in its numbered markers.
    pub fn to_output(&self) -> String {
        if !self.chunked {
            return self.document.clone();
        }
        self.numbered_parts()
            .iter()
            .map(chunking::render_part)
            .collect()
    }
}

/// Selects, renders and chunks according to `config`.
pub fn build_prompt(config: &Config) -> Result<Prompt> {
    log::debug!("Building prompt for root: {}", config.root.display());
    let files = gather::select_files(config)?;
    let document = render::render(&files);
    let parts = chunking::split_lines(&document, config.output.max_lines);
    log::debug!(
        "Prompt built: {} files, {} parts.",
        files.len(),
        parts.len()
    );
    Ok(Prompt {
        files,
        document,
        parts,
        chunked: config.is_chunked(),
    })
}
