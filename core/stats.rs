use crate::error::{AppError, Result};
use crate::pipeline::Prompt;
use byte_unit::{Byte, UnitType};
use log;
use tiktoken_rs::cl100k_base;

#[derive(Debug, Clone, PartialEq)]
pub struct PromptStats {
    pub total_files: usize,
    pub total_lines: usize,
    pub total_bytes: u128,
    pub total_bytes_readable: String,
    pub estimated_tokens: usize,
    pub parts: Vec<PartStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartStats {
    pub index: usize,
    pub lines: usize,
    pub estimated_tokens: usize,
}

impl PromptStats {
    /// Token counts use the `cl100k_base` encoding as an estimate.
    pub fn collect(prompt: &Prompt) -> Result<Self> {
        let bpe = cl100k_base().map_err(|e| AppError::TikToken(e.to_string()))?;
        log::debug!("Calculating prompt statistics...");

        let parts: Vec<PartStats> = prompt
            .parts
            .iter()
            .enumerate()
            .map(|(i, part)| PartStats {
                index: i + 1,
                lines: part.split('\n').count(),
                estimated_tokens: bpe.encode_ordinary(part).len(),
            })
            .collect();

        let total_bytes = prompt.document.len() as u128;
        let total_bytes_readable = Byte::from_u128(total_bytes)
            .unwrap_or_default()
            .get_appropriate_unit(UnitType::Binary)
            .to_string();

        Ok(Self {
            total_files: prompt.files.len(),
            total_lines: prompt.document.split('\n').count(),
            total_bytes,
            total_bytes_readable,
            estimated_tokens: bpe.encode_ordinary(&prompt.document).len(),
            parts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pipeline::build_prompt;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_counts_lines_and_parts() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "hello world").unwrap();
        fs::write(temp.path().join("b.txt"), "one\ntwo").unwrap();

        let prompt = build_prompt(&Config::new(temp.path()).with_max_lines(4)).unwrap();
        let stats = PromptStats::collect(&prompt).unwrap();

        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_lines, 10);
        assert_eq!(stats.total_bytes, prompt.document.len() as u128);
        assert!(stats.total_bytes_readable.ends_with('B'));
        assert!(stats.estimated_tokens > 0);
        assert_eq!(stats.parts.len(), 3);
        assert_eq!(
            stats.parts.iter().map(|p| p.lines).collect::<Vec<_>>(),
            vec![4, 4, 2]
        );
        assert_eq!(stats.parts[2].index, 3);
    }
}
