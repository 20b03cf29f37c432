use anyhow::{Context, Result};
use colored::*;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL};
use dirprompt_core::{AppError, PromptStats, SelectedFile};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Writes `content` to `output_path`, or to stdout when no path is given.
/// Nothing is appended; the text is emitted byte for byte.
pub fn emit(content: &str, output_path: Option<&Path>, quiet: bool) -> Result<()> {
    match output_path {
        Some(path) => {
            write_to_file(path, content)?;
            if !quiet {
                eprintln!(
                    "{} Output saved to: {}",
                    "✅".green(),
                    path.display().to_string().blue()
                );
            }
            Ok(())
        }
        None => write_to_stdout(content),
    }
}

/// One relative path per line.
pub fn format_file_list(files: &[SelectedFile]) -> String {
    files
        .iter()
        .map(|f| format!("{}\n", f.relative))
        .collect()
}

fn write_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(AppError::Io)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let mut file = File::create(path).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|e| AppError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(())
}

fn write_to_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .map_err(AppError::Io)
        .context("Failed to write to stdout")?;
    handle
        .flush()
        .map_err(AppError::Io)
        .context("Failed to flush stdout")?;
    Ok(())
}

pub fn print_stats_table(stats: &PromptStats) {
    eprintln!();
    eprintln!("{}", " Prompt Summary ".green().bold().underline());
    eprintln!(
        "{:<20} {}",
        "Files:".green(),
        stats.total_files.to_string().cyan()
    );
    eprintln!(
        "{:<20} {}",
        "Lines:".green(),
        stats.total_lines.to_string().cyan()
    );
    eprintln!(
        "{:<20} {}",
        "Size:".green(),
        stats.total_bytes_readable.cyan()
    );
    eprintln!(
        "{:<20} {}",
        "Est. Tokens:".green(),
        stats.estimated_tokens.to_string().cyan()
    );

    if stats.parts.len() > 1 {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Part").fg(Color::Green),
            Cell::new("Lines").fg(Color::Green),
            Cell::new("Tokens").fg(Color::Green),
        ]);
        for part in &stats.parts {
            table.add_row(vec![
                Cell::new(format!("{} of {}", part.index, stats.parts.len())).fg(Color::Cyan),
                Cell::new(part.lines).set_alignment(CellAlignment::Right),
                Cell::new(part.estimated_tokens).set_alignment(CellAlignment::Right),
            ]);
        }
        eprintln!("{table}");
    }
    eprintln!();
}
