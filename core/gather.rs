use crate::config::Config;
use crate::error::Result;
use crate::pattern::{PathMatcher, PatternSet};
use ignore::WalkBuilder;
use log;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A file that passed include/exclude filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Path as produced by the walk, usable for reading.
    pub path: PathBuf,
    /// Root-relative path with `/` separators; the matching and sort key.
    pub relative: String,
}

/// Computes the forward-slash path of `path` relative to `root`.
///
/// Returns `None` when `path` does not live under `root` or is the root
/// itself.
pub fn relative_key(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Exclude wins; otherwise a non-empty include set must match.
pub fn should_include<M: PathMatcher>(
    relative: &str,
    include: &M,
    has_includes: bool,
    exclude: &M,
) -> bool {
    if exclude.is_match(relative) {
        log::trace!("Path excluded by exclude set: {}", relative);
        return false;
    }
    if has_includes && !include.is_match(relative) {
        log::trace!("Path not included by include set: {}", relative);
        return false;
    }
    true
}

/// Walks `config.root` and returns the files that pass filtering, sorted by
/// their relative key.
///
/// Directories matching an exclude pattern are pruned before descent. Any
/// traversal error aborts the walk.
pub fn select_files(config: &Config) -> Result<Vec<SelectedFile>> {
    let root = config.root.as_path();
    let include_set = PatternSet::new(config.scan.include.as_slice())?;
    let exclude_set = Arc::new(PatternSet::new(config.scan.exclude.as_slice())?);
    let has_includes = !include_set.is_empty();
    log::debug!(
        "Selecting files under {} (include: {:?}, exclude: {:?}, gitignore: {})",
        root.display(),
        include_set.patterns(),
        exclude_set.patterns(),
        config.scan.use_gitignore
    );

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.follow_links(false);
    let use_gitignore = config.scan.use_gitignore;
    builder.ignore(use_gitignore);
    builder.git_ignore(use_gitignore);
    builder.git_exclude(use_gitignore);
    builder.require_git(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let prune_root = root.to_path_buf();
    let prune_set = Arc::clone(&exclude_set);
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        match relative_key(entry.path(), &prune_root) {
            Some(rel) if prune_set.is_match(&rel) => {
                log::trace!("Pruning excluded directory: {}", rel);
                false
            }
            _ => true,
        }
    });

    let mut files = Vec::new();
    log::info!("Walking directory: {}", root.display());
    for entry in builder.build() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let Some(relative) = relative_key(entry.path(), root) else {
            log::debug!(
                "Could not get relative path for: {}",
                entry.path().display()
            );
            continue;
        };

        if should_include(&relative, &include_set, has_includes, &*exclude_set) {
            log::trace!("Selected file: {}", relative);
            files.push(SelectedFile {
                path: entry.into_path(),
                relative,
            });
        }
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    log::info!("Selected {} files.", files.len());
    Ok(files)
}
