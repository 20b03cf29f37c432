use crate::error::Result;
use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};
use log;

/// Decides whether a root-relative, forward-slash path is matched.
pub trait PathMatcher {
    fn is_match(&self, relative_path: &str) -> bool;
}

/// A compiled set of glob patterns.
///
/// `*` stays within one path segment and `**` spans zero or more segments.
/// Blank entries are ignored and patterns that fail to compile are dropped
/// with a warning, so they simply never match.
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: GlobSet,
    patterns: Vec<String>,
}

impl PatternSet {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut accepted = Vec::new();
        for raw in patterns {
            let pattern = raw.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            match compile(pattern) {
                Ok(globs) => {
                    log::trace!("Adding glob pattern: {}", pattern);
                    for glob in globs {
                        builder.add(glob);
                    }
                    accepted.push(pattern.to_string());
                }
                Err(e) => {
                    log::warn!("Ignoring invalid glob pattern \"{}\": {}", pattern, e);
                }
            }
        }
        let set = builder.build()?;
        Ok(Self {
            set,
            patterns: accepted,
        })
    }

    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Patterns that compiled, in the order given.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// A trailing `/**` also matches zero segments, so `cmd/**` covers `cmd`
/// itself. The stem is compiled as a second glob.
fn compile(pattern: &str) -> Result<Vec<Glob>, globset::Error> {
    let mut globs = vec![GlobBuilder::new(pattern).literal_separator(true).build()?];
    if let Some(stem) = pattern.strip_suffix("/**").filter(|s| !s.is_empty()) {
        globs.push(GlobBuilder::new(stem).literal_separator(true).build()?);
    }
    Ok(globs)
}

impl PathMatcher for PatternSet {
    fn is_match(&self, relative_path: &str) -> bool {
        !self.patterns.is_empty() && self.set.is_match(relative_path)
    }
}

/// Returns true if `relative_path` matches any of `patterns`.
pub fn matches<S: AsRef<str>>(relative_path: &str, patterns: &[S]) -> bool {
    match PatternSet::new(patterns) {
        Ok(set) => set.is_match(relative_path),
        Err(e) => {
            log::warn!("Could not build pattern set: {}", e);
            false
        }
    }
}
