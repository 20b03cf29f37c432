use crate::error::{AppError, Result};
use log;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILENAME: &str = "dirprompt.toml";
pub const ROOT_ENV_VAR: &str = "DIRPROMPT_ROOT";

/// Run configuration, built once at startup and passed explicitly into the
/// selector, renderer and chunker.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(skip)]
    pub root: PathBuf,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_false")]
    pub use_gitignore: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Lines per part; zero or negative means a single unbounded part.
    #[serde(default)]
    pub max_lines: i64,
}

fn default_false() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_include<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.scan.include = patterns.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_exclude<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.scan.exclude = patterns.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    pub fn with_max_lines(mut self, max_lines: i64) -> Self {
        self.output.max_lines = max_lines;
        self
    }

    pub fn is_chunked(&self) -> bool {
        self.output.max_lines > 0
    }

    /// Resolves the scan root: explicit value, then `DIRPROMPT_ROOT`, then the
    /// current directory. The path is tilde-expanded but kept as given
    /// otherwise.
    pub fn determine_root(cli_root: Option<&PathBuf>) -> Result<PathBuf> {
        let path_str = cli_root
            .map(|p| p.to_string_lossy().to_string())
            .or_else(|| env::var(ROOT_ENV_VAR).ok().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| ".".to_string());

        let root = PathBuf::from(shellexpand::tilde(&path_str).as_ref());
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(root),
            Ok(_) => Err(AppError::Walk(format!(
                "Root '{}' is not a directory",
                root.display()
            ))),
            Err(e) => Err(AppError::Walk(format!(
                "Cannot access root '{}': {}",
                root.display(),
                e
            ))),
        }
    }

    pub fn resolve_config_path(
        root: &Path,
        cli_config_file: Option<&PathBuf>,
        cli_disable_config: bool,
    ) -> Result<Option<PathBuf>> {
        if cli_disable_config {
            log::debug!("Config file loading disabled via CLI flag.");
            return Ok(None);
        }

        match cli_config_file {
            Some(p) => {
                let path = PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).as_ref());
                if !path.is_file() {
                    return Err(AppError::Config(format!(
                        "Specified config file not found at path: {}",
                        path.display()
                    )));
                }
                log::debug!("Using specified config file path: {}", path.display());
                Ok(Some(path))
            }
            None => {
                let default_path = root.join(DEFAULT_CONFIG_FILENAME);
                if default_path.is_file() {
                    log::debug!("Using default config file path: {}", default_path.display());
                    Ok(Some(default_path))
                } else {
                    log::debug!(
                        "No config file specified and default not found at: {}",
                        default_path.display()
                    );
                    Ok(None)
                }
            }
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        log::info!("Loading configuration from: {}", config_path.display());
        let toml_content = fs::read_to_string(config_path).map_err(|e| AppError::FileRead {
            path: config_path.to_path_buf(),
            source: e,
        })?;
        toml::from_str::<Config>(&toml_content).map_err(|e| {
            AppError::TomlParse(format!(
                "Error parsing config file '{}': {}. Check TOML syntax and structure.",
                config_path.display(),
                e
            ))
        })
    }

    /// Splits a comma-separated pattern list, dropping blank entries.
    pub fn split_patterns(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
