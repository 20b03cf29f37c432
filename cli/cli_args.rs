use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Aggregate the text files under a directory into one prompt document.",
    long_about = "dirprompt walks a directory, keeps the files allowed by include/exclude globs, \nand prints each one between START/END FILE markers. With --max-length the \ndocument is split into numbered parts of at most N lines.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  dirprompt --path . --exclude 'target,*.lock'\n  dirprompt -i '**/*.rs,Cargo.toml' -m 400\n  dirprompt --list --gitignore"
)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        value_name = "PATH",
        help = "Root directory to scan [default: . or $DIRPROMPT_ROOT].",
        help_heading = "Selection"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'e',
        long,
        value_name = "PATTERNS",
        action = clap::ArgAction::Append,
        help = "Comma-separated glob patterns to exclude (e.g. venv/*,*.log).",
        help_heading = "Selection"
    )]
    pub exclude: Vec<String>,

    #[arg(
        short = 'i',
        long,
        value_name = "PATTERNS",
        action = clap::ArgAction::Append,
        help = "Comma-separated glob patterns to include (e.g. **/*.go,cmd/**). When empty, all files are included.",
        help_heading = "Selection"
    )]
    pub include: Vec<String>,

    #[arg(
        long,
        help = "Also honor .gitignore, .ignore and git exclude files.",
        help_heading = "Selection"
    )]
    pub gitignore: bool,

    #[arg(
        short = 'm',
        long,
        value_name = "N",
        allow_negative_numbers = true,
        help = "Maximum number of lines per prompt part (0 means no limit).",
        help_heading = "Output Control"
    )]
    pub max_length: Option<i64>,

    #[arg(
        short = 'l',
        long,
        help = "Print the selected file paths instead of their contents.",
        help_heading = "Output Control"
    )]
    pub list: bool,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write the output to FILE instead of standard output.",
        help_heading = "Output Control"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        help = "Print file, line, size and token statistics to stderr.",
        help_heading = "Output Control"
    )]
    pub stats: bool,

    #[arg(
        long,
        value_name = "CONFIG_FILE",
        conflicts_with = "no_config",
        help = "Path of the TOML config file (default: <PATH>/dirprompt.toml when present).",
        help_heading = "Configuration"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        conflicts_with = "config",
        help = "Disable loading any TOML config file.",
        help_heading = "Configuration"
    )]
    pub no_config: bool,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}

impl Cli {
    pub fn include_patterns(&self) -> Vec<String> {
        split_all(&self.include)
    }

    pub fn exclude_patterns(&self) -> Vec<String> {
        split_all(&self.exclude)
    }
}

fn split_all(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|s| dirprompt_core::Config::split_patterns(s))
        .collect()
}
