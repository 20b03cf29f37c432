pub mod chunking;
pub mod config;
pub mod error;
pub mod gather;
pub mod pattern;
pub mod pipeline;
pub mod render;
pub mod stats;

pub use chunking::{Part, into_parts, render_part, split_lines};
pub use config::Config;
pub use error::{AppError, Result};
pub use gather::{SelectedFile, select_files};
pub use pattern::{PathMatcher, PatternSet, matches};
pub use pipeline::{Prompt, build_prompt};
pub use render::render;
pub use stats::{PartStats, PromptStats};
