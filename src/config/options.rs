// src/config/options.rs
use std::path::PathBuf;

use log::LevelFilter;

use crate::chart::Theme;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub output: OutputOptions,
    pub theme: Theme,
    pub log_level: LevelFilter,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            output: OutputOptions::default(),
            theme: Theme::default(),
            log_level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Csv,
    Tsv,
    /// `AddToCompare` message payload, as sent across contexts.
    Message,
    /// Radar chart dataset (labels + one series per section).
    Chart,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Message | OutputFormat::Chart => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// Field separator for tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            OutputFormat::Json | OutputFormat::Message | OutputFormat::Chart => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// None = stdout. A directory (or a path ending in a separator) gets
    /// `<player>.<ext>` appended.
    pub out: Option<PathBuf>,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self { format: OutputFormat::Json, out: None }
    }
}

impl OutputOptions {
    /// Resolve the target file for a given player, or None for stdout.
    pub fn out_path(&self, player_name: &str) -> Option<PathBuf> {
        let out = self.out.as_ref()?;
        if crate::file::looks_like_dir_hint(out) || out.is_dir() {
            let stem = crate::core::sanitize::sanitize_filename(player_name);
            Some(out.join(join!(&stem, ".", self.format.ext())))
        } else {
            Some(out.clone())
        }
    }
}
