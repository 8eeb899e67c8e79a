// src/cli.rs
use std::{fs, path::PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use log::{LevelFilter, info, warn};

use crate::{
    chart::{Palette, Theme},
    config::{
        consts::LOG_FILE,
        options::{AppOptions, OutputFormat, OutputOptions},
    },
    file,
    scrape::{can_extract, scrape},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Tsv,
    /// `addToCompare` message, as another context would receive it
    Message,
    /// Radar chart dataset
    Chart,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => OutputFormat::Json,
            Format::Csv => OutputFormat::Csv,
            Format::Tsv => OutputFormat::Tsv,
            Format::Message => OutputFormat::Message,
            Format::Chart => OutputFormat::Chart,
        }
    }
}

/// Extract the scouting report from a saved FBref player page.
#[derive(Debug, Parser)]
#[command(name = "scout_radar", version, about)]
pub struct Args {
    /// Saved player page (.html)
    pub page: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Output file, or a directory ending in `/`. Stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Stylesheet declaring `--color1`..`--color3`, `--alpha`, `--bg`, `--fg`
    #[arg(long)]
    pub theme: Option<PathBuf>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    pub fn options(&self) -> Result<AppOptions> {
        let theme = match &self.theme {
            Some(path) => {
                let css = fs::read_to_string(path)
                    .wrap_err_with(|| format!("reading theme {}", path.display()))?;
                let theme = Theme::parse_css(&css);
                if theme.is_empty() {
                    warn!("Theme {}: no --custom-property declarations, using defaults", path.display());
                }
                theme
            }
            None => Theme::default(),
        };
        Ok(AppOptions {
            output: OutputOptions { format: self.format.into(), out: self.out.clone() },
            theme,
            log_level: self.log_level,
        })
    }
}

pub fn run(args: Args) -> Result<()> {
    crate::logging::init(LOG_FILE, args.log_level)?;
    let opts = args.options()?;

    let mut page = file::read_page(&args.page)?;
    if !can_extract(&page) {
        bail!("{}: no scouting report on this page", args.page.display());
    }
    let report = scrape(&mut page)
        .ok_or_else(|| eyre!("{}: scouting report export could not be loaded", args.page.display()))?;
    info!("{}: {} stats in {} sections", report.info.name, report.stats.len(), report.section_count());
    let generated: Vec<&str> = page.generated_ids().collect();
    if !generated.is_empty() {
        info!("Export built from page table(s): {}", generated.join(", "));
    }

    let palette = Palette::from_theme(&opts.theme);
    let text = file::render_report(&report, opts.output.format, &palette, file::now_millis())?;
    if let Some(path) = file::write_output(&opts.output, &report.info.name, &text)? {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_on_stdout() {
        let args = Args::parse_from(["scout_radar", "page.html"]);
        let opts = args.options().unwrap();
        assert_eq!(opts.output, OutputOptions::default());
        assert_eq!(opts.log_level, LevelFilter::Info);
        assert!(opts.theme.is_empty());
    }

    #[test]
    fn format_and_out_flags() {
        let args = Args::parse_from([
            "scout_radar", "page.html", "--format", "tsv", "-o", "reports/", "--log-level", "debug",
        ]);
        let opts = args.options().unwrap();
        assert_eq!(opts.output.format, OutputFormat::Tsv);
        assert_eq!(opts.output.out, Some(PathBuf::from("reports/")));
        assert_eq!(opts.log_level, LevelFilter::Debug);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["scout_radar", "page.html", "--format", "xml"]).is_err());
    }

    #[test]
    fn theme_file_feeds_options() {
        let path = std::env::temp_dir().join("scout_radar_cli_theme.css");
        fs::write(&path, ":root { --color1: #010203; --bg: #000000; }").unwrap();
        let args = Args::parse_from(["scout_radar", "page.html", "--theme", path.to_str().unwrap()]);
        let opts = args.options().unwrap();
        assert_eq!(opts.theme.get("--color1"), Some("#010203"));
        assert_eq!(Palette::from_theme(&opts.theme).colors[0], crate::chart::Rgb::new(1, 2, 3));
    }

    #[test]
    fn missing_theme_file_is_an_error() {
        let args = Args::parse_from(["scout_radar", "page.html", "--theme", "/nonexistent/theme.css"]);
        assert!(args.options().is_err());
    }
}
