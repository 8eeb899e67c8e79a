// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;

use crate::{
    chart::{Palette, build_radar},
    config::options::{OutputFormat, OutputOptions},
    csv::report_to_string,
    data::ScoutReport,
    message::{Message, Player, ProtocolError},
    specs::HtmlPage,
};

#[derive(Debug, Error)]
pub enum FileError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("could not encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("could not write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> FileError + '_ {
    move |source| FileError::Io { path: path.to_path_buf(), source }
}

/// Load a saved player page.
pub fn read_page(path: &Path) -> Result<HtmlPage, FileError> {
    let html = fs::read(path).map_err(io_err(path))?;
    Ok(HtmlPage::parse(&String::from_utf8_lossy(&html)))
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Report → text in the requested format. `palette` only matters for `Chart`,
/// `timestamp` only for `Message`.
pub fn render_report(
    report: &ScoutReport,
    format: OutputFormat,
    palette: &Palette,
    timestamp: u64,
) -> Result<String, FileError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = format.delim().unwrap_or(',');
            Ok(report_to_string(report, sep))
        }
        OutputFormat::Message => {
            let player = Player::from_report(report.clone(), timestamp);
            Ok(Message::AddToCompare { player }.to_json()?)
        }
        OutputFormat::Chart => {
            let radar = build_radar(&report.stats, &report.split_indexes, palette);
            Ok(serde_json::to_string_pretty(&radar)?)
        }
    }
}

/// Write rendered output where `opts` says. Returns the file written, or
/// None when it went to stdout.
pub fn write_output(opts: &OutputOptions, player_name: &str, contents: &str) -> Result<Option<PathBuf>, FileError> {
    let Some(path) = opts.out_path(player_name) else {
        let mut out = io::stdout().lock();
        out.write_all(contents.as_bytes()).map_err(FileError::Stdout)?;
        if !contents.ends_with('\n') {
            writeln!(out).map_err(FileError::Stdout)?;
        }
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, contents).map_err(io_err(&path))?;
    Ok(Some(path))
}

/// Absolute `file:///` URL for a local path. Spaces and `%` are escaped,
/// Windows separators become `/`.
pub fn file_url(path: &Path) -> Result<String, FileError> {
    let abs = std::path::absolute(path).map_err(io_err(path))?;
    let text = abs.to_string_lossy().replace('\\', "/").replace('%', "%25").replace(' ', "%20");
    let rooted = text.trim_start_matches('/');
    Ok(join!("file:///", rooted))
}

pub fn ensure_directory(dir: &Path) -> Result<(), FileError> {
    if dir.exists() && !dir.is_dir() {
        return Err(FileError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(io_err(dir))?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PlayerInfo, Position, Stat};

    fn report() -> ScoutReport {
        ScoutReport {
            info: PlayerInfo { name: s!("Declan Rice"), position: Some(Position::Midfield) },
            stats: vec![Stat::new("Tackles", 2.0, 80.0)],
            split_indexes: vec![],
        }
    }

    #[test]
    fn message_format_wraps_player() {
        let text = render_report(&report(), OutputFormat::Message, &Palette::default(), 1_700_000_000_000).unwrap();
        match Message::from_json(&text).unwrap() {
            Message::AddToCompare { player } => {
                assert_eq!(player.id, "declan_rice-1700000000000");
                assert_eq!(player.report(), report());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn json_format_is_camel_case() {
        let text = render_report(&report(), OutputFormat::Json, &Palette::default(), 0).unwrap();
        assert!(text.contains("\"splitIndexes\""));
        assert!(text.contains("\"position\": \"midfield\""));
    }

    #[test]
    fn chart_format_has_series_per_section() {
        let text = render_report(&report(), OutputFormat::Chart, &Palette::default(), 0).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["datasets"].as_array().unwrap().len(), 1);
        assert_eq!(value["datasets"][0]["label"], "Attacking");
        assert_eq!(value["scale"]["stepSize"], 20.0);
    }

    #[test]
    fn file_url_is_absolute() {
        let url = file_url(Path::new("out/Some Player.json")).unwrap();
        assert!(url.starts_with("file:///"));
        assert!(!url.starts_with("file:////"));
        assert!(url.ends_with("/out/Some%20Player.json"));

        let cwd = std::env::current_dir().unwrap();
        let cwd = cwd.to_string_lossy().replace('\\', "/").replace(' ', "%20");
        assert!(url.contains(cwd.trim_start_matches('/')));
    }

    #[test]
    fn dir_hint_detection() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out/report.csv")));
    }
}
