// src/message.rs
//! Cross-context command protocol.
//!
//! Every message is one flat JSON object whose `command` field selects the
//! payload shape. The set is closed: decoding an unknown command is a
//! protocol error, never a silent default.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{PlayerInfo, ScoutReport, SplitIndexes, Stat};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Message {
    Launch,
    Download,
    #[serde(rename_all = "camelCase")]
    DownloadDone { data_url: String },
    SetIcon { status: bool },
    AddToCompare { player: Player },
    Close,
    RequestLoadStatus,
}

/// Tag of a message, for dispatch tables and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Launch,
    Download,
    DownloadDone,
    SetIcon,
    AddToCompare,
    Close,
    RequestLoadStatus,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Launch,
        Command::Download,
        Command::DownloadDone,
        Command::SetIcon,
        Command::AddToCompare,
        Command::Close,
        Command::RequestLoadStatus,
    ];

    /// Wire tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Launch => "launch",
            Command::Download => "download",
            Command::DownloadDone => "downloadDone",
            Command::SetIcon => "setIcon",
            Command::AddToCompare => "addToCompare",
            Command::Close => "close",
            Command::RequestLoadStatus => "requestLoadStatus",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Command::ALL.into_iter().find(|c| c.tag() == tag)
    }
}

/// A scraped player as carried by `AddToCompare`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub info: PlayerInfo,
    pub stats: Vec<Stat>,
    pub split_indexes: SplitIndexes,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

impl Player {
    pub fn from_report(report: ScoutReport, timestamp: u64) -> Self {
        let slug = crate::core::sanitize::sanitize_filename(&report.info.name).to_ascii_lowercase();
        Self {
            id: format!("{slug}-{timestamp}"),
            info: report.info,
            stats: report.stats,
            split_indexes: report.split_indexes,
            timestamp,
        }
    }

    /// Snapshot time in `tz` to the minute. `"?"` when out of range.
    pub fn snapshot_time<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|t| t.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| s!("?"))
    }

    pub fn report(&self) -> ScoutReport {
        ScoutReport {
            info: self.info.clone(),
            stats: self.stats.clone(),
            split_indexes: self.split_indexes.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("message has no command tag")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("malformed {command} message: {source}")]
    Malformed {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Message {
    pub fn command(&self) -> Command {
        match self {
            Message::Launch => Command::Launch,
            Message::Download => Command::Download,
            Message::DownloadDone { .. } => Command::DownloadDone,
            Message::SetIcon { .. } => Command::SetIcon,
            Message::AddToCompare { .. } => Command::AddToCompare,
            Message::Close => Command::Close,
            Message::RequestLoadStatus => Command::RequestLoadStatus,
        }
    }

    /// Decode one message. The tag is checked first so an unknown command is
    /// reported as such rather than as a shape mismatch.
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let tag = value
            .get("command")
            .and_then(|c| c.as_str())
            .ok_or(ProtocolError::MissingCommand)?;
        let command = Command::from_tag(tag).ok_or_else(|| ProtocolError::UnknownCommand(s!(tag)))?;

        serde_json::from_value(value).map_err(|source| ProtocolError::Malformed {
            command: command.tag(),
            source,
        })
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        Ok(serde_json::to_string(self)?)
    }
}
