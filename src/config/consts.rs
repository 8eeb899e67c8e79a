// src/config/consts.rs

// Page identifiers (FBref player page)
pub const SCOUT_CONTAINER_ID: &str = "all_scout";
pub const EXPORT_ID_BASE: &str = "csv_scout_summary_";
pub const TABLE_ID_BASE: &str = "scout_summary_";
pub const EXPORT_BUTTON_LABEL: &str = "Get table as CSV (for Excel)";
pub const UNKNOWN_PLAYER: &str = "Unknown";

// Export layout
pub const HEADER_LINES: usize = 5;
pub const SENTINEL: &str = ",,";
pub const EXPORT_CITATION: &str =
    "--- When using SR data, please cite us and provide a link and/or a mention.";
pub const EXPORT_HEADER_ROW: &str = "Statistic,Per 90,Percentile";
pub const DEFAULT_CAPTION: &str = "Scouting Report";

// Chart
pub const PALETTE_SIZE: usize = 3;
pub const DEFAULT_ALPHA: f32 = 0.5;
pub const RADIAL_MIN: f64 = 0.0;
pub const RADIAL_MAX: f64 = 100.0;
pub const RADIAL_STEP: f64 = 20.0;

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_OUT_DIR: &str = "out";
