// src/data.rs
//
// Value types produced by one extraction: who the page shows, the ordered
// stat rows, and where each tactical section begins. Everything here is
// created fresh per scrape and handed off by value.

use serde::{Deserialize, Serialize};

/// Tactical template the scouting report compares the player against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "center back")]
    CenterBack,
    #[serde(rename = "forward")]
    Forward,
    #[serde(rename = "fullback")]
    Fullback,
    #[serde(rename = "midfield")]
    Midfield,
    #[serde(rename = "attacking mid")]
    AttackingMid,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::CenterBack,
        Position::Forward,
        Position::Fullback,
        Position::Midfield,
        Position::AttackingMid,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Position::CenterBack => "Center Back",
            Position::Forward => "Forward",
            Position::Fullback => "Fullback",
            Position::Midfield => "Midfielder",
            Position::AttackingMid => "Attacking Mid / Winger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub position: Option<Position>,
}

/// One surviving data row of the export.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    #[serde(with = "nan_as_null")]
    pub per90: f64,
    #[serde(with = "nan_as_null")]
    pub percentile: f64,
}

// NaN is a legal value here (unparsable cell); compare it as equal to itself
// so whole reports can be asserted on.
impl PartialEq for Stat {
    fn eq(&self, other: &Self) -> bool {
        fn same(a: f64, b: f64) -> bool { a == b || (a.is_nan() && b.is_nan()) }
        self.name == other.name
            && same(self.per90, other.per90)
            && same(self.percentile, other.percentile)
    }
}

impl Stat {
    pub fn new(name: impl Into<String>, per90: f64, percentile: f64) -> Self {
        Self { name: name.into(), per90, percentile }
    }
}

/// Filtered-sequence indices where a new section starts.
pub type SplitIndexes = Vec<usize>;

/// Full result of one scrape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutReport {
    pub info: PlayerInfo,
    pub stats: Vec<Stat>,
    pub split_indexes: SplitIndexes,
}

impl ScoutReport {
    /// Section start indices: 0 followed by every split index.
    pub fn section_starts(&self) -> Vec<usize> {
        section_starts(&self.split_indexes)
    }

    pub fn section_count(&self) -> usize {
        self.split_indexes.len() + 1
    }

    /// Section ordinal that stat `ix` falls in (last start <= ix).
    pub fn section_of(&self, ix: usize) -> usize {
        self.split_indexes.iter().take_while(|&&b| b <= ix).count()
    }
}

pub fn section_starts(split_indexes: &[usize]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(split_indexes.len() + 1);
    starts.push(0);
    starts.extend_from_slice(split_indexes);
    starts
}

/// JSON has no NaN: write it as `null`, read `null` back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, ser: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() { ser.serialize_f64(*v) } else { ser.serialize_none() }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(de)?.unwrap_or(f64::NAN))
    }
}
