// src/scrape/scrape.rs
use crate::{
    data::{PlayerInfo, ScoutReport, SplitIndexes, Stat},
    page::{ExportSource, ScoutPage},
    specs::identity::resolve_identity,
};

use super::segment::{normalize_lines, segment};

/// True iff the page carries the scout container everything else reads from.
/// Callers check this before `extract`; `extract` does not check it again.
pub fn can_extract(page: &impl ScoutPage) -> bool {
    page.has_scout_container()
}

/// Fetch the export for `info.position`. If it is missing, trigger generation
/// once and fetch once more; a second miss is final.
pub fn acquire_export(info: &PlayerInfo, source: &mut impl ExportSource) -> Option<String> {
    if let Some(raw) = source.fetch_export(info.position) {
        return Some(raw);
    }
    log::debug!("Export: not on page for {:?}, triggering generation", info.position);
    source.trigger_export_generation();
    source.fetch_export(info.position)
}

/// Export → ordered stats + split indexes. `None` only when the export never
/// became available.
///
/// Precondition: `can_extract` returned true for the page behind `source`.
pub fn extract(info: &PlayerInfo, source: &mut impl ExportSource) -> Option<(Vec<Stat>, SplitIndexes)> {
    let Some(raw) = acquire_export(info, source) else {
        log::warn!("Couldn't load data for {} ({:?})", info.name, info.position);
        return None;
    };
    let lines = normalize_lines(&raw);
    let (stats, splits) = segment(&lines);
    log::debug!(
        "Extract: {} line(s) → {} stat(s), {} section split(s)",
        lines.len(),
        stats.len(),
        splits.len()
    );
    Some((stats, splits))
}

/// Whole flow for one page: availability, identity, extraction.
pub fn scrape<P: ScoutPage>(page: &mut P) -> Option<ScoutReport> {
    if !can_extract(&*page) {
        log::warn!("Scrape: page has no scouting report");
        return None;
    }
    let info = resolve_identity(&*page);
    log::info!("Scrape: {} ({:?})", info.name, info.position);

    let (stats, split_indexes) = extract(&info, page)?;
    Some(ScoutReport { info, stats, split_indexes })
}
