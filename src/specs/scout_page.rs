// src/specs/scout_page.rs
//
// A saved FBref player page, read through string scanning.
//
// Ground truth locations:
// - player name:  <h1 itemprop="name">…</h1>
// - scout block:  <div id="all_scout"> … </div>
// - preset label: first `.current` inside the scout block, then its `.sr_preset`
// - exports:      <pre id="csv_scout_summary_XX"> (present only if the page was
//                 saved after "Get table as CSV" was used)
// - tables:       <table id="scout_summary_XX"> (source for export generation)

use crate::config::consts::{EXPORT_BUTTON_LABEL, SCOUT_CONTAINER_ID, TABLE_ID_BASE};
use crate::core::html::{
    attr_value, find_all_by_id_prefix, find_by_id, find_tag, has_class, strip_tags, tag_name, uncomment,
};
use crate::page::ScoutPage;

use super::export_table::render_table_export;

#[derive(Clone, Debug)]
pub struct HtmlPage {
    doc: String,
    /// Exports produced by the export button: (element id, text).
    generated: Vec<(String, String)>,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        Self { doc: uncomment(html), generated: Vec::new() }
    }

    /// Ids of exports generated so far, in generation order.
    pub fn generated_ids(&self) -> impl Iterator<Item = &str> {
        self.generated.iter().map(|(id, _)| id.as_str())
    }

    fn generated_text(&self, id: &str) -> Option<&str> {
        self.generated.iter().find(|(gid, _)| gid == id).map(|(_, text)| text.as_str())
    }

    fn has_export_button(&self) -> bool {
        self.buttons().any(|label| label == EXPORT_BUTTON_LABEL)
    }

    fn buttons(&self) -> impl Iterator<Item = String> + '_ {
        let mut pos = 0usize;
        std::iter::from_fn(move || {
            let el = find_tag(&self.doc, pos, |open| tag_name(open).eq_ignore_ascii_case("button"))?;
            pos = el.end.max(el.start + 1);
            Some(el.text())
        })
    }
}

impl ScoutPage for HtmlPage {
    fn has_element(&self, id: &str) -> bool {
        find_by_id(&self.doc, id).is_some() || self.generated_text(id).is_some()
    }

    fn player_heading(&self) -> Option<String> {
        find_tag(&self.doc, 0, |open| {
            tag_name(open).eq_ignore_ascii_case("h1") && attr_value(open, "itemprop") == Some("name")
        })
        .map(|h1| strip_tags(h1.inner))
    }

    fn active_preset_label(&self) -> Option<String> {
        let container = find_by_id(&self.doc, SCOUT_CONTAINER_ID)?;
        let scope = container.inner;

        let mut pos = 0usize;
        while let Some(current) = find_tag(scope, pos, |open| has_class(open, "current")) {
            if let Some(preset) = find_tag(current.inner, 0, |open| has_class(open, "sr_preset")) {
                return Some(preset.text());
            }
            pos = current.start + 1;
        }
        None
    }

    fn element_text(&self, id: &str) -> Option<String> {
        match find_by_id(&self.doc, id) {
            Some(el) => Some(el.raw_text()),
            None => self.generated_text(id).map(String::from),
        }
    }

    fn click_export_button(&mut self) {
        if !self.has_scout_container() {
            log::debug!("Export: no #{SCOUT_CONTAINER_ID} on page, nothing to click");
            return;
        }
        if !self.has_export_button() {
            log::debug!("Export: no {EXPORT_BUTTON_LABEL:?} button on page");
            return;
        }

        let fresh: Vec<(String, String)> = find_all_by_id_prefix(&self.doc, TABLE_ID_BASE)
            .into_iter()
            .filter(|el| el.name() == "table")
            .filter_map(|table| {
                let table_id = table.attr("id")?;
                let export_id = join!("csv_", table_id);
                if self.has_element(&export_id) {
                    return None;
                }
                Some((export_id, render_table_export(&table)))
            })
            .collect();

        log::info!("Export: generated {} table export(s)", fresh.len());
        self.generated.extend(fresh);
    }
}
