// src/specs/export_table.rs
//
// Renders a scout summary <table> into the text the page's
// "Get table as CSV (for Excel)" button produces:
//
//   <caption>
//   <blank>
//   --- When using SR data, please cite us ...
//   <blank>
//   Statistic,Per 90,Percentile
//   Non-Penalty Goals,0.45,88
//   ,,                              <- spacer row between sections
//   ...
//
// Names are written verbatim (no quoting), numbers lose '%' and thousands separators.

use crate::config::consts::{DEFAULT_CAPTION, EXPORT_CITATION, EXPORT_HEADER_ROW, SENTINEL};
use crate::core::html::{Element, children_named, find_tag, has_class, tag_name};

pub fn render_table_export(table: &Element) -> String {
    let caption = find_tag(table.inner, 0, |open| tag_name(open).eq_ignore_ascii_case("caption"))
        .map(|c| c.text())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| s!(DEFAULT_CAPTION));

    let mut lines = vec![caption, s!(), s!(EXPORT_CITATION), s!(), s!(EXPORT_HEADER_ROW)];

    let body = find_tag(table.inner, 0, |open| tag_name(open).eq_ignore_ascii_case("tbody"))
        .map(|b| b.inner)
        .unwrap_or(table.inner);

    for tr in children_named(body, &["tr"]) {
        let cells: Vec<String> = children_named(tr.inner, &["th", "td"])
            .iter()
            .map(|c| c.text())
            .collect();

        if has_class(tr.open, "spacer") || cells.iter().all(|c| c.is_empty()) {
            lines.push(s!(SENTINEL));
            continue;
        }
        // Header rows carry only <th>.
        if children_named(tr.inner, &["td"]).is_empty() {
            continue;
        }

        let name = cells.first().cloned().unwrap_or_default();
        let per90 = cells.get(1).map(|c| clean_number(c)).unwrap_or_default();
        let pct = cells.get(2).map(|c| clean_number(c)).unwrap_or_default();
        lines.push(format!("{name},{per90},{pct}"));
    }

    // no trailing newline: every line after the preamble is a row
    lines.join("\n")
}

/// "1,024" → "1024", "88%" → "88".
fn clean_number(cell: &str) -> String {
    cell.chars().filter(|&c| c != ',' && c != '%').collect::<String>().trim().to_string()
}
