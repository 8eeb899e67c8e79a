// src/csv.rs
use std::io::{self, Write};

use crate::chart::section_label;
use crate::data::ScoutReport;

pub const REPORT_HEADERS: [&str; 4] = ["Statistic", "Per 90", "Percentile", "Section"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// NaN has no tabular spelling; leave the cell empty.
pub fn format_number(v: f64) -> String {
    if v.is_nan() { s!() } else { v.to_string() }
}

/// One row per stat plus a header, with the section label each stat falls under.
pub fn report_to_string(report: &ScoutReport, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, &REPORT_HEADERS, sep);
    for (ix, stat) in report.stats.iter().enumerate() {
        let row = [
            stat.name.clone(),
            format_number(stat.per90),
            format_number(stat.percentile),
            s!(section_label(report.section_of(ix))),
        ];
        let _ = write_row(&mut buf, &row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
