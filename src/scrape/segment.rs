// src/scrape/segment.rs
//
// Raw export text → (stats, split indexes). Pure and total: any input,
// however malformed, produces some output.

use crate::config::consts::{HEADER_LINES, SENTINEL};
use crate::data::{SplitIndexes, Stat};

/// Split on `\n` / `\r\n` and drop the fixed-size preamble.
/// Fewer lines than the preamble leaves nothing.
pub fn normalize_lines(raw: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = raw.split('\n').collect();

    // Only segments followed by '\n' can end in a CRLF break; the last one keeps its '\r'.
    let terminated = lines.len() - 1;
    for line in &mut lines[..terminated] {
        let text: &str = *line;
        if let Some(stripped) = text.strip_suffix('\r') {
            *line = stripped;
        }
    }
    lines.split_off(HEADER_LINES.min(lines.len()))
}

/// One pass over normalized lines. Sentinel lines are dropped and record the
/// filtered index the next data line will take: the sentinel's position minus
/// the number of sentinels seen before it.
pub fn segment(lines: &[&str]) -> (Vec<Stat>, SplitIndexes) {
    let mut stats = Vec::with_capacity(lines.len());
    let mut splits = SplitIndexes::new();

    for (pos, line) in lines.iter().enumerate() {
        if *line == SENTINEL {
            splits.push(pos - splits.len());
        } else {
            stats.push(parse_row(line));
        }
    }
    (stats, splits)
}

/// `name,per90,percentile`. Missing or unparsable numbers become NaN;
/// extra fields are ignored.
pub fn parse_row(line: &str) -> Stat {
    let mut fields = line.split(',');
    let name = fields.next().unwrap_or_default();
    let per90 = fields.next().map(parse_float_lenient).unwrap_or(f64::NAN);
    let percentile = fields.next().map(parse_float_lenient).unwrap_or(f64::NAN);
    Stat::new(name, per90, percentile)
}

/// Longest numeric prefix after leading whitespace: `"88%"` → 88, `" .5x"` → 0.5,
/// `"n/a"` → NaN.
pub fn parse_float_lenient(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return s[..i + "Infinity".len()].parse().unwrap_or(f64::NAN);
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) { i += 1; }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) { j += 1; }
        digits += j - frac_start;
        if digits > 0 { i = j; }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) { j += 1; }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) { j += 1; }
        if j > exp_start { i = j; }
    }

    s[..i].parse().unwrap_or(f64::NAN)
}
