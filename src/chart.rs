// src/chart.rs
//
// Report → radar chart dataset. Rendering itself is the front end's business
// (egui painter in the GUI, anything that speaks Chart.js-shaped JSON elsewhere);
// this module owns the section windowing and the theme palette.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{DEFAULT_ALPHA, PALETTE_SIZE, RADIAL_MAX, RADIAL_MIN, RADIAL_STEP};
use crate::data::{Stat, section_starts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// `#rrggbb`, surrounding whitespace allowed.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    pub fn css_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// Styling variables (`--color1`, `--alpha`, `--bg`, `--fg`, …) as read from the
/// host's stylesheet. Passed in explicitly; nothing here reads global state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Theme {
    vars: BTreeMap<String, String>,
}

impl Theme {
    /// Pull every `--name: value` declaration out of a CSS text. Later
    /// declarations win.
    pub fn parse_css(css: &str) -> Self {
        let vars = css
            .split([';', '{', '}', '\n'])
            .filter_map(|decl| {
                let (name, value) = decl.trim().split_once(':')?;
                let name = name.trim();
                name.starts_with("--").then(|| (s!(name), s!(value.trim())))
            })
            .collect();
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool { self.vars.is_empty() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub colors: Vec<Rgb>,
    pub alpha: f32,
    pub background: Rgb,
    pub foreground: Rgb,
}

const DEFAULT_COLORS: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0xff, 0x63, 0x84),
    Rgb::new(0x36, 0xa2, 0xeb),
    Rgb::new(0xff, 0xce, 0x56),
];
const DEFAULT_BG: Rgb = Rgb::new(0x1e, 0x1e, 0x1e);
const DEFAULT_FG: Rgb = Rgb::new(0xe0, 0xe0, 0xe0);

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
            alpha: DEFAULT_ALPHA,
            background: DEFAULT_BG,
            foreground: DEFAULT_FG,
        }
    }
}

impl Palette {
    /// Missing or unparsable variables fall back slot by slot.
    pub fn from_theme(theme: &Theme) -> Self {
        let colors = (1..=PALETTE_SIZE)
            .map(|i| {
                theme
                    .get(&format!("--color{i}"))
                    .and_then(Rgb::parse)
                    .unwrap_or(DEFAULT_COLORS[i - 1])
            })
            .collect();
        let alpha = theme
            .get("--alpha")
            .and_then(|a| a.trim().parse::<f32>().ok())
            .filter(|a| a.is_finite())
            .unwrap_or(DEFAULT_ALPHA);

        Self {
            colors,
            alpha,
            background: theme.get("--bg").and_then(Rgb::parse).unwrap_or(DEFAULT_BG),
            foreground: theme.get("--fg").and_then(Rgb::parse).unwrap_or(DEFAULT_FG),
        }
    }

    /// Series color, cycling through the palette. Empty palette → cyan.
    pub fn rgb(&self, index: usize) -> Rgb {
        if self.colors.is_empty() {
            return Rgb::CYAN;
        }
        self.colors[index % self.colors.len()]
    }

    pub fn color(&self, index: usize, alpha: Option<f32>) -> String {
        self.rgb(index).css_alpha(alpha.unwrap_or(self.alpha))
    }
}

pub fn section_label(index: usize) -> &'static str {
    match index {
        0 => "Attacking",
        1 => "Possession",
        2 => "Defensive",
        _ => "Unknown",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDataset {
    pub label: &'static str,
    pub data: Vec<f64>,
    pub background_color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScale {
    pub min: f64,
    pub max: f64,
    pub step_size: f64,
}

impl Default for RadialScale {
    fn default() -> Self {
        Self { min: RADIAL_MIN, max: RADIAL_MAX, step_size: RADIAL_STEP }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub datasets: Vec<RadarDataset>,
    pub scale: RadialScale,
}

/// One series per section. Series `i` keeps percentiles for indices in
/// `[start_i, end_i]` (inclusive, so it shares its closing spoke with the next
/// section) and zeroes the rest. The last series also keeps index 0, closing
/// the ring back to the first spoke.
pub fn build_radar(stats: &[Stat], split_indexes: &[usize], palette: &Palette) -> RadarData {
    let starts = section_starts(split_indexes);
    let mut datasets = Vec::with_capacity(starts.len());

    for (i, &start) in starts.iter().enumerate() {
        let last = i == starts.len() - 1;
        let end = if last { stats.len() } else { starts[i + 1] };

        let data = stats
            .iter()
            .enumerate()
            .map(|(ix, stat)| {
                if (ix >= start && ix <= end) || (ix == 0 && last) { stat.percentile } else { 0.0 }
            })
            .collect();

        datasets.push(RadarDataset {
            label: section_label(i),
            data,
            background_color: palette.color(i, None),
        });
    }

    RadarData {
        labels: stats.iter().map(|s| s.name.clone()).collect(),
        datasets,
        scale: RadialScale::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pcts: &[f64]) -> Vec<Stat> {
        pcts.iter().enumerate().map(|(i, &p)| Stat::new(format!("s{i}"), 0.0, p)).collect()
    }

    #[test]
    fn labels_by_ordinal() {
        assert_eq!(section_label(0), "Attacking");
        assert_eq!(section_label(1), "Possession");
        assert_eq!(section_label(2), "Defensive");
        assert_eq!(section_label(3), "Unknown");
    }

    #[test]
    fn windows_are_inclusive_and_last_wraps_to_zero() {
        let s = stats(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let radar = build_radar(&s, &[2, 4], &Palette::default());
        let data: Vec<&Vec<f64>> = radar.datasets.iter().map(|d| &d.data).collect();
        assert_eq!(data[0], &vec![10.0, 20.0, 30.0, 0.0, 0.0]);
        assert_eq!(data[1], &vec![0.0, 0.0, 30.0, 40.0, 50.0]);
        assert_eq!(data[2], &vec![10.0, 0.0, 0.0, 0.0, 50.0]);
        assert_eq!(radar.datasets[2].label, "Defensive");
        assert_eq!(radar.labels, vec!["s0", "s1", "s2", "s3", "s4"]);
    }

    #[test]
    fn single_section_keeps_everything() {
        let s = stats(&[1.0, 2.0, 3.0]);
        let radar = build_radar(&s, &[], &Palette::default());
        assert_eq!(radar.datasets.len(), 1);
        assert_eq!(radar.datasets[0].data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_stats_still_one_series_per_section() {
        let radar = build_radar(&[], &[0], &Palette::default());
        assert_eq!(radar.datasets.len(), 2);
        assert!(radar.datasets.iter().all(|d| d.data.is_empty()));
    }

    #[test]
    fn rgb_parse_tolerates_whitespace() {
        assert_eq!(Rgb::parse(" #0a1B2c"), Some(Rgb::new(0x0a, 0x1b, 0x2c)));
        assert_eq!(Rgb::parse("0a1b2c"), None);
        assert_eq!(Rgb::parse("#fff"), None);
        assert_eq!(Rgb::parse("#gg0000"), None);
    }

    #[test]
    fn palette_from_css_with_fallbacks() {
        let theme = Theme::parse_css(":root { --color1: #112233; --color3: bogus; --alpha: 0.25; --fg:#ffffff; }");
        let p = Palette::from_theme(&theme);
        assert_eq!(p.colors[0], Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(p.colors[1], DEFAULT_COLORS[1]);
        assert_eq!(p.colors[2], DEFAULT_COLORS[2]);
        assert_eq!(p.alpha, 0.25);
        assert_eq!(p.foreground, Rgb::new(0xff, 0xff, 0xff));
        assert_eq!(p.background, DEFAULT_BG);
    }

    #[test]
    fn colors_cycle_and_empty_is_cyan() {
        let p = Palette::default();
        assert_eq!(p.color(3, Some(1.0)), p.color(0, Some(1.0)));
        let empty = Palette { colors: Vec::new(), ..Palette::default() };
        assert_eq!(empty.color(7, Some(0.5)), "rgba(0, 255, 255, 0.5)");
    }
}
