// tests/extract_pipeline.rs
use std::cell::{Cell, RefCell};

use scout_radar::data::{PlayerInfo, Position, Stat};
use scout_radar::page::FnSource;
use scout_radar::scrape::{acquire_export, extract};

const PREAMBLE: &str = "Caption\n\n--- cite ---\n\nStatistic,Per 90,Percentile\n";

fn info(position: Option<Position>) -> PlayerInfo {
    PlayerInfo { name: "Test Player".into(), position }
}

#[test]
fn present_export_needs_no_trigger() {
    let triggers = Cell::new(0);
    let mut src = FnSource::new(
        |_| Some(format!("{PREAMBLE}a,1,2")),
        || triggers.set(triggers.get() + 1),
    );
    let (stats, splits) = extract(&info(Some(Position::Forward)), &mut src).unwrap();
    assert_eq!(stats, vec![Stat::new("a", 1.0, 2.0)]);
    assert!(splits.is_empty());
    assert_eq!(triggers.get(), 0);
}

#[test]
fn absent_export_is_triggered_exactly_once() {
    let ready = Cell::new(false);
    let triggers = Cell::new(0);
    let mut src = FnSource::new(
        |_| ready.get().then(|| format!("{PREAMBLE}a,1,2\n,,\nb,3,4")),
        || {
            triggers.set(triggers.get() + 1);
            ready.set(true);
        },
    );
    let (stats, splits) = extract(&info(None), &mut src).unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(splits, vec![1]);
    assert_eq!(triggers.get(), 1);
}

#[test]
fn still_absent_after_trigger_is_none() {
    let fetches = Cell::new(0);
    let triggers = Cell::new(0);
    let mut src = FnSource::new(
        |_| {
            fetches.set(fetches.get() + 1);
            None
        },
        || triggers.set(triggers.get() + 1),
    );
    assert_eq!(extract(&info(Some(Position::Midfield)), &mut src), None);
    assert_eq!(fetches.get(), 2);
    assert_eq!(triggers.get(), 1);
}

#[test]
fn fetch_uses_resolved_position() {
    let asked = RefCell::new(Vec::new());
    let mut src = FnSource::new(
        |p| {
            asked.borrow_mut().push(p);
            None
        },
        || {},
    );
    let _ = acquire_export(&info(Some(Position::AttackingMid)), &mut src);
    assert_eq!(*asked.borrow(), vec![Some(Position::AttackingMid); 2]);
}

#[test]
fn short_export_yields_nothing() {
    let mut src = FnSource::new(|_| Some(String::from("one\ntwo\nthree")), || {});
    assert_eq!(extract(&info(None), &mut src), Some((vec![], vec![])));
}

#[test]
fn crlf_and_malformed_rows() {
    let raw = "c\r\n\r\n--\r\n\r\nh\r\nGoals,0.5,90\r\nno numbers here\r\n,,\r\nShots,x,77%";
    let mut src = FnSource::new(move |_| Some(String::from(raw)), || {});
    let (stats, splits) = extract(&info(None), &mut src).unwrap();

    assert_eq!(stats.len(), 3);
    assert_eq!(stats[0], Stat::new("Goals", 0.5, 90.0));
    assert_eq!(stats[1].name, "no numbers here");
    assert!(stats[1].per90.is_nan() && stats[1].percentile.is_nan());
    assert!(stats[2].per90.is_nan());
    assert_eq!(stats[2].percentile, 77.0);
    assert_eq!(splits, vec![2]);
}

#[test]
fn every_split_is_within_bounds_and_sorted() {
    let body = ",,\na,1,1\n,,\n,,\nb,2,2\nc,3,3\n,,";
    let raw = format!("{PREAMBLE}{body}");
    let mut src = FnSource::new(move |_| Some(raw.clone()), || {});
    let (stats, splits) = extract(&info(None), &mut src).unwrap();

    assert_eq!(stats.len(), 3);
    assert_eq!(splits, vec![0, 1, 1, 3]);
    assert!(splits.windows(2).all(|w| w[0] <= w[1]));
    assert!(splits.iter().all(|&b| b <= stats.len()));
    assert!(stats.iter().all(|s| s.name != ",,"));
}
