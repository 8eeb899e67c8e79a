// src/page.rs
//! The seam between extraction logic and whatever hosts the player page.
//!
//! `ScoutPage` is a read-mostly view of the host page (a live DOM in the
//! browser, a saved HTML file here). `ExportSource` is the narrower pair of
//! operations the extraction pipeline actually needs; every `ScoutPage` is
//! one, and `FnSource` builds one from two closures.

use crate::config::consts::{EXPORT_ID_BASE, SCOUT_CONTAINER_ID};
use crate::data::Position;

pub trait ScoutPage {
    fn has_element(&self, id: &str) -> bool;

    /// Text of the player heading (`h1[itemprop=name]`), if present.
    fn player_heading(&self) -> Option<String>;

    /// Label of the active preset toggle inside the scout container.
    fn active_preset_label(&self) -> Option<String>;

    /// Inner text of the element with this id, line structure kept.
    fn element_text(&self, id: &str) -> Option<String>;

    /// The "Get table as CSV" interaction. Stateless from the caller's side;
    /// safe to issue repeatedly.
    fn click_export_button(&mut self);

    fn has_scout_container(&self) -> bool {
        self.has_element(SCOUT_CONTAINER_ID)
    }
}

/// Where the pipeline gets its raw export from.
pub trait ExportSource {
    fn fetch_export(&self, position: Option<Position>) -> Option<String>;
    fn trigger_export_generation(&mut self);
}

impl<P: ScoutPage> ExportSource for P {
    fn fetch_export(&self, position: Option<Position>) -> Option<String> {
        self.element_text(&export_id(position))
    }

    fn trigger_export_generation(&mut self) {
        self.click_export_button();
    }
}

/// `ExportSource` from a fetch closure and a trigger closure.
pub struct FnSource<F, T> {
    fetch: F,
    trigger: T,
}

impl<F, T> FnSource<F, T>
where
    F: Fn(Option<Position>) -> Option<String>,
    T: FnMut(),
{
    pub fn new(fetch: F, trigger: T) -> Self {
        Self { fetch, trigger }
    }
}

impl<F, T> ExportSource for FnSource<F, T>
where
    F: Fn(Option<Position>) -> Option<String>,
    T: FnMut(),
{
    fn fetch_export(&self, position: Option<Position>) -> Option<String> {
        (self.fetch)(position)
    }

    fn trigger_export_generation(&mut self) {
        (self.trigger)()
    }
}

/// Element id of the CSV export for a position; unknown position gets the bare base.
pub fn export_id(position: Option<Position>) -> String {
    let suffix = match position {
        Some(Position::CenterBack) => "CB",
        Some(Position::Forward) => "FW",
        Some(Position::Fullback) => "FB",
        Some(Position::Midfield) => "MF",
        Some(Position::AttackingMid) => "AM",
        None => "",
    };
    join!(EXPORT_ID_BASE, suffix)
}
