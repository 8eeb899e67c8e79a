// src/specs/identity.rs
//
// Who is on the page and which stat template is active.
// Never fails: a missing heading gives "Unknown", an unrecognized preset gives None.

use crate::config::consts::UNKNOWN_PLAYER;
use crate::data::{PlayerInfo, Position};
use crate::page::ScoutPage;

/// Exact preset label → position. No trimming, no case folding.
pub fn position_from_label(label: &str) -> Option<Position> {
    match label {
        "vs. Center Backs" => Some(Position::CenterBack),
        "vs. Forwards" => Some(Position::Forward),
        "vs. Fullbacks" => Some(Position::Fullback),
        "vs. Midfielders" => Some(Position::Midfield),
        "vs. Att Mid / Wingers" => Some(Position::AttackingMid),
        _ => None,
    }
}

pub fn load_name(page: &impl ScoutPage) -> String {
    page.player_heading()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| s!(UNKNOWN_PLAYER))
}

pub fn load_position(page: &impl ScoutPage) -> Option<Position> {
    let label = page.active_preset_label()?;
    let position = position_from_label(&label);
    if position.is_none() {
        log::debug!("Identity: unrecognized preset label {label:?}, using default export");
    }
    position
}

pub fn resolve_identity(page: &impl ScoutPage) -> PlayerInfo {
    PlayerInfo {
        name: load_name(page),
        position: load_position(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub {
        heading: Option<&'static str>,
        label: Option<&'static str>,
    }

    impl ScoutPage for Stub {
        fn has_element(&self, _id: &str) -> bool { true }
        fn player_heading(&self) -> Option<String> { self.heading.map(String::from) }
        fn active_preset_label(&self) -> Option<String> { self.label.map(String::from) }
        fn element_text(&self, _id: &str) -> Option<String> { None }
        fn click_export_button(&mut self) {}
    }

    #[test]
    fn every_known_label_maps() {
        assert_eq!(position_from_label("vs. Center Backs"), Some(Position::CenterBack));
        assert_eq!(position_from_label("vs. Forwards"), Some(Position::Forward));
        assert_eq!(position_from_label("vs. Fullbacks"), Some(Position::Fullback));
        assert_eq!(position_from_label("vs. Midfielders"), Some(Position::Midfield));
        assert_eq!(position_from_label("vs. Att Mid / Wingers"), Some(Position::AttackingMid));
    }

    #[test]
    fn near_misses_do_not_map() {
        for label in ["vs. forwards", "Forwards", "vs. Forward", " vs. Forwards", "vs. Att Mid/Wingers", ""] {
            assert_eq!(position_from_label(label), None, "{label:?}");
        }
    }

    #[test]
    fn missing_signals_degrade() {
        let page = Stub { heading: None, label: None };
        assert_eq!(resolve_identity(&page), PlayerInfo { name: s!("Unknown"), position: None });

        let blank = Stub { heading: Some("   "), label: Some("vs. Goalkeepers") };
        assert_eq!(resolve_identity(&blank), PlayerInfo { name: s!("Unknown"), position: None });
    }

    #[test]
    fn resolves_name_and_position() {
        let page = Stub { heading: Some(" Bukayo Saka "), label: Some("vs. Att Mid / Wingers") };
        let info = resolve_identity(&page);
        assert_eq!(info.name, "Bukayo Saka");
        assert_eq!(info.position, Some(Position::AttackingMid));
    }
}
