// src/specs/mod.rs
//! # Page specs
//!
//! Everything that knows *where the ground truth lives* on a player page.
//!
//! - `identity`: player name and active position template, read through any
//!   [`ScoutPage`](crate::page::ScoutPage). Exact label matching only.
//! - `scout_page`: [`HtmlPage`], a saved page read with the tolerant scanners
//!   in `core::html` (case-insensitive tags, balanced nesting, entity decoding).
//! - `export_table`: what the page's CSV export button would produce for a
//!   scout summary table.
//!
//! Specs only read. Turning an export into stats and sections lives in
//! `scrape`; presentation lives in `chart` and the front ends.
//!
//! Specs are testable offline against inline HTML fixtures.
pub mod export_table;
pub mod identity;
pub mod scout_page;

pub use identity::resolve_identity;
pub use scout_page::HtmlPage;
