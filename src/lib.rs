// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod logging;

pub mod data;
pub mod page;
pub mod specs;
pub mod scrape;

pub mod chart;
pub mod csv;
pub mod file;
pub mod message;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;
