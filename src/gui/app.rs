// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;
use log::{info, warn};

use crate::{
    chart::{Palette, RadarData, build_radar},
    config::{
        consts::{DEFAULT_OUT_DIR, LOG_FILE},
        options::{AppOptions, OutputFormat, OutputOptions},
    },
    core::sanitize::sanitize_filename,
    data::ScoutReport,
    file,
    message::{Message, Player},
    scrape::{can_extract, scrape},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let app_options = AppOptions::default();
    crate::logging::init(LOG_FILE, app_options.log_level)?;
    info!("Init: GUI");

    eframe::run_native(
        "Scout Radar",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(app_options)))),
    )?;
    Ok(())
}

/// A compared player plus whether its outline is drawn over the radar.
#[derive(Clone, Debug, PartialEq)]
pub struct CompareEntry {
    pub player: Player,
    pub shown: bool,
}

pub struct App {
    pub options: AppOptions,
    pub palette: Palette,

    // load bar
    pub path_text: String,
    pub status: String,

    // current page
    pub report: Option<ScoutReport>,
    pub radar: Option<RadarData>,

    // compare list (memory only)
    pub compare: Vec<CompareEntry>,
    pub selected: Option<String>,

    /// Where `download` writes the chart dataset.
    pub out_dir: PathBuf,

    pub close_requested: bool,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        let palette = Palette::from_theme(&options.theme);
        Self {
            options,
            palette,
            path_text: String::new(),
            status: s!("Open a saved player page"),
            report: None,
            radar: None,
            compare: Vec::new(),
            selected: None,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            close_requested: false,
        }
    }

    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn is_loaded(&self) -> bool { self.report.is_some() }

    /// Read + scrape the page at `path_text`. The previous report is kept when
    /// loading fails.
    pub fn load(&mut self) {
        let path = PathBuf::from(self.path_text.trim());
        let mut page = match file::read_page(&path) {
            Ok(p) => p,
            Err(e) => {
                warn!("Load: {e}");
                self.status(format!("Error: {e}"));
                return;
            }
        };
        if !can_extract(&page) {
            self.status("No scouting report on this page");
            return;
        }
        match scrape(&mut page) {
            Some(report) => self.set_report(report),
            None => self.status("Scouting report export could not be loaded"),
        }
    }

    pub fn set_report(&mut self, report: ScoutReport) {
        info!("Load: {} ({} stats)", report.info.name, report.stats.len());
        self.status(format!("Loaded {} ({} stats)", report.info.name, report.stats.len()));
        self.radar = Some(build_radar(&report.stats, &report.split_indexes, &self.palette));
        self.report = Some(report);
    }

    /// Current report as an `AddToCompare` message.
    pub fn compare_message(&self) -> Option<Message> {
        let report = self.report.clone()?;
        Some(Message::AddToCompare { player: Player::from_report(report, file::now_millis()) })
    }

    pub fn remove_compare(&mut self, id: &str) {
        self.compare.retain(|e| e.player.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    /// Protocol dispatch. Returns the reply, if the command has one.
    pub fn handle(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::Launch => {
                self.status("Ready");
                None
            }
            Message::RequestLoadStatus => Some(Message::SetIcon { status: self.is_loaded() }),
            Message::SetIcon { status } => {
                if !status {
                    self.status("No scouting report on this page");
                }
                None
            }
            Message::AddToCompare { player } => {
                // Same player again replaces the older snapshot.
                self.compare.retain(|e| e.player.info.name != player.info.name);
                self.status(format!("Added {} to compare", player.info.name));
                self.selected = Some(player.id.clone());
                self.compare.push(CompareEntry { player, shown: true });
                None
            }
            Message::Download => self.download(),
            Message::DownloadDone { data_url } => {
                self.status(format!("Saved {data_url}"));
                None
            }
            Message::Close => {
                self.close_requested = true;
                None
            }
        }
    }

    fn download(&mut self) -> Option<Message> {
        let report = self.report.as_ref()?;
        let format = OutputFormat::Chart;
        let stem = sanitize_filename(&report.info.name);
        let opts = OutputOptions {
            format,
            out: Some(self.out_dir.join(join!(&stem, ".", format.ext()))),
        };
        let written = file::render_report(report, format, &self.palette, 0)
            .and_then(|text| file::write_output(&opts, &report.info.name, &text))
            .and_then(|path| path.map(|p| file::file_url(&p)).transpose());
        match written {
            Ok(Some(data_url)) => Some(Message::DownloadDone { data_url }),
            Ok(None) => None,
            Err(e) => {
                warn!("Download: {e}");
                self.status(format!("Error: {e}"));
                None
            }
        }
    }

    fn dispatch(&mut self, msg: Message) {
        if let Some(reply) = self.handle(msg) {
            let _ = self.handle(reply);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut outbox: Vec<Message> = Vec::new();

        egui::SidePanel::left("compare")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                crate::gui::components::compare_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::load_bar::draw(ui, self, &mut outbox);

            ui.separator();

            ui.columns(2, |cols| {
                crate::gui::components::radar::draw(&mut cols[0], self);
                crate::gui::components::stats_table::draw(&mut cols[1], self);
            });
        });

        for msg in outbox {
            self.dispatch(msg);
        }
        if self.close_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
