// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod config;
mod logging;
mod logic;
mod models;
mod mvu;
mod ui;
mod utils;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use egui_phosphor::Variant;

fn main() -> Result<()> {
    let config = config::LaunchConfig::from_cli(config::Cli::parse())?;
    logging::init_logging(&config.log)?;
    tracing::info!(endpoint = %config.endpoint, layout = ?config.layout, "starting landing page");

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("EZ Works")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "EZ Works",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let app = ui::LandingApp::new(&cc.egui_ctx, &config)
                .context("Failed to start the landing page")?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("Window loop failed: {err}"))
}
