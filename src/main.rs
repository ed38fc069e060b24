#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based ProcPal demo window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use procpal::logging;
use procpal::ui::ProcessApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([420.0, 160.0])
        .with_min_inner_size([320.0, 140.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "ProcPal",
        native_options,
        Box::new(|_cc| Ok(Box::new(ProcessApp::new()))),
    )?;
    Ok(())
}
