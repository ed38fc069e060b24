//! Egui window for the process demo.

use std::time::Duration;

use eframe::egui::{self, Align2, ProgressBar};

use crate::controller::ProcessController;

/// How often to repaint while a task is animating the bar.
const RUNNING_REPAINT: Duration = Duration::from_millis(100);

/// The demo application: one window, one progress bar, two buttons.
pub struct ProcessApp {
    controller: ProcessController,
}

impl ProcessApp {
    /// Create the app in its idle state.
    pub fn new() -> Self {
        Self {
            controller: ProcessController::new(),
        }
    }
}

impl Default for ProcessApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ProcessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll();
        if self.controller.is_running() {
            ctx.request_repaint_after(RUNNING_REPAINT);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 12.0);
            let fraction = f32::from(self.controller.progress()) / 100.0;
            ui.add(ProgressBar::new(fraction).show_percentage());
            ui.horizontal(|ui| {
                if ui.button("Process").clicked() {
                    self.controller.start();
                }
                if ui.button("Cancel").clicked() {
                    self.controller.cancel();
                }
            });
        });

        if let Some(notice) = self.controller.notice() {
            egui::Window::new(notice.title)
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(notice.message);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            self.controller.dismiss_notice();
                        }
                    });
                });
        }
    }
}
