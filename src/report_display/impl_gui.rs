use crate::decision_engine::PredictionReport;
use crate::error::{AppError, ClassifyError};
use crate::library::logger::interface::Logger;
use crate::pipeline::session::ClassifierSession;
use crate::report_display::interface::ReportDisplay;
use crate::shell::{classify_and_show, clean_path_input};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::Arc;

enum Outcome {
    Report(PathBuf, PredictionReport),
    Error(PathBuf, String),
}

/// Keeps the latest outcome for the window to paint.
#[derive(Default)]
pub struct ReportDisplayGui {
    last: Option<Outcome>,
}

impl ReportDisplay for ReportDisplayGui {
    fn show_report(&mut self, source: &Path, report: &PredictionReport) -> std::io::Result<()> {
        self.last = Some(Outcome::Report(source.to_path_buf(), report.clone()));
        Ok(())
    }

    fn show_error(&mut self, source: &Path, error: &ClassifyError) -> std::io::Result<()> {
        self.last = Some(Outcome::Error(source.to_path_buf(), error.to_string()));
        Ok(())
    }
}

impl ReportDisplayGui {
    fn render(&self, ui: &mut egui::Ui) {
        match &self.last {
            None => {
                ui.label("No image classified yet.");
            }
            Some(Outcome::Error(path, message)) => {
                ui.label(path.display().to_string());
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message.as_str());
            }
            Some(Outcome::Report(path, report)) => {
                ui.label(path.display().to_string());
                ui.heading(
                    egui::RichText::new(report.top_label.as_str())
                        .size(28.0)
                        .strong(),
                );
                ui.add(
                    egui::ProgressBar::new(report.top_confidence.clamp(0.0, 1.0))
                        .text(format!("{:.1} %", report.top_confidence * 100.0)),
                );
                ui.separator();

                egui::Grid::new("per_class").striped(true).show(ui, |ui| {
                    for class in report.ranked() {
                        ui.label(class.label.as_str());
                        ui.add(
                            egui::ProgressBar::new(class.probability.clamp(0.0, 1.0))
                                .desired_width(220.0)
                                .text(format!("{:.1} %", class.probability * 100.0)),
                        );
                        ui.end_row();
                    }
                });
            }
        }
    }
}

struct ClassifierWindow {
    session: ClassifierSession,
    display: ReportDisplayGui,
    path_input: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassifierWindow {
    fn classify(&mut self) {
        let path = PathBuf::from(clean_path_input(&self.path_input));
        if path.as_os_str().is_empty() {
            return;
        }

        match classify_and_show(&self.session, &path, &mut self.display) {
            Ok(Err(error)) => self.logger.error(&error.to_string()),
            Ok(Ok(_)) => {}
            Err(error) => self.logger.error(&format!("Display failed: {}", error)),
        }
    }
}

impl eframe::App for ClassifierWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        });

        let mut requested = false;
        if let Some(path) = dropped {
            self.path_input = path.display().to_string();
            requested = true;
        }

        egui::TopBottomPanel::top("input").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Image:");
                let response = ui.text_edit_singleline(&mut self.path_input);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Classify").clicked() || submitted {
                    requested = true;
                }
            });
            ui.label("or drop an image file onto this window.");
            ui.add_space(8.0);
        });

        if requested {
            self.classify();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.display.render(ui);
        });
    }
}

pub fn run(session: ClassifierSession, logger: Arc<dyn Logger + Send + Sync>) -> Result<(), AppError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 520.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let window = ClassifierWindow {
        session,
        display: ReportDisplayGui::default(),
        path_input: String::new(),
        logger: logger.with_namespace("gui"),
    };

    eframe::run_native(
        "Clothing Classifier",
        options,
        Box::new(move |_cc| Box::new(window)),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}
