use super::ClearFrameApp;
use crate::upload::SUPPORTED_EXTENSIONS;
use crate::utils::format_size;
use eframe::egui::{self, Align, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

impl ClearFrameApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let total_height = ui.available_height();
            let footer_height = 40.0;
            let footer_margin = 15.0;
            let content_height = total_height - footer_height - footer_margin;

            egui::ScrollArea::vertical()
                .max_height(content_height)
                .show(ui, |ui| {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("ClearFrame Image Processing");
                        ui.add_space(5.0);
                        ui.label(
                            RichText::new("Upload images, get them back centered and cleaned up")
                                .color(ui.visuals().text_color().gamma_multiply(0.7)),
                        );
                    });

                    ui.add_space(20.0);

                    self.render_selection(ui);
                    ui.add_space(10.0);
                    self.render_pending(ui);

                    ui.add_space(20.0);

                    ui.vertical_centered(|ui| {
                        ui.add_enabled_ui(!self.state.is_processing(), |ui| {
                            let button = egui::Button::new(self.state.submit_label())
                                .min_size(egui::vec2(200.0, 40.0));
                            if ui.add(button).clicked() {
                                self.start_processing();
                            }
                        });
                    });

                    ui.add_space(20.0);

                    self.render_gallery(ui);

                    ui.add_space(20.0);
                });

            ui.with_layout(egui::Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(footer_margin);
                self.render_footer(ui);
            });
        });
    }

    fn render_selection(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("🖼 Select Images").clicked() {
                    if let Some(paths) = FileDialog::new()
                        .add_filter("Images", &SUPPORTED_EXTENSIONS)
                        .pick_files()
                    {
                        self.add_files(paths);
                    }
                }
                if ui.button("📁 Add Folder").clicked() {
                    if let Some(dir) = FileDialog::new().pick_folder() {
                        self.add_folder(&dir);
                    }
                }
                if ui.button("🗑 Clear All").clicked() {
                    self.reset();
                }
            });
            ui.label(
                RichText::new("JPG, PNG and WEBP are supported")
                    .small()
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
        });
    }

    fn render_pending(&mut self, ui: &mut egui::Ui) {
        if self.state.pending.is_empty() {
            return;
        }
        ui.group(|ui| {
            ui.label(format!("Selected files ({})", self.state.pending.len()));
            ui.add_space(4.0);
            egui::ScrollArea::vertical()
                .id_source("pending_files")
                .max_height(150.0)
                .show(ui, |ui| {
                    for file in &self.state.pending {
                        ui.horizontal(|ui| {
                            ui.label("🖼");
                            ui.label(&file.name);
                            ui.label(
                                RichText::new(format_size(file.size))
                                    .small()
                                    .color(ui.visuals().text_color().gamma_multiply(0.5)),
                            );
                        });
                    }
                });
        });
    }

    fn render_gallery(&mut self, ui: &mut egui::Ui) {
        if !self.state.gallery_visible() {
            return;
        }

        ui.heading("Processed Images:");
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for name in &self.state.processed {
                if let Some(texture) = self.gallery.texture(name) {
                    ui.add(
                        egui::Image::from_texture(texture)
                            .max_height(160.0)
                            .rounding(6.0),
                    )
                    .on_hover_text(name);
                } else if self.gallery.has_failed(name) {
                    ui.colored_label(ERROR_RED, format!("⚠ {name}"));
                } else {
                    ui.add(egui::Spinner::new());
                }
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        let footer_width = 260.0;
        let indent = (ui.available_width() - footer_width) / 2.0;

        ui.horizontal(|ui| {
            ui.add_space(indent);
            ui.scope(|ui| {
                ui.set_width(footer_width);
                ui.horizontal_centered(|ui| {
                    ui.label("ClearFrame");
                    ui.colored_label(ACCENT, "·");
                    if ui
                        .add(
                            egui::Label::new(
                                RichText::new(self.config.base_url()).color(ACCENT),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        let _ = open::that(self.config.base_url());
                    }
                });
            });
        });

        if let Some(error) = &self.state.error_message {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(ERROR_RED, error);
            });
        }
    }
}
