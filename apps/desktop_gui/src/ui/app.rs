use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use quote_form::{render::DISCLAIMER, QuoteForm, RenderedQuote, ResultPanel, RiskBand, ToastKind};
use shared::domain::FormField;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent,
    orchestration::{apply_ui_event, submit_quote},
};

const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 158, 46);
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(46, 96, 68);

fn band_color(band: RiskBand) -> egui::Color32 {
    match band {
        RiskBand::Low => egui::Color32::from_rgb(56, 142, 60),
        RiskBand::Medium => egui::Color32::from_rgb(245, 166, 35),
        RiskBand::High => egui::Color32::from_rgb(211, 47, 47),
    }
}

pub struct QuoteApp {
    form: QuoteForm,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl QuoteApp {
    pub fn new(form: QuoteForm, cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            form,
            cmd_tx,
            ui_rx,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self, now: Instant) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(event, &mut self.form, &mut self.status, now);
        }
        self.form.toasts_mut().prune(now);
    }

    fn show_form_panel(&mut self, ctx: &egui::Context, now: Instant) {
        egui::SidePanel::left("quote_form_panel")
            .resizable(false)
            .min_width(300.0)
            .show(ctx, |ui| {
                ui.heading("Insurance quote");
                ui.add_space(8.0);

                for field in FormField::ALL {
                    self.show_field(ui, field);
                    ui.add_space(4.0);
                }

                ui.add_space(8.0);
                let button = egui::Button::new(self.form.submit_label());
                if ui.add_enabled(self.form.submit_enabled(), button).clicked() {
                    submit_quote(&self.cmd_tx, &mut self.form, &mut self.status, now);
                }

                if !self.status.is_empty() {
                    ui.add_space(8.0);
                    ui.small(egui::RichText::new(&self.status).weak());
                }
            });
    }

    fn show_field(&mut self, ui: &mut egui::Ui, field: FormField) {
        ui.label(egui::RichText::new(field.label()).strong());
        let mut value = self.form.input().get(field).to_string();

        let changed = match field.choices() {
            Some(choices) => {
                let selected = if value.is_empty() {
                    "Select...".to_string()
                } else {
                    value.clone()
                };
                let mut changed = false;
                egui::ComboBox::from_id_salt(field.id())
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for choice in choices {
                            changed |= ui
                                .selectable_value(&mut value, choice.to_string(), choice)
                                .changed();
                        }
                    });
                changed
            }
            None => ui.text_edit_singleline(&mut value).changed(),
        };

        if changed {
            self.form.set_field(field, value);
        }

        if let Some(warning) = self.form.warning(field) {
            ui.label(egui::RichText::new(warning.to_string()).color(WARNING_COLOR).small());
        }
    }

    fn show_result_panel(&mut self, ctx: &egui::Context, now: Instant) {
        egui::CentralPanel::default().show(ctx, |ui| match self.form.result() {
            ResultPanel::Hidden => {
                ui.label(
                    egui::RichText::new("Fill in the form and request a quote.").weak(),
                );
            }
            ResultPanel::Quote(quote) => show_quote(ui, quote, now),
            ResultPanel::Failed { message, hint } => {
                egui::Frame::NONE
                    .fill(ERROR_FILL)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(12, 10))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(*message).color(egui::Color32::WHITE).strong());
                        ui.label(egui::RichText::new(*hint).color(egui::Color32::WHITE));
                    });
            }
        });
    }

    fn show_toasts(&self, ctx: &egui::Context, now: Instant) {
        let toasts = self.form.toasts().active();
        if toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("quote_toasts"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .show(ctx, |ui| {
                for toast in toasts {
                    let fill = match toast.kind {
                        ToastKind::Success => SUCCESS_FILL,
                        ToastKind::Error => ERROR_FILL,
                    };
                    ui.set_opacity(toast.remaining(now).min(0.25) * 4.0);
                    egui::Frame::NONE
                        .fill(fill)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(10, 8))
                        .show(ui, |ui| {
                            ui.set_max_width(320.0);
                            ui.label(
                                egui::RichText::new(&toast.message).color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(6.0);
                }
            });
    }

    fn is_animating(&self, now: Instant) -> bool {
        let counting = match self.form.result() {
            ResultPanel::Quote(quote) => !quote.counter.is_finished(now),
            ResultPanel::Hidden | ResultPanel::Failed { .. } => false,
        };
        counting || !self.form.toasts().active().is_empty()
    }
}

fn show_quote(ui: &mut egui::Ui, quote: &RenderedQuote, now: Instant) {
    ui.heading(quote.headline_at(now));
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for chip in &quote.chips {
            let fill = chip
                .band
                .map(band_color)
                .unwrap_or_else(|| ui.visuals().faint_bg_color);
            egui::Frame::NONE
                .fill(fill)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(chip.text.as_str());
                });
        }
    });

    ui.add_space(8.0);
    ui.label(quote.explanation());
    ui.add_space(8.0);

    egui::Grid::new("quote_insights")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for insight in &quote.insights {
                ui.label(egui::RichText::new(insight.title).strong());
                ui.label(insight.detail);
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.small(egui::RichText::new(DISCLAIMER).weak());
}

impl eframe::App for QuoteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.process_ui_events(now);

        self.show_form_panel(ctx, now);
        self.show_result_panel(ctx, now);
        self.show_toasts(ctx, now);

        if self.is_animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
