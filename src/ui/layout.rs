// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Page layouts. Each one is a different arrangement of the same contact form.

use eframe::egui;

use crate::mvu::{AppModel, Msg};
use crate::ui::components::contact_form::{self, FormVariant};
use crate::ui::components::services;

/// Width at which the marketing page switches to two panes.
const WIDE_BREAKPOINT: f32 = 1024.0;
const HEADLINE: &str = "Suite Of Business Support Services";
const BLURB: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
    tempor incididunt...Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed";
const NAVY: egui::Color32 = egui::Color32::from_rgb(0x11, 0x29, 0x49);
const SKY: egui::Color32 = egui::Color32::from_rgb(0x00, 0xB6, 0xFF);
const ORANGE: egui::Color32 = egui::Color32::from_rgb(0xF4, 0x7B, 0x20);

/// Page arrangement around the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Layout {
    /// Two-pane marketing page with the services grid.
    #[default]
    Marketing,
    /// Plain page with the form in a modal card.
    Modal,
}

impl Layout {
    pub fn label(self) -> &'static str {
        match self {
            Layout::Marketing => "Marketing",
            Layout::Modal => "Modal",
        }
    }
}

/// Render the configured layout and return messages produced by its widgets.
pub fn view(ui: &mut egui::Ui, ctx: &egui::Context, model: &AppModel) -> Vec<Msg> {
    match model.layout {
        Layout::Marketing => render_marketing(ui, model),
        Layout::Modal => render_modal_page(ui, ctx, model),
    }
}

/// Two panes on wide windows, a single stacked column otherwise.
fn render_marketing(ui: &mut egui::Ui, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();
    let width = ui.available_width();

    if width >= WIDE_BREAKPOINT {
        ui.horizontal_top(|ui| {
            let height = ui.available_height();
            let spacing = 48.0;
            let left = (width - spacing) * 0.4;
            let right = width - spacing - left;

            ui.allocate_ui_with_layout(
                egui::vec2(left, height),
                egui::Layout::top_down(egui::Align::Min),
                |ui| {
                    ui.add(logo());
                    ui.add_space(32.0);
                    render_headline(ui, 24.0);
                    ui.add_space(48.0);
                    let form_msgs =
                        contact_form::view(ui, &model.form, FormVariant::Inline);
                    msgs.extend(form_msgs.into_iter().map(Msg::Form));
                },
            );
            ui.add_space(spacing);
            ui.allocate_ui_with_layout(
                egui::vec2(right, height),
                egui::Layout::top_down(egui::Align::Min),
                |ui| services::view(ui, 3, Some(160.0)),
            );
        });
    } else {
        render_text_logo(ui);
        ui.add_space(24.0);
        render_headline(ui, 28.0);
        ui.add_space(24.0);
        services::view(ui, services::columns_for_width(width), None);
        ui.add_space(16.0);
        let form_msgs = contact_form::view(ui, &model.form, FormVariant::Stacked);
        msgs.extend(form_msgs.into_iter().map(Msg::Form));
    }

    msgs
}

/// Plain page with a launcher; the form lives in a modal card while it is open.
fn render_modal_page(ui: &mut egui::Ui, ctx: &egui::Context, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.add(logo());
        ui.add_space(24.0);
        ui.label(egui::RichText::new(HEADLINE).size(26.0).color(NAVY));
        ui.add_space(24.0);
        let launcher = egui::Button::new(format!(
            "{} Get in touch",
            egui_phosphor::regular::ENVELOPE_SIMPLE
        ));
        if ui.add_enabled(!model.modal_open, launcher).clicked() {
            msgs.push(Msg::OpenContactModal);
        }
    });

    if model.modal_open {
        let mut open = true;
        egui::Window::new("Contact us")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label("Leave your email and we will get back to you.");
                ui.add_space(12.0);
                let form_msgs = contact_form::view(ui, &model.form, FormVariant::Stacked);
                msgs.extend(form_msgs.into_iter().map(Msg::Form));
            });
        if !open {
            msgs.push(Msg::CloseContactModal);
        }
    }

    msgs
}

fn logo() -> egui::Image<'static> {
    egui::Image::new(egui::include_image!("../../assets/ezworks-logo.svg")).max_height(80.0)
}

fn render_headline(ui: &mut egui::Ui, size: f32) {
    ui.label(egui::RichText::new(HEADLINE).size(size).color(NAVY));
    ui.add_space(12.0);
    ui.label(egui::RichText::new(BLURB).size(16.0).color(NAVY));
}

/// "EZ" badge followed by "Works", used where the bitmap logo would not fit.
fn render_text_logo(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        egui::Frame::new()
            .stroke(egui::Stroke::new(2.0, ORANGE))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("EZ").size(28.0).strong().color(SKY));
            });
        ui.label(egui::RichText::new("Works").size(28.0).strong().color(SKY));
    });
}
