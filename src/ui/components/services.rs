// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Services grid shown next to (or above) the contact form.

use eframe::egui;

use crate::models::services::Service;
use crate::utils::icons::icon_for_service;

const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(0x1B, 0x36, 0x5D);
const TITLE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x3C, 0xC3, 0xF2);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Render every service as a card, `columns` per row.
///
/// `card_height` pins the card height (the wide layout uses equal-height cards);
/// `None` lets each card size to its content.
pub fn view(ui: &mut egui::Ui, columns: usize, card_height: Option<f32>) {
    let columns = columns.max(1);
    for row in Service::ALL.chunks(columns) {
        ui.columns(columns, |cols| {
            for (col, service) in cols.iter_mut().zip(row) {
                render_card(col, *service, card_height);
            }
        });
        ui.add_space(12.0);
    }
}

/// Number of grid columns that fit the available width (1 on phones, 2 on tablets).
pub fn columns_for_width(width: f32) -> usize {
    if width >= 640.0 { 2 } else { 1 }
}

fn render_card(ui: &mut egui::Ui, service: Service, card_height: Option<f32>) {
    egui::Frame::new()
        .fill(CARD_FILL)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(20.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(height) = card_height {
                ui.set_min_height(height);
            }
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icon_for_service(service))
                        .size(28.0)
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new(service.title())
                        .size(17.0)
                        .strong()
                        .color(TITLE_COLOR),
                );
            });
            ui.add_space(8.0);
            ui.label(egui::RichText::new(service.blurb()).color(BODY_COLOR));
        });
}

#[cfg(test)]
mod tests {
    use super::columns_for_width;

    #[test]
    fn narrow_widths_use_single_column() {
        assert_eq!(columns_for_width(360.0), 1);
        assert_eq!(columns_for_width(639.9), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(900.0), 2);
    }
}
