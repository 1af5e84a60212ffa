// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor icon mapping for services and notifications.

use crate::models::services::Service;
use crate::ui::components::toasts::ToastKind;

/// Return a Phosphor glyph representing the given service.
pub fn icon_for_service(service: Service) -> &'static str {
    match service {
        Service::PresentationDesign => egui_phosphor::regular::PRESENTATION_CHART,
        Service::AudioVisualProduction => egui_phosphor::regular::FILM_SLATE,
        Service::TranslationServices => egui_phosphor::regular::TRANSLATE,
        Service::GraphicDesign => egui_phosphor::regular::PAINT_BRUSH,
        Service::ResearchAnalytics => egui_phosphor::regular::CHART_LINE_UP,
        Service::DataProcessing => egui_phosphor::regular::DATABASE,
    }
}

/// Return the glyph shown in front of a toast message.
pub fn icon_for_toast(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => egui_phosphor::regular::CHECK_CIRCLE,
        ToastKind::Error => egui_phosphor::regular::WARNING_CIRCLE,
    }
}
