// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transient notification overlay anchored at the top-center of the window.
//!
//! The model is clock-agnostic: callers pass the current time (seconds, as
//! reported by egui) so expiry stays deterministic under test.

use eframe::egui;

use crate::utils::icons::icon_for_toast;

/// How long a success toast stays visible.
pub const SUCCESS_DURATION_SECS: f64 = 2.0;
/// How long an error toast stays visible.
pub const ERROR_DURATION_SECS: f64 = 4.0;

/// Toast flavour; decides icon, colour and lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn duration(self) -> f64 {
        match self {
            ToastKind::Success => SUCCESS_DURATION_SECS,
            ToastKind::Error => ERROR_DURATION_SECS,
        }
    }
}

/// A single visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    /// Time (seconds) after which the toast is dropped.
    pub expires_at: f64,
}

/// Messages emitted by the toast overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastsMsg {
    Dismiss(u64),
}

/// Notification surface state.
#[derive(Clone, Debug, Default)]
pub struct ToastsModel {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastsModel {
    /// Show `message` starting at `now`; returns the toast id.
    pub fn notify(&mut self, kind: ToastKind, message: impl Into<String>, now: f64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            expires_at: now + kind.duration(),
        });
        id
    }

    /// Drop every toast whose deadline has passed.
    pub fn prune(&mut self, now: f64) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Remove one toast early.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev()
    }

    /// Earliest pending expiry, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<f64> {
        self.toasts
            .iter()
            .map(|t| t.expires_at)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Apply a message to the overlay model.
pub fn update(model: &mut ToastsModel, msg: ToastsMsg) {
    match msg {
        ToastsMsg::Dismiss(id) => model.dismiss(id),
    }
}

/// Render visible toasts in a foreground area; clicking a toast dismisses it.
pub fn view(ctx: &egui::Context, model: &ToastsModel) -> Vec<ToastsMsg> {
    let mut msgs = Vec::new();
    if model.is_empty() {
        return msgs;
    }

    egui::Area::new(egui::Id::new("toasts_overlay"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for toast in model.visible() {
                let accent = match toast.kind {
                    ToastKind::Success => egui::Color32::from_rgb(34, 160, 90),
                    ToastKind::Error => egui::Color32::from_rgb(220, 53, 69),
                };
                let visuals = ui.visuals().clone();
                let response = egui::Frame::new()
                    .fill(visuals.window_fill)
                    .stroke(visuals.window_stroke())
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(icon_for_toast(toast.kind))
                                    .color(accent)
                                    .size(18.0),
                            );
                            ui.label(&toast.message);
                        });
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    msgs.push(ToastsMsg::Dismiss(toast.id));
                }
                ui.add_space(6.0);
            }
        });

    msgs
}
