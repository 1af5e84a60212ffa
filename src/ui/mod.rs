// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the landing page.
//! Handles the frame loop, the worker pool, and the chrome around the page layout.

pub mod components;
pub mod layout;

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;

use crate::config::LaunchConfig;
use crate::logic::submit::{HttpSubmitter, Submitter};
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::contact_form::FormState;
use crate::ui::components::toasts;
use crate::ui::layout::Layout;

/// Number of threads serving network commands.
const WORKER_THREADS: usize = 2;

/// Stateful egui application rendering the landing page and its contact form.
pub struct LandingApp {
    model: AppModel,
    inbox: Vec<Msg>,
    endpoint_host: String,
    cmd_tx: Option<crossbeam_channel::Sender<Command>>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl LandingApp {
    /// Build the app and start the HTTP workers.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be constructed.
    pub fn new(ctx: &egui::Context, config: &LaunchConfig) -> Result<Self> {
        let submitter = HttpSubmitter::new(config.endpoint.clone())?;
        let endpoint_host = submitter
            .endpoint()
            .host_str()
            .unwrap_or("endpoint")
            .to_string();
        Ok(Self::with_submitter(
            ctx,
            config.layout,
            Arc::new(submitter),
            endpoint_host,
        ))
    }

    /// Build the app around any submitter; workers share it.
    pub fn with_submitter(
        ctx: &egui::Context,
        layout: Layout,
        submitter: Arc<dyn Submitter>,
        endpoint_host: String,
    ) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        for worker in 0..WORKER_THREADS {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let submitter = Arc::clone(&submitter);
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                tracing::debug!(worker, "contact worker started");
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, submitter.as_ref());
                    // The receiver is gone once the app is dropped; results are discarded.
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
                tracing::debug!(worker, "contact worker stopped");
            });
        }

        Self {
            model: AppModel::new(layout),
            inbox: Vec::new(),
            endpoint_host,
            cmd_tx: Some(cmd_tx),
            msg_rx,
        }
    }
}

impl Drop for LandingApp {
    fn drop(&mut self) {
        if self.model.form.is_submitting() {
            tracing::info!("shutting down with a contact request in flight, its result is dropped");
        }
        // Closing the command queue lets the workers exit.
        self.cmd_tx.take();
    }
}

impl eframe::App for LandingApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which eframe
    /// still invokes every frame before `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame.
    ///
    /// Drains worker results into the inbox, applies every queued message to the
    /// MVU model (dispatching resulting commands to the workers), then renders the
    /// top bar, status bar, page layout and toast overlay. Widgets append new
    /// messages to the inbox for the next frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        let now = ctx.input(|i| i.time);
        self.inbox.push(Msg::Tick(now));

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process in arrival order so the tick lands before any feedback.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                self.dispatch(cmd);
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("EZ Works");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_layout_toggle(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::new().inner_margin(24.0).show(ui, |ui| {
                    let msgs = crate::ui::layout::view(ui, ctx, &self.model);
                    self.inbox.extend(msgs);
                });
            });
        });

        let toast_msgs = toasts::view(ctx, &self.model.toasts);
        self.inbox.extend(toast_msgs.into_iter().map(Msg::Toasts));

        if let Some(deadline) = self.model.toasts.next_deadline() {
            let wait = (deadline - now).max(0.0);
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(wait));
        }
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl LandingApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        });
    }

    /// Send a command to the workers, tracking it as pending.
    fn dispatch(&mut self, cmd: Command) {
        let Some(tx) = &self.cmd_tx else {
            return;
        };
        if tx.send(cmd).is_ok() {
            self.model.pending_commands += 1;
        }
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    /// Segmented control choosing between the page layouts.
    fn render_layout_toggle(&mut self, ui: &mut egui::Ui) {
        let mut choice = self.model.layout;
        ui.horizontal(|ui| {
            for layout in [Layout::Modal, Layout::Marketing] {
                ui.selectable_value(&mut choice, layout, layout.label());
            }
            ui.label("Layout");
        });
        if choice != self.model.layout {
            self.inbox.push(Msg::SetLayout(choice));
        }
    }

    /// Render the endpoint and any in-flight request.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} {}",
                    egui_phosphor::regular::GLOBE_SIMPLE,
                    self.endpoint_host
                ))
                .color(egui::Color32::from_gray(110)),
            );
            let outcome = match self.model.form.state() {
                FormState::Succeeded => Some("Last request accepted"),
                FormState::Rejected => Some("Last request refused"),
                FormState::Failed => Some("Last request failed"),
                _ => None,
            };
            if let Some(text) = outcome {
                ui.separator();
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} request(s) in flight",
                    self.model.pending_commands
                ));
            }
        });
    }
}
