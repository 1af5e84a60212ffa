// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use crate::logic::submit::Submitter;
use crate::models::email::ContactEmail;
use crate::ui::components::contact_form::{self, ContactFormModel, FormCommand, FormMsg};
use crate::ui::components::toasts::{self, ToastKind, ToastsModel, ToastsMsg};
use crate::ui::layout::Layout;

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Active page arrangement.
    pub layout: Layout,
    /// Whether the modal card is showing (only meaningful for [`Layout::Modal`]).
    pub modal_open: bool,
    /// Contact form state.
    pub form: ContactFormModel,
    /// Notification surface.
    pub toasts: ToastsModel,
    /// Latest frame time in seconds, as reported by egui.
    pub clock: f64,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    /// Fresh model for `layout`; the modal card starts open.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            modal_open: layout == Layout::Modal,
            ..Default::default()
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    /// Frame started at the given time; expires stale toasts.
    Tick(f64),
    SetLayout(Layout),
    OpenContactModal,
    CloseContactModal,
    Form(FormMsg),
    Toasts(ToastsMsg),
}

/// Commands represent side-effects executed off the UI thread.
pub enum Command {
    SubmitContact { attempt: u64, email: ContactEmail },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Tick(now) => {
            model.clock = now;
            model.toasts.prune(now);
        }
        Msg::SetLayout(layout) => {
            if layout == Layout::Modal && model.layout != Layout::Modal {
                model.modal_open = true;
            }
            model.layout = layout;
        }
        Msg::OpenContactModal => model.modal_open = true,
        Msg::CloseContactModal => {
            model.modal_open = false;
            // Closing the card unmounts the form.
            forward_form(model, FormMsg::Abandon, cmds);
        }
        Msg::Form(m) => forward_form(model, m, cmds),
        Msg::Toasts(m) => toasts::update(&mut model.toasts, m),
    }
}

/// Execute a command on the calling (worker) thread and return the resulting message.
pub fn run_command(cmd: Command, submitter: &dyn Submitter) -> Msg {
    match cmd {
        Command::SubmitContact { attempt, email } => {
            let result = submitter.submit(&email);
            Msg::Form(FormMsg::SubmitSettled { attempt, result })
        }
    }
}

/// Route a message to the form, surfacing feedback and translating its commands.
fn forward_form(model: &mut AppModel, msg: FormMsg, cmds: &mut Vec<Command>) {
    let mut form_cmds = Vec::new();
    if let Some(event) = contact_form::update(&mut model.form, msg, &mut form_cmds) {
        surface_event(model, event.message, event.is_error);
    }
    for c in form_cmds {
        match c {
            FormCommand::Submit { attempt, email } => {
                cmds.push(Command::SubmitContact { attempt, email })
            }
        }
    }
}

/// Hand feedback to the notification surface.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    let kind = if is_error {
        ToastKind::Error
    } else {
        ToastKind::Success
    };
    model.toasts.notify(kind, message, model.clock);
}
