// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Email-capture form: validation gate, submission lifecycle, and its view.
//!
//! The lifecycle is one tagged [`FormState`]; an inline error and an in-flight
//! request are mutually exclusive. Every submission carries an attempt id, and a
//! settlement is only applied while the form still waits on that exact attempt.

use eframe::egui;

use crate::logic::submit::SubmitError;
use crate::models::email::{ContactEmail, ValidationError};

/// Inline message shown when the endpoint answers 422.
pub const DOMAIN_REJECTED_MESSAGE: &str = "This email domain is not allowed";
/// Toast shown after a 200 response.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
/// Toast shown for transport errors and unexpected statuses.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

const BUTTON_LABEL: &str = "Contact Me";
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0xF4, 0x7B, 0x20);
const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(0xEF, 0x44, 0x44);
const FOCUS_BLUE: egui::Color32 = egui::Color32::from_rgb(0x00, 0xB6, 0xFF);

/// Lifecycle of the form between submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    /// The validation gate refused the input.
    Invalid(ValidationError),
    /// Waiting on the request identified by `attempt`.
    Submitting { attempt: u64 },
    /// Last attempt was accepted.
    Succeeded,
    /// Last attempt was refused with 422.
    Rejected,
    /// Last attempt hit a transport error or an unexpected status.
    Failed,
}

/// Form state, kept free of side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormModel {
    email: String,
    state: FormState,
    next_attempt: u64,
}

/// Messages emitted by the form view or routed back from the worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    EmailChanged(String),
    SubmitRequested,
    SubmitSettled {
        attempt: u64,
        result: Result<(), SubmitError>,
    },
    /// The form was closed; forget the input and any in-flight attempt.
    Abandon,
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCommand {
    Submit { attempt: u64, email: ContactEmail },
}

/// Feedback routed to the notification surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEvent {
    pub message: String,
    pub is_error: bool,
}

/// Presentation of the input and button; both share the same behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    /// Input and button side by side.
    Inline,
    /// Full-width input above a full-width button.
    Stacked,
}

impl ContactFormModel {
    /// Current input text.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether a request is outstanding; the submit control is disabled meanwhile.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    /// Inline error text, if any.
    pub fn error_text(&self) -> Option<String> {
        match &self.state {
            FormState::Invalid(err) => Some(err.to_string()),
            FormState::Rejected => Some(DOMAIN_REJECTED_MESSAGE.to_string()),
            _ => None,
        }
    }
}

/// Apply a message to the form. Returns feedback for the notification surface when relevant.
pub fn update(
    model: &mut ContactFormModel,
    msg: FormMsg,
    cmds: &mut Vec<FormCommand>,
) -> Option<FormEvent> {
    match msg {
        FormMsg::EmailChanged(text) => {
            model.email = text;
            None
        }
        FormMsg::SubmitRequested => {
            submit(model, cmds);
            None
        }
        FormMsg::SubmitSettled { attempt, result } => settle(model, attempt, result),
        FormMsg::Abandon => {
            if let FormState::Submitting { attempt } = model.state {
                tracing::debug!(attempt, "form closed with a request in flight");
            }
            model.email.clear();
            model.state = FormState::Idle;
            None
        }
    }
}

/// Run the validation gate and, when it passes, enqueue exactly one request.
fn submit(model: &mut ContactFormModel, cmds: &mut Vec<FormCommand>) {
    if model.is_submitting() {
        return;
    }

    let email = match ContactEmail::parse(model.email.as_str()) {
        Ok(email) => email,
        Err(err) => {
            tracing::debug!(reason = %err, "contact form failed validation");
            model.state = FormState::Invalid(err);
            return;
        }
    };

    let attempt = model.next_attempt;
    model.next_attempt += 1;
    tracing::info!(attempt, email = %email.redacted(), "submitting contact form");
    model.state = FormState::Submitting { attempt };
    cmds.push(FormCommand::Submit { attempt, email });
}

/// Map a settled request onto the form and the user-facing feedback.
fn settle(
    model: &mut ContactFormModel,
    attempt: u64,
    result: Result<(), SubmitError>,
) -> Option<FormEvent> {
    if model.state != (FormState::Submitting { attempt }) {
        tracing::debug!(attempt, "discarding settlement for abandoned attempt");
        return None;
    }

    match result {
        Ok(()) => {
            tracing::info!(attempt, "contact form accepted");
            model.state = FormState::Succeeded;
            model.email.clear();
            Some(FormEvent {
                message: SUCCESS_MESSAGE.to_string(),
                is_error: false,
            })
        }
        Err(SubmitError::DomainRejected) => {
            tracing::info!(attempt, "contact form email domain rejected");
            model.state = FormState::Rejected;
            None
        }
        Err(err) => {
            tracing::warn!(attempt, error = %err, "contact form submission failed");
            model.state = FormState::Failed;
            Some(FormEvent {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
                is_error: true,
            })
        }
    }
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &ContactFormModel, variant: FormVariant) -> Vec<FormMsg> {
    let mut msgs = Vec::new();
    let error = model.error_text();

    match variant {
        FormVariant::Inline => {
            ui.horizontal(|ui| {
                let button_width = 150.0;
                let input_width =
                    (ui.available_width() - button_width - ui.spacing().item_spacing.x).max(120.0);
                render_input(ui, model, error.is_some(), input_width, &mut msgs);
                render_button(ui, model, button_width, &mut msgs);
            });
        }
        FormVariant::Stacked => {
            ui.vertical(|ui| {
                let width = ui.available_width();
                render_input(ui, model, error.is_some(), width, &mut msgs);
                ui.add_space(8.0);
                render_button(ui, model, width, &mut msgs);
            });
        }
    }

    if let Some(text) = error {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(text).small().color(ERROR_RED));
    }

    msgs
}

/// Email input; the border turns red while an inline error is shown.
fn render_input(
    ui: &mut egui::Ui,
    model: &ContactFormModel,
    has_error: bool,
    width: f32,
    msgs: &mut Vec<FormMsg>,
) {
    let mut email = model.email.clone();
    let response = ui
        .scope(|ui| {
            let visuals = ui.visuals_mut();
            if has_error {
                let stroke = egui::Stroke::new(1.0, ERROR_RED);
                visuals.widgets.inactive.bg_stroke = stroke;
                visuals.widgets.hovered.bg_stroke = stroke;
            }
            visuals.selection.stroke = egui::Stroke::new(2.0, FOCUS_BLUE);
            ui.add(
                egui::TextEdit::singleline(&mut email)
                    .hint_text("Email Address")
                    .desired_width(width)
                    .margin(egui::Margin::symmetric(12, 10)),
            )
        })
        .inner;

    if response.changed() {
        msgs.push(FormMsg::EmailChanged(email));
    }

    // Enter submits, like a native form.
    if response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
        msgs.push(FormMsg::SubmitRequested);
    }
}

/// Submit button; disabled while a request is in flight.
fn render_button(
    ui: &mut egui::Ui,
    model: &ContactFormModel,
    width: f32,
    msgs: &mut Vec<FormMsg>,
) {
    let label = egui::RichText::new(BUTTON_LABEL)
        .color(egui::Color32::WHITE)
        .size(16.0);
    let button = egui::Button::new(label)
        .fill(BUTTON_FILL)
        .min_size(egui::vec2(width, 40.0));

    let submitting = model.is_submitting();
    let response = ui
        .add_enabled(!submitting, button)
        .on_disabled_hover_text("Sending…");
    if response.clicked() {
        msgs.push(FormMsg::SubmitRequested);
    }
    if submitting {
        ui.add(egui::Spinner::new().size(14.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(email: &str) -> ContactFormModel {
        ContactFormModel {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Submit a valid address and return the attempt id it was given.
    fn start_submission(model: &mut ContactFormModel) -> u64 {
        let mut cmds = Vec::new();
        update(model, FormMsg::SubmitRequested, &mut cmds);
        assert_eq!(cmds.len(), 1, "valid submit should enqueue one request");
        match cmds.pop().unwrap() {
            FormCommand::Submit { attempt, .. } => attempt,
        }
    }

    #[test]
    fn empty_submit_sets_required_error_without_request() {
        let mut model = ContactFormModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(event.is_none());
        assert_eq!(model.error_text().as_deref(), Some("Email is required"));
        assert!(!model.is_submitting());
    }

    #[test]
    fn malformed_submit_sets_format_error_without_request() {
        let mut model = model_with("jane@example");
        let mut cmds = Vec::new();

        update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            model.error_text().as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(!model.is_submitting());
    }

    #[test]
    fn valid_submit_clears_error_and_enqueues_one_request() {
        let mut model = model_with("jane@example");
        let mut cmds = Vec::new();
        update(&mut model, FormMsg::SubmitRequested, &mut cmds);
        assert!(model.error_text().is_some());

        update(
            &mut model,
            FormMsg::EmailChanged("jane@example.com".into()),
            &mut cmds,
        );
        update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        assert_eq!(
            cmds,
            vec![FormCommand::Submit {
                attempt: 0,
                email: ContactEmail::parse("jane@example.com").unwrap(),
            }]
        );
        assert!(model.error_text().is_none());
        assert!(model.is_submitting());
    }

    #[test]
    fn blank_input_counts_as_empty() {
        let mut model = model_with("   ");
        let mut cmds = Vec::new();

        update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.error_text().as_deref(), Some("Email is required"));
    }

    #[test]
    fn padded_input_submits_trimmed_address() {
        let mut model = model_with("  jane@example.com\n");
        let mut cmds = Vec::new();

        update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        let [FormCommand::Submit { email, .. }] = cmds.as_slice() else {
            panic!("expected one submit command, got {cmds:?}");
        };
        assert_eq!(email.as_ref(), "jane@example.com");
        assert!(model.is_submitting());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut model = model_with("jane@example.com");
        start_submission(&mut model);

        let mut cmds = Vec::new();
        update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.is_submitting());
    }

    #[test]
    fn success_clears_email_and_emits_success_toast() {
        let mut model = model_with("jane@example.com");
        let attempt = start_submission(&mut model);

        let event = update(
            &mut model,
            FormMsg::SubmitSettled {
                attempt,
                result: Ok(()),
            },
            &mut Vec::new(),
        )
        .expect("success should notify");

        assert!(!event.is_error);
        assert_eq!(event.message, SUCCESS_MESSAGE);
        assert_eq!(model.email(), "");
        assert!(model.error_text().is_none());
        assert!(!model.is_submitting());
    }

    #[test]
    fn domain_rejection_is_inline_only() {
        let mut model = model_with("jane@blocked.example");
        let attempt = start_submission(&mut model);

        let event = update(
            &mut model,
            FormMsg::SubmitSettled {
                attempt,
                result: Err(SubmitError::DomainRejected),
            },
            &mut Vec::new(),
        );

        assert!(event.is_none(), "422 must not produce a toast");
        assert_eq!(model.error_text().as_deref(), Some(DOMAIN_REJECTED_MESSAGE));
        assert_eq!(model.email(), "jane@blocked.example");
        assert!(!model.is_submitting());
    }

    #[test]
    fn other_failures_emit_generic_toast_and_keep_email() {
        for err in [
            SubmitError::UnexpectedStatus(500),
            SubmitError::Transport("connection refused".into()),
        ] {
            let mut model = model_with("jane@example.com");
            let attempt = start_submission(&mut model);

            let event = update(
                &mut model,
                FormMsg::SubmitSettled {
                    attempt,
                    result: Err(err),
                },
                &mut Vec::new(),
            )
            .expect("failure should notify");

            assert!(event.is_error);
            assert_eq!(event.message, GENERIC_FAILURE_MESSAGE);
            assert_eq!(model.email(), "jane@example.com");
            assert!(model.error_text().is_none());
            assert!(!model.is_submitting());
        }
    }

    #[test]
    fn typing_keeps_previous_error_until_next_submit() {
        let mut model = ContactFormModel::default();
        let mut cmds = Vec::new();
        update(&mut model, FormMsg::SubmitRequested, &mut cmds);

        update(&mut model, FormMsg::EmailChanged("j".into()), &mut cmds);

        assert_eq!(model.error_text().as_deref(), Some("Email is required"));
        assert_eq!(model.email(), "j");
    }

    #[test]
    fn settlement_after_abandon_is_discarded() {
        let mut model = model_with("jane@example.com");
        let attempt = start_submission(&mut model);

        update(&mut model, FormMsg::Abandon, &mut Vec::new());
        update(
            &mut model,
            FormMsg::EmailChanged("other@example.com".into()),
            &mut Vec::new(),
        );
        let event = update(
            &mut model,
            FormMsg::SubmitSettled {
                attempt,
                result: Ok(()),
            },
            &mut Vec::new(),
        );

        assert!(event.is_none());
        assert_eq!(model.state(), &FormState::Idle);
        assert_eq!(model.email(), "other@example.com");
    }

    #[test]
    fn stale_attempt_does_not_settle_newer_one() {
        let mut model = model_with("jane@example.com");
        let first = start_submission(&mut model);
        update(&mut model, FormMsg::Abandon, &mut Vec::new());
        update(
            &mut model,
            FormMsg::EmailChanged("jane@example.com".into()),
            &mut Vec::new(),
        );
        let second = start_submission(&mut model);
        assert_ne!(first, second);

        update(
            &mut model,
            FormMsg::SubmitSettled {
                attempt: first,
                result: Err(SubmitError::DomainRejected),
            },
            &mut Vec::new(),
        );

        assert_eq!(model.state(), &FormState::Submitting { attempt: second });
    }
}
