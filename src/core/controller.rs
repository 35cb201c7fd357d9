//! Client side of the signup form.
//!
//! The controller owns the form state explicitly: field values, the inline error
//! slots, the status line and the submit control. Input events validate the touched
//! field as advice; `is_form_valid` is the only gate for submission. Every change of
//! the submit control is also published on a watch channel so a renderer can follow
//! the control while a request is in flight.

use crate::core::rules::{validate_confirm, validate_form_field};
use crate::domain::model::{Field, SignupForm};
use crate::domain::ports::SignupGateway;
use tokio::sync::watch;

pub const SUBMIT_LABEL: &str = "Create account";
pub const LOADING_LABEL: &str = "Submitting...";
pub const FIX_ERRORS_MESSAGE: &str = "Please fix errors before submitting.";
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Try later.";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Account created successfully.";

/// One error slot per field. Slots are written explicitly, never derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    slots: [Option<&'static str>; 8],
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.slots[field.index()]
    }

    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        self.slots[field.index()] = error;
    }

    pub fn clear_all(&mut self) {
        self.slots = [None; 8];
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|msg| (field, msg)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: &'static str,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            disabled: false,
            label: SUBMIT_LABEL,
        }
    }
}

impl SubmitControl {
    pub fn set_loading(&mut self, loading: bool) {
        self.disabled = loading;
        self.label = if loading { LOADING_LABEL } else { SUBMIT_LABEL };
    }
}

fn publish_loading(
    control: &mut SubmitControl,
    changes: &watch::Sender<SubmitControl>,
    loading: bool,
) {
    control.set_loading(loading);
    changes.send_replace(control.clone());
}

/// Holds the submit control in its loading state until dropped.
pub struct LoadingGuard<'a> {
    control: &'a mut SubmitControl,
    changes: &'a watch::Sender<SubmitControl>,
}

impl<'a> LoadingGuard<'a> {
    pub fn acquire(
        control: &'a mut SubmitControl,
        changes: &'a watch::Sender<SubmitControl>,
    ) -> Self {
        publish_loading(control, changes, true);
        Self { control, changes }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        publish_loading(self.control, self.changes, false);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: SignupForm,
    pub errors: FieldErrors,
    pub status: Option<StatusMessage>,
    pub submit: SubmitControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Invalid,
    /// A submission is already in flight.
    Busy,
    Created(String),
    Failed,
}

/// Input events the form reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A text-like field's value changed.
    Input(Field, String),
    /// The terms checkbox was toggled.
    Toggle(bool),
}

pub struct FormController<G: SignupGateway> {
    state: FormState,
    gateway: G,
    control_changes: watch::Sender<SubmitControl>,
}

impl<G: SignupGateway> FormController<G> {
    pub fn new(gateway: G) -> Self {
        let (control_changes, _) = watch::channel(SubmitControl::default());
        Self {
            state: FormState::default(),
            gateway,
            control_changes,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Follows the submit control, including the loading state held during `submit`.
    pub fn subscribe_control(&self) -> watch::Receiver<SubmitControl> {
        self.control_changes.subscribe()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::Input(field, value) if !field.is_checkbox() => self.input(field, value),
            FormEvent::Input(field, value) => {
                tracing::warn!("Ignoring text '{}' for checkbox field '{}'", value, field);
            }
            FormEvent::Toggle(checked) => self.toggle_terms(checked),
        }
    }

    /// Value-change event of a text field.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        match self.state.values.text_mut(field) {
            Some(slot) => *slot = value.into(),
            None => {
                tracing::warn!("Ignoring text input for checkbox field '{}'", field);
                return;
            }
        }
        self.validate_field(field);
    }

    /// Change event of the terms checkbox.
    pub fn toggle_terms(&mut self, checked: bool) {
        self.state.values.terms = checked;
        self.validate_field(Field::Terms);
    }

    pub fn validate_field(&mut self, field: Field) {
        let error = validate_form_field(&self.state.values, field);
        self.state.errors.set(field, error);

        // a confirmation that matched the old password must not stay valid
        if field == Field::Password && !self.state.values.confirm.is_empty() {
            let confirm = validate_confirm(&self.state.values.password, &self.state.values.confirm);
            self.state.errors.set(Field::Confirm, confirm);
        }

        tracing::debug!("Validated '{}': {}", field, error.unwrap_or("ok"));
    }

    /// Clears every slot and re-validates the whole form. True iff nothing failed.
    pub fn is_form_valid(&mut self) -> bool {
        self.state.errors.clear_all();
        let mut ok = true;
        for field in Field::ALL {
            if let Some(message) = validate_form_field(&self.state.values, field) {
                ok = false;
                self.state.errors.set(field, Some(message));
            }
        }
        ok
    }

    pub fn set_loading(&mut self, loading: bool) {
        publish_loading(&mut self.state.submit, &self.control_changes, loading);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.submit.disabled {
            tracing::debug!("Submit ignored while a request is in flight");
            return SubmitOutcome::Busy;
        }

        self.state.status = None;
        if !self.is_form_valid() {
            tracing::info!(
                "Form has {} invalid field(s), not submitting",
                self.state.errors.iter().count()
            );
            self.state.status = Some(StatusMessage::error(FIX_ERRORS_MESSAGE));
            return SubmitOutcome::Invalid;
        }

        let payload = self.state.values.payload();
        let _loading = LoadingGuard::acquire(&mut self.state.submit, &self.control_changes);

        match self.gateway.submit(&payload).await {
            Ok(ack) => {
                let msg = if ack.msg.is_empty() {
                    DEFAULT_SUCCESS_MESSAGE.to_string()
                } else {
                    ack.msg
                };
                tracing::info!("Signup accepted for '{}'", payload.username);
                self.state.values = SignupForm::default();
                self.state.errors.clear_all();
                self.state.status = Some(StatusMessage::success(msg.clone()));
                SubmitOutcome::Created(msg)
            }
            Err(e) => {
                tracing::error!("Signup submission failed: {}", e);
                self.state.status = Some(StatusMessage::error(SERVER_ERROR_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }
}
