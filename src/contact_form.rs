//! Contact form model.
//!
//! The form is a small state machine driven through `use_reducer`:
//! `Idle -> Submitting -> Submitted -> Idle`, with `Failed` as the branch
//! taken when the submitter reports an error. Fields are cleared on the
//! `Submitting -> Submitted` edge only.

use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// The four values the visitor types. Serialized as the submission body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Mirrors the `required` attribute on every input.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub fields: FormState,
    pub phase: SubmissionPhase,
}

impl ContactForm {
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Idle | SubmissionPhase::Failed(_))
            && self.fields.is_complete()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Action the page schedules after entering the current phase, with its
    /// delay in ms.
    pub fn follow_up(&self) -> Option<(u32, FormAction)> {
        match self.phase {
            SubmissionPhase::Submitted => Some((config::SUCCESS_DISPLAY_MS, FormAction::Reset)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Submit,
    Succeeded,
    Failed(String),
    /// Success panel timed out.
    Reset,
    DismissError,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.fields.set(field, value);
                if matches!(next.phase, SubmissionPhase::Failed(_)) {
                    next.phase = SubmissionPhase::Idle;
                }
            }
            FormAction::Submit => {
                if !self.can_submit() {
                    return self;
                }
                next.phase = SubmissionPhase::Submitting;
            }
            FormAction::Succeeded => {
                if !self.is_submitting() {
                    return self;
                }
                next.fields = FormState::default();
                next.phase = SubmissionPhase::Submitted;
            }
            FormAction::Failed(message) => {
                if !self.is_submitting() {
                    return self;
                }
                next.phase = SubmissionPhase::Failed(message);
            }
            FormAction::Reset => {
                if self.phase != SubmissionPhase::Submitted {
                    return self;
                }
                next.phase = SubmissionPhase::Idle;
            }
            FormAction::DismissError => {
                if self.error().is_none() {
                    return self;
                }
                next.phase = SubmissionPhase::Idle;
            }
        }
        Rc::new(next)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("Could not encode your message: {0}")]
    Encode(String),
    #[error("Could not reach the server: {0}")]
    Transport(String),
    #[error("The server rejected the message (status {0}). Please try again later.")]
    Rejected(u16),
}

/// Where contact messages go.
#[derive(Debug, Clone, PartialEq)]
pub enum Submitter {
    /// Waits `delay_ms` and reports success without sending anything.
    Simulated { delay_ms: u32 },
    /// POSTs the form as JSON to the given URL.
    Endpoint(String),
}

impl Submitter {
    pub async fn submit(&self, form: &FormState) -> Result<(), SubmitError> {
        match self {
            Submitter::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            Submitter::Endpoint(url) => {
                let request = Request::post(url)
                    .json(form)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?;
                let response = request
                    .send()
                    .await
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Rejected(response.status()))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(form: Rc<ContactForm>, action: FormAction) -> Rc<ContactForm> {
        form.reduce(action)
    }

    fn filled() -> Rc<ContactForm> {
        let mut form = Rc::new(ContactForm::default());
        for (field, value) in [
            (Field::Name, "Ada"),
            (Field::Email, "ada@example.com"),
            (Field::Subject, "Demo"),
            (Field::Message, "Can we see the SDK?"),
        ] {
            form = apply(form, FormAction::Edit(field, value.to_string()));
        }
        form
    }

    #[test]
    fn full_submission_cycle() {
        let form = filled();
        assert_eq!(form.phase, SubmissionPhase::Idle);

        let form = apply(form, FormAction::Submit);
        assert_eq!(form.phase, SubmissionPhase::Submitting);
        assert_eq!(form.fields.name, "Ada", "fields survive until success");

        let form = apply(form, FormAction::Succeeded);
        assert_eq!(form.phase, SubmissionPhase::Submitted);
        assert_eq!(form.fields, FormState::default());

        let form = apply(form, FormAction::Reset);
        assert_eq!(form.phase, SubmissionPhase::Idle);
        assert_eq!(form.fields, FormState::default());
    }

    #[test]
    fn success_panel_resets_after_five_seconds() {
        let form = apply(filled(), FormAction::Submit);
        assert_eq!(form.follow_up(), None);

        let form = apply(form, FormAction::Succeeded);
        let (delay_ms, action) = form.follow_up().expect("submitted form schedules a reset");
        assert_eq!(delay_ms, 5_000);
        assert_eq!(action, FormAction::Reset);

        let form = apply(form, action);
        assert_eq!(form.phase, SubmissionPhase::Idle);
        assert_eq!(form.follow_up(), None);
    }

    #[test]
    fn idle_and_failed_forms_schedule_nothing() {
        assert_eq!(filled().follow_up(), None);
        let failed = apply(apply(filled(), FormAction::Submit), FormAction::Failed("x".into()));
        assert_eq!(failed.follow_up(), None);
    }

    #[test]
    fn submit_while_submitting_is_ignored() {
        let form = apply(filled(), FormAction::Submit);
        let again = apply(form.clone(), FormAction::Submit);
        assert!(Rc::ptr_eq(&form, &again));
    }

    #[test]
    fn incomplete_form_does_not_submit() {
        let form = apply(
            Rc::new(ContactForm::default()),
            FormAction::Edit(Field::Name, "Ada".to_string()),
        );
        let form = apply(form, FormAction::Submit);
        assert_eq!(form.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let form = apply(filled(), FormAction::Submit);
        let form = apply(form, FormAction::Failed("offline".to_string()));
        assert_eq!(form.error(), Some("offline"));
        assert_eq!(form.fields.subject, "Demo");
        assert!(form.can_submit());

        let form = apply(form, FormAction::Submit);
        assert!(form.is_submitting());
    }

    #[test]
    fn editing_or_dismissing_clears_the_error() {
        let failed = apply(apply(filled(), FormAction::Submit), FormAction::Failed("x".into()));

        let edited = apply(failed.clone(), FormAction::Edit(Field::Subject, "Hi".into()));
        assert_eq!(edited.phase, SubmissionPhase::Idle);
        assert_eq!(edited.fields.subject, "Hi");

        let dismissed = apply(failed, FormAction::DismissError);
        assert_eq!(dismissed.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn late_results_are_ignored_outside_submitting() {
        let form = filled();
        let after = apply(form.clone(), FormAction::Succeeded);
        assert!(Rc::ptr_eq(&form, &after));
        let after = apply(form.clone(), FormAction::Failed("late".into()));
        assert!(Rc::ptr_eq(&form, &after));
    }

    #[test]
    fn reset_only_leaves_submitted() {
        let submitting = apply(filled(), FormAction::Submit);
        assert!(apply(submitting, FormAction::Reset).is_submitting());
    }

    #[test]
    fn payload_has_the_four_fields() {
        let value = serde_json::to_value(&filled().fields).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Demo",
                "message": "Can we see the SDK?"
            })
        );
    }

    #[test]
    fn submit_errors_render_for_the_banner() {
        assert_eq!(
            SubmitError::Rejected(503).to_string(),
            "The server rejected the message (status 503). Please try again later."
        );
    }
}
