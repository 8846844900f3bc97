//! Simulated contact form submission.
//!
//! Submission never touches a network. A submit validates the fields,
//! enters `Submitting`, waits out a configured delay on the frame clock,
//! then resolves to the injected outcome: success clears the fields,
//! failure preserves them. Either way a toast notification lands on a
//! drainable queue.

use std::collections::VecDeque;

use thiserror::Error;

/// Where a submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Done,
    Error,
}

/// Validation failure for a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Resolution injected into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

/// The three text inputs of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl Notification {
    fn success(title: &str, body: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn error(title: &str, body: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Contact form state machine.
#[derive(Debug)]
pub struct ContactForm {
    fields: FormFields,
    state: SubmitState,
    delay_ms: f32,
    elapsed_ms: f32,
    outcome: SubmitOutcome,
    notifications: VecDeque<Notification>,
}

impl ContactForm {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            fields: FormFields::default(),
            state: SubmitState::Idle,
            delay_ms,
            elapsed_ms: 0.0,
            outcome: SubmitOutcome::Success,
            notifications: VecDeque::new(),
        }
    }

    /// Choose how the next submissions resolve.
    pub fn set_outcome(&mut self, outcome: SubmitOutcome) {
        self.outcome = outcome;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.fields.message = value.into();
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Start a submission. A submit while one is in flight is ignored.
    /// Validation failures notify and never enter `Submitting`.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.state == SubmitState::Submitting {
            return Ok(());
        }

        if let Err(error) = self.validate() {
            self.notifications
                .push_back(Notification::error("Error", &error.to_string()));
            return Err(error);
        }

        self.state = SubmitState::Submitting;
        self.elapsed_ms = 0.0;
        Ok(())
    }

    /// Advance the simulated delay clock.
    pub fn update(&mut self, delta_ms: f32) {
        if self.state != SubmitState::Submitting {
            return;
        }

        self.elapsed_ms += delta_ms;
        if self.elapsed_ms < self.delay_ms {
            return;
        }

        match self.outcome {
            SubmitOutcome::Success => {
                self.state = SubmitState::Done;
                self.fields = FormFields::default();
                self.notifications.push_back(Notification::success(
                    "Message Sent!",
                    "Thank you for reaching out. I'll get back to you soon.",
                ));
            }
            SubmitOutcome::Failure => {
                self.state = SubmitState::Error;
                self.notifications.push_back(Notification::error(
                    "Error",
                    "Failed to send message. Please try again.",
                ));
            }
        }
    }

    /// Take the queued toasts, oldest first.
    pub fn drain_notifications(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.notifications.drain(..)
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.fields.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.fields.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if self.fields.message.trim().is_empty() {
            return Err(FormError::MissingField("message"));
        }
        Ok(())
    }
}
