//! Contact form state and the submit lifecycle.
//!
//! The form owns its three fields, an in-flight flag that disables the submit
//! control, and a transient status message. Time is passed in explicitly so
//! the five second message window can be driven by a real or simulated clock.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::mailer::Mailer;
use crate::sanitize::clean_field;

/// How long a success or error message stays on screen
pub const STATUS_DISPLAY: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact me directly via email.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form control name, also used as the email template parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some(SUCCESS_MESSAGE),
            SubmitStatus::Error => Some(ERROR_MESSAGE),
        }
    }
}

/// What gets handed to the [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("a message is already being sent")]
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitting: bool,
    status: SubmitStatus,
    status_since: Option<Duration>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True while a submission is in flight; the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Start a submission: check required fields, disable the control and
    /// build the payload.
    pub fn begin_submit(&mut self) -> Result<ContactPayload, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }

        let payload = ContactPayload {
            name: clean_field(&self.name).into_owned(),
            email: clean_field(&self.email).into_owned(),
            message: clean_field(&self.message).into_owned(),
        };

        for field in Field::ALL {
            let value = match field {
                Field::Name => &payload.name,
                Field::Email => &payload.email,
                Field::Message => &payload.message,
            };
            if value.is_empty() {
                return Err(SubmitRejected::MissingField(field));
            }
        }

        self.submitting = true;
        Ok(payload)
    }

    /// Record the mailer's outcome at time `now`. Success clears the fields;
    /// failure leaves them as typed. Returns `false` if nothing was in flight.
    pub fn finish_submit(&mut self, delivered: bool, now: Duration) -> bool {
        if !self.submitting {
            return false;
        }

        self.submitting = false;
        if delivered {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.status = SubmitStatus::Success;
        } else {
            self.status = SubmitStatus::Error;
        }
        self.status_since = Some(now);
        true
    }

    /// Time left before the shown message hides, or `None` when nothing is
    /// shown. Zero once the deadline has passed.
    pub fn status_remaining(&self, now: Duration) -> Option<Duration> {
        self.status_since
            .map(|since| STATUS_DISPLAY.saturating_sub(now.saturating_sub(since)))
    }

    /// Advance the clock. Returns `true` when this call hides the message.
    pub fn tick(&mut self, now: Duration) -> bool {
        match self.status_since {
            Some(since) if now.saturating_sub(since) >= STATUS_DISPLAY => {
                self.status = SubmitStatus::Idle;
                self.status_since = None;
                true
            }
            _ => false,
        }
    }

    /// Run a whole submission against `mailer`, reading the clock once the
    /// mailer has answered.
    pub async fn submit<M, C>(&mut self, mailer: &M, clock: C) -> Result<SubmitStatus, SubmitRejected>
    where
        M: Mailer + ?Sized,
        C: Fn() -> Duration,
    {
        let payload = self.begin_submit()?;
        let delivered = deliver(mailer, &payload).await;
        self.finish_submit(delivered, clock());
        Ok(self.status)
    }
}

/// Hand `payload` to `mailer`, logging a failure. Returns whether it was
/// accepted.
pub async fn deliver<M: Mailer + ?Sized>(mailer: &M, payload: &ContactPayload) -> bool {
    match mailer.send(payload).await {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Contact submission failed: {err:#}");
            false
        }
    }
}
