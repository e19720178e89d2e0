use anyhow::{Result, bail};
use async_trait::async_trait;
use folio_core::contact::{
    ERROR_MESSAGE, STATUS_DISPLAY, SUCCESS_MESSAGE, SubmitRejected, deliver,
};
use folio_core::{ContactForm, ContactPayload, Field, Mailer, SubmitStatus};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::sync::Mutex;
use std::time::Duration;

/// Mailer that answers from a scripted list of outcomes.
struct ScriptedMailer {
    outcomes: Mutex<Vec<bool>>,
    sent: Mutex<Vec<ContactPayload>>,
}

impl ScriptedMailer {
    fn new(outcomes: &[bool]) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.to_vec()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<ContactPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Mailer for ScriptedMailer {
    async fn send(&self, payload: &ContactPayload) -> Result<()> {
        self.sent.lock().unwrap().push(payload.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            bail!("No more scripted outcomes");
        }
        if outcomes.remove(0) {
            Ok(())
        } else {
            bail!("scripted rejection")
        }
    }
}

/// Simulated monotonic clock.
struct FakeClock(Cell<Duration>);

impl FakeClock {
    fn new() -> Self {
        Self(Cell::new(Duration::ZERO))
    }

    fn now(&self) -> Duration {
        self.0.get()
    }

    fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

fn alice_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set(Field::Name, "Alice");
    form.set(Field::Email, "a@b.com");
    form.set(Field::Message, "hi");
    form
}

#[tokio::test]
async fn test_success_clears_form_and_message_expires() {
    let mailer = ScriptedMailer::new(&[true]);
    let clock = FakeClock::new();
    let mut form = alice_form();

    let status = form.submit(&mailer, || clock.now()).await.unwrap();

    assert_eq!(status, SubmitStatus::Success);
    assert_eq!(status.message(), Some(SUCCESS_MESSAGE));
    for field in Field::ALL {
        assert_eq!(form.value(field), "");
    }
    assert_eq!(
        mailer.sent(),
        vec![ContactPayload {
            name: "Alice".into(),
            email: "a@b.com".into(),
            message: "hi".into(),
        }]
    );

    clock.advance(Duration::from_millis(4999));
    assert!(!form.tick(clock.now()));
    assert_eq!(form.status(), SubmitStatus::Success);

    clock.advance(Duration::from_millis(1));
    assert!(form.tick(clock.now()));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(form.status().message(), None);
}

#[tokio::test]
async fn test_failure_keeps_fields_and_message_expires() {
    let mailer = ScriptedMailer::new(&[false]);
    let clock = FakeClock::new();
    let mut form = alice_form();

    let status = form.submit(&mailer, || clock.now()).await.unwrap();

    assert_eq!(status, SubmitStatus::Error);
    assert_eq!(status.message(), Some(ERROR_MESSAGE));
    assert_eq!(form.value(Field::Name), "Alice");
    assert_eq!(form.value(Field::Email), "a@b.com");
    assert_eq!(form.value(Field::Message), "hi");

    clock.advance(STATUS_DISPLAY);
    assert!(form.tick(clock.now()));
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(form.value(Field::Name), "Alice");
}

#[tokio::test]
async fn test_control_disabled_until_mailer_answers() {
    let mailer = ScriptedMailer::new(&[false]);
    let mut form = alice_form();
    let mut enabled_transitions = 0;

    let payload = form.begin_submit().unwrap();
    assert!(form.is_submitting());
    assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

    let delivered = mailer.send(&payload).await.is_ok();
    assert!(form.is_submitting());

    if form.finish_submit(delivered, Duration::ZERO) {
        enabled_transitions += 1;
    }
    // A late duplicate completion must not re-enable twice.
    if form.finish_submit(delivered, Duration::ZERO) {
        enabled_transitions += 1;
    }

    assert_eq!(enabled_transitions, 1);
    assert!(!form.is_submitting());
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn test_split_submit_matches_one_shot_submit() {
    // The browser drives begin/deliver/finish separately around an await.
    let mailer = ScriptedMailer::new(&[false, true]);
    let clock = FakeClock::new();
    let mut form = alice_form();

    let payload = form.begin_submit().unwrap();
    let delivered = deliver(&mailer, &payload).await;
    assert!(!delivered);
    assert!(form.finish_submit(delivered, clock.now()));
    assert_eq!(form.status(), SubmitStatus::Error);
    assert_eq!(form.value(Field::Name), "Alice");

    let payload = form.begin_submit().unwrap();
    assert!(deliver(&mailer, &payload).await);
    assert!(form.finish_submit(true, clock.now()));
    assert_eq!(form.status(), SubmitStatus::Success);
    assert_eq!(form.value(Field::Message), "");
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn test_expiry_timer_rearms_when_it_fires_early() {
    let mailer = ScriptedMailer::new(&[true]);
    let clock = FakeClock::new();
    let mut form = alice_form();
    form.submit(&mailer, || clock.now()).await.unwrap();

    // Emulate a browser timer that keeps re-arming for the time left.
    let mut wait = form.status_remaining(clock.now()).unwrap();
    let mut fired = 0;
    loop {
        fired += 1;
        let jitter = Duration::from_micros(100);
        clock.advance(wait.saturating_sub(jitter).max(jitter));
        if form.tick(clock.now()) {
            break;
        }
        wait = form.status_remaining(clock.now()).unwrap();
        assert!(fired < 5, "message never hid");
    }

    assert_eq!(fired, 2);
    assert_eq!(form.status(), SubmitStatus::Idle);
    assert_eq!(form.status_remaining(clock.now()), None);
}

#[tokio::test]
async fn test_retry_after_error_uses_kept_fields() {
    let mailer = ScriptedMailer::new(&[false, true]);
    let clock = FakeClock::new();
    let mut form = alice_form();

    assert_eq!(
        form.submit(&mailer, || clock.now()).await.unwrap(),
        SubmitStatus::Error
    );
    clock.advance(Duration::from_secs(1));
    assert_eq!(
        form.submit(&mailer, || clock.now()).await.unwrap(),
        SubmitStatus::Success
    );

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[tokio::test]
async fn test_empty_form_never_reaches_mailer() {
    let mailer = ScriptedMailer::new(&[true]);
    let mut form = ContactForm::new();
    form.set(Field::Name, "Alice");

    let err = form.submit(&mailer, || Duration::ZERO).await.unwrap_err();

    assert_eq!(err, SubmitRejected::MissingField(Field::Email));
    assert!(mailer.sent().is_empty());
    assert!(!form.is_submitting());
    assert_eq!(form.status(), SubmitStatus::Idle);
}
