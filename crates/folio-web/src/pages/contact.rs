use folio_core::config::{EmailJsConfig, StarfieldConfig};
use folio_core::contact::deliver;
use folio_core::content::{CONTACT_DETAILS, ContactKind};
use folio_core::reveal::RevealTiming;
use folio_core::{ContactForm, EmailJsMailer, Field, SubmitStatus, Theme};
use leptos::ev::{Event, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{StarCanvas, now, use_mounted, use_reveal};

fn icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "fas fa-envelope",
        ContactKind::Instagram => "fab fa-instagram",
        ContactKind::Phone => "fas fa-phone",
        ContactKind::Location => "fas fa-location-dot",
    }
}

fn status_color(theme: &Theme, status: SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Error => theme.colors.error,
        SubmitStatus::Success | SubmitStatus::Idle => theme.colors.success,
    }
}

/// Hide the status message once its window has passed. Timers may fire a
/// little early against `performance.now()`, so this re-arms for whatever
/// time is left until `tick` clears it.
fn expire_status(form: RwSignal<ContactForm>) {
    let Some(Some(remaining)) = form.try_with(|f| f.status_remaining(now())) else {
        return;
    };
    set_timeout(
        move || {
            if form.try_update(|f| f.tick(now())) == Some(false) {
                expire_status(form);
            }
        },
        remaining,
    );
}

/// Send `form`'s payload and record the outcome once the relay answers.
fn submit(form: RwSignal<ContactForm>, config: EmailJsConfig) {
    let payload = match form.try_update(ContactForm::begin_submit) {
        Some(Ok(payload)) => payload,
        Some(Err(rejected)) => {
            log::debug!("contact form not sent: {rejected}");
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let delivered = match EmailJsMailer::new(config) {
            Ok(mailer) => deliver(&mailer, &payload).await,
            Err(err) => {
                log::error!("{err:#}");
                false
            }
        };

        // The page may have been left while the request was out.
        if form.try_update(|f| f.finish_submit(delivered, now())) == Some(true) {
            expire_status(form);
        }
    });
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let on_input = move |ev: Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
    };

    let control = match field {
        Field::Message => view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="5"
                required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any(),
        Field::Email => view! {
            <input
                type="email"
                id=field.name()
                name=field.name()
                required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        Field::Name => view! {
            <input
                type="text"
                id=field.name()
                name=field.name()
                required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{field.label()}</label>
            {control}
        </div>
    }
}

#[component]
pub fn ContactPage(theme: Theme, stars: StarfieldConfig, emailjs: EmailJsConfig) -> impl IntoView {
    let mounted = use_mounted();
    let section = NodeRef::<html::Div>::new();
    let revealed = use_reveal(section);
    let item = move |index: usize| move || RevealTiming::CONTACT.child_style(index, revealed.get());

    let form = RwSignal::new(ContactForm::new());
    let emailjs = StoredValue::new(emailjs);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit(form, emailjs.get_value());
    };

    let details = CONTACT_DETAILS
        .iter()
        .map(|detail| {
            let text = match detail.href {
                Some(href) => view! {
                    <a href=href target="_blank" rel="noopener noreferrer">{detail.text}</a>
                }
                .into_any(),
                None => view! { <span>{detail.text}</span> }.into_any(),
            };
            view! {
                <div class="contact-item">
                    <i class=icon(detail.kind)></i>
                    {text}
                </div>
            }
        })
        .collect_view();

    let status = move || {
        let status = form.with(ContactForm::status);
        status.message().map(|message| {
            view! {
                <p
                    class="submit-status"
                    role="status"
                    style=format!("color: {};", status_color(&theme, status))
                >
                    {message}
                </p>
            }
        })
    };

    view! {
        <section class="page" id="contact">
            <StarCanvas theme stars/>
            <div class="content">
                <h2
                    class="section-title"
                    style=move || RevealTiming::TITLE.child_style(0, mounted.get())
                >
                    "Get In "<span>"Touch"</span>
                </h2>

                <div class="contact-content" node_ref=section>
                    <div class="contact-info" style=item(0)>
                        <h3 class="contact-heading">"Let's Connect"</h3>
                        <p class="contact-text">
                            "Feel free to reach out if you're looking for a developer, have a question, or just want to connect."
                        </p>
                        <div class="contact-details">{details}</div>
                    </div>

                    <form class="contact-form" style=item(1) on:submit=on_submit>
                        {Field::ALL
                            .into_iter()
                            .map(|field| view! { <FormField form field/> })
                            .collect_view()}
                        <button
                            type="submit"
                            class="submit-button"
                            disabled=move || form.with(ContactForm::is_submitting)
                        >
                            {move || form.with(ContactForm::submit_label)}
                        </button>
                        {status}
                    </form>
                </div>
            </div>
        </section>
    }
}
