use folio_core::Theme;
use folio_core::config::StarfieldConfig;
use folio_core::content::PROFILE;
use folio_core::reveal::FadeIn;
use folio_core::typewriter::Typewriter;
use leptos::prelude::*;
use std::time::Duration;

use crate::components::{StarCanvas, now, use_mounted};

/// How often the typed headline is resampled.
const TYPE_TICK: Duration = Duration::from_millis(30);

#[component]
pub fn HomePage(theme: Theme, stars: StarfieldConfig) -> impl IntoView {
    let mounted = use_mounted();
    let fade = move |delay: f64| move || FadeIn::up(delay).style(mounted.get());

    let (headline, set_headline) = signal(String::new());
    let typewriter = Typewriter::hero(PROFILE.first_name);
    let started = now();
    match set_interval_with_handle(
        move || {
            let elapsed = now().saturating_sub(started);
            set_headline.try_set(typewriter.text_at(elapsed));
        },
        TYPE_TICK,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => {
            log::warn!("typewriter disabled: {err:?}");
            set_headline.set(PROFILE.first_name.to_string());
        }
    }

    view! {
        <section class="page">
            <StarCanvas theme stars/>
            <div class="content">
                <div class="hero">
                    <p class="hero-greeting" style=fade(0.2)>{PROFILE.greeting}</p>
                    <h1 class="hero-title" style=fade(0.3)>
                        {headline}<span class="cursor">"|"</span>
                    </h1>
                    <h2 class="hero-role" style=fade(0.35)>{PROFILE.role}</h2>
                    <p class="hero-summary" style=fade(0.4)>{PROFILE.summary}</p>
                    <div class="button-group" style=fade(0.5)>
                        <a href="/projects" class="button button-primary">"View Projects"</a>
                        <a href="/contact" class="button button-secondary">"Get In Touch"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
