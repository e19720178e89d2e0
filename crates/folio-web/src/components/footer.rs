use chrono::Datelike;
use folio_core::content::{PROFILE, SOCIAL_LINKS, copyright};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-logo">{PROFILE.name}<span>"."</span></div>
                <div class="social-links">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.url
                                    class="social-icon"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    title=link.label
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="copyright">{copyright(year)}</p>
            </div>
        </footer>
    }
}
