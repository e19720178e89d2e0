use folio_core::config::{ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID, StarfieldConfig};
use folio_core::{SiteConfig, Theme};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Navbar, StarCanvas};
use crate::pages::{AboutPage, ContactPage, HomePage, ProjectsPage};
use crate::styles::global_css;

const SITE_TOML: &str = include_str!("../site.toml");

/// EmailJS identifiers baked in from the build environment.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_SERVICE_ID => option_env!("EMAILJS_SERVICE_ID"),
        ENV_TEMPLATE_ID => option_env!("EMAILJS_TEMPLATE_ID"),
        ENV_PUBLIC_KEY => option_env!("EMAILJS_PUBLIC_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

fn site_config() -> SiteConfig {
    SiteConfig::load(SITE_TOML, build_env).unwrap_or_else(|err| {
        log::error!("{err:#}");
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = Theme::default();
    let config = site_config();
    let stars = config.starfield;
    let emailjs = config.emailjs;

    let home_stars = stars.clone();
    let about_stars = stars.clone();
    let projects_stars = stars.clone();
    let contact_stars = stars;

    view! {
        <Title text="Boppanapally Shekhar | Portfolio"/>
        <Style>{global_css(&theme)}</Style>

        <Router>
            <Navbar/>
            <main>
                // Paths mirror `Route::path`; nav highlighting compares against it.
                <Routes fallback=move || view! { <NotFound theme/> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <HomePage theme stars=home_stars.clone()/> }
                    />
                    <Route
                        path=path!("/about")
                        view=move || view! { <AboutPage theme stars=about_stars.clone()/> }
                    />
                    <Route
                        path=path!("/projects")
                        view=move || view! { <ProjectsPage theme stars=projects_stars.clone()/> }
                    />
                    <Route
                        path=path!("/contact")
                        view=move || {
                            view! {
                                <ContactPage
                                    theme
                                    stars=contact_stars.clone()
                                    emailjs=emailjs.clone()
                                />
                            }
                        }
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn NotFound(theme: Theme) -> impl IntoView {
    view! {
        <section class="page">
            <StarCanvas theme stars=StarfieldConfig::default()/>
            <div class="content not-found">
                <h2 class="section-title">"Page "<span>"not found"</span></h2>
                <a href="/" class="button button-primary">"Back home"</a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use folio_core::Route;

    #[test]
    fn test_router_paths_match_routes() {
        // Same literals as the `path!` entries in `App`.
        let router_table = [
            ("/", Route::Home),
            ("/about", Route::About),
            ("/projects", Route::Projects),
            ("/contact", Route::Contact),
        ];
        assert_eq!(router_table.len(), Route::ALL.len());
        for (path, route) in router_table {
            assert_eq!(route.path(), path);
            assert_eq!(Route::from_path(path), Some(route));
        }
    }
}
