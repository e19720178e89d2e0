use folio_core::{NAV_ITEMS, NavItem, NavState};
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

fn link_class(item: NavItem, pathname: &str) -> &'static str {
    if item.is_active(pathname) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Fixed top bar with the page links and the mobile menu toggle.
#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let pathname = use_location().pathname;

    let scroll = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        nav.update(|state| state.on_scroll(y));
    });
    on_cleanup(move || scroll.remove());

    // Logo, page buttons and history moves change the route without a
    // menu link click.
    Effect::new(move |_| {
        pathname.track();
        if nav.with_untracked(NavState::is_menu_open) {
            nav.update(NavState::close);
        }
    });

    let desktop_links = NAV_ITEMS
        .into_iter()
        .map(|item| {
            view! {
                <a href=item.path() class=move || pathname.with(|p| link_class(item, p))>
                    {item.title}
                </a>
            }
        })
        .collect_view();

    let mobile_links = NAV_ITEMS
        .into_iter()
        .map(|item| {
            // The router follows the href; this only closes the menu.
            let select = move |_| {
                nav.update(|state| {
                    state.select(item.route);
                });
            };
            view! {
                <a
                    href=item.path()
                    class=move || pathname.with(|p| link_class(item, p))
                    on:click=select
                >
                    {item.title}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || {
            if nav.with(NavState::is_scrolled) { "navbar scrolled" } else { "navbar" }
        }>
            <a href="/" class="logo">"B"<span>"S"</span></a>

            <div class="nav-links">{desktop_links}</div>

            <button
                class="menu-button"
                aria-label="Toggle menu"
                aria-expanded=move || nav.with(NavState::is_menu_open).to_string()
                on:click=move |_| nav.update(NavState::toggle_menu)
            >
                {move || nav.with(NavState::menu_icon)}
            </button>

            <div class=move || {
                if nav.with(NavState::is_menu_open) { "mobile-menu open" } else { "mobile-menu" }
            }>
                {mobile_links}
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Route;

    #[test]
    fn test_link_class_marks_current_route() {
        let about = NAV_ITEMS[1];
        assert_eq!(about.route, Route::About);
        assert_eq!(link_class(about, "/about"), "nav-link active");
        assert_eq!(link_class(about, "/"), "nav-link");
        assert_eq!(link_class(about, "/missing"), "nav-link");
    }
}
