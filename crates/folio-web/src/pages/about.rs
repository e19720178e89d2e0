use folio_core::Theme;
use folio_core::config::StarfieldConfig;
use folio_core::content::{PROFILE, SKILLS};
use folio_core::reveal::RevealTiming;
use leptos::html;
use leptos::prelude::*;

use crate::components::{StarCanvas, use_mounted, use_reveal};

/// The about heading settles faster than the other pages' titles.
const ABOUT_TITLE: RevealTiming = RevealTiming {
    duration: 0.3,
    offset_y: -10.0,
    ..RevealTiming::TITLE
};

#[component]
pub fn AboutPage(theme: Theme, stars: StarfieldConfig) -> impl IntoView {
    let mounted = use_mounted();
    let section = NodeRef::<html::Div>::new();
    let revealed = use_reveal(section);
    let item = move |index: usize| move || RevealTiming::ABOUT.child_style(index, revealed.get());

    let paragraphs = PROFILE
        .about
        .iter()
        .enumerate()
        .map(|(i, text)| view! { <p class="about-text" style=item(i + 1)>{*text}</p> })
        .collect_view();
    let skills_index = PROFILE.about.len() + 1;

    view! {
        <section class="page" id="about">
            <StarCanvas theme stars/>
            <div class="content">
                <h2 class="section-title" style=move || ABOUT_TITLE.child_style(0, mounted.get())>
                    "About "<span>"Me"</span>
                </h2>

                <div class="about-content" node_ref=section>
                    <div class="profile">
                        <div class="profile-photo" style=item(0)>
                            <img src=PROFILE.photo_url alt=PROFILE.name/>
                        </div>
                    </div>

                    <div class="info">
                        {paragraphs}
                        <div class="skills" style=item(skills_index)>
                            <h3 class="skills-title">"My Skills"</h3>
                            <div class="skills-grid">
                                {SKILLS
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="skill">
                                                <img src=skill.icon alt=skill.name loading="lazy"/>
                                                <span>{skill.name}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
