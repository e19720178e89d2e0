use folio_core::Theme;
use folio_core::config::StarfieldConfig;
use folio_core::content::{EXPERIENCES, PROJECTS};
use folio_core::reveal::RevealTiming;
use leptos::html;
use leptos::prelude::*;

use crate::components::{StarCanvas, use_mounted, use_reveal};

#[component]
pub fn ProjectsPage(theme: Theme, stars: StarfieldConfig) -> impl IntoView {
    let mounted = use_mounted();
    // One observer on the experience block drives the whole page.
    let section = NodeRef::<html::Div>::new();
    let revealed = use_reveal(section);
    let item = move |index: usize| move || RevealTiming::PROJECTS.child_style(index, revealed.get());

    let experiences = EXPERIENCES
        .iter()
        .enumerate()
        .map(|(i, exp)| {
            view! {
                <div class="experience" style=item(i + 1)>
                    <div class="experience-header">
                        <div>
                            <h3 class="company">{exp.company}</h3>
                            <h4 class="position">{exp.position}</h4>
                        </div>
                        <span class="duration">{exp.duration}</span>
                    </div>
                    <ul class="responsibilities">
                        {exp.responsibilities.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    let projects_heading = EXPERIENCES.len() + 1;
    let projects = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <div class="project-card card-hover" style=item(projects_heading + 1 + i)>
                    <div class="project-image">
                        <img src=project.image alt=project.title loading="lazy"/>
                    </div>
                    <div class="project-body">
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-description">{project.description}</p>
                        <div class="tech-stack">
                            {project
                                .tech
                                .iter()
                                .map(|tech| view! { <span class="tech-badge">{*tech}</span> })
                                .collect_view()}
                        </div>
                        <div class="project-links">
                            <a
                                href=project.demo
                                class="project-link"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <i class="fas fa-external-link-alt"></i>
                                " Live Demo"
                            </a>
                            <a
                                href=project.code
                                class="project-link"
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <i class="fab fa-github"></i>
                                " View Code"
                            </a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="page" id="projects">
            <StarCanvas theme stars/>
            <div class="content">
                <h2
                    class="section-title"
                    style=move || RevealTiming::TITLE.child_style(0, mounted.get())
                >
                    "My "<span>"Work"</span>
                </h2>

                <div class="experience-section" node_ref=section>
                    <h3 class="subsection-title" style=item(0)>
                        "Work "<span>"Experience"</span>
                    </h3>
                    {experiences}
                </div>

                <h3 class="subsection-title" style=item(projects_heading)>
                    "Personal "<span>"Projects"</span>
                </h3>
                <div class="projects-grid">{projects}</div>
            </div>
        </section>
    }
}
