//! Projects section: a grid of project cards.

use folio_core::Section;
use folio_core::content::{Project, non_blank};
use leptos::prelude::*;

use super::header::{SectionTitle, owned};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/projects.module.css");

#[component]
pub fn Projects() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (header, projects) = ctx.with_content(|c| match c.projects.as_ref() {
        Some(section) => (owned(section.header()), section.projects.clone()),
        None => ((None, None), Vec::new()),
    });
    let (title, subtitle) = header;

    view! {
        <section class=css::projects id="projects">
            <SectionTitle title=title subtitle=subtitle />
            <div class=css::grid>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let meta = project.meta_line();
    let title = non_blank(&project.title).map(str::to_string);
    let description = non_blank(&project.description).map(str::to_string);
    let image = non_blank(&project.image).map(str::to_string);
    let alt = title.clone().unwrap_or_default();

    view! {
        <article class=css::card data-project=project.id>
            <div class=css::media>
                {match image {
                    Some(src) => view! { <img class=css::image src=src alt=alt loading="lazy" /> }
                        .into_any(),
                    None => view! { <div class=css::placeholder></div> }.into_any(),
                }}
            </div>
            <div class=css::body>
                {meta.map(|m| view! { <span class=css::meta>{m}</span> })}
                {title.map(|t| view! { <h3 class=css::title>{t}</h3> })}
                {description.map(|d| view! { <p class=css::description>{d}</p> })}
            </div>
        </article>
    }
}
