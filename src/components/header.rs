//! Section title block shared by the main body sections.

use folio_core::SectionHeader;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Title and subtitle above a section. Renders nothing when both are blank.
#[component]
pub fn SectionTitle(title: Option<String>, subtitle: Option<String>) -> impl IntoView {
    let visible = title.is_some() || subtitle.is_some();

    visible.then(|| {
        view! {
            <header class=css::header>
                {title.map(|t| view! { <h2 class=css::title>{t}</h2> })}
                {subtitle.map(|s| view! { <p class=css::subtitle>{s}</p> })}
            </header>
        }
    })
}

/// Owned copy of a [`SectionHeader`] for passing into [`SectionTitle`].
pub fn owned(header: SectionHeader<'_>) -> (Option<String>, Option<String>) {
    (
        header.title.map(str::to_string),
        header.subtitle.map(str::to_string),
    )
}
