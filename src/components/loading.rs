//! Loading screen shown before the hero.

use leptos::prelude::*;

use crate::config::loading;

stylance::import_crate_style!(css, "src/components/loading.module.css");

/// Full-screen intro: the title wipes in, a rule grows under it, then the
/// tagline fades in. Purely visual; the transition out is driven by the
/// view controller.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class=css::screen role="status" aria-label="Loading">
            <div class=css::content>
                <h1 class=css::title>
                    <span class=css::reveal>{loading::TITLE}</span>
                </h1>
                <div class=css::rule></div>
                <p class=css::tagline>{loading::TAGLINE}</p>
            </div>
        </div>
    }
}
