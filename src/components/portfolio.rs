//! Main portfolio component.
//!
//! Owns the loading timer and switches between the loading screen, the hero,
//! and the main body according to the [`ViewController`] in [`AppContext`].

use folio_core::{SectionKind, ViewController, ViewState, compose_body};
use gloo_timers::callback::Timeout;
use leptos::{ev, prelude::*};

use super::contact::Contact;
use super::hero::Hero;
use super::loading::LoadingScreen;
use super::projects::Projects;
use super::skills::Skills;
use super::story::Story;
use crate::app::AppContext;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/portfolio.module.css");

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Schedule the `Loading -> Hero` transition.
///
/// The timeout is dropped (which cancels it) and the controller torn down
/// when the component is cleaned up, so a late tick never reaches a
/// disposed view.
fn setup_loading_timer(view: RwSignal<ViewController>) {
    let delay = view.with_untracked(|c| c.loading_delay());
    let delay_ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

    let timeout = Timeout::new(delay_ms, move || {
        view.try_update(|c| c.on_loading_elapsed());
    });
    let pending = StoredValue::new_local(Some(timeout));

    on_cleanup(move || {
        view.try_update_untracked(|c| c.teardown());
        let _ = pending.try_update_value(|t| t.take().map(Timeout::cancel));
    });
}

/// Track the scroll position for the progress bar.
fn setup_scroll_progress(progress: RwSignal<f64>) {
    let handle = window_event_listener(ev::scroll, move |_| {
        progress.set(dom::scroll_progress());
    });
    on_cleanup(move || handle.remove());
}

// ============================================================================
// Portfolio Component
// ============================================================================

/// Top-level page component.
///
/// - `Loading`: loading screen until the configured delay elapses
/// - `Hero`: landing screen; its button enters the portfolio
/// - `Entered`: main body sections, each gated by its content, plus a
///   scroll progress bar
#[component]
pub fn Portfolio() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let view = ctx.view;

    setup_loading_timer(view);

    let progress = RwSignal::new(0.0_f64);
    setup_scroll_progress(progress);

    let state = Memo::new(move |_| view.with(|c| c.state()));
    let body = ctx.with_content(compose_body);

    // Start the main body at the top of the page
    Effect::new(move || {
        if state.get().is_entered() {
            dom::scroll_to_top();
        }
    });

    let page_class = move || {
        if ctx.reduced_motion.get() {
            format!("{} {}", css::page, css::still)
        } else {
            css::page.to_string()
        }
    };

    view! {
        <div class=page_class>
            {move || match state.get() {
                ViewState::Loading => view! { <LoadingScreen /> }.into_any(),
                ViewState::Hero => view! { <Hero /> }.into_any(),
                ViewState::Entered => {
                    let sections = body
                        .iter()
                        .map(|kind| section_view(*kind))
                        .collect_view();
                    view! {
                        <div
                            class=css::progress
                            style:transform=move || format!("scaleX({})", progress.get())
                        ></div>
                        <main class=css::main>{sections}</main>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn section_view(kind: SectionKind) -> AnyView {
    match kind {
        SectionKind::Story => view! { <Story /> }.into_any(),
        SectionKind::Projects => view! { <Projects /> }.into_any(),
        SectionKind::Skills => view! { <Skills /> }.into_any(),
        SectionKind::Contact => view! { <Contact /> }.into_any(),
    }
}
