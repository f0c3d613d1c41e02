//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use folio_core::{ContentRegistry, ViewController};
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::Portfolio;
use crate::config::{CONTENT_TOML, REDUCED_MOTION_QUERY};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Content**: Parsed page content, read-only after start-up
/// - **View**: Loading / Hero / Entered state machine
/// - **Motion**: Whether the visitor asked for reduced motion
///
/// # Note
///
/// This struct is `Copy` because all fields are arena handles, which are
/// cheap to copy.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Static page content.
    pub content: StoredValue<ContentRegistry>,

    /// Top-level view state.
    pub view: RwSignal<ViewController>,

    /// `prefers-reduced-motion: reduce` is active.
    pub reduced_motion: Signal<bool>,
}

impl AppContext {
    /// Creates the context for a freshly parsed content registry.
    ///
    /// The view controller starts in `Loading`; its delay and hero gate come
    /// from the registry.
    pub fn new(content: ContentRegistry) -> Self {
        let view = ViewController::from_registry(&content);
        Self {
            content: StoredValue::new(content),
            view: RwSignal::new(view),
            reduced_motion: use_media_query(REDUCED_MOTION_QUERY),
        }
    }

    /// Runs `f` against the content registry.
    pub fn with_content<T>(&self, f: impl FnOnce(&ContentRegistry) -> T) -> T {
        self.content.with_value(f)
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Parses the bundled content and provides the global AppContext
/// - Wraps the app in an ErrorBoundary; invalid content lands in its fallback
/// - Renders the main Portfolio component
#[component]
pub fn App() -> impl IntoView {
    let portfolio = ContentRegistry::from_toml_str(CONTENT_TOML).map(|content| {
        provide_context(AppContext::new(content));
        view! { <Portfolio /> }
    });

    if let Err(e) = &portfolio {
        tracing::error!(error = %e, "failed to load content");
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #09090b;
                    color: #e4e4e7;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #fbbf24; margin-bottom: 1rem; font-weight: 300;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a1a1aa; margin-bottom: 2rem;">
                            "The page could not be loaded. Please try reloading."
                        </p>
                        <details style="
                            text-align: left;
                            background: #18181b;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #71717a;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: transparent;
                                color: #fbbf24;
                                border: 1px solid #fbbf24;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                letter-spacing: 0.2em;
                                font-size: 1rem;
                            "
                        >
                            "RELOAD"
                        </button>
                    </div>
                </div>
            }
        >
            {portfolio}
        </ErrorBoundary>
    }
}
