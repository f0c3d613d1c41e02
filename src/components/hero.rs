//! Hero landing screen.

use folio_core::Section;
use folio_core::content::non_blank;
use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/hero.module.css");

/// Landing screen with the name, tagline, and the enter button.
///
/// Only mounted while the view is `Hero`, which the controller reaches only
/// when the hero section is eligible.
#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (title, subtitle, description, cta) = ctx.with_content(|c| {
        let Some(hero) = c.hero.as_ref() else {
            return (None, None, None, String::new());
        };
        let header = hero.header();
        (
            header.title.map(str::to_string),
            header.subtitle.map(str::to_string),
            non_blank(&hero.description).map(str::to_string),
            hero.cta_label.clone(),
        )
    });

    let on_enter = move |_: leptos::ev::MouseEvent| {
        ctx.view.update(|c| {
            c.enter();
        });
    };

    view! {
        <section class=css::hero>
            <div class=css::backdrop aria-hidden="true"></div>
            <div class=css::content>
                {title.map(|t| view! { <h1 class=css::title>{t}</h1> })}
                {subtitle.map(|s| view! { <p class=css::subtitle>{s}</p> })}
                {description.map(|d| view! { <p class=css::description>{d}</p> })}
                <button class=css::enter on:click=on_enter>
                    <span class=css::enterLabel>{cta}</span>
                </button>
            </div>
            <div class=css::cornerTopLeft aria-hidden="true"></div>
            <div class=css::cornerTopRight aria-hidden="true"></div>
            <div class=css::cornerBottomLeft aria-hidden="true"></div>
            <div class=css::cornerBottomRight aria-hidden="true"></div>
        </section>
    }
}
