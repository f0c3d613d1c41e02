//! Story section: one chapter at a time with wrap-around navigation.

use folio_core::content::{Chapter, non_blank};
use folio_core::{ChapterCursor, Section};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::header::{SectionTitle, owned};
use super::icons as ic;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/story.module.css");

/// Render-ready copy of a chapter.
#[derive(Clone, Debug, Default, PartialEq)]
struct ChapterView {
    year: Option<String>,
    title: Option<String>,
    content: Option<String>,
    image: Option<String>,
}

impl From<&Chapter> for ChapterView {
    fn from(chapter: &Chapter) -> Self {
        Self {
            year: non_blank(&chapter.year).map(str::to_string),
            title: non_blank(&chapter.title).map(str::to_string),
            content: non_blank(&chapter.content).map(str::to_string),
            image: non_blank(&chapter.image).map(str::to_string),
        }
    }
}

fn dot_class(active: bool) -> String {
    if active {
        format!("{} {}", css::dot, css::dotActive)
    } else {
        css::dot.to_string()
    }
}

#[component]
pub fn Story() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (header, chapters) = ctx.with_content(|c| match c.story.as_ref() {
        Some(story) => (
            owned(story.header()),
            story.chapters.iter().map(ChapterView::from).collect::<Vec<_>>(),
        ),
        None => ((None, None), Vec::new()),
    });
    let (title, subtitle) = header;

    let cursor = RwSignal::new(ChapterCursor::new(chapters.len()));
    let chapters = StoredValue::new(chapters);
    let current = Memo::new(move |_| {
        let index = cursor.with(|c| c.index());
        chapters.with_value(|all| all.get(index).cloned().unwrap_or_default())
    });
    let multiple = cursor.with_untracked(|c| c.len() > 1);

    let on_prev = move |_: ev::MouseEvent| {
        cursor.update(|c| {
            c.prev_chapter();
        })
    };
    let on_next = move |_: ev::MouseEvent| {
        cursor.update(|c| {
            c.next_chapter();
        })
    };

    let dots = move || {
        let (active, len) = cursor.with(|c| (c.index(), c.len()));
        (0..len)
            .map(|i| {
                view! {
                    <button
                        class=dot_class(i == active)
                        aria-label=format!("Chapter {}", i + 1)
                        on:click=move |_| {
                            cursor.update(|c| {
                                c.select(i);
                            })
                        }
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <section class=css::story id="story">
            <SectionTitle title=title subtitle=subtitle />
            <div class=css::chapter>
                <div class=css::media>
                    {move || match current.get().image {
                        Some(src) => view! { <img class=css::image src=src alt="" /> }.into_any(),
                        None => view! { <div class=css::placeholder></div> }.into_any(),
                    }}
                </div>
                <div class=css::text>
                    {move || current.get().year.map(|y| view! { <span class=css::year>{y}</span> })}
                    {move || current.get().title.map(|t| view! { <h3 class=css::chapterTitle>{t}</h3> })}
                    {move || current.get().content.map(|p| view! { <p class=css::content>{p}</p> })}
                </div>
            </div>
            <Show when=move || multiple>
                <nav class=css::nav aria-label="Story chapters">
                    <button class=css::navButton aria-label="Previous chapter" on:click=on_prev>
                        <Icon icon=ic::CHEVRON_LEFT />
                    </button>
                    <div class=css::dots>{dots}</div>
                    <button class=css::navButton aria-label="Next chapter" on:click=on_next>
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </button>
                </nav>
            </Show>
        </section>
    }
}
