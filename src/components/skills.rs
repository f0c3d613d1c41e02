//! Skills section: proficiency bars, technology tags, and a timeline.

use folio_core::Section;
use folio_core::content::{Skill, TimelineEntry, non_blank};
use leptos::prelude::*;

use super::header::{SectionTitle, owned};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/skills.module.css");

/// Width of a proficiency bar, `"0%"` when no percentage is given.
fn bar_width(percentage: Option<u8>) -> String {
    format!("{}%", percentage.unwrap_or(0).min(100))
}

#[component]
pub fn Skills() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (header, skills, technologies, timeline) = ctx.with_content(|c| match c.skills.as_ref() {
        Some(s) => (
            owned(s.header()),
            s.skills.clone(),
            s.technologies
                .iter()
                .filter_map(|t| non_blank(&t.name).map(str::to_string))
                .collect::<Vec<_>>(),
            s.timeline.clone(),
        ),
        None => ((None, None), Vec::new(), Vec::new(), Vec::new()),
    });
    let (title, subtitle) = header;

    let technologies_view = (!technologies.is_empty()).then(|| {
        view! {
            <div class=css::technologies>
                {technologies
                    .into_iter()
                    .map(|name| view! { <span class=css::tag>{name}</span> })
                    .collect_view()}
            </div>
        }
    });

    let timeline_view = (!timeline.is_empty()).then(|| {
        view! {
            <ol class=css::timeline>
                {timeline
                    .into_iter()
                    .map(|entry| view! { <TimelineItem entry=entry /> })
                    .collect_view()}
            </ol>
        }
    });

    view! {
        <section class=css::skills id="skills">
            <SectionTitle title=title subtitle=subtitle />
            <div class=css::bars>
                {skills
                    .into_iter()
                    .map(|skill| view! { <SkillBar skill=skill /> })
                    .collect_view()}
            </div>
            {technologies_view}
            {timeline_view}
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let name = non_blank(&skill.name).map(str::to_string).unwrap_or_default();
    let label = skill.percentage.map(|p| format!("{}%", p.min(100)));
    let width = bar_width(skill.percentage);

    view! {
        <div class=css::skill>
            <div class=css::skillHeader>
                <span class=css::skillName>{name}</span>
                {label.map(|l| view! { <span class=css::skillValue>{l}</span> })}
            </div>
            <div class=css::track>
                <div class=css::fill style:width=width></div>
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(entry: TimelineEntry) -> impl IntoView {
    let year = non_blank(&entry.year).map(str::to_string);
    let title = non_blank(&entry.title).map(str::to_string);
    let description = non_blank(&entry.description).map(str::to_string);

    view! {
        <li class=css::entry>
            {year.map(|y| view! { <span class=css::entryYear>{y}</span> })}
            <div>
                {title.map(|t| view! { <h4 class=css::entryTitle>{t}</h4> })}
                {description.map(|d| view! { <p class=css::entryDescription>{d}</p> })}
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(Some(85)), "85%");
        assert_eq!(bar_width(Some(0)), "0%");
        assert_eq!(bar_width(None), "0%");
    }
}
