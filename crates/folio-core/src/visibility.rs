//! Section visibility.

use crate::content::{ContentRegistry, Section};

/// Whether a section takes part in the page at all.
///
/// Absent sections and sections whose `is_required` flag is not `true` are
/// skipped regardless of their payload.
pub fn should_render<S: Section>(section: Option<&S>) -> bool {
    section.is_some_and(|s| s.is_required())
}

/// Eligible and has something to draw.
fn is_composed<S: Section>(section: Option<&S>) -> bool {
    should_render(section) && section.is_some_and(|s| s.has_content())
}

/// Sections of the main body, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Story,
    Projects,
    Skills,
    Contact,
}

/// Sections mounted once the visitor has entered the portfolio.
pub fn compose_body(registry: &ContentRegistry) -> Vec<SectionKind> {
    let candidates = [
        (SectionKind::Story, is_composed(registry.story.as_ref())),
        (SectionKind::Projects, is_composed(registry.projects.as_ref())),
        (SectionKind::Skills, is_composed(registry.skills.as_ref())),
        (SectionKind::Contact, is_composed(registry.contact.as_ref())),
    ];

    candidates
        .into_iter()
        .filter_map(|(kind, included)| included.then_some(kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{
        Chapter, ContactContent, HeroContent, Project, ProjectsContent, Skill, SkillsContent,
        StoryContent,
    };

    fn story(is_required: bool, chapters: usize) -> StoryContent {
        StoryContent {
            is_required,
            chapters: vec![Chapter::default(); chapters],
            ..Default::default()
        }
    }

    #[test]
    fn test_absent_section_not_rendered() {
        assert!(!should_render::<HeroContent>(None));
        assert!(!should_render::<ContactContent>(None));
    }

    #[test]
    fn test_flag_controls_rendering() {
        let mut hero = HeroContent {
            title: Some("Jane".into()),
            ..Default::default()
        };
        assert!(!should_render(Some(&hero)));

        hero.is_required = true;
        assert!(should_render(Some(&hero)));
    }

    #[test]
    fn test_payload_does_not_override_flag() {
        assert!(!should_render(Some(&story(false, 3))));
        // Eligible even without chapters; composition is a separate question
        assert!(should_render(Some(&story(true, 0))));
    }

    #[test]
    fn test_compose_empty_registry() {
        assert!(compose_body(&ContentRegistry::default()).is_empty());
    }

    #[test]
    fn test_compose_order_and_gating() {
        let registry = ContentRegistry {
            story: Some(story(true, 2)),
            projects: Some(ProjectsContent {
                is_required: true,
                projects: vec![Project {
                    id: "a".into(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            skills: Some(SkillsContent {
                is_required: false,
                skills: vec![Skill::default()],
                ..Default::default()
            }),
            contact: Some(ContactContent {
                is_required: true,
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(
            compose_body(&registry),
            vec![SectionKind::Story, SectionKind::Projects, SectionKind::Contact]
        );
    }

    #[test]
    fn test_compose_skips_empty_lists() {
        let registry = ContentRegistry {
            story: Some(story(true, 0)),
            projects: Some(ProjectsContent {
                is_required: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(compose_body(&registry).is_empty());
    }
}
