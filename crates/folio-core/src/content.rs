//! Static content registry.
//!
//! All page content is described by one TOML document with a table per
//! section. Every section carries an `is_required` flag; a missing table or a
//! flag that is not `true` keeps the section off the page.
//!
//! ```toml
//! [site]
//! loading_delay_ms = 2500
//!
//! [hero]
//! is_required = true
//! title = "Jane Doe"
//!
//! [story]
//! is_required = true
//! [[story.chapters]]
//! year = "2019"
//! title = "The Beginning"
//!
//! [contact]
//! is_required = true
//! [contact.messaging]
//! whatsapp = "+1 555 0100"
//! ```
//!
//! Parsing goes through [`ContentRegistry::from_toml_str`], which also runs
//! [`ContentRegistry::validate`].

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;

use crate::channels::SocialPlatform;
use crate::dispatch::ComposeTemplate;
use crate::error::ConfigError;
use crate::url::validate_external_url;
use crate::visibility::should_render;

/// Default delay before the loading screen gives way to the hero.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 2500;

// ============================================================================
// Section trait
// ============================================================================

/// Common behavior of every page section.
pub trait Section {
    /// The section's inclusion flag.
    fn is_required(&self) -> bool;

    /// Whether the section has the data it needs to draw anything.
    ///
    /// Sections built around a list (chapters, projects, skills) are empty
    /// without at least one entry.
    fn has_content(&self) -> bool {
        true
    }

    /// Title and subtitle drawn above the section body.
    fn header(&self) -> SectionHeader<'_> {
        SectionHeader::default()
    }
}

/// Returns the trimmed string when it has any content.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Title and subtitle of a section, blank lines already dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
}

impl<'a> SectionHeader<'a> {
    pub fn new(title: &'a Option<String>, subtitle: &'a Option<String>) -> Self {
        Self {
            title: non_blank(title),
            subtitle: non_blank(subtitle),
        }
    }

    /// The header block is drawn only when at least one line is present.
    pub fn is_visible(&self) -> bool {
        self.title.is_some() || self.subtitle.is_some()
    }
}

// ============================================================================
// Site settings
// ============================================================================

/// Settings that are not tied to a section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// How long the loading screen stays up, in milliseconds.
    pub loading_delay_ms: u64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
        }
    }
}

impl SiteSettings {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroContent {
    pub is_required: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    /// Label of the button that enters the portfolio.
    pub cta_label: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            is_required: false,
            title: None,
            subtitle: None,
            description: None,
            cta_label: "ENTER PORTFOLIO".to_string(),
        }
    }
}

impl Section for HeroContent {
    fn is_required(&self) -> bool {
        self.is_required
    }

    fn header(&self) -> SectionHeader<'_> {
        SectionHeader::new(&self.title, &self.subtitle)
    }
}

// ============================================================================
// Story
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryContent {
    pub is_required: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub chapters: Vec<Chapter>,
}

/// One step of the narrative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Chapter {
    pub year: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Image path or URL; blank means a placeholder is drawn instead.
    pub image: Option<String>,
}

impl Section for StoryContent {
    fn is_required(&self) -> bool {
        self.is_required
    }

    fn header(&self) -> SectionHeader<'_> {
        SectionHeader::new(&self.title, &self.subtitle)
    }

    fn has_content(&self) -> bool {
        !self.chapters.is_empty()
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsContent {
    pub is_required: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Project {
    /// Stable identifier, unique within the section.
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Project {
    /// Line shown above the project title: `"{year} • {category}"`, or
    /// whichever of the two is present.
    pub fn meta_line(&self) -> Option<String> {
        match (non_blank(&self.year), non_blank(&self.category)) {
            (Some(year), Some(category)) => Some(format!("{} • {}", year, category)),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

impl Section for ProjectsContent {
    fn is_required(&self) -> bool {
        self.is_required
    }

    fn header(&self) -> SectionHeader<'_> {
        SectionHeader::new(&self.title, &self.subtitle)
    }

    fn has_content(&self) -> bool {
        !self.projects.is_empty()
    }
}

// ============================================================================
// Skills
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsContent {
    pub is_required: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub skills: Vec<Skill>,
    pub technologies: Vec<Technology>,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Skill {
    pub name: Option<String>,
    /// Proficiency from 0 to 100.
    pub percentage: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Technology {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineEntry {
    pub year: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Section for SkillsContent {
    fn is_required(&self) -> bool {
        self.is_required
    }

    fn header(&self) -> SectionHeader<'_> {
        SectionHeader::new(&self.title, &self.subtitle)
    }

    fn has_content(&self) -> bool {
        !self.skills.is_empty()
    }
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactContent {
    pub is_required: bool,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// "Get in Touch" block.
    pub info: Option<ContactInfo>,
    /// Destinations offered when the form is submitted.
    pub messaging: Option<MessagingConfig>,
    /// Social profile URLs.
    pub social: Option<SocialConfig>,
    /// Web-mail compose endpoint used when no messaging channel is set.
    pub fallback: FallbackConfig,
}

impl Section for ContactContent {
    fn is_required(&self) -> bool {
        self.is_required
    }

    fn header(&self) -> SectionHeader<'_> {
        SectionHeader::new(&self.title, &self.subtitle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability: Option<String>,
}

/// Raw messaging destinations as written in the content file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessagingConfig {
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub telegram: Option<String>,
}

/// Raw social profile URLs, one optional entry per known platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub dribbble: Option<String>,
    pub behance: Option<String>,
    pub github: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
}

impl SocialConfig {
    /// Configured URL for a platform, untrimmed.
    pub fn url_for(&self, platform: SocialPlatform) -> Option<&str> {
        let url = match platform {
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::LinkedIn => &self.linkedin,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Dribbble => &self.dribbble,
            SocialPlatform::Behance => &self.behance,
            SocialPlatform::GitHub => &self.github,
            SocialPlatform::YouTube => &self.youtube,
            SocialPlatform::Facebook => &self.facebook,
        };
        url.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FallbackConfig {
    pub compose_url: ComposeTemplate,
}

// ============================================================================
// Registry
// ============================================================================

/// The whole page content, one optional entry per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentRegistry {
    pub site: SiteSettings,
    pub hero: Option<HeroContent>,
    pub story: Option<StoryContent>,
    pub projects: Option<ProjectsContent>,
    pub skills: Option<SkillsContent>,
    pub contact: Option<ContactContent>,
}

impl ContentRegistry {
    /// Parse and validate a content document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let registry: Self = toml::from_str(source)?;
        registry.validate()?;
        tracing::debug!(
            hero = registry.hero.is_some(),
            story = registry.story.is_some(),
            projects = registry.projects.is_some(),
            skills = registry.skills.is_some(),
            contact = registry.contact.is_some(),
            "content registry loaded"
        );
        Ok(registry)
    }

    /// Check content rules that the schema cannot express.
    ///
    /// Only sections that render are checked; a disabled section may carry
    /// any payload.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(projects) = self.projects.as_ref().filter(|p| should_render(Some(*p))) {
            let mut seen = HashSet::new();
            for project in &projects.projects {
                if project.id.trim().is_empty() {
                    return Err(ConfigError::Validation(
                        "projects.projects[].id must not be empty".into(),
                    ));
                }
                if !seen.insert(project.id.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "duplicate project id '{}'",
                        project.id
                    )));
                }
            }
        }

        if let Some(skills) = self.skills.as_ref().filter(|s| should_render(Some(*s))) {
            for skill in &skills.skills {
                if let Some(pct) = skill.percentage
                    && pct > 100
                {
                    return Err(ConfigError::Validation(format!(
                        "skill percentage must be 0-100, got {}",
                        pct
                    )));
                }
            }
        }

        if let Some(contact) = self.contact.as_ref().filter(|c| should_render(Some(*c))) {
            if let Some(social) = &contact.social {
                for platform in SocialPlatform::ALL {
                    let Some(url) = social.url_for(platform) else {
                        continue;
                    };
                    if url.trim().is_empty() {
                        continue;
                    }
                    validate_external_url(url).map_err(|e| {
                        ConfigError::Validation(format!(
                            "contact.social.{}: {}",
                            platform.key(),
                            e
                        ))
                    })?;
                }
            }
            contact.fallback.compose_url.validate()?;
        }

        Ok(())
    }
}
