//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Page content is loaded at compile time using `include_str!` and parsed
//! into a [`folio_core::ContentRegistry`] on start-up.

use tracing::Level;

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Portfolio content: one table per section, see `folio_core::content`.
pub const CONTENT_TOML: &str = include_str!("../assets/content/portfolio.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Loading screen texts.
pub mod loading {
    /// Large word revealed on the loading screen.
    pub const TITLE: &str = "PORTFOLIO";
    /// Line shown under the reveal bar.
    pub const TAGLINE: &str = "CRAFTING DIGITAL EXPERIENCES";
}

// =============================================================================
// Contact Form Labels
// =============================================================================

/// Floating labels for the contact form fields.
pub mod form_labels {
    pub const NAME: &str = "Your Name";
    pub const EMAIL: &str = "Email Address";
    pub const PROJECT: &str = "Project Type";
    pub const MESSAGE: &str = "Tell me about your project";
}

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query that switches off decorative animation.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ContentRegistry, ViewController, ViewState, compose_body};

    #[test]
    fn test_bundled_content_is_valid() {
        let registry = ContentRegistry::from_toml_str(CONTENT_TOML).unwrap();
        assert!(!compose_body(&registry).is_empty());
    }

    #[test]
    fn test_bundled_content_shows_hero() {
        let registry = ContentRegistry::from_toml_str(CONTENT_TOML).unwrap();
        let mut controller = ViewController::from_registry(&registry);
        assert_eq!(controller.on_loading_elapsed(), Some(ViewState::Hero));
    }
}
