//! Contact channel resolution.
//!
//! Turns the raw `[contact.messaging]` and `[contact.social]` tables into the
//! ordered lists the contact section offers. Entries whose value is blank are
//! dropped; the candidate order is fixed by the enums below, never by the
//! order of keys in the content file.

use std::fmt;

use crate::content::{MessagingConfig, SocialConfig};

// ============================================================================
// Messaging channels
// ============================================================================

/// External services a contact inquiry can be handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Email,
    WhatsApp,
    Telegram,
}

impl ChannelKind {
    /// Candidate order used when offering channels.
    pub const ALL: [ChannelKind; 3] = [Self::Email, Self::WhatsApp, Self::Telegram];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::WhatsApp => "WhatsApp",
            Self::Telegram => "Telegram",
        }
    }

    /// Normalize a configured destination for this kind.
    ///
    /// - Email: trimmed
    /// - WhatsApp: digits only (`+1 555-0100` becomes `15550100`)
    /// - Telegram: trimmed, one leading `@` removed
    pub fn normalize(self, raw: &str) -> String {
        let raw = raw.trim();
        match self {
            Self::Email => raw.to_string(),
            Self::WhatsApp => raw.chars().filter(char::is_ascii_digit).collect(),
            Self::Telegram => raw.strip_prefix('@').unwrap_or(raw).to_string(),
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A usable messaging destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingChannel {
    pub kind: ChannelKind,
    /// Normalized address, number, or handle.
    pub destination: String,
}

impl MessagingConfig {
    /// Configured destination for a channel kind, untrimmed.
    pub fn destination_for(&self, kind: ChannelKind) -> Option<&str> {
        match kind {
            ChannelKind::Email => self.email.as_deref(),
            ChannelKind::WhatsApp => self.whatsapp.as_deref(),
            ChannelKind::Telegram => self.telegram.as_deref(),
        }
    }
}

/// Resolve the messaging channels to offer, in the order Email, WhatsApp,
/// Telegram.
///
/// A channel is included iff its configured destination is non-blank.
/// Absent configuration yields an empty list.
pub fn resolve_messaging_channels(config: Option<&MessagingConfig>) -> Vec<MessagingChannel> {
    let Some(config) = config else {
        return Vec::new();
    };

    let channels: Vec<MessagingChannel> = ChannelKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let raw = config.destination_for(kind)?;
            if raw.trim().is_empty() {
                return None;
            }
            Some(MessagingChannel {
                kind,
                destination: kind.normalize(raw),
            })
        })
        .collect();

    tracing::debug!(count = channels.len(), "resolved messaging channels");
    channels
}

// ============================================================================
// Social links
// ============================================================================

/// Known social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Twitter,
    LinkedIn,
    Instagram,
    Dribbble,
    Behance,
    GitHub,
    YouTube,
    Facebook,
}

impl SocialPlatform {
    /// Display order of social links.
    pub const ALL: [SocialPlatform; 8] = [
        Self::Twitter,
        Self::LinkedIn,
        Self::Instagram,
        Self::Dribbble,
        Self::Behance,
        Self::GitHub,
        Self::YouTube,
        Self::Facebook,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
            Self::Dribbble => "Dribbble",
            Self::Behance => "Behance",
            Self::GitHub => "GitHub",
            Self::YouTube => "YouTube",
            Self::Facebook => "Facebook",
        }
    }

    /// Key used in the `[contact.social]` table.
    pub fn key(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::LinkedIn => "linkedin",
            Self::Instagram => "instagram",
            Self::Dribbble => "dribbble",
            Self::Behance => "behance",
            Self::GitHub => "github",
            Self::YouTube => "youtube",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A social profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    /// Trimmed profile URL.
    pub url: String,
}

/// Resolve the social links to show, in [`SocialPlatform::ALL`] order.
///
/// A link is included iff its URL is non-blank.
pub fn resolve_social_links(config: Option<&SocialConfig>) -> Vec<SocialLink> {
    let Some(config) = config else {
        return Vec::new();
    };

    SocialPlatform::ALL
        .into_iter()
        .filter_map(|platform| {
            let url = config.url_for(platform)?.trim();
            if url.is_empty() {
                return None;
            }
            Some(SocialLink {
                platform,
                url: url.to_string(),
            })
        })
        .collect()
}
