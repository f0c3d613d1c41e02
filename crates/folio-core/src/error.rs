//! Error types for the portfolio core.
//!
//! One enum per domain:
//!
//! - [`ConfigError`] - Content parsing and validation
//! - [`SubmitError`] - Contact form submission and channel selection
//! - [`UrlValidationError`] - External link validation

use thiserror::Error;

use crate::channels::ChannelKind;
use crate::dispatch::FormField;

/// Errors raised while loading the static content registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The content file is not valid TOML or does not match the schema.
    #[error("content parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// The content parsed but violates a content rule.
    #[error("content validation error: {0}")]
    Validation(String),
}

/// Rejections from the contact form.
///
/// None of these dispatch anything; the form state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A required field is empty (or whitespace only).
    #[error("{0} is required")]
    EmptyField(FormField),
    /// The email address is not of the form `local@domain`.
    #[error("email address is not valid")]
    InvalidEmail,
    /// The form has already dispatched a message in this session.
    #[error("message already sent")]
    AlreadySubmitted,
    /// A channel was chosen while no selection step was open.
    #[error("no channel selection in progress")]
    SelectionClosed,
    /// The chosen channel was not among the offered ones.
    #[error("channel '{0}' is not available")]
    ChannelNotOffered(ChannelKind),
}

/// Reasons an external URL is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlValidationError {
    /// URL is empty
    #[error("URL is empty")]
    Empty,
    /// URL doesn't start with http:// or https://
    #[error("URL must start with http:// or https://")]
    InvalidProtocol,
    /// URL has no host/domain
    #[error("URL has no host")]
    NoHost,
}
