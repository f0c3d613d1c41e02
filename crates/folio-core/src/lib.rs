//! Core logic of the portfolio site, independent of the browser.
//!
//! - [`ContentRegistry`] - Static page content parsed from TOML
//! - [`should_render`], [`compose_body`] - Section visibility
//! - [`ViewController`] - Loading → Hero → Entered state machine
//! - [`resolve_messaging_channels`], [`resolve_social_links`] - Contact channels
//! - [`ContactForm`] - Form state and message dispatch
//! - [`ChapterCursor`] - Story chapter navigation

pub mod channels;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod story;
pub mod url;
pub mod view_state;
pub mod visibility;

pub use channels::{
    ChannelKind, MessagingChannel, SocialLink, SocialPlatform, resolve_messaging_channels,
    resolve_social_links,
};
pub use content::{ContentRegistry, Section, SectionHeader};
pub use dispatch::{
    ComposeTemplate, ContactForm, ContactFormInput, DispatchRoute, DispatchTarget, FormField,
    Launcher, SubmitOutcome,
};
pub use error::{ConfigError, SubmitError, UrlValidationError};
pub use story::ChapterCursor;
pub use url::validate_external_url;
pub use view_state::{ViewController, ViewState};
pub use visibility::{SectionKind, compose_body, should_render};
