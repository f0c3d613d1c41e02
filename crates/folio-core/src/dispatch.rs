//! Contact form and message dispatch.
//!
//! Submitting the form either hands the inquiry to the fallback web-mail
//! composer right away (no messaging channel configured) or opens a channel
//! selection step. Dispatch means launching exactly one URI through a
//! [`Launcher`]; the form then locks for the rest of the session.
//!
//! URI formats:
//!
//! | Route    | URI |
//! |----------|-----|
//! | Fallback | [`ComposeTemplate`], Gmail compose by default |
//! | Email    | `mailto:{to}?subject={subject}&body={body}` |
//! | WhatsApp | `https://wa.me/{digits}?text={body}` |
//! | Telegram | `https://t.me/{handle}?text={body}` |
//!
//! Subject and body are percent-encoded with the same character set as
//! JavaScript's `encodeURIComponent`.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::channels::{ChannelKind, MessagingChannel, resolve_messaging_channels};
use crate::content::MessagingConfig;
use crate::error::{ConfigError, SubmitError};

/// Characters left as-is by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

// ============================================================================
// Form input
// ============================================================================

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Project,
    Message,
}

impl FormField {
    /// Fields that must be non-blank on submit, in the order they are checked.
    pub const REQUIRED: [FormField; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Project => "Project",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    /// Optional.
    pub project: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Project => &self.project,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Project => self.project = value,
            FormField::Message => self.message = value,
        }
    }

    /// First required field that is blank, then the email shape.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if let Some(field) = FormField::REQUIRED
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(SubmitError::EmptyField(field));
        }
        if !is_email_shaped(&self.email) {
            return Err(SubmitError::InvalidEmail);
        }
        Ok(())
    }

    /// Plain-text message body.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nProject: {}\nMessage: {}",
            self.name, self.email, self.project, self.message
        )
    }

    /// Message subject line.
    pub fn subject(&self) -> String {
        format!("New Project Inquiry from {}", self.name)
    }
}

/// `local@domain`: one `@`, both sides non-empty, no whitespace.
fn is_email_shaped(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

// ============================================================================
// URI construction
// ============================================================================

/// Web-mail compose endpoint used when no messaging channel is configured.
///
/// `{subject}` and `{body}` are replaced with the encoded subject and body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ComposeTemplate(String);

impl ComposeTemplate {
    pub const GMAIL: &'static str =
        "https://mail.google.com/mail/?view=cm&fs=1&to=&su={subject}&body={body}";

    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = Self(template.into());
        template.validate()?;
        Ok(template)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The template must carry the body somewhere.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.0.contains("{body}") {
            return Err(ConfigError::Validation(
                "contact.fallback.compose_url must contain {body}".into(),
            ));
        }
        Ok(())
    }

    /// Fill in the template for an inquiry.
    pub fn render(&self, input: &ContactFormInput) -> String {
        self.0
            .replace("{subject}", &encode_component(&input.subject()))
            .replace("{body}", &encode_component(&input.body()))
    }
}

impl Default for ComposeTemplate {
    fn default() -> Self {
        Self(Self::GMAIL.to_string())
    }
}

/// URI that opens `channel` with the inquiry pre-filled.
pub fn channel_uri(channel: &MessagingChannel, input: &ContactFormInput) -> String {
    let body = encode_component(&input.body());
    match channel.kind {
        ChannelKind::Email => format!(
            "mailto:{}?subject={}&body={}",
            channel.destination,
            encode_component(&input.subject()),
            body
        ),
        ChannelKind::WhatsApp => format!("https://wa.me/{}?text={}", channel.destination, body),
        ChannelKind::Telegram => format!("https://t.me/{}?text={}", channel.destination, body),
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Host capability that opens an external URI.
///
/// Fire-and-forget: whether the URI actually opens is not observable.
pub trait Launcher {
    fn launch(&mut self, uri: &str);
}

impl<F: FnMut(&str)> Launcher for F {
    fn launch(&mut self, uri: &str) {
        (self)(uri)
    }
}

/// Where a message went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchRoute {
    /// Web-mail composer, no recipient.
    Fallback,
    /// A configured messaging channel.
    Channel(ChannelKind),
}

/// A launched URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    pub route: DispatchRoute,
    pub uri: String,
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Sent straight to the fallback composer.
    Dispatched(DispatchTarget),
    /// Waiting for the visitor to pick one of these channels.
    ChooseChannel(Vec<MessagingChannel>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FormPhase {
    #[default]
    Editing,
    Choosing(Vec<MessagingChannel>),
    Submitted,
}

/// Contact form state for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: ContactFormInput,
    phase: FormPhase,
    fallback: ComposeTemplate,
}

impl ContactForm {
    pub fn new(fallback: ComposeTemplate) -> Self {
        Self {
            input: ContactFormInput::default(),
            phase: FormPhase::Editing,
            fallback,
        }
    }

    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    /// Apply a field edit.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.input.set(field, value.into());
    }

    /// A message has been dispatched; further submits are rejected.
    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Channels currently offered for selection, if the selection step is open.
    pub fn offered_channels(&self) -> Option<&[MessagingChannel]> {
        match &self.phase {
            FormPhase::Choosing(channels) => Some(channels),
            _ => None,
        }
    }

    /// Submit the form.
    ///
    /// With no usable channel in `messaging`, the inquiry is launched through
    /// the fallback composer and the form locks. Otherwise the selection step
    /// opens and nothing is launched until [`ContactForm::select`].
    pub fn submit<L: Launcher>(
        &mut self,
        messaging: Option<&MessagingConfig>,
        launcher: &mut L,
    ) -> Result<SubmitOutcome, SubmitError> {
        if self.is_submitted() {
            tracing::warn!("submit rejected: already submitted");
            return Err(SubmitError::AlreadySubmitted);
        }
        self.input.validate()?;

        let channels = resolve_messaging_channels(messaging);
        if !channels.is_empty() {
            self.phase = FormPhase::Choosing(channels.clone());
            return Ok(SubmitOutcome::ChooseChannel(channels));
        }

        let target = DispatchTarget {
            route: DispatchRoute::Fallback,
            uri: self.fallback.render(&self.input),
        };
        self.complete(&target, launcher);
        Ok(SubmitOutcome::Dispatched(target))
    }

    /// Dispatch through one of the offered channels.
    pub fn select<L: Launcher>(
        &mut self,
        kind: ChannelKind,
        launcher: &mut L,
    ) -> Result<DispatchTarget, SubmitError> {
        let channel = match &self.phase {
            FormPhase::Submitted => return Err(SubmitError::AlreadySubmitted),
            FormPhase::Editing => return Err(SubmitError::SelectionClosed),
            FormPhase::Choosing(channels) => channels
                .iter()
                .find(|c| c.kind == kind)
                .cloned()
                .ok_or(SubmitError::ChannelNotOffered(kind))?,
        };

        let target = DispatchTarget {
            route: DispatchRoute::Channel(kind),
            uri: channel_uri(&channel, &self.input),
        };
        self.complete(&target, launcher);
        Ok(target)
    }

    /// Close the selection step without sending anything.
    pub fn cancel_selection(&mut self) {
        if matches!(self.phase, FormPhase::Choosing(_)) {
            self.phase = FormPhase::Editing;
        }
    }

    fn complete<L: Launcher>(&mut self, target: &DispatchTarget, launcher: &mut L) {
        launcher.launch(&target.uri);
        tracing::info!(route = ?target.route, "inquiry dispatched");
        self.phase = FormPhase::Submitted;
        self.input = ContactFormInput::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Message, "Hi");
        form
    }

    fn messaging(email: &str, whatsapp: &str, telegram: &str) -> MessagingConfig {
        MessagingConfig {
            email: Some(email.to_string()),
            whatsapp: Some(whatsapp.to_string()),
            telegram: Some(telegram.to_string()),
        }
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("Name: Ada\n"), "Name%3A%20Ada%0A");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("a&b=c/d?"), "a%26b%3Dc%2Fd%3F");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_body_and_subject() {
        let input = ContactFormInput {
            name: "Ada".into(),
            email: "a@b.com".into(),
            project: String::new(),
            message: "Hi".into(),
        };
        assert_eq!(
            input.body(),
            "Name: Ada\nEmail: a@b.com\nProject: \nMessage: Hi"
        );
        assert_eq!(input.subject(), "New Project Inquiry from Ada");
    }

    #[test]
    fn test_validation() {
        let mut form = ContactForm::default();
        let mut launched = Vec::new();
        let mut launcher = |uri: &str| launched.push(uri.to_string());

        assert_eq!(
            form.submit(None, &mut launcher),
            Err(SubmitError::EmptyField(FormField::Name))
        );

        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "   ");
        assert_eq!(
            form.submit(None, &mut launcher),
            Err(SubmitError::EmptyField(FormField::Email))
        );

        form.set_field(FormField::Email, "a@b.com");
        assert_eq!(
            form.submit(None, &mut launcher),
            Err(SubmitError::EmptyField(FormField::Message))
        );

        assert!(!form.is_submitted());
        assert!(launched.is_empty());
    }

    #[test]
    fn test_malformed_email_not_dispatched() {
        let mut form = filled_form();
        let mut count = 0;
        let mut launcher = |_: &str| count += 1;

        for email in ["not an email", "ada@", "@example.com", "a@b@c", "ada lovelace@x.org"] {
            form.set_field(FormField::Email, email);
            assert_eq!(
                form.submit(None, &mut launcher),
                Err(SubmitError::InvalidEmail),
                "{email}"
            );
        }
        assert!(!form.is_submitted());

        form.set_field(FormField::Email, " ada@example.com ");
        assert!(form.submit(None, &mut launcher).is_ok());
        assert_eq!(count, 1);
    }

    #[test]
    fn test_direct_dispatch_without_channels() {
        let mut form = filled_form();
        let mut launched = Vec::new();
        let mut launcher = |uri: &str| launched.push(uri.to_string());

        let outcome = form.submit(None, &mut launcher).unwrap();
        let SubmitOutcome::Dispatched(target) = outcome else {
            panic!("expected direct dispatch");
        };

        assert_eq!(target.route, DispatchRoute::Fallback);
        assert!(
            target
                .uri
                .starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=&su=")
        );
        assert!(target.uri.contains("su=New%20Project%20Inquiry%20from%20Ada"));
        assert!(target.uri.contains("Message%3A%20Hi"));
        assert_eq!(launched, vec![target.uri.clone()]);
        assert!(form.is_submitted());
        assert_eq!(form.input(), &ContactFormInput::default());
    }

    #[test]
    fn test_blank_channels_count_as_none() {
        let mut form = filled_form();
        let mut count = 0;
        let mut launcher = |_: &str| count += 1;

        let config = messaging(" ", "", "");
        let outcome = form.submit(Some(&config), &mut launcher).unwrap();
        assert!(matches!(outcome, SubmitOutcome::Dispatched(_)));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_channels_require_selection() {
        let mut form = filled_form();
        let mut launched = Vec::new();
        let mut launcher = |uri: &str| launched.push(uri.to_string());

        let config = messaging("me@example.com", "+1 555 0100", "");
        let outcome = form.submit(Some(&config), &mut launcher).unwrap();
        let SubmitOutcome::ChooseChannel(channels) = outcome else {
            panic!("expected channel selection");
        };
        assert_eq!(channels.len(), 2);
        assert_eq!(form.offered_channels(), Some(channels.as_slice()));
        assert!(!form.is_submitted());

        let target = form.select(ChannelKind::WhatsApp, &mut launcher).unwrap();
        assert_eq!(target.route, DispatchRoute::Channel(ChannelKind::WhatsApp));
        assert!(target.uri.starts_with("https://wa.me/15550100?text=Name%3A%20Ada"));
        assert!(form.is_submitted());
        assert_eq!(form.offered_channels(), None);
        assert_eq!(form.input(), &ContactFormInput::default());

        assert_eq!(launched.len(), 1);
    }

    #[test]
    fn test_email_channel_uri() {
        let mut form = filled_form();
        let mut launched = Vec::new();
        let mut launcher = |uri: &str| launched.push(uri.to_string());

        let config = messaging(" me@example.com ", "", "");
        form.submit(Some(&config), &mut launcher).unwrap();
        let target = form.select(ChannelKind::Email, &mut launcher).unwrap();
        assert_eq!(
            target.uri,
            "mailto:me@example.com?subject=New%20Project%20Inquiry%20from%20Ada\
             &body=Name%3A%20Ada%0AEmail%3A%20a%40b.com%0AProject%3A%20%0AMessage%3A%20Hi"
        );
    }

    #[test]
    fn test_telegram_channel_uri() {
        let mut form = filled_form();
        let mut launcher = |_: &str| {};

        let config = messaging("", "", "@jane");
        form.submit(Some(&config), &mut launcher).unwrap();
        let target = form.select(ChannelKind::Telegram, &mut launcher).unwrap();
        assert!(target.uri.starts_with("https://t.me/jane?text="));
    }

    #[test]
    fn test_select_errors() {
        let mut form = filled_form();
        let mut count = 0;
        let mut launcher = |_: &str| count += 1;

        assert_eq!(
            form.select(ChannelKind::Email, &mut launcher),
            Err(SubmitError::SelectionClosed)
        );

        let config = messaging("", "", "@jane");
        form.submit(Some(&config), &mut launcher).unwrap();
        assert_eq!(
            form.select(ChannelKind::WhatsApp, &mut launcher),
            Err(SubmitError::ChannelNotOffered(ChannelKind::WhatsApp))
        );
        assert!(form.offered_channels().is_some());

        form.select(ChannelKind::Telegram, &mut launcher).unwrap();
        assert_eq!(
            form.select(ChannelKind::Telegram, &mut launcher),
            Err(SubmitError::AlreadySubmitted)
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_cancel_selection() {
        let mut form = filled_form();
        let mut count = 0;
        let mut launcher = |_: &str| count += 1;

        let config = messaging("me@example.com", "", "");
        form.submit(Some(&config), &mut launcher).unwrap();
        form.cancel_selection();

        assert_eq!(form.offered_channels(), None);
        assert!(!form.is_submitted());
        assert_eq!(form.input().name, "Ada");
        assert_eq!(
            form.select(ChannelKind::Email, &mut launcher),
            Err(SubmitError::SelectionClosed)
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_submit_rejected_after_dispatch() {
        let mut form = filled_form();
        let mut count = 0;
        let mut launcher = |_: &str| count += 1;

        form.submit(None, &mut launcher).unwrap();
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Message, "Again");

        assert_eq!(
            form.submit(None, &mut launcher),
            Err(SubmitError::AlreadySubmitted)
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_edits_visible_to_selection() {
        let mut form = filled_form();
        let mut launcher = |_: &str| {};

        let config = messaging("", "", "jane");
        form.submit(Some(&config), &mut launcher).unwrap();
        form.set_field(FormField::Project, "Rebrand");
        let target = form.select(ChannelKind::Telegram, &mut launcher).unwrap();
        assert!(target.uri.contains("Project%3A%20Rebrand"));
    }

    #[test]
    fn test_custom_compose_template() {
        let template =
            ComposeTemplate::new("https://mail.example.com/compose?s={subject}&b={body}").unwrap();
        let mut form = ContactForm::new(template);
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "a@b.com");
        form.set_field(FormField::Message, "Hi");

        let mut launcher = |_: &str| {};
        let SubmitOutcome::Dispatched(target) = form.submit(None, &mut launcher).unwrap() else {
            panic!("expected direct dispatch");
        };
        assert!(
            target
                .uri
                .starts_with("https://mail.example.com/compose?s=New%20Project")
        );
    }

    #[test]
    fn test_compose_template_requires_body() {
        assert!(ComposeTemplate::new("https://mail.example.com/compose").is_err());
        assert_eq!(ComposeTemplate::default().as_str(), ComposeTemplate::GMAIL);
    }
}
