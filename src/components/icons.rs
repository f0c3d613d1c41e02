//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use folio_core::{ChannelKind, SocialPlatform};
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuDribbble as Dribbble,
        LuFacebook as Facebook, LuGithub as GitHub, LuInstagram as Instagram,
        LuLinkedin as LinkedIn, LuMail as Mail, LuMapPin as Location,
        LuMessageCircle as WhatsApp, LuPalette as Behance, LuPhone as Phone, LuSend as Telegram,
        LuTwitter as Twitter, LuX as Close, LuYoutube as YouTube,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBehance as Behance, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsDribbble as Dribbble, BsEnvelope as Mail, BsFacebook as Facebook,
        BsGeoAltFill as Location, BsGithub as GitHub, BsInstagram as Instagram,
        BsLinkedin as LinkedIn, BsTelegram as Telegram, BsTelephone as Phone,
        BsTwitter as Twitter, BsWhatsapp as WhatsApp, BsXLg as Close, BsYoutube as YouTube,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(LOCATION, Location);
themed_icon!(WHATSAPP, WhatsApp);
themed_icon!(TELEGRAM, Telegram);
themed_icon!(TWITTER, Twitter);
themed_icon!(LINKEDIN, LinkedIn);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(DRIBBBLE, Dribbble);
themed_icon!(BEHANCE, Behance);
themed_icon!(GITHUB, GitHub);
themed_icon!(YOUTUBE, YouTube);
themed_icon!(FACEBOOK, Facebook);

// =============================================================================
// Domain Mappings
// =============================================================================

/// Icon for a messaging channel button.
pub fn channel_icon(kind: ChannelKind) -> Icon {
    match kind {
        ChannelKind::Email => MAIL,
        ChannelKind::WhatsApp => WHATSAPP,
        ChannelKind::Telegram => TELEGRAM,
    }
}

/// Icon for a social profile link.
pub fn social_icon(platform: SocialPlatform) -> Icon {
    match platform {
        SocialPlatform::Twitter => TWITTER,
        SocialPlatform::LinkedIn => LINKEDIN,
        SocialPlatform::Instagram => INSTAGRAM,
        SocialPlatform::Dribbble => DRIBBBLE,
        SocialPlatform::Behance => BEHANCE,
        SocialPlatform::GitHub => GITHUB,
        SocialPlatform::YouTube => YOUTUBE,
        SocialPlatform::Facebook => FACEBOOK,
    }
}
