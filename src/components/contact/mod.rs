//! Contact section.
//!
//! - [`Contact`] - Section layout: contact details, social links, and the form
//! - [`form`] - Inquiry form bound to a [`folio_core::ContactForm`]
//! - [`picker`] - Channel selection modal opened by a submit

mod form;
mod picker;

use folio_core::content::{ContactInfo, non_blank};
use folio_core::{Section, SocialLink, resolve_social_links};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::header::{SectionTitle, owned};
use super::icons as ic;
use crate::app::AppContext;
use form::InquiryForm;

stylance::import_crate_style!(css, "src/components/contact/contact.module.css");

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (header, info, social) = ctx.with_content(|c| match c.contact.as_ref() {
        Some(contact) => (
            owned(contact.header()),
            contact.info.clone(),
            resolve_social_links(contact.social.as_ref()),
        ),
        None => ((None, None), None, Vec::new()),
    });
    let (title, subtitle) = header;

    view! {
        <section class=css::contact id="contact">
            <SectionTitle title=title subtitle=subtitle />
            <div class=css::layout>
                <div class=css::details>
                    {info.map(|info| view! { <InfoBlock info=info /> })}
                    {(!social.is_empty()).then(|| view! { <SocialLinks links=social /> })}
                </div>
                <InquiryForm />
            </div>
        </section>
    }
}

/// "Get in Touch" block: email, phone, location, availability.
#[component]
fn InfoBlock(info: ContactInfo) -> impl IntoView {
    let email = non_blank(&info.email).map(str::to_string);
    let phone = non_blank(&info.phone).map(str::to_string);
    let location = non_blank(&info.location).map(str::to_string);
    let availability = non_blank(&info.availability).map(str::to_string);

    view! {
        <div class=css::info>
            <h3 class=css::infoTitle>"Get in Touch"</h3>
            {email.map(|e| {
                let href = format!("mailto:{}", e);
                view! {
                    <InfoRow icon=ic::MAIL>
                        <a class=css::infoLink href=href>{e}</a>
                    </InfoRow>
                }
            })}
            {phone.map(|p| view! { <InfoRow icon=ic::PHONE>{p}</InfoRow> })}
            {location.map(|l| view! { <InfoRow icon=ic::LOCATION>{l}</InfoRow> })}
            {availability.map(|a| view! { <p class=css::availability>{a}</p> })}
        </div>
    }
}

#[component]
fn InfoRow(icon: icondata::Icon, children: Children) -> impl IntoView {
    view! {
        <div class=css::infoRow>
            <span class=css::infoIcon><Icon icon=icon /></span>
            <span>{children()}</span>
        </div>
    }
}

#[component]
fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
    view! {
        <div class=css::social>
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a
                            class=css::socialLink
                            href=link.url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=link.platform.label()
                            title=link.platform.label()
                        >
                            <Icon icon=ic::social_icon(link.platform) />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
