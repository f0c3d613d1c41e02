//! Inquiry form.
//!
//! Field edits and submits go straight to a [`ContactForm`]; the view only
//! mirrors its state. Validation failures show up as a notice under the
//! button.

use folio_core::{ContactForm, FormField};
use leptos::{ev, prelude::*};

use super::css;
use super::picker::ChannelPicker;
use crate::app::AppContext;
use crate::config::form_labels;
use crate::utils::dom::BrowserLauncher;

fn field_label(field: FormField) -> &'static str {
    match field {
        FormField::Name => form_labels::NAME,
        FormField::Email => form_labels::EMAIL,
        FormField::Project => form_labels::PROJECT,
        FormField::Message => form_labels::MESSAGE,
    }
}

#[component]
pub fn InquiryForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let (fallback, messaging) = ctx.with_content(|c| {
        c.contact
            .as_ref()
            .map(|contact| (contact.fallback.compose_url.clone(), contact.messaging.clone()))
            .unwrap_or_default()
    });

    let form = RwSignal::new(ContactForm::new(fallback));
    let notice = RwSignal::new(None::<String>);
    let submitted = Memo::new(move |_| form.with(|f| f.is_submitted()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let result = form.try_update(|f| f.submit(messaging.as_ref(), &mut BrowserLauncher));
        match result {
            Some(Ok(_)) => notice.set(None),
            Some(Err(e)) => {
                tracing::debug!(error = %e, "submit rejected");
                notice.set(Some(e.to_string()));
            }
            None => {}
        }
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <div class=css::fieldRow>
                <Field form=form field=FormField::Name input_type="text" />
                <Field form=form field=FormField::Email input_type="email" />
            </div>
            <Field form=form field=FormField::Project input_type="text" />
            <MessageField form=form />

            <button class=css::submit type="submit" disabled=move || submitted.get()>
                {move || if submitted.get() { "MESSAGE SENT" } else { "SEND MESSAGE" }}
            </button>
            {move || notice.get().map(|n| view! { <p class=css::notice role="alert">{n}</p> })}

            <ChannelPicker form=form />
        </form>
    }
}

/// Single-line input with a floating label.
#[component]
fn Field(form: RwSignal<ContactForm>, field: FormField, input_type: &'static str) -> impl IntoView {
    let id = format!("contact-{}", field.label().to_lowercase());
    let value = move || form.with(|f| f.input().get(field).to_string());

    view! {
        <div class=css::field>
            <input
                id=id.clone()
                class=css::input
                type=input_type
                placeholder=" "
                required=FormField::REQUIRED.contains(&field)
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <label class=css::label for=id>{field_label(field)}</label>
        </div>
    }
}

#[component]
fn MessageField(form: RwSignal<ContactForm>) -> impl IntoView {
    let field = FormField::Message;
    let value = move || form.with(|f| f.input().get(field).to_string());

    view! {
        <div class=css::field>
            <textarea
                id="contact-message"
                class=css::textarea
                rows=5
                placeholder=" "
                required=true
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            ></textarea>
            <label class=css::label for="contact-message">{field_label(field)}</label>
        </div>
    }
}
