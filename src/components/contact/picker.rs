//! Channel selection modal.

use folio_core::{ContactForm, MessagingChannel};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::utils::dom::BrowserLauncher;

/// Lists the channels offered by the last submit. Picking one dispatches the
/// inquiry; the close button, Cancel, or a click on the backdrop close the
/// modal without sending.
#[component]
pub fn ChannelPicker(form: RwSignal<ContactForm>) -> impl IntoView {
    let channels = Memo::new(move |_| {
        form.with(|f| f.offered_channels().map(<[MessagingChannel]>::to_vec))
    });

    let close = move || form.update(|f| f.cancel_selection());

    view! {
        <Show when=move || channels.with(Option::is_some)>
            <div class=css::backdrop on:click=move |_| close()>
                <div
                    class=css::modal
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="channel-picker-title"
                    on:click=|ev: ev::MouseEvent| ev.stop_propagation()
                >
                    <div class=css::modalHeader>
                        <h3 id="channel-picker-title" class=css::modalTitle>"Choose Platform"</h3>
                        <button
                            type="button"
                            class=css::modalClose
                            aria-label="Close"
                            on:click=move |_| close()
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <div class=css::channels>
                        {move || {
                            channels
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|channel| view! { <ChannelButton form=form channel=channel /> })
                                .collect_view()
                        }}
                    </div>
                    <button type="button" class=css::cancel on:click=move |_| close()>
                        "Cancel"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ChannelButton(form: RwSignal<ContactForm>, channel: MessagingChannel) -> impl IntoView {
    let kind = channel.kind;

    let on_click = move |_: ev::MouseEvent| {
        form.update(|f| {
            if let Err(e) = f.select(kind, &mut BrowserLauncher) {
                tracing::warn!(error = %e, channel = %kind, "channel selection failed");
            }
        });
    };

    view! {
        <button type="button" class=css::channel on:click=on_click>
            <span class=css::channelIcon><Icon icon=ic::channel_icon(kind) /></span>
            <span class=css::channelLabel>{kind.label()}</span>
            <span class=css::channelDestination>{channel.destination}</span>
        </button>
    }
}
