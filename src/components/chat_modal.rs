//! Chat dialog between the signed-in user and one vendor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting the dialog opens a `ChatSession` on the configured realtime
//! provider and mirrors its state into the `ChatState` context. Unmounting
//! closes the session. The transcript stays in storage for next time.
//!
//! Sending works in every connection state once the session exists, since
//! a send appends locally before publishing. Enter and the Send button
//! follow the same rule.

#[cfg(test)]
#[path = "chat_modal_test.rs"]
mod chat_modal_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::vendor_card::VendorAvatar;
use crate::config::ClientConfig;
use crate::net::chat_session::ChatSession;
use crate::net::realtime;
use crate::state::auth::AuthState;
use crate::state::catalog::VendorRecord;
use crate::state::chat::{ChatState, ConnectionStatus};
use crate::state::profile::ProfileState;
use crate::util::clock;
use crate::util::storage::{KeyValueStore, LocalStorage as BrowserStorage};

/// Whether a send may go out: the session is open and the text is not blank.
/// Connection status does not matter.
fn send_allowed(session_ready: bool, text: &str) -> bool {
    session_ready && !text.trim().is_empty()
}

fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Disconnected => "Offline",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Connected => "Online",
        ConnectionStatus::Error => "Connection error",
    }
}

#[component]
pub fn ChatModal(vendor: &'static VendorRecord, on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ClientConfig>();

    let session = StoredValue::new_local(None::<Rc<ChatSession>>);
    let ready = RwSignal::new(false);
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    chat.set(ChatState::default());

    if let Some(user) = auth.get_untracked().user {
        let user_type = profile.get_untracked().user_type();
        leptos::task::spawn_local(async move {
            let provider = realtime::provider_for(&config);
            let store: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
            let opened = ChatSession::open(
                provider.as_ref(),
                store,
                &user,
                user_type,
                vendor,
                Rc::new(move |state: &ChatState| chat.set(state.clone())),
            )
            .await;
            // The dialog may have closed while the subscribe was in flight.
            match session.try_set_value(Some(Rc::new(opened))) {
                Some(Some(orphan)) => orphan.close().await,
                Some(None) => {}
                None => ready.set(true),
            }
        });
    }

    on_cleanup(move || {
        if let Some(Some(open)) = session.try_update_value(Option::take) {
            leptos::task::spawn_local(async move { open.close().await });
        }
    });

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let can_send = move || send_allowed(ready.get(), &input.get());

    let do_send = move || {
        let text = input.get_untracked();
        if !send_allowed(ready.get_untracked(), &text) {
            return;
        }
        let Some(open) = session.get_value() else {
            return;
        };
        input.set(String::new());
        leptos::task::spawn_local(async move {
            let _ = open.send(&text).await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        match ev.key().as_str() {
            "Enter" if !ev.shift_key() => {
                ev.prevent_default();
                do_send();
            }
            "Escape" => {
                ev.prevent_default();
                on_close.run(());
            }
            _ => {}
        }
    };

    let self_id = move || auth.get().user.map(|u| u.id).unwrap_or_default();
    let status = move || chat.get().status;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--chat" on:click=move |ev| ev.stop_propagation()>
                <div class="chat-modal__head">
                    <VendorAvatar vendor/>
                    <div class="chat-modal__title">
                        <h2>{vendor.name.as_str()}</h2>
                        <span class=move || {
                            format!("chat-modal__status chat-modal__status--{:?}", status()).to_lowercase()
                        }>{move || status_label(status())}</span>
                    </div>
                    <button class="btn chat-modal__close" on:click=move |_| on_close.run(())>"\u{d7}"</button>
                </div>

                <div class="chat-modal__messages" node_ref=messages_ref>
                    {move || {
                        let own = self_id();
                        chat.get()
                            .messages
                            .into_iter()
                            .map(|msg| {
                                let class = if msg.sender_id == own {
                                    "chat-modal__message chat-modal__message--own"
                                } else {
                                    "chat-modal__message"
                                };
                                let initials = msg.sender_initials();
                                let time = clock::format_time(msg.timestamp);
                                view! {
                                    <div class=class>
                                        <SenderAvatar avatar=msg.sender_avatar initials/>
                                        <div class="chat-modal__bubble">
                                            <span class="chat-modal__author">{msg.sender_name}</span>
                                            <p class="chat-modal__text">{msg.text}</p>
                                            <time class="chat-modal__time">{time}</time>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="chat-modal__input-row">
                    <input
                        class="chat-modal__input"
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="btn btn--primary" on:click=move |_| do_send() disabled=move || !can_send()>
                        "Send"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Sender picture, or initials when there is none or it fails to load.
#[component]
fn SenderAvatar(avatar: Option<String>, initials: String) -> impl IntoView {
    let broken = RwSignal::new(false);
    let has_image = avatar.is_some();

    view! {
        <Show
            when=move || has_image && !broken.get()
            fallback={
                let initials = initials.clone();
                move || view! { <span class="chat-modal__avatar chat-modal__avatar--initials">{initials.clone()}</span> }
            }
        >
            <img
                class="chat-modal__avatar"
                src=avatar.clone().unwrap_or_default()
                alt=""
                on:error=move |_| broken.set(true)
            />
        </Show>
    }
}
