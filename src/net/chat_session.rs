//! Chat session: one realtime channel joined to one stored transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opening the chat modal for a vendor opens a session for the
//! (current user, vendor) pair. The session seeds the transcript from local
//! storage (or a vendor welcome), subscribes to the pair's channel, and from
//! then on merges local sends and inbound `chat` events into one log.
//!
//! LIFECYCLE
//! =========
//! `Disconnected -> Connecting -> Connected`, or `Error` if subscribe fails.
//! A connection lost while open moves the session to `Error`.
//! `close` unsubscribes unconditionally and returns to `Disconnected`.
//! There is no reconnect.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (storage, subscribe, publish, presence) is logged and
//! swallowed. Local sends are never rolled back.

#[cfg(test)]
#[path = "chat_session_test.rs"]
mod chat_session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::realtime::{RealtimeChannel, RealtimeProvider};
use crate::net::types::{AuthUser, Member, MemberMetadata};
use crate::state::catalog::VendorRecord;
use crate::state::chat::{self, CHAT_EVENT, ChatMessage, ChatState, ConnectionStatus};
use crate::state::profile::UserType;
use crate::util::clock;
use crate::util::storage::KeyValueStore;

/// Called with the new state after every change.
pub type ChangeListener = Rc<dyn Fn(&ChatState)>;

/// Channel identity for `user`. Users without a stored profile contact
/// vendors as landlords.
#[must_use]
pub fn member_for(user: &AuthUser, user_type: Option<UserType>) -> Member {
    Member {
        user_id: user.id.clone(),
        metadata: MemberMetadata {
            display_name: user.label().to_owned(),
            user_type: user_type.unwrap_or(UserType::Landlord).as_str().to_owned(),
            avatar: None,
        },
    }
}

/// Shared pieces the inbound handler also needs.
struct Transcript {
    key: String,
    store: Rc<dyn KeyValueStore>,
    state: RefCell<ChatState>,
    on_change: ChangeListener,
}

impl Transcript {
    fn update(&self, apply: impl FnOnce(&mut ChatState) -> bool) {
        let changed = apply(&mut self.state.borrow_mut());
        if !changed {
            return;
        }
        let snapshot = self.state.borrow().clone();
        (self.on_change)(&snapshot);
    }

    fn set_status(&self, status: ConnectionStatus) {
        self.update(|s| {
            let changed = s.status != status;
            s.status = status;
            changed
        });
    }

    fn persist(&self) {
        let messages = self.state.borrow().messages.clone();
        if let Err(e) = chat::save_transcript(self.store.as_ref(), &self.key, &messages) {
            log::warn!("saving transcript {} failed: {e}", self.key);
        }
    }

    /// Append and persist; returns whether the message was new.
    fn record(&self, message: ChatMessage) -> bool {
        let mut appended = false;
        self.update(|s| {
            appended = s.append(message);
            appended
        });
        if appended {
            self.persist();
        }
        appended
    }
}

pub struct ChatSession {
    member: Member,
    channel: Rc<dyn RealtimeChannel>,
    transcript: Rc<Transcript>,
}

impl ChatSession {
    /// Open the session for `user` and `vendor`.
    ///
    /// Always returns a session; a failed subscribe leaves it in
    /// [`ConnectionStatus::Error`] with the seeded transcript still visible.
    pub async fn open(
        provider: &dyn RealtimeProvider,
        store: Rc<dyn KeyValueStore>,
        user: &AuthUser,
        user_type: Option<UserType>,
        vendor: &VendorRecord,
        on_change: ChangeListener,
    ) -> Self {
        let key = chat::chat_key(&user.id, vendor.id);
        let member = member_for(user, user_type);
        let channel = provider.channel(&key);
        let transcript = Rc::new(Transcript {
            key,
            store,
            state: RefCell::new(ChatState::default()),
            on_change,
        });

        transcript.set_status(ConnectionStatus::Connecting);
        seed(&transcript, vendor);

        let inbound = transcript.clone();
        let self_id = user.id.clone();
        channel.on_message(Rc::new(move |event| {
            if let Some(message) = ChatMessage::from_event(&event, &self_id) {
                inbound.record(message);
            }
        }));

        let lost = transcript.clone();
        channel.on_closed(Rc::new(move || {
            log::warn!("chat channel {} lost its connection", lost.key);
            lost.set_status(ConnectionStatus::Error);
        }));

        let session = Self { member, channel, transcript };
        match session.channel.subscribe(&session.member).await {
            Ok(()) => {
                log::info!("chat channel {} connected", session.channel.name());
                session.transcript.set_status(ConnectionStatus::Connected);
                session.refresh_presence().await;
            }
            Err(e) => {
                log::error!("chat channel {} failed to connect: {e}", session.channel.name());
                session.transcript.set_status(ConnectionStatus::Error);
            }
        }
        session
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ChatState {
        self.transcript.state.borrow().clone()
    }

    /// Append `text` locally, persist, then publish.
    ///
    /// Returns the appended message, or `None` for blank input.
    pub async fn send(&self, text: &str) -> Option<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = chat::outbound_message(&self.member, text, clock::now_ms());
        self.transcript.record(message.clone());

        if let Err(e) = self.channel.publish(CHAT_EVENT, message.payload(), &self.member).await {
            log::warn!("publishing to {} failed: {e}", self.channel.name());
        }
        Some(message)
    }

    /// Re-query channel presence into `participants`.
    pub async fn refresh_presence(&self) {
        match self.channel.presence().await {
            Ok(members) => self.transcript.update(|s| {
                let changed = s.participants != members;
                s.participants = members;
                changed
            }),
            Err(e) => log::warn!("presence for {} unavailable: {e}", self.channel.name()),
        }
    }

    /// Leave the channel. The stored transcript is kept.
    pub async fn close(&self) {
        if let Err(e) = self.channel.unsubscribe().await {
            log::warn!("unsubscribing {} failed: {e}", self.channel.name());
        }
        self.transcript.set_status(ConnectionStatus::Disconnected);
    }
}

/// Load the stored transcript, or start one with the vendor's welcome.
fn seed(transcript: &Transcript, vendor: &VendorRecord) {
    let stored = match chat::load_transcript(transcript.store.as_ref(), &transcript.key) {
        Ok(stored) => stored,
        Err(e) => {
            log::warn!("loading transcript {} failed: {e}", transcript.key);
            None
        }
    };

    match stored {
        Some(messages) => transcript.update(|s| {
            s.messages = messages;
            true
        }),
        None => {
            transcript.record(chat::welcome_message(vendor, clock::now_ms()));
        }
    }
}
