//! WebSocket realtime provider for the hosted pub/sub endpoint.
//!
//! WIRE FORMAT
//! ===========
//! Every frame is one JSON object tagged by `action`.
//!
//! Client to provider: `subscribe {channel, member}`, `publish {channel,
//! type, data, member}`, `unsubscribe {channel}`, `presence {channel}`.
//!
//! Provider to client: `message {channel, event}`, `presence {channel,
//! members}`, `error {channel, message}`.
//!
//! Each channel owns one socket, opened on subscribe and closed on
//! unsubscribe. A dropped socket is not reopened; the channel's closed
//! handler fires instead. A presence query with no
//! reply within five seconds fails as closed.

#[cfg(test)]
#[path = "realtime_ws_test.rs"]
mod realtime_ws_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{ChannelEvent, Member};

/// Frames sent to the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum OutboundEnvelope {
    Subscribe {
        channel: String,
        member: Member,
    },
    Publish {
        channel: String,
        #[serde(rename = "type")]
        event_type: String,
        data: serde_json::Value,
        member: Member,
    },
    Unsubscribe {
        channel: String,
    },
    Presence {
        channel: String,
    },
}

/// Frames received from the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum InboundEnvelope {
    Message { channel: String, event: ChannelEvent },
    Presence { channel: String, members: Vec<Member> },
    Error { channel: String, message: String },
}

/// Parse a text frame, keeping only frames addressed to `channel`.
///
/// Unparseable frames return `None` so one bad frame never stops the
/// receive loop.
#[must_use]
pub fn parse_inbound(raw: &str, channel: &str) -> Option<InboundEnvelope> {
    let envelope = serde_json::from_str::<InboundEnvelope>(raw).ok()?;
    let target = match &envelope {
        InboundEnvelope::Message { channel, .. }
        | InboundEnvelope::Presence { channel, .. }
        | InboundEnvelope::Error { channel, .. } => channel,
    };
    (target == channel).then_some(envelope)
}

#[cfg(feature = "hydrate")]
pub use browser::{WsChannel, WsProvider};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::{mpsc, oneshot};
    use futures::future::{Either, select};

    use super::{InboundEnvelope, OutboundEnvelope, parse_inbound};
    use crate::net::realtime::{ChannelError, ClosedHandler, MessageHandler, RealtimeChannel, RealtimeProvider};
    use crate::net::types::Member;

    /// Provider opening one socket per channel against `url`.
    #[derive(Clone, Debug)]
    pub struct WsProvider {
        url: String,
    }

    impl WsProvider {
        #[must_use]
        pub fn new(url: impl Into<String>) -> Self {
            Self { url: url.into() }
        }
    }

    impl RealtimeProvider for WsProvider {
        fn channel(&self, name: &str) -> Rc<dyn RealtimeChannel> {
            Rc::new(WsChannel {
                url: self.url.clone(),
                name: name.to_owned(),
                outbox: Rc::new(RefCell::new(None)),
                handler: Rc::new(RefCell::new(None)),
                closed: Rc::new(RefCell::new(None)),
                pending_presence: Rc::new(RefCell::new(None)),
            })
        }
    }

    const PRESENCE_TIMEOUT_MS: u32 = 5_000;

    type Outbox = Rc<RefCell<Option<mpsc::UnboundedSender<String>>>>;
    type PresenceSlot = Rc<RefCell<Option<oneshot::Sender<Vec<Member>>>>>;

    pub struct WsChannel {
        url: String,
        name: String,
        outbox: Outbox,
        handler: Rc<RefCell<Option<MessageHandler>>>,
        closed: Rc<RefCell<Option<ClosedHandler>>>,
        pending_presence: PresenceSlot,
    }

    impl WsChannel {
        fn send(&self, envelope: &OutboundEnvelope) -> Result<(), ChannelError> {
            let json = serde_json::to_string(envelope).map_err(|e| ChannelError::Protocol(e.to_string()))?;
            let outbox = self.outbox.borrow();
            let Some(tx) = outbox.as_ref() else {
                return Err(ChannelError::NotSubscribed(self.name.clone()));
            };
            tx.unbounded_send(json).map_err(|_| ChannelError::Closed(self.name.clone()))
        }

        fn open(&self) -> Result<(), ChannelError> {
            use futures::{SinkExt, StreamExt};
            use gloo_net::websocket::Message;
            use gloo_net::websocket::futures::WebSocket;

            let ws = WebSocket::open(&self.url).map_err(|e| ChannelError::Transport(e.to_string()))?;
            let (mut ws_write, mut ws_read) = ws.split();
            let (tx, mut rx) = mpsc::unbounded::<String>();
            *self.outbox.borrow_mut() = Some(tx);

            let name = self.name.clone();
            leptos::task::spawn_local(async move {
                while let Some(frame) = rx.next().await {
                    if let Err(e) = ws_write.send(Message::Text(frame)).await {
                        log::warn!("realtime send failed on {name}: {e}");
                        break;
                    }
                }
                let _ = ws_write.close().await;
            });

            let name = self.name.clone();
            let outbox = self.outbox.clone();
            let handler = self.handler.clone();
            let closed = self.closed.clone();
            let pending_presence = self.pending_presence.clone();
            leptos::task::spawn_local(async move {
                while let Some(msg) = ws_read.next().await {
                    let text = match msg {
                        Ok(Message::Text(text)) => text,
                        Ok(Message::Bytes(_)) => continue,
                        Err(e) => {
                            log::warn!("realtime receive failed on {name}: {e}");
                            break;
                        }
                    };
                    match parse_inbound(&text, &name) {
                        Some(InboundEnvelope::Message { event, .. }) => {
                            let current = handler.borrow().clone();
                            if let Some(handler) = current {
                                handler(event);
                            }
                        }
                        Some(InboundEnvelope::Presence { members, .. }) => {
                            if let Some(reply) = pending_presence.borrow_mut().take() {
                                let _ = reply.send(members);
                            }
                        }
                        Some(InboundEnvelope::Error { message, .. }) => {
                            log::warn!("realtime provider error on {name}: {message}");
                        }
                        None => {}
                    }
                }
                log::info!("realtime socket for {name} closed");
                pending_presence.borrow_mut().take();
                // An outbox still in place means nobody asked for the close.
                let lost = outbox.borrow_mut().take().is_some();
                if lost {
                    let current = closed.borrow().clone();
                    if let Some(closed) = current {
                        closed();
                    }
                }
            });

            Ok(())
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RealtimeChannel for WsChannel {
        fn name(&self) -> &str {
            &self.name
        }

        async fn subscribe(&self, member: &Member) -> Result<(), ChannelError> {
            if self.outbox.borrow().is_none() {
                self.open()?;
            }
            self.send(&OutboundEnvelope::Subscribe { channel: self.name.clone(), member: member.clone() })
        }

        fn on_message(&self, handler: MessageHandler) {
            *self.handler.borrow_mut() = Some(handler);
        }

        fn on_closed(&self, handler: ClosedHandler) {
            *self.closed.borrow_mut() = Some(handler);
        }

        async fn publish(&self, event_type: &str, payload: serde_json::Value, member: &Member) -> Result<(), ChannelError> {
            self.send(&OutboundEnvelope::Publish {
                channel: self.name.clone(),
                event_type: event_type.to_owned(),
                data: payload,
                member: member.clone(),
            })
        }

        async fn unsubscribe(&self) -> Result<(), ChannelError> {
            if self.outbox.borrow().is_none() {
                return Ok(());
            }
            let result = self.send(&OutboundEnvelope::Unsubscribe { channel: self.name.clone() });
            // Dropping the sender ends the write loop, which closes the socket.
            self.outbox.borrow_mut().take();
            result
        }

        async fn presence(&self) -> Result<Vec<Member>, ChannelError> {
            let (reply, answer) = oneshot::channel();
            *self.pending_presence.borrow_mut() = Some(reply);
            self.send(&OutboundEnvelope::Presence { channel: self.name.clone() })?;
            let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(PRESENCE_TIMEOUT_MS));
            match select(answer, timeout).await {
                Either::Left((Ok(members), _)) => Ok(members),
                Either::Left((Err(_), _)) | Either::Right(_) => {
                    self.pending_presence.borrow_mut().take();
                    Err(ChannelError::Closed(self.name.clone()))
                }
            }
        }
    }
}
