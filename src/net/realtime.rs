//! Realtime publish/subscribe channel abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Chat rides on a hosted pub/sub service. The app only needs a handful of
//! operations from it: open a named channel, subscribe with an identity,
//! receive events, publish, unsubscribe, and ask who is present. These
//! traits are that surface. `MemoryHub` implements it in-process; `WsProvider`
//! (browser only) speaks JSON envelopes to a hosted endpoint.
//!
//! Channels are single-threaded (`Rc`, `?Send` futures) like everything else
//! in the WASM client.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::realtime_memory::MemoryHub;
use crate::net::types::{ChannelEvent, Member};

/// Errors produced by realtime channel operations.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The operation needs an active subscription.
    #[error("channel {0} is not subscribed")]
    NotSubscribed(String),

    /// The underlying connection is gone.
    #[error("channel {0} is closed")]
    Closed(String),

    /// The transport failed to open or send.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider sent something we could not understand.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Callback invoked for each inbound event, in delivery order.
pub type MessageHandler = Rc<dyn Fn(ChannelEvent)>;

/// Callback invoked when the transport drops without an unsubscribe.
pub type ClosedHandler = Rc<dyn Fn()>;

/// A single named realtime topic.
#[async_trait::async_trait(?Send)]
pub trait RealtimeChannel {
    fn name(&self) -> &str;

    /// Join the channel as `member`.
    async fn subscribe(&self, member: &Member) -> Result<(), ChannelError>;

    /// Register the inbound event handler, replacing any previous one.
    fn on_message(&self, handler: MessageHandler);

    /// Register the connection-lost handler, replacing any previous one.
    /// It does not fire for a requested `unsubscribe`.
    fn on_closed(&self, handler: ClosedHandler);

    /// Publish `payload` as an event of `event_type` attributed to `member`.
    async fn publish(&self, event_type: &str, payload: serde_json::Value, member: &Member) -> Result<(), ChannelError>;

    /// Leave the channel. Safe to call when not subscribed.
    async fn unsubscribe(&self) -> Result<(), ChannelError>;

    /// Members currently subscribed.
    async fn presence(&self) -> Result<Vec<Member>, ChannelError>;
}

/// Factory for named channels.
pub trait RealtimeProvider {
    fn channel(&self, name: &str) -> Rc<dyn RealtimeChannel>;
}

/// Provider selected by `config`: the hosted WebSocket endpoint in the
/// browser when one is configured, otherwise an in-tab loopback hub.
#[must_use]
pub fn provider_for(config: &ClientConfig) -> Rc<dyn RealtimeProvider> {
    #[cfg(feature = "hydrate")]
    {
        if !config.uses_loopback_realtime() {
            return Rc::new(crate::net::realtime_ws::WsProvider::new(config.realtime_url.clone()));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        if !config.uses_loopback_realtime() {
            log::info!("realtime endpoint {} needs a browser; using loopback", config.realtime_url);
        }
    }
    Rc::new(MemoryHub::new())
}
