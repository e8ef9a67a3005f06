//! In-process realtime provider.
//!
//! Fans events out to every subscriber of a channel name within one
//! `MemoryHub`, publisher included, which matches the hosted provider's
//! echo behaviour. Used by tests and as the loopback provider when no
//! realtime endpoint is configured.

#[cfg(test)]
#[path = "realtime_memory_test.rs"]
mod realtime_memory_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::realtime::{ChannelError, ClosedHandler, MessageHandler, RealtimeChannel, RealtimeProvider};
use crate::net::types::{ChannelEvent, Member};
use crate::util::clock;

type HandlerSlot = Rc<RefCell<Option<MessageHandler>>>;
type ClosedSlot = Rc<RefCell<Option<ClosedHandler>>>;

struct Subscriber {
    handle: u64,
    member: Member,
    handler: HandlerSlot,
    closed: ClosedSlot,
    subscribed: Rc<Cell<bool>>,
}

#[derive(Default)]
struct HubInner {
    topics: HashMap<String, Vec<Subscriber>>,
    next_handle: u64,
    next_event: u64,
    offline: bool,
}

/// Shared in-memory pub/sub hub. Clones refer to the same hub.
#[derive(Clone, Default)]
pub struct MemoryHub {
    inner: Rc<RefCell<HubInner>>,
}

impl MemoryHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subscribe and publish fail with a transport error.
    ///
    /// Going offline also drops every live subscription and fires its
    /// closed handler, the way a lost socket would.
    pub fn set_offline(&self, offline: bool) {
        let dropped = {
            let mut inner = self.inner.borrow_mut();
            inner.offline = offline;
            if offline { std::mem::take(&mut inner.topics) } else { HashMap::new() }
        };

        let handlers: Vec<ClosedHandler> = dropped
            .into_values()
            .flatten()
            .filter_map(|sub| {
                sub.subscribed.set(false);
                sub.closed.borrow().clone()
            })
            .collect();

        // Handlers run with the hub unborrowed.
        for handler in handlers {
            handler();
        }
    }

    /// Number of live subscriptions on `name`.
    #[cfg(test)]
    #[must_use]
    pub fn subscriber_count(&self, name: &str) -> usize {
        self.inner.borrow().topics.get(name).map_or(0, Vec::len)
    }

    fn check_online(&self) -> Result<(), ChannelError> {
        if self.inner.borrow().offline {
            return Err(ChannelError::Transport("hub offline".to_owned()));
        }
        Ok(())
    }
}

impl RealtimeProvider for MemoryHub {
    fn channel(&self, name: &str) -> Rc<dyn RealtimeChannel> {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            inner.next_handle += 1;
            inner.next_handle
        };
        Rc::new(MemoryChannel {
            hub: self.clone(),
            name: name.to_owned(),
            handle,
            handler: Rc::new(RefCell::new(None)),
            closed: Rc::new(RefCell::new(None)),
            subscribed: Rc::new(Cell::new(false)),
        })
    }
}

/// One participant's view of a hub channel.
pub struct MemoryChannel {
    hub: MemoryHub,
    name: String,
    handle: u64,
    handler: HandlerSlot,
    closed: ClosedSlot,
    subscribed: Rc<Cell<bool>>,
}

impl MemoryChannel {
    fn detach(&self) {
        let mut inner = self.hub.inner.borrow_mut();
        if let Some(subs) = inner.topics.get_mut(&self.name) {
            subs.retain(|s| s.handle != self.handle);
            if subs.is_empty() {
                inner.topics.remove(&self.name);
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl RealtimeChannel for MemoryChannel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn subscribe(&self, member: &Member) -> Result<(), ChannelError> {
        self.hub.check_online()?;
        self.detach();
        self.hub
            .inner
            .borrow_mut()
            .topics
            .entry(self.name.clone())
            .or_default()
            .push(Subscriber {
                handle: self.handle,
                member: member.clone(),
                handler: self.handler.clone(),
                closed: self.closed.clone(),
                subscribed: self.subscribed.clone(),
            });
        self.subscribed.set(true);
        Ok(())
    }

    fn on_message(&self, handler: MessageHandler) {
        *self.handler.borrow_mut() = Some(handler);
    }

    fn on_closed(&self, handler: ClosedHandler) {
        *self.closed.borrow_mut() = Some(handler);
    }

    async fn publish(&self, event_type: &str, payload: serde_json::Value, member: &Member) -> Result<(), ChannelError> {
        self.hub.check_online()?;
        if !self.subscribed.get() {
            return Err(ChannelError::NotSubscribed(self.name.clone()));
        }

        let (event, handlers) = {
            let mut inner = self.hub.inner.borrow_mut();
            inner.next_event += 1;
            let event = ChannelEvent {
                id: format!("evt-{}", inner.next_event),
                event_type: event_type.to_owned(),
                user_id: member.user_id.clone(),
                metadata: Some(member.metadata.clone()),
                timestamp: payload.get("timestamp").and_then(serde_json::Value::as_i64).unwrap_or_else(clock::now_ms),
                data: payload,
            };
            let handlers: Vec<MessageHandler> = inner
                .topics
                .get(&self.name)
                .into_iter()
                .flatten()
                .filter_map(|s| s.handler.borrow().clone())
                .collect();
            (event, handlers)
        };

        // Handlers run with the hub unborrowed so they may publish in turn.
        for handler in handlers {
            handler(event.clone());
        }
        Ok(())
    }

    async fn unsubscribe(&self) -> Result<(), ChannelError> {
        self.detach();
        self.subscribed.set(false);
        Ok(())
    }

    async fn presence(&self) -> Result<Vec<Member>, ChannelError> {
        if !self.subscribed.get() {
            return Err(ChannelError::NotSubscribed(self.name.clone()));
        }
        let inner = self.hub.inner.borrow();
        Ok(inner
            .topics
            .get(&self.name)
            .map(|subs| subs.iter().map(|s| s.member.clone()).collect())
            .unwrap_or_default())
    }
}
