//! Network-facing adapters: identity provider, realtime channels, and the
//! chat session that joins a channel to a stored transcript.

pub mod chat_session;
pub mod identity;
pub mod realtime;
pub mod realtime_memory;
pub mod realtime_ws;
pub mod types;
