//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `catalog`, `chat`, etc.) so individual
//! components can depend on small focused models. Everything here is plain
//! data plus pure operations; signals wrap these types in `app`.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod onboarding;
pub mod profile;
pub mod ui;
