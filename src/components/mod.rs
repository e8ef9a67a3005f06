//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the directory chrome and dialogs while reading and
//! writing shared state from Leptos context providers.

pub mod chat_modal;
pub mod search_panel;
pub mod select_field;
pub mod site_header;
pub mod text_field;
pub mod vendor_card;
pub mod vendor_profile_modal;
