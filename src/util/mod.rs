//! Browser-facing utilities shared across pages and state modules.

pub mod clock;
pub mod storage;
