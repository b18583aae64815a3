//! Flutter-facing bindings for the AI Notes core.

pub mod api;
