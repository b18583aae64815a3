//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate analysis, persistence and live feeds into note use-cases.
//! - Keep FFI and CLI layers decoupled from storage details.

pub mod note_service;
