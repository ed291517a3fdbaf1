//! Infrastructure adapters. Implement outbound ports.
//!
//! LLM provider, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod ui;
