//! Shared infrastructure helpers: configuration.

pub mod config;
