//! # Predikit Library
//!
//! This library exposes the Predikit CLI commands for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export predikit_core for convenience
pub use predikit_core;
