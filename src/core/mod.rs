//! Core library components.
//!
//! Fetching bundles, rendering them as shell text, and loading them into an
//! environment.

pub mod config;
pub mod constants;
pub mod domain;
pub mod environment;
pub mod fetch;
pub mod loader;
pub mod shell;
pub mod validation;
