//! Shared utilities for the core crate.

pub mod validation;
