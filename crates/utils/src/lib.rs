//! Shared error catalogue for the scriptlens crates.

pub mod errors;
