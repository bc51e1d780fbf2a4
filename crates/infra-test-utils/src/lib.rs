//! Shared test utilities for the infra workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`layout`] - [`TestLayout`] temp directory with `infra/`, `config/` and
//!   `certs/` folders

pub mod layout;

pub use layout::TestLayout;
