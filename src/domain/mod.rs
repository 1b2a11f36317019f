//! Shared data model layer (structs/errors only).
//!
//! ## Files
//! - `models.rs` — glossary entries, build/check reports, JSON envelopes.
//! - `error.rs` — the typed error taxonomy surfaced to the CLI.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are serialized by `--json`. Keep schema-impacting changes
//! synchronized with `docs/contracts/*`.

pub mod error;
pub mod models;
