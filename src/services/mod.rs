//! Service layer containing the glossary pipeline and side-effect helpers.
//!
//! ## Service map
//! - `parser.rs` — line events, block assembly, reading the input file.
//! - `sorter.rs` — ordinal term ordering and duplicate detection.
//! - `html.rs` — escaping, page file names and hrefs.
//! - `index.rs` — index page rendering.
//! - `definition.rs` — token classification and definition page rendering.
//! - `site.rs` — pipeline entry point; writes the output folder.
//! - `config.rs` — TOML defaults merged with CLI flags.
//! - `prompt.rs` — interactive console adapter.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Renderers are pure: they return strings, `site.rs` does the writing.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod definition;
pub mod html;
pub mod index;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod site;
pub mod sorter;
