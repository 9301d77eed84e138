// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific knowledge about the Network Repository `networks.php` table:
//! *where the values live in the markup* and *how to pull them out*.
//!
//! - `networks` – the downloads listing (`zip_url`, `graph_order`), one record
//!   per table row, rendered as tab-separated text.
//! - `network_table` – every known column of the table, with the usability
//!   filter applied later by `scrape::collect_table`.
//!
//! Specs only read an already-parsed `scraper::Html`. Loading the page and
//! writing output happen elsewhere (`scrape`, `file`).
//!
//! ## Conventions
//! - **Fail fast**: the first row that does not have the expected shape aborts
//!   the whole extraction; rows are never skipped.
//! - Children are counted as *elements* only (whitespace text is ignored).
//! - Offsets and class conventions are constants in `config::consts`.
pub mod networks;
pub mod network_table;
