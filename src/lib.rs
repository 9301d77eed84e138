// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Result, RowError, ScrapeError};
pub use specs::networks::{ExtractedRecord, ResultSet};
