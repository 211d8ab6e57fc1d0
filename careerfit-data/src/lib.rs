//! File adapters for the Careerfit engine.
//!
//! Responsibilities:
//! - Read CSV item datasets into [`ItemTable`](careerfit_core::ItemTable)s
//!   and validate them against a schema.
//! - Decode dataset schemas and quiz catalogues from JSON.
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `careerfit-scorer`).
//! - All I/O happens once, before the engine serves requests.

#![forbid(unsafe_code)]

mod config;
mod dataset;
mod error;
mod fs;

pub use config::{load_quiz_catalogue, load_schema};
pub use dataset::{load_dataset, load_item_table, read_item_table};
pub use error::DatasetError;
pub use fs::{file_is_file, open_utf8_file};
