//! `slopewatch` - environmental readings and landslide-risk monitoring
//!
//! This library validates environmental readings, keeps a bounded history of
//! them in a key-value store, and provides the aggregates, display bands,
//! mitigation checklist and risk-area data used by the monitoring front ends.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod history;
pub mod logging;
pub mod mitigation;
pub mod record;
pub mod risk;
pub mod stats;
pub mod storage;
pub mod validation;

pub use classify::{AirQualityBand, TemperatureBand};
pub use config::Config;
pub use entry::DataEntryForm;
pub use error::{Error, Result};
pub use history::HistoryView;
pub use logging::init_logging;
pub use record::EnvironmentalRecord;
pub use stats::{aggregate, Aggregate};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RecordStore, SortOrder};
pub use validation::{validate, Field, RawReading, Reading, ValidationError};
