//! Core types for sweep: configuration, error enums, and the shared
//! data model (file records, walk accumulators, the final report).
//!
//! This crate has no I/O beyond reading and writing the configuration
//! file; the cleanup engine lives in `sweep-engine`.

pub mod config;
pub mod errors;
pub mod types;

pub use config::{CliOverrides, ConfigStore, QuarantineTarget, RetentionPolicy, SweepConfig};
pub use errors::{ArchiveError, ConfigError, SweepError, TransferError};
pub use types::{
    format_size, ArchiveResult, FileRecord, Mode, Report, TransferRecord, WalkResult,
};
