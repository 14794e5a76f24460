//! Error handling for sweep.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod archive_error;
pub mod config_error;
pub mod sweep_error;
pub mod transfer_error;

pub use archive_error::ArchiveError;
pub use config_error::ConfigError;
pub use sweep_error::SweepError;
pub use transfer_error::TransferError;
