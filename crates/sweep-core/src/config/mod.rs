//! Configuration system for sweep.
//! TOML-based: compiled defaults, then the config file, then `SWEEP_*`
//! environment variables, then CLI overrides.

pub mod policy;
pub mod quarantine;
pub mod store;
pub mod sweep_config;

pub use policy::RetentionPolicy;
pub use quarantine::QuarantineTarget;
pub use store::ConfigStore;
pub use sweep_config::{default_config_path, CliOverrides, SweepConfig};
