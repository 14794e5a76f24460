//! Cleanup engine for sweep.
//!
//! The pipeline runs orchestrator → walker (per configured root) →
//! classifier / liveness probe (per file) → safe transfer or delete,
//! with per-folder statistics merged back up into the final report.
//! Everything below the orchestrator converts failures into per-file
//! skips; only a tripped wildcard safety guard aborts a run.

pub mod archive;
pub mod checksum;
pub mod classify;
pub mod guard;
pub mod orchestrator;
pub mod probe;
pub mod transfer;
pub mod walker;

pub use orchestrator::run;
pub use walker::walk;
