//! Shared building blocks for the `ftpsweep` workspace.
//!
//! Everything here is plain data: the run configuration, the domain models
//! passed between the scan engine and its consumers, and the error taxonomy.
//! Nothing in this crate performs I/O.

pub mod config;
pub mod error;
pub mod network;
pub mod scan;
