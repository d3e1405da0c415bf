//! Shared utilities for Irori binaries.

pub mod logger;
