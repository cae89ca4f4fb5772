//! CLI command implementations.

pub mod dedupe;

pub use dedupe::DedupeCommand;
