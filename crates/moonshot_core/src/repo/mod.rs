//! Lookup abstractions over the loaded catalog.
//!
//! # Responsibility
//! - Define the lookup contracts the join/service layers depend on.
//! - Keep those layers independent of how the dataset was loaded.
//!
//! # Invariants
//! - Implementations are read-only.

pub mod catalog;
