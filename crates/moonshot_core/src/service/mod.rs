//! Core use-case services.
//!
//! # Responsibility
//! - Join missions with astronaut records.
//! - Offer list/detail entry points to presentation callers.
//!
//! # Invariants
//! - Services only read the catalog they borrow.

pub mod crew;
pub mod mission_service;
