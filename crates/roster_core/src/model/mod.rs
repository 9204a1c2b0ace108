//! Domain model for student registrations.
//!
//! # Responsibility
//! - Define the canonical registration record and its closed enumerations.
//! - Separate the raw form payload from the validated, typed input.
//!
//! # Invariants
//! - Every stored registration is identified by a store-assigned `StudentId`.
//! - Records are append-only: there is no update or delete representation.

pub mod registration;
