//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the append-only data access contract for registrations.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes only accept validated `RegistrationInput` values.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod registration_repo;
