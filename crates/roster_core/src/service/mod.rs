//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case level APIs.
//! - Keep front ends decoupled from storage details and from the system clock.

pub mod clock;
pub mod registration_service;
