//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for the roster.
//! - Isolate collection details from service orchestration.
//!
//! # Invariants
//! - Repositories never validate record fields; that is the form layer's job.
//! - Repository APIs return semantic errors (`NotFound`) for unknown ids.

pub mod roster_repo;
