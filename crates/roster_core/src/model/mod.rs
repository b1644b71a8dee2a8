//! Domain model for roster and session data.
//!
//! # Responsibility
//! - Define canonical data structures used by the roster and session stores.
//! - Keep the serialized shape stable for the session slot and exports.
//!
//! # Invariants
//! - Every student is identified by a store-assigned `StudentId`.
//! - Course values always belong to the closed `Course` set.
//! - Session identities are never linked to student records.

pub mod course;
pub mod identity;
pub mod student;
