//! Client-side form validation.
//!
//! # Responsibility
//! - Turn raw textual form input into validated creation payloads.
//! - Report failures per field so each message can sit next to its input.
//!
//! # Invariants
//! - A form that validates always yields a `NewStudent` within all field
//!   constraints; the roster store itself never re-checks them.

pub mod student_form;
