//! Domain model for the crowd-funding catalog.
//!
//! # Responsibility
//! - Define the validated project record.
//! - Hold the one immutable collection shown during a session.
//!
//! # Invariants
//! - Every record in a catalog passed validation.
//! - A catalog is never reordered or mutated after construction.

pub mod catalog;
pub mod project;
