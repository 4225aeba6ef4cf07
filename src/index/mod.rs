//! Lookup Index Module
//!
//! Builds the two in-memory indexes answered by the query layer.
//!
//! ## Core Concepts
//! - **Normalization**: drug names are trimmed and lowercased before they are used as keys.
//! - **Unordered pairs**: `DrugPair` stores its two names in lexicographic order, so
//!   `(A, B)` and `(B, A)` hash and compare equal.
//! - **Target index**: pair -> targets both drugs bind to, precomputed per target group.
//! - **Interaction index**: pair -> condition -> PRR, grouped from adverse-event reports.
//!
//! Both indexes are built once at startup and never mutated afterwards.

pub mod interactions;
pub mod pair;
pub mod targets;
