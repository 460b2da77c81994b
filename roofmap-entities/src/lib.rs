#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # roofmap-entities
//!
//! Reusable, agnostic domain entities of the roof installation map.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod anchor;
pub mod category;
pub mod geo;
pub mod id;
pub mod links;
pub mod record;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
