#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # placemap-entities
//!
//! Reusable, agnostic domain entities for placemap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod animation;
pub mod geo;
pub mod id;
pub mod place;
pub mod wiki;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
