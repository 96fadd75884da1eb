//! # placemap-core
//!
//! Keeps the markers of a map widget consistent with the loaded places,
//! the filter text and the selected place.
//!
//! The map widget itself is an external collaborator that is only
//! accessed through the [`gateways::map::MapWidget`] trait.

pub mod filter;
pub mod gateways;
pub mod marker;
pub mod popup;
pub mod reconciler;
pub mod usecases;

mod error;

pub use self::error::Error;

pub use placemap_entities as entities;

pub type Result<T> = std::result::Result<T, Error>;
