// crates/addrbook-core/src/lib.rs

//! Address book with geographic coordinates.
//!
//! Records pass a coordinate validation gate on every mutation, and the
//! flagship query is a great-circle proximity search (Haversine over a mean
//! Earth radius of 6371 km). See [`geo`] for the math, [`model`] for the
//! record store, [`loader`] for persistence.

pub mod common;
pub mod error;
pub mod geo;
pub mod loader; // The public loader
pub mod model;
pub mod text; // Fold-key normalization for substring search
pub mod traits;

// Re-exports
pub use crate::error::{AddrBookError, Result};
pub use model::{
    Address, AddressBook, AddressDraft, AddressPatch, DefaultAddressBook, SearchHit,
    StandardBackend,
};
pub use crate::common::BookStats;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{AddressSearch, StoreBackend};
pub use crate::geo::{GeoPoint, EARTH_RADIUS_KM};

#[cfg(feature = "json")]
pub use crate::loader::JsonAddress;
