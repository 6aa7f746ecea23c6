//! addrbook-rs — workspace façade crate.
//!
//! Re-exports [`addrbook_core`] so the demos under `demos/` have a single
//! import surface. Library users should depend on `addrbook-core` directly.

pub use addrbook_core::*;

pub mod prelude {
    pub use addrbook_core::geo::{GeoPoint, EARTH_RADIUS_KM};
    pub use addrbook_core::{
        AddrBookError, Address, AddressBook, AddressDraft, AddressPatch, AddressSearch,
        BookStats, DefaultAddressBook, Result, SearchHit, StandardBackend, StoreBackend,
    };
}
