// crates/addrbook-core/src/traits.rs
use crate::common::BookStats;
use crate::error::Result;
use crate::geo::GeoPoint;
use crate::model::{Address, SearchHit};
use serde::{Deserialize, Serialize};

/// Storage backend for strings and floats used by the address book.
///
/// This abstraction allows the crate to swap how textual and floating-point
/// data are stored internally (for example to use more compact types) without
/// changing the public API of accessors that return `&str`/`f64` views.
///
/// Implementors must be `Clone + Send + Sync + 'static` and ensure the
/// associated types can be serialized/deserialized so books can be persisted
/// via bincode.
pub trait StoreBackend: Clone + Send + Sync + 'static {
    type Str: Clone
        + Send
        + Sync
        + std::fmt::Debug
        + Serialize
        + for<'de> Deserialize<'de>
        + AsRef<str>;
    type Float: Copy + Send + Sync + std::fmt::Debug + Serialize + for<'de> Deserialize<'de>;

    fn str_from(s: &str) -> Self::Str;
    fn float_from(f: f64) -> Self::Float;
    fn str_to_string(v: &Self::Str) -> String {
        v.as_ref().to_string()
    }
    fn float_to_f64(v: Self::Float) -> f64;
}

/// The search operations available over a stored address collection.
///
/// Implementors only need a read view of their records; every method here is
/// a pure computation over that view, so concurrent callers need no
/// synchronization beyond whatever guards mutation of the store itself.
pub trait AddressSearch<B: StoreBackend> {
    fn stats(&self) -> BookStats;

    /// Returns a slice of all stored addresses.
    ///
    /// This is the `list_all` view a proximity search consumes: the full
    /// current candidate set, with no pre-filtering by the store.
    fn list_all(&self) -> &[Address<B>];

    /// Looks up a single address by id.
    fn find_by_id(&self, id: u64) -> Option<&Address<B>>;

    /// Case- and accent-insensitive substring search over the text fields
    /// (street, city, region, postal code).
    ///
    /// An empty or whitespace-only query matches nothing.
    fn find_by_substring(&self, substr: &str) -> Vec<&Address<B>>;

    /// Returns every address within `radius_km` of `origin`, ordered by
    /// ascending distance (ties broken by ascending id).
    ///
    /// The boundary is inclusive: a record exactly `radius_km` away is part
    /// of the result. Fails with `InvalidRadius` if `radius_km` is negative.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use addrbook_core::{AddressBook, AddressSearch, StandardBackend};
    /// use addrbook_core::geo::GeoPoint;
    ///
    /// let book = AddressBook::<StandardBackend>::load_from_path("addrbook.bin").unwrap();
    /// let origin = GeoPoint::new(40.7306, -73.9352).unwrap();
    ///
    /// for hit in book.search_within(origin, 50.0).unwrap() {
    ///     println!("{:.2} km — {}", hit.distance_km, hit.address.street());
    /// }
    /// ```
    fn search_within(&self, origin: GeoPoint, radius_km: f64) -> Result<Vec<SearchHit<'_, B>>>;

    /// Raw-pair entry point for [`AddressSearch::search_within`].
    ///
    /// Validates the query pair first; an invalid origin fails with
    /// `InvalidCoordinate` before any candidate is scanned.
    fn search_within_raw(
        &self,
        lat: f64,
        lon: f64,
        radius_km: f64,
    ) -> Result<Vec<SearchHit<'_, B>>> {
        let origin = GeoPoint::new(lat, lon)?;
        self.search_within(origin, radius_km)
    }
}
