// crates/addrbook-core/src/model/search.rs
use crate::common::BookStats;
use crate::error::{AddrBookError, Result};
use crate::geo::{self, GeoPoint};
use crate::model::record::{Address, AddressBook};
use crate::text::fold_key;
use crate::traits::{AddressSearch, StoreBackend};

/// A single proximity-search result: the record plus its computed
/// great-circle distance from the query point, in kilometers.
///
/// Lives only for the duration of one search response.
#[derive(Debug)]
pub struct SearchHit<'a, B: StoreBackend> {
    pub address: &'a Address<B>,
    pub distance_km: f64,
}

impl<B: StoreBackend> AddressSearch<B> for AddressBook<B> {
    fn stats(&self) -> BookStats {
        BookStats {
            addresses: self.addresses.len(),
            next_id: self.next_id,
        }
    }

    fn list_all(&self) -> &[Address<B>] {
        &self.addresses
    }

    fn find_by_id(&self, id: u64) -> Option<&Address<B>> {
        // Linear scan; the book is small and contiguous
        self.addresses.iter().find(|a| a.id == id)
    }

    fn find_by_substring(&self, substr: &str) -> Vec<&Address<B>> {
        let q = fold_key(substr);
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }

        // FLAT LOOP over every text field
        for a in &self.addresses {
            let matched = fold_key(a.street.as_ref()).contains(&q)
                || fold_key(a.city.as_ref()).contains(&q)
                || fold_key(a.region.as_ref()).contains(&q)
                || fold_key(a.postal_code.as_ref()).contains(&q);
            if matched {
                out.push(a);
            }
        }
        out
    }

    fn search_within(&self, origin: GeoPoint, radius_km: f64) -> Result<Vec<SearchHit<'_, B>>> {
        // NaN compares false here, so it is rejected alongside negatives
        if !(radius_km >= 0.0) {
            return Err(AddrBookError::InvalidRadius(radius_km));
        }

        let mut out: Vec<SearchHit<'_, B>> = Vec::new();

        // Brute-force scan of the full candidate set. O(n) per search is the
        // accepted tradeoff at this scale; a spatial index could slot in
        // behind this same contract.
        for a in &self.addresses {
            let dist = geo::distance_from_km(origin, a.lat(), a.lon());
            // Inclusive boundary: a record exactly radius_km away is a hit
            if dist <= radius_km {
                out.push(SearchHit {
                    address: a,
                    distance_km: dist,
                });
            }
        }

        // Deterministic order: ascending distance, ties by id. Storage
        // iteration order is not a contract.
        out.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then_with(|| a.address.id.cmp(&b.address.id))
        });

        tracing::debug!(
            hits = out.len(),
            candidates = self.addresses.len(),
            radius_km,
            "proximity search"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{AddressDraft, DefaultAddressBook};

    fn draft(street: &str, city: &str, lat: f64, lon: f64) -> AddressDraft {
        AddressDraft {
            street: street.to_string(),
            city: city.to_string(),
            region: String::new(),
            postal_code: String::new(),
            latitude: lat,
            longitude: lon,
        }
    }

    fn two_coasts() -> DefaultAddressBook {
        let mut book = DefaultAddressBook::new();
        book.insert(draft("1 Liberty St", "New York", 40.7128, -74.0060))
            .unwrap();
        book.insert(draft("2 Sunset Blvd", "Los Angeles", 34.0522, -118.2437))
            .unwrap();
        book
    }

    #[test]
    fn near_new_york_finds_only_new_york() {
        let book = two_coasts();
        let hits = book.search_within_raw(40.7306, -73.9352, 50.0).unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].address.id, 1);
        assert!(hits[0].distance_km < 50.0);
    }

    #[test]
    fn far_candidate_is_excluded_with_known_distance() {
        let book = two_coasts();
        let origin = GeoPoint::new(40.7306, -73.9352).unwrap();
        let la = &book.addresses[1];

        let dist = geo::distance_from_km(origin, la.lat(), la.lon());
        assert!(
            (dist - 3935.0).abs() < 40.0,
            "expected ~3935 km to LA, got {dist}"
        );
    }

    #[test]
    fn radius_zero_returns_exact_coincidences_only() {
        let mut book = two_coasts();
        book.insert(draft("1 Liberty St Annex", "New York", 40.7128, -74.0060))
            .unwrap();

        let hits = book.search_within_raw(40.7128, -74.0060, 0.0).unwrap();
        let ids: Vec<u64> = hits.iter().map(|h| h.address.id).collect();
        assert_eq!(ids, vec![1, 3]);
        for h in &hits {
            assert!(h.distance_km.abs() < 1e-9);
        }
    }

    #[test]
    fn empty_book_returns_empty_result() {
        let book = DefaultAddressBook::new();
        let hits = book.search_within_raw(0.0, 0.0, 100.0).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn negative_radius_is_rejected() {
        let book = two_coasts();
        let err = book.search_within_raw(0.0, 0.0, -5.0).unwrap_err();
        assert!(matches!(err, AddrBookError::InvalidRadius(r) if r == -5.0));
    }

    #[test]
    fn invalid_query_point_never_scans() {
        let book = two_coasts();
        let err = book.search_within_raw(91.0, 0.0, 10.0).unwrap_err();
        assert!(matches!(err, AddrBookError::InvalidCoordinate { .. }));
    }

    #[test]
    fn planet_sized_radius_includes_everything() {
        let book = two_coasts();
        // Larger than any possible surface distance (π·R)
        let hits = book.search_within_raw(0.0, 0.0, 30_000.0).unwrap();
        assert_eq!(hits.len(), book.addresses.len());
    }

    #[test]
    fn results_are_ordered_by_distance_then_id() {
        let mut book = DefaultAddressBook::new();
        // Insert out of distance order relative to the origin
        book.insert(draft("far", "B", 2.0, 0.0)).unwrap();
        book.insert(draft("near", "A", 1.0, 0.0)).unwrap();
        // Coincident pair to exercise the id tiebreak
        book.insert(draft("tie-b", "C", 3.0, 0.0)).unwrap();
        book.insert(draft("tie-a", "C", 3.0, 0.0)).unwrap();

        let hits = book.search_within_raw(0.0, 0.0, 1000.0).unwrap();
        let ids: Vec<u64> = hits.iter().map(|h| h.address.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);

        for pair in hits.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn substring_search_folds_case_and_accents() {
        let mut book = DefaultAddressBook::new();
        book.insert(draft("Münchner Straße 1", "München", 48.1374, 11.5755))
            .unwrap();
        book.insert(draft("1 Liberty St", "New York", 40.7128, -74.0060))
            .unwrap();

        let hits = book.find_by_substring("munchner");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        // City field is searched too
        assert_eq!(book.find_by_substring("YORK").len(), 1);
        // Blank query matches nothing
        assert!(book.find_by_substring("   ").is_empty());
    }

    #[test]
    fn stats_reflect_the_book() {
        let book = two_coasts();
        let stats = book.stats();
        assert_eq!(stats.addresses, 2);
        assert_eq!(stats.next_id, 3);
    }
}
