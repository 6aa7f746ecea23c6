use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the address book.
///
/// Returned by [`AddressSearch::stats`], these counts reflect the
/// materialized in-memory book.
///
/// [`AddressSearch::stats`]: crate::traits::AddressSearch::stats
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BookStats {
    pub addresses: usize,
    /// The id the next inserted address will receive.
    pub next_id: u64,
}
