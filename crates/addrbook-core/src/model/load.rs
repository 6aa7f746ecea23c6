// crates/addrbook-core/src/model/load.rs
use crate::model::record::AddressBook;
use crate::traits::StoreBackend;
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

impl<B: StoreBackend + Serialize + DeserializeOwned> AddressBook<B> {
    /// Reconstructs a book from its serialized binary form.
    ///
    /// Uses standard bincode options with a 256MB limit to prevent malicious
    /// data bombs.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(256 * 1024 * 1024)
            .allow_trailing_bytes()
            .deserialize(data)
    }

    /// Serializes the book to the binary form [`AddressBook::from_bytes`]
    /// reads.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_limit(256 * 1024 * 1024)
            .serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::record::{AddressDraft, DefaultAddressBook};

    #[test]
    fn bytes_round_trip_preserves_the_book() {
        let mut book = DefaultAddressBook::new();
        book.insert(AddressDraft {
            street: "Marienplatz 8".to_string(),
            city: "München".to_string(),
            region: "BY".to_string(),
            postal_code: "80331".to_string(),
            latitude: 48.1374,
            longitude: 11.5755,
        })
        .unwrap();
        book.remove(1).unwrap();
        book.insert(AddressDraft {
            street: "1 Liberty St".to_string(),
            city: "New York".to_string(),
            region: "NY".to_string(),
            postal_code: "10005".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
        })
        .unwrap();

        let bytes = book.to_bytes().unwrap();
        let restored = DefaultAddressBook::from_bytes(&bytes).unwrap();

        assert_eq!(restored.addresses.len(), 1);
        assert_eq!(restored.addresses[0].id, 2);
        assert_eq!(restored.addresses[0].city(), "New York");
        // The id counter survives persistence, so ids stay unique
        assert_eq!(restored.next_id, 3);
    }

    #[test]
    fn garbage_bytes_fail_cleanly() {
        assert!(DefaultAddressBook::from_bytes(&[0xff, 0x00, 0x13, 0x37]).is_err());
    }
}
