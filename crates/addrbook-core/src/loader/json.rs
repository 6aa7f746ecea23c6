// crates/addrbook-core/src/loader/json.rs

//! JSON interchange for the address book.
//!
//! The book's durable format is bincode; JSON exists for exchanging records
//! with other deployments (the shape mirrors a plain REST representation:
//! one object per record, ids included). Imports pass every record back
//! through the coordinate validation gate, so a hand-edited file cannot
//! smuggle an out-of-range pair into the store.

use crate::error::{AddrBookError, Result};
use crate::geo;
use crate::model::AddressBook;
use crate::traits::StoreBackend;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The interchange form of one record: plain strings and floats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonAddress {
    pub id: u64,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl<B: StoreBackend> AddressBook<B> {
    /// Renders the book as a pretty-printed JSON array of records.
    pub fn to_json_string(&self) -> Result<String> {
        let rows: Vec<JsonAddress> = self
            .addresses
            .iter()
            .map(|a| JsonAddress {
                id: a.id,
                street: a.street().to_string(),
                city: a.city().to_string(),
                region: a.region().to_string(),
                postal_code: a.postal_code().to_string(),
                latitude: a.lat(),
                longitude: a.lon(),
            })
            .collect();
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    /// Parses a JSON array of records into a book.
    ///
    /// Ids are preserved and the id counter resumes past the highest one.
    /// A record with an out-of-range coordinate pair fails the whole import
    /// with `InvalidCoordinate`; a file that doesn't parse as the expected
    /// shape fails with `MalformedInput`.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let rows: Vec<JsonAddress> = serde_json::from_str(data)
            .map_err(|e| AddrBookError::MalformedInput(e.to_string()))?;

        let mut book = Self::new();
        for row in rows {
            geo::validate(row.latitude, row.longitude)?;
            book.next_id = book.next_id.max(row.id + 1);
            book.addresses.push(crate::model::Address {
                id: row.id,
                street: B::str_from(&row.street),
                city: B::str_from(&row.city),
                region: B::str_from(&row.region),
                postal_code: B::str_from(&row.postal_code),
                lat: B::float_from(row.latitude),
                lon: B::float_from(row.longitude),
            });
        }
        Ok(book)
    }

    /// Writes the JSON rendering of the book to `path`.
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        tracing::debug!(addresses = self.addresses.len(), path = %path.display(), "exported JSON");
        Ok(())
    }

    /// Reads a book from the JSON file at `path`.
    pub fn import_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            AddrBookError::BookNotFound(format!("{} ({})", path.display(), e))
        })?;
        let book = Self::from_json_str(&data)?;
        tracing::debug!(addresses = book.addresses.len(), path = %path.display(), "imported JSON");
        Ok(book)
    }
}
