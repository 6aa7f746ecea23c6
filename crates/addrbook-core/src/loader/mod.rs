// crates/addrbook-core/src/loader/mod.rs

//! # Book Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates payload
//! encoding to the model (bincode bytes, see `model/load.rs`).

use crate::error::{AddrBookError, Result};
use crate::model::{AddressBook, BOOK_SUFFIX};
use crate::traits::StoreBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "json")]
mod json;

#[cfg(feature = "json")]
pub use json::JsonAddress;

impl<B: StoreBackend + Serialize + DeserializeOwned> AddressBook<B> {
    /// Default filename for a persisted book in the working directory.
    ///
    /// The suffix tracks the `compact` feature, so compressed and
    /// uncompressed deployments never read each other's files by accident.
    pub fn default_book_filename() -> String {
        format!("addrbook{BOOK_SUFFIX}")
    }

    /// Loads a persisted book from `path`.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = Self::open_stream(path)?;

        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(AddrBookError::Io)?;

        let book = Self::from_bytes(&data).map_err(AddrBookError::Bincode)?;
        tracing::debug!(addresses = book.addresses.len(), path = %path.display(), "loaded book");
        Ok(book)
    }

    /// Loads the book at `path`, or starts an empty one if no file exists
    /// there yet. First-run convenience for the CLI.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_path(path)
        } else {
            tracing::debug!(path = %path.display(), "no book on disk, starting empty");
            Ok(Self::new())
        }
    }

    /// Persists the book to `path`, replacing whatever was there.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes().map_err(AddrBookError::Bincode)?;

        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        #[cfg(feature = "compact")]
        {
            use flate2::write::GzEncoder;
            use flate2::Compression;
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
        }

        #[cfg(not(feature = "compact"))]
        {
            let mut writer = writer;
            writer.write_all(&bytes)?;
            writer.flush()?;
        }

        tracing::debug!(addresses = self.addresses.len(), path = %path.display(), "saved book");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // INTERNAL TRANSPORT HELPER (DRY)
    // -----------------------------------------------------------------------

    /// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
    /// Returns a generic Reader so the caller doesn't care about the
    /// compression.
    fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
        let file = File::open(path).map_err(|e| {
            AddrBookError::BookNotFound(format!("{} ({})", path.display(), e))
        })?;

        let reader = BufReader::new(file);

        // Centralized Gzip Logic
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            Ok(Box::new(GzDecoder::new(reader)))
        }

        #[cfg(not(feature = "compact"))]
        {
            Ok(Box::new(reader))
        }
    }
}
