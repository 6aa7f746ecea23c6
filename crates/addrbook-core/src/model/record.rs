// crates/addrbook-core/src/model/record.rs
use crate::error::{AddrBookError, Result};
use crate::geo;
use crate::traits::StoreBackend;
use serde::{Deserialize, Serialize};

/// The master book struct: a flat, contiguous collection of address records.
///
/// Records are owned by the book and independent of each other. Mutation
/// always passes through the coordinate validation gate, so every persisted
/// record satisfies lat ∈ [-90, 90], lon ∈ [-180, 180].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddressBook<B: StoreBackend> {
    /// Master list of all addresses. Contiguous memory, scanned linearly.
    pub addresses: Vec<Address<B>>,
    /// Monotonic id counter. Ids are never reused, even after a remove.
    pub next_id: u64,
}

/// A single address record.
///
/// The text fields are opaque: presence is all the book asks of them.
/// Coordinates are mandatory and validated at every mutation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Address<B: StoreBackend> {
    /// Assigned at creation, immutable thereafter.
    pub id: u64,
    pub street: B::Str,
    pub city: B::Str,
    pub region: B::Str,
    pub postal_code: B::Str,
    /// Degrees north, always in [-90, 90].
    pub lat: B::Float,
    /// Degrees east, always in [-180, 180].
    pub lon: B::Float,
}

/// Input for creating a record. All fields required.
///
/// Backend-independent so a transport layer can deserialize it directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddressDraft {
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Input for updating a record. Every field optional.
///
/// If either coordinate is supplied, the *resolved pair* (new-or-existing
/// latitude, new-or-existing longitude) is validated, never a single axis in
/// isolation. A patch touching neither coordinate skips re-validation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl AddressPatch {
    fn touches_coordinates(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some()
    }
}

// Standard backend for convenience
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StandardBackend;

impl StoreBackend for StandardBackend {
    type Str = String;
    type Float = f64;

    fn str_from(s: &str) -> Self::Str {
        s.to_string()
    }

    fn float_from(f: f64) -> Self::Float {
        f
    }

    fn float_to_f64(v: Self::Float) -> f64 {
        v
    }
}

/// The book most users want: `String` text fields, `f64` coordinates.
pub type DefaultAddressBook = AddressBook<StandardBackend>;

impl<B: StoreBackend> Default for AddressBook<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: StoreBackend> AddressBook<B> {
    /// An empty book. Ids start at 1.
    pub fn new() -> Self {
        Self {
            addresses: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a record from a draft, validating its coordinate pair first.
    ///
    /// Returns a reference to the stored record with its assigned id.
    pub fn insert(&mut self, draft: AddressDraft) -> Result<&Address<B>> {
        geo::validate(draft.latitude, draft.longitude)?;

        let id = self.next_id;
        self.next_id += 1;

        let idx = self.addresses.len();
        self.addresses.push(Address {
            id,
            street: B::str_from(&draft.street),
            city: B::str_from(&draft.city),
            region: B::str_from(&draft.region),
            postal_code: B::str_from(&draft.postal_code),
            lat: B::float_from(draft.latitude),
            lon: B::float_from(draft.longitude),
        });

        tracing::debug!(id, lat = draft.latitude, lon = draft.longitude, "inserted address");
        Ok(&self.addresses[idx])
    }

    /// Applies a patch to the record with the given id.
    ///
    /// A validation failure leaves the stored record completely untouched:
    /// the resolved coordinate pair is checked before any field is written.
    pub fn update(&mut self, id: u64, patch: AddressPatch) -> Result<&Address<B>> {
        let idx = self
            .addresses
            .iter()
            .position(|a| a.id == id)
            .ok_or(AddrBookError::NotFound(id))?;

        if patch.touches_coordinates() {
            let current = &self.addresses[idx];
            let lat = patch.latitude.unwrap_or_else(|| B::float_to_f64(current.lat));
            let lon = patch.longitude.unwrap_or_else(|| B::float_to_f64(current.lon));
            geo::validate(lat, lon)?;
        }

        let rec = &mut self.addresses[idx];
        if let Some(s) = patch.street {
            rec.street = B::str_from(&s);
        }
        if let Some(s) = patch.city {
            rec.city = B::str_from(&s);
        }
        if let Some(s) = patch.region {
            rec.region = B::str_from(&s);
        }
        if let Some(s) = patch.postal_code {
            rec.postal_code = B::str_from(&s);
        }
        if let Some(v) = patch.latitude {
            rec.lat = B::float_from(v);
        }
        if let Some(v) = patch.longitude {
            rec.lon = B::float_from(v);
        }

        tracing::debug!(id, "updated address");
        Ok(&self.addresses[idx])
    }

    /// Removes the record with the given id permanently.
    ///
    /// Returns the removed record. No soft-delete, no versioning; the id is
    /// not reused.
    pub fn remove(&mut self, id: u64) -> Result<Address<B>> {
        let idx = self
            .addresses
            .iter()
            .position(|a| a.id == id)
            .ok_or(AddrBookError::NotFound(id))?;

        tracing::debug!(id, "removed address");
        Ok(self.addresses.remove(idx))
    }
}

impl<B: StoreBackend> Address<B> {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn street(&self) -> &str {
        self.street.as_ref()
    }

    pub fn city(&self) -> &str {
        self.city.as_ref()
    }

    pub fn region(&self) -> &str {
        self.region.as_ref()
    }

    pub fn postal_code(&self) -> &str {
        self.postal_code.as_ref()
    }

    pub fn lat(&self) -> f64 {
        B::float_to_f64(self.lat)
    }

    pub fn lon(&self) -> f64 {
        B::float_to_f64(self.lon)
    }

    /// One-line display form, the way the CLI prints a record.
    pub fn display_line(&self) -> String {
        format!(
            "#{} {} — {}, {} {} ({:.4}, {:.4})",
            self.id,
            self.street.as_ref(),
            self.city.as_ref(),
            self.region.as_ref(),
            self.postal_code.as_ref(),
            self.lat(),
            self.lon()
        )
    }
}
