use clap::{Parser, Subcommand};

/// CLI arguments for addrbook
#[derive(Debug, Parser)]
#[command(
    name = "addrbook",
    version,
    about = "CLI for managing an address book with proximity search"
)]
pub struct CliArgs {
    /// Path to the book file (default: addrbook.bin / addrbook.bin.gz)
    #[arg(short = 'b', long = "book", global = true)]
    pub book: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the book contents
    Stats,

    /// List all addresses
    List,

    /// Show one address by id
    Show {
        /// Record id
        id: u64,
    },

    /// Create a new address
    Add {
        #[arg(long)]
        street: String,
        #[arg(long)]
        city: String,
        #[arg(long, default_value = "")]
        region: String,
        #[arg(long = "postal", default_value = "")]
        postal_code: String,
        /// Latitude in degrees, -90 to 90
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, -180 to 180
        #[arg(long)]
        lon: f64,
    },

    /// Update fields of an existing address
    Update {
        /// Record id
        id: u64,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long = "postal")]
        postal_code: Option<String>,
        /// New latitude; the resolved (lat, lon) pair is re-validated
        #[arg(long)]
        lat: Option<f64>,
        /// New longitude; the resolved (lat, lon) pair is re-validated
        #[arg(long)]
        lon: Option<f64>,
    },

    /// Delete an address permanently
    Remove {
        /// Record id
        id: u64,
    },

    /// Find all addresses within a radius of a point
    Near {
        /// Query latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Query longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Search radius in kilometers (inclusive boundary)
        #[arg(long)]
        radius: f64,
    },

    /// Search addresses containing a substring (case/accent-insensitive)
    Find {
        /// Substring to search
        query: String,
    },

    /// Write the book as JSON
    #[cfg(feature = "json")]
    Export {
        /// Output path
        path: String,
    },

    /// Replace the book with records from a JSON file
    #[cfg(feature = "json")]
    Import {
        /// Input path
        path: String,
    },
}
