//! addrbook — Command-line interface for addrbook-core
//!
//! This binary manages a persisted address book from your terminal. It
//! supports printing basic statistics, listing and inspecting records,
//! the full create/update/remove lifecycle, substring search, and a
//! great-circle proximity search.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ addrbook stats
//!
//! - Create an address
//!   $ addrbook add --street "1 Liberty St" --city "New York" \
//!       --region NY --postal 10005 --lat 40.7128 --lon -74.0060
//!
//! - Everything within 50 km of a point
//!   $ addrbook near --lat 40.7306 --lon -73.9352 --radius 50
//!
//! - Search by substring
//!   $ addrbook find liberty
//!
//! Data file
//! ---------
//!
//! By default the book lives in ./addrbook.bin.gz (or .bin without the
//! `compact` feature) and is created on first use. Use `--book <path>` to
//! point somewhere else. Set RUST_LOG=debug for tracing output.
mod args;

use crate::args::{CliArgs, Commands};
use addrbook_core::{
    AddressDraft, AddressPatch, AddressSearch, DefaultAddressBook,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    // Determine the book file (default name tracks the compact feature)
    let book_path = args
        .book
        .unwrap_or_else(DefaultAddressBook::default_book_filename);

    let mut book = DefaultAddressBook::load_or_default(&book_path)?;

    match args.command {
        Commands::Stats => {
            let stats = book.stats();
            println!("Book statistics:");
            println!("  Addresses: {}", stats.addresses);
            println!("  Next id: {}", stats.next_id);
        }

        Commands::List => {
            if book.list_all().is_empty() {
                println!("Book is empty.");
            }
            for a in book.list_all() {
                println!("{}", a.display_line());
            }
        }

        Commands::Show { id } => match book.find_by_id(id) {
            Some(a) => {
                println!("Address #{}", a.id());
                println!("Street: {}", a.street());
                println!("City: {}", a.city());
                println!("Region: {}", a.region());
                println!("Postal code: {}", a.postal_code());
                println!("Latitude: {}", a.lat());
                println!("Longitude: {}", a.lon());
            }
            None => {
                eprintln!("No address with id {id}");
            }
        },

        Commands::Add {
            street,
            city,
            region,
            postal_code,
            lat,
            lon,
        } => {
            let created = book.insert(AddressDraft {
                street,
                city,
                region,
                postal_code,
                latitude: lat,
                longitude: lon,
            })?;
            println!("Created {}", created.display_line());
            book.save_to_path(&book_path)?;
        }

        Commands::Update {
            id,
            street,
            city,
            region,
            postal_code,
            lat,
            lon,
        } => {
            let updated = book.update(
                id,
                AddressPatch {
                    street,
                    city,
                    region,
                    postal_code,
                    latitude: lat,
                    longitude: lon,
                },
            )?;
            println!("Updated {}", updated.display_line());
            book.save_to_path(&book_path)?;
        }

        Commands::Remove { id } => {
            let removed = book.remove(id)?;
            println!("Removed {}", removed.display_line());
            book.save_to_path(&book_path)?;
        }

        Commands::Near { lat, lon, radius } => {
            let hits = book.search_within_raw(lat, lon, radius)?;
            if hits.is_empty() {
                println!("No addresses within {radius} km of ({lat}, {lon})");
            } else {
                for hit in hits {
                    println!("{:>9.3} km  {}", hit.distance_km, hit.address.display_line());
                }
            }
        }

        Commands::Find { query } => {
            let matches = book.find_by_substring(&query);
            if matches.is_empty() {
                println!("No addresses matching: {query}");
            } else {
                for a in matches {
                    println!("{}", a.display_line());
                }
            }
        }

        #[cfg(feature = "json")]
        Commands::Export { path } => {
            book.export_json(&path)?;
            println!("Exported {} addresses to {path}", book.list_all().len());
        }

        #[cfg(feature = "json")]
        Commands::Import { path } => {
            let imported = DefaultAddressBook::import_json(&path)?;
            println!("Imported {} addresses from {path}", imported.list_all().len());
            imported.save_to_path(&book_path)?;
        }
    }

    Ok(())
}
