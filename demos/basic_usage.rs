//! Basic usage example for addrbook-rs
//!
//! This example demonstrates how to:
//! - Build an address book and create records
//! - Read, update, and delete records
//! - Search by substring
//! - Persist the book and load it back

use addrbook_rs::prelude::*;

fn draft(street: &str, city: &str, region: &str, postal: &str, lat: f64, lon: f64) -> AddressDraft {
    AddressDraft {
        street: street.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        postal_code: postal.to_string(),
        latitude: lat,
        longitude: lon,
    }
}

fn main() -> Result<()> {
    println!("=== AddrBook-RS Basic Usage Example ===\n");

    // Start an empty book
    let mut book = DefaultAddressBook::new();

    // Example 1: Create records
    println!("--- Example 1: Create addresses ---");
    book.insert(draft("1 Liberty St", "New York", "NY", "10005", 40.7128, -74.0060))?;
    book.insert(draft("2 Sunset Blvd", "Los Angeles", "CA", "90026", 34.0522, -118.2437))?;
    book.insert(draft("Marienplatz 8", "München", "BY", "80331", 48.1374, 11.5755))?;
    println!("Created {} addresses\n", book.stats().addresses);

    // Example 2: Read one back
    println!("--- Example 2: Read a record by id ---");
    if let Some(a) = book.find_by_id(1) {
        println!("{}", a.display_line());
    }
    println!();

    // Example 3: Update (text-only patch; coordinates untouched)
    println!("--- Example 3: Update a record ---");
    let updated = book.update(
        1,
        AddressPatch {
            street: Some("1 Liberty Street".to_string()),
            ..Default::default()
        },
    )?;
    println!("{}\n", updated.display_line());

    // Example 4: Substring search is case- and accent-insensitive
    println!("--- Example 4: Substring search ---");
    for a in book.find_by_substring("munchen") {
        println!("{}", a.display_line());
    }
    println!();

    // Example 5: Delete
    println!("--- Example 5: Delete a record ---");
    let removed = book.remove(2)?;
    println!("Removed {}\n", removed.display_line());

    // Example 6: Persist and reload
    println!("--- Example 6: Save and load ---");
    let path = std::env::temp_dir().join("addrbook-demo.bin");
    book.save_to_path(&path)?;
    let reloaded = DefaultAddressBook::load_from_path(&path)?;
    println!(
        "Reloaded {} addresses from {}",
        reloaded.stats().addresses,
        path.display()
    );
    let _ = std::fs::remove_file(&path);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
