//! Error handling example for addrbook-rs
//!
//! This example demonstrates proper error handling and edge cases

use addrbook_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== AddrBook-RS Error Handling Example ===\n");

    let mut book = DefaultAddressBook::new();
    book.insert(AddressDraft {
        street: "1 Liberty St".to_string(),
        city: "New York".to_string(),
        region: "NY".to_string(),
        postal_code: "10005".to_string(),
        latitude: 40.7128,
        longitude: -74.0060,
    })?;

    // Example 1: Out-of-range coordinates are rejected at creation
    println!("--- Example 1: Invalid coordinates ---");
    let bad = book.insert(AddressDraft {
        street: "Nowhere".to_string(),
        city: "Atlantis".to_string(),
        region: String::new(),
        postal_code: String::new(),
        latitude: 91.0,
        longitude: 0.0,
    });
    match bad {
        Ok(a) => println!("  Unexpectedly created #{}", a.id()),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    // Example 2: A partial update re-validates the resolved pair
    println!("--- Example 2: Invalid partial update ---");
    let patch = AddressPatch {
        longitude: Some(-200.0),
        ..Default::default()
    };
    match book.update(1, patch) {
        Ok(a) => println!("  Unexpectedly updated #{}", a.id()),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    // Example 3: Negative search radius
    println!("--- Example 3: Invalid radius ---");
    match book.search_within_raw(40.7306, -73.9352, -5.0) {
        Ok(hits) => println!("  Unexpectedly found {} hits", hits.len()),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    // Example 4: Unknown ids
    println!("--- Example 4: Missing records ---");
    for id in [1u64, 42] {
        match book.remove(id) {
            Ok(a) => println!("  Removed {}", a.display_line()),
            Err(AddrBookError::NotFound(id)) => println!("  Not found: #{id}"),
            Err(e) => return Err(e),
        }
    }
    println!();

    // Example 5: Errors never poison the book
    println!("--- Example 5: Store survives bad requests ---");
    println!("  Addresses still stored: {}", book.stats().addresses);

    Ok(())
}
