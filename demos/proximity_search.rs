//! Proximity search example for addrbook-rs
//!
//! Seeds a book with a few landmark addresses and runs great-circle
//! searches with growing radii.

use addrbook_rs::prelude::*;

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

fn main() -> Result<()> {
    println!("=== AddrBook-RS Proximity Search Example ===\n");

    let mut book = DefaultAddressBook::new();
    book.insert(draft("350 Fifth Ave", "New York", 40.7484, -73.9857))?;
    book.insert(draft("4 Pennsylvania Plaza", "New York", 40.7505, -73.9934))?;
    book.insert(draft("1600 Pennsylvania Ave", "Washington", 38.8977, -77.0365))?;
    book.insert(draft("2 Sunset Blvd", "Los Angeles", 34.0522, -118.2437))?;
    book.insert(draft("Marienplatz 8", "München", 48.1374, 11.5755))?;

    let origin = GeoPoint::new(40.7306, -73.9352)?;
    println!(
        "Query point: ({}, {}) — Earth radius constant: {EARTH_RADIUS_KM} km\n",
        origin.lat(),
        origin.lon()
    );

    for radius in [5.0, 50.0, 500.0, 25_000.0] {
        let hits = book.search_within(origin, radius)?;
        println!("--- Within {radius} km: {} hit(s) ---", hits.len());
        for hit in hits {
            println!(
                "{:>10.2} km  {} ({})",
                hit.distance_km,
                hit.address.street(),
                hit.address.city()
            );
        }
        println!();
    }

    println!("=== Example completed successfully ===");
    Ok(())
}
