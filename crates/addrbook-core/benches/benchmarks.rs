use addrbook_core::geo::haversine_km;
use addrbook_core::{AddressDraft, AddressSearch, DefaultAddressBook};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A deterministic synthetic book: a grid of records across the globe.
fn synthetic_book(n: usize) -> DefaultAddressBook {
    let mut book = DefaultAddressBook::new();
    for i in 0..n {
        let lat = -85.0 + (i % 171) as f64;
        let lon = -175.0 + ((i * 7) % 351) as f64;
        book.insert(AddressDraft {
            street: format!("{i} Bench St"),
            city: "Gridville".to_string(),
            region: String::new(),
            postal_code: String::new(),
            latitude: lat,
            longitude: lon,
        })
        .expect("grid coordinates are in range");
    }
    book
}

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_km", |b| {
        b.iter(|| {
            haversine_km(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(34.0522),
                black_box(-118.2437),
            )
        })
    });
}

fn bench_search_within(c: &mut Criterion) {
    let book = synthetic_book(10_000);
    c.bench_function("search_within 10k candidates", |b| {
        b.iter(|| {
            book.search_within_raw(black_box(40.7306), black_box(-73.9352), black_box(500.0))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_haversine, bench_search_within);
criterion_main!(benches);
