//! addrbook-cli
//! ============
//!
//! Command-line interface for the `addrbook-core` address book.
//!
//! This crate primarily provides a binary (`addrbook`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install addrbook-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! addrbook --help
//! addrbook stats
//! addrbook add --street "1 Liberty St" --city "New York" --lat 40.7128 --lon -74.0060
//! addrbook near --lat 40.7306 --lon -73.9352 --radius 50
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! [`addrbook-core`] crate directly.
//!
//! [`addrbook-core`]: https://docs.rs/addrbook-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
