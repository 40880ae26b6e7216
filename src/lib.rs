//! Insertion-ordered hash collections for Rust.
//!
//! This crate provides [`OrderedMap`] and [`OrderedSet`], hash-based containers
//! that iterate in the order their keys were first inserted:
//!
//! - Re-inserting a present key updates its value but keeps its position
//! - Removing a key and inserting it again moves it to the end
//! - Serialization (with the `serde` feature) preserves the order in both
//!   directions
//!
//! # Example
//!
//! ```
//! use insertion_order::{OrderedMap, OrderedSet};
//!
//! let mut scores = OrderedMap::new();
//! scores.insert("Carol", 92);
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 95);
//!
//! // Standard map operations work as expected
//! assert_eq!(scores.get("Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Iteration follows first insertion, not key order
//! assert_eq!(scores.keys().copied().collect::<Vec<_>>(), ["Carol", "Alice", "Bob"]);
//!
//! let mut tags = OrderedSet::from(["b", "a"]);
//! tags.insert("c");
//! tags.insert("a");
//! assert_eq!(tags.iter().copied().collect::<Vec<_>>(), ["b", "a", "c"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **`serde`** (default) - `Serialize`/`Deserialize` for both containers. Maps
//!   encode as objects and require string keys, sets encode as arrays
//! - **`json`** (default) - The [`json`] module, `serde_json` wrappers that report
//!   failures as [`Error`]
//!
//! # Implementation
//!
//! Entries live in a hash table alongside the sequence number their key was
//! given on first insertion. Sequence numbers only ever grow, so deleting an
//! entry never requires touching any other entry. Ordered views sort by
//! sequence when they are created, making iteration O(n log n) to start and
//! lookups O(1).

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

#[cfg(feature = "json")]
pub mod json;
pub mod ordered_map;
pub mod ordered_set;

pub use error::Error;
pub use ordered_map::OrderedMap;
pub use ordered_set::OrderedSet;
