//! # Folio Core
//!
//! Pure primitives for the Folio content store: items, collections, and
//! digests.
//!
//! This crate contains no I/O, no locking, no storage. It is pure computation
//! over content records.
//!
//! ## Key Types
//!
//! - [`Item`] - A titled content record with metadata
//! - [`Collection`] - An append-only container with a running content digest
//! - [`Items`] - The content-specialized collection used for listings
//!
//! ## Digests
//!
//! Collections accumulate a Blake3 digest over their entries, in insertion
//! order, and track the highest modification timestamp seen. Caching layers
//! read the digest as a change-detection token (an ETag source) and the
//! timestamp as a Last-Modified source. See [`collection`].

pub mod collection;
pub mod error;
pub mod item;

pub use collection::{Collection, CollectionItem, Items};
pub use error::ValidationError;
pub use item::{current_timestring, Item, StoreHandle, StoreRef};
