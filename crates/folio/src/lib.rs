//! # Folio
//!
//! The in-memory core of a wiki-style content management backend: titled
//! content items, the bags that keep unique copies of them, and the
//! collections that digest them for change detection.
//!
//! ## Overview
//!
//! - **Item**: A titled content record with metadata. Plain data; callers
//!   assign the public fields directly.
//! - **Bag**: A named, uniqueness-keyed container of item copies. Last
//!   write wins on duplicate titles. Safe to share between request
//!   handlers.
//! - **Collection**: An append-only container that accumulates a Blake3
//!   digest over its entries in insertion order and tracks the highest
//!   modification timestamp. Serves caching layers as an ETag and
//!   Last-Modified source.
//!
//! Persistence, wire formats, markup rendering, and policy enforcement all
//! live in layers above this crate and consume it through `Bag::list`,
//! `Collection::hexdigest`, and `Bag::policy`.
//!
//! ## Usage
//!
//! ```rust
//! use folio::{Bag, Item, Items};
//!
//! fn example() -> folio::Result<()> {
//!     let bag = Bag::new("wiki")?;
//!
//!     let mut page = Item::new("HomePage")?;
//!     page.text = Some("Welcome".to_string());
//!     bag.add(&page);
//!
//!     // The bag holds a copy: further edits stay local.
//!     page.text = Some("draft".to_string());
//!     assert_eq!(bag.get("HomePage")?.text.as_deref(), Some("Welcome"));
//!
//!     // Digest a listing for change detection.
//!     let mut listing = Items::new();
//!     for item in bag.list() {
//!         listing.add(item);
//!     }
//!     let _etag = listing.hexdigest();
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `folio::core` - Items, collections, digests
//! - `folio::store` - Bags and policies

pub mod error;

// Re-export component crates
pub use folio_core as core;
pub use folio_store as store;

// Re-export main types for convenience
pub use error::{FolioError, Result};

pub use folio_core::{
    current_timestring, Collection, CollectionItem, Item, Items, StoreHandle, StoreRef,
    ValidationError,
};
pub use folio_store::{Bag, Policy, StoreError};
