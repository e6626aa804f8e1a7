//! Collections: append-only containers with a running content digest.
//!
//! A collection accumulates entries in insertion order while feeding a
//! Blake3 hasher with each entry's identity-relevant bytes and tracking the
//! highest modification timestamp seen. The digest is order-dependent:
//! callers add entries in the order that must be reproducible for the
//! digest to match. There is no removal.
//!
//! What an entry contributes to the digest is decided by its
//! [`CollectionItem`] implementation, so one container type serves both
//! plain byte-like entries and content [`Item`]s.

use blake3::Hasher;

use crate::item::Item;

/// The capability an entry needs to live in a [`Collection`].
pub trait CollectionItem {
    /// Feed this entry's identity-relevant bytes to the running digest.
    fn digest_input(&self, hasher: &mut Hasher);

    /// The numeric modification timestamp, when the entry carries one.
    ///
    /// Entries without a usable timestamp leave the collection's
    /// `modified` untouched.
    fn modified(&self) -> Option<u64> {
        None
    }
}

/// Content items digest by provenance plus title.
///
/// Two items with the same title served out of different containers must
/// produce different change-detection tokens, so the container name is fed
/// before the title. The recipe wins over the bag when both are set.
impl CollectionItem for Item {
    fn digest_input(&self, hasher: &mut Hasher) {
        let container = self
            .recipe
            .as_deref()
            .or(self.bag.as_deref())
            .unwrap_or("");
        hasher.update(container.as_bytes());
        hasher.update(self.title.as_bytes());
    }

    fn modified(&self) -> Option<u64> {
        self.modified.parse().ok()
    }
}

impl CollectionItem for String {
    fn digest_input(&self, hasher: &mut Hasher) {
        hasher.update(self.as_bytes());
    }
}

impl CollectionItem for Vec<u8> {
    fn digest_input(&self, hasher: &mut Hasher) {
        hasher.update(self);
    }
}

/// An append-only ordered container with a running digest.
///
/// The digest is a pure function of the ordered sequence of digest inputs
/// accumulated so far, and is readable at any point between adds.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    hasher: Hasher,
    modified: u64,
    items: Vec<T>,
}

impl<T: CollectionItem> Collection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            hasher: Hasher::new(),
            modified: 0,
            items: Vec::new(),
        }
    }

    /// Append an entry.
    ///
    /// Feeds the entry's digest input to the running hasher, then raises
    /// the collection's `modified` if the entry carries a higher timestamp.
    pub fn add(&mut self, item: T) {
        item.digest_input(&mut self.hasher);
        if let Some(modified) = item.modified() {
            if modified > self.modified {
                self.modified = modified;
            }
        }
        self.items.push(item);
    }

    /// The running digest as a hex string.
    ///
    /// Reflects everything added so far; adding more entries later is fine.
    pub fn hexdigest(&self) -> String {
        hex::encode(self.hasher.finalize().as_bytes())
    }

    /// The highest modification timestamp seen, 0 when none.
    pub fn modified(&self) -> u64 {
        self.modified
    }

    /// Whether `item` was added to this collection, by value equality.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Iterate the entries in insertion order.
    ///
    /// Iteration borrows the collection: it can be repeated and
    /// interleaved with further [`add`](Self::add) calls.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of entries accumulated.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: CollectionItem> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The content-specialized collection used for listings of [`Item`]s.
///
/// Digest and timestamp behavior are those of `Collection<Item>`. The two
/// flags describe what kind of listing this is, so response-shaping layers
/// can render a revision history or a search result differently from a
/// plain listing.
#[derive(Debug, Clone, Default)]
pub struct Items {
    collection: Collection<Item>,

    /// True when the items are revisions of a single item.
    pub is_revisions: bool,

    /// True when the items are a search result.
    pub is_search: bool,
}

impl Items {
    /// Create an empty listing with both flags off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. See [`Collection::add`].
    pub fn add(&mut self, item: Item) {
        self.collection.add(item);
    }

    /// Whether `item` was added to this listing, by value equality.
    pub fn contains(&self, item: &Item) -> bool {
        self.collection.contains(item)
    }

    /// The running digest as a hex string.
    pub fn hexdigest(&self) -> String {
        self.collection.hexdigest()
    }

    /// The highest modification timestamp seen, 0 when none.
    pub fn modified(&self) -> u64 {
        self.collection.modified()
    }

    /// Iterate the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.collection.iter()
    }

    /// Number of items accumulated.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }
}

impl<'a> IntoIterator for &'a Items {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.collection.iter()
    }
}
