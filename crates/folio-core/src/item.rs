//! Item: the universal content record of the Folio store.
//!
//! An item corresponds to a page in a wiki system: some text plus the
//! metadata around it. An item is intentionally just a container of data.
//! It has no methods that change its own state; callers assign the public
//! fields directly. This keeps items trivial to copy, store, and serialize
//! in a diversity of ways.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Opaque handle to the external storage collaborator that produced an
/// item. The core never calls into it; serialization layers may use it to
/// resolve lazily loaded content.
pub trait StoreHandle: fmt::Debug + Send + Sync {}

/// Shared reference to a [`StoreHandle`].
///
/// Cloning an item shares the handle rather than duplicating the
/// collaborator behind it.
pub type StoreRef = Arc<dyn StoreHandle>;

/// The current UTC time as a wiki timestring (`YYYYMMDDHHMMSS`).
///
/// Timestrings compare numerically in chronological order, which is what
/// [`Collection::modified`](crate::Collection::modified) relies on.
pub fn current_timestring() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}

/// A titled content record plus its metadata.
///
/// The `title` is the item's identity: it is required at construction and
/// keys the item inside a bag. Everything else is populated by the caller
/// after construction.
///
/// The `bag` and `recipe` fields record provenance, the name of the
/// container an item was served out of. They are usually set by internal
/// code, and they drive the digest the content-specialized collection
/// computes over listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// The name of the item. Required, unique within a bag.
    pub title: String,

    /// Timestring for when this item was created. Empty when unknown.
    pub created: String,

    /// Timestring for when this item last changed. Defaults to now.
    pub modified: String,

    /// Personage that last changed this item, if recorded.
    pub modifier: Option<String>,

    /// Descriptive tags, in the order the author wrote them.
    pub tags: Vec<String>,

    /// Arbitrary extended fields.
    pub fields: HashMap<String, String>,

    /// The content itself. Usually wikitext in some form, can be anything.
    pub text: Option<String>,

    /// Revision number assigned by a storage layer.
    pub revision: Option<u64>,

    /// Name of the bag this item came from, if any.
    pub bag: Option<String>,

    /// Name of the recipe this item came from, if any.
    pub recipe: Option<String>,

    /// The store that retrieved this item, if any. A reference to a
    /// collaborator, not part of the item's value: excluded from equality
    /// and serialization.
    #[serde(skip)]
    pub store: Option<StoreRef>,
}

impl Item {
    /// Create a new item. A non-empty title is required.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            title,
            created: String::new(),
            modified: current_timestring(),
            modifier: None,
            tags: Vec::new(),
            fields: HashMap::new(),
            text: None,
            revision: None,
            bag: None,
            recipe: None,
            store: None,
        })
    }

    /// Create a new item already attributed to a bag.
    ///
    /// Usually used by internal code when materializing a bag's contents.
    pub fn with_bag(
        title: impl Into<String>,
        bag: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut item = Self::new(title)?;
        item.bag = Some(bag.into());
        Ok(item)
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.created == other.created
            && self.modified == other.modified
            && self.modifier == other.modifier
            && self.tags == other.tags
            && self.fields == other.fields
            && self.text == other.text
            && self.revision == other.revision
            && self.bag == other.bag
            && self.recipe == other.recipe
    }
}

impl Eq for Item {}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
