//! Bag: a named, uniqueness-keyed container of item copies.
//!
//! A bag owns independent copies of the items added to it, keyed by title.
//! Storing copies keeps the bag unaliased: a caller mutating its own item
//! after an add never changes what the bag holds, and what a caller gets
//! back is theirs to mutate.
//!
//! Bags are shared mutable state. All operations take `&self` and
//! serialize through an internal lock, so one bag can back multiple
//! request handlers at once. Different bags are independent.

use std::collections::HashMap;
use std::sync::RwLock;

use folio_core::{Item, ValidationError};

use crate::error::{Result, StoreError};
use crate::policy::Policy;

/// A named, uniqueness-keyed container of [`Item`] copies.
#[derive(Debug)]
pub struct Bag {
    name: String,
    policy: Policy,
    items: RwLock<HashMap<String, Item>>,
}

impl Bag {
    /// Create an empty bag with the permissive default policy.
    ///
    /// A non-empty name is required.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_policy(name, Policy::default())
    }

    /// Create an empty bag with an explicit policy.
    pub fn with_policy(name: impl Into<String>, policy: Policy) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Self {
            name,
            policy,
            items: RwLock::new(HashMap::new()),
        })
    }

    /// The bag's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bag's policy token. Read by the enforcement layer before it
    /// lets a caller at [`add`](Self::add), [`get`](Self::get), or
    /// [`remove`](Self::remove); never interpreted here.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Replace the bag's policy.
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = policy;
    }

    /// Store a copy of `item`, keyed by its title.
    ///
    /// An existing item with the same title is replaced, last write wins;
    /// the previous copy is returned in that case. Adding is never an
    /// error.
    pub fn add(&self, item: &Item) -> Option<Item> {
        let stored = item.clone();
        let previous = self
            .items
            .write()
            .unwrap()
            .insert(stored.title.clone(), stored);
        if previous.is_some() {
            tracing::debug!(bag = %self.name, title = %item.title, "replaced stored item");
        }
        previous
    }

    /// A copy of the stored item with the given title.
    pub fn get(&self, title: &str) -> Result<Item> {
        self.items
            .read()
            .unwrap()
            .get(title)
            .cloned()
            .ok_or_else(|| self.not_found(title))
    }

    /// Remove the item with the given title, returning the stored copy.
    pub fn remove(&self, title: &str) -> Result<Item> {
        self.items
            .write()
            .unwrap()
            .remove(title)
            .ok_or_else(|| self.not_found(title))
    }

    /// Copies of all stored items. Order is unspecified.
    pub fn list(&self) -> Vec<Item> {
        self.items.read().unwrap().values().cloned().collect()
    }

    /// Number of distinct titles stored.
    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Whether the bag holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }

    fn not_found(&self, title: &str) -> StoreError {
        StoreError::ItemNotFound {
            bag: self.name.clone(),
            title: title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_bag_requires_name() {
        let err = Bag::new("").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn test_bag_name() {
        let bag = Bag::new("foobag").unwrap();
        assert_eq!(bag.name(), "foobag");
        assert!(bag.is_empty());
    }

    #[test]
    fn test_stored_value_matches_but_is_a_copy() {
        let bag = Bag::new("foobag").unwrap();
        let mut item = Item::new("HomePage").unwrap();
        item.text = Some("original".to_string());

        bag.add(&item);
        assert_eq!(bag.get("HomePage").unwrap(), item);

        // Mutating the caller's item does not reach into the bag.
        item.text = Some("changed it".to_string());
        assert_eq!(
            bag.get("HomePage").unwrap().text.as_deref(),
            Some("original")
        );
    }

    #[test]
    fn test_get_returns_fresh_copies() {
        let bag = Bag::new("foobag").unwrap();
        bag.add(&Item::new("HomePage").unwrap());

        let mut first = bag.get("HomePage").unwrap();
        first.text = Some("scribbles".to_string());
        assert!(bag.get("HomePage").unwrap().text.is_none());
    }

    #[test]
    fn test_duplicate_add_replaces() {
        let bag = Bag::new("foobag").unwrap();

        let mut item = Item::new("HomePage").unwrap();
        item.text = Some("one".to_string());
        assert!(bag.add(&item).is_none());
        assert_eq!(bag.len(), 1);

        item.text = Some("two".to_string());
        let previous = bag.add(&item).unwrap();
        assert_eq!(previous.text.as_deref(), Some("one"));
        assert_eq!(bag.len(), 1);

        // Last write wins.
        assert_eq!(bag.get("HomePage").unwrap().text.as_deref(), Some("two"));
    }

    #[test]
    fn test_get_missing_title() {
        let bag = Bag::new("foobag").unwrap();
        match bag.get("ghost") {
            Err(StoreError::ItemNotFound { bag, title }) => {
                assert_eq!(bag, "foobag");
                assert_eq!(title, "ghost");
            }
            other => panic!("expected ItemNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_remove_returns_stored_copy() {
        let bag = Bag::new("foobag").unwrap();
        let mut item = Item::new("HomePage").unwrap();
        item.text = Some("kept".to_string());
        bag.add(&item);

        let removed = bag.remove("HomePage").unwrap();
        assert_eq!(removed, item);
        assert_eq!(bag.len(), 0);

        assert!(matches!(
            bag.remove("HomePage"),
            Err(StoreError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_list_is_membership_not_order() {
        let bag = Bag::new("foobag").unwrap();
        for title in ["a", "b", "c"] {
            bag.add(&Item::new(title).unwrap());
        }

        let listed: HashSet<String> = bag.list().into_iter().map(|i| i.title).collect();
        let expected: HashSet<String> =
            ["a", "b", "c"].into_iter().map(String::from).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_policy_carried_not_interpreted() {
        let bag = Bag::new("open").unwrap();
        assert!(bag.policy().is_open());

        let mut locked = Bag::with_policy("locked", Policy::new("members-only")).unwrap();
        assert_eq!(locked.policy().token(), "members-only");

        // A locked-down policy does not stop the container itself.
        locked.add(&Item::new("HomePage").unwrap());
        assert_eq!(locked.len(), 1);

        locked.set_policy(Policy::open());
        assert!(locked.policy().is_open());
    }

    proptest! {
        #[test]
        fn test_len_counts_distinct_titles(
            titles in prop::collection::vec("[a-z]{1,6}", 0..32),
        ) {
            let bag = Bag::new("propbag").unwrap();
            for title in &titles {
                bag.add(&Item::new(title.clone()).unwrap());
            }
            let distinct: HashSet<&String> = titles.iter().collect();
            prop_assert_eq!(bag.len(), distinct.len());
        }
    }
}
