//! The generic config tree model.
//!
//! A [`ConfigContent`] is an ordered, title-unique collection of
//! [`ConfigSection`]s plus an optional [`ConfigHeader`]; each section is an
//! ordered, label-unique collection of [`ConfigValue`]s. Keys are
//! case-sensitive and insertion order is preserved for output.
//!
//! Every entity implements [`ConfigItem`], exposing a validity predicate
//! defined by its own structural rules, and offers a `to_output` method that
//! produces a lazy, restartable line iterator without mutating the tree.

mod content;
mod header;
mod section;
mod value;


pub use content::ConfigContent;
pub use header::ConfigHeader;
pub use section::ConfigSection;
pub use value::ConfigValue;

/// Capability shared by all model entities: structural validity.
pub trait ConfigItem {
    /// Whether this entity satisfies its own structural rules.
    fn is_valid(&self) -> bool;
}

/// An ordered collection whose items carry a unique, case-sensitive key.
///
/// Re-assigning an item under an existing key replaces it in place without
/// disturbing the positions of other items.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyedVec<T> {
    items: Vec<T>,
}

impl<T> KeyedVec<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn position(&self, key: &str, key_of: impl Fn(&T) -> &str) -> Option<usize> {
        self.items.iter().position(|item| key_of(item) == key)
    }

    pub(crate) fn find(&self, key: &str, key_of: impl Fn(&T) -> &str) -> Option<&T> {
        self.position(key, key_of).and_then(|i| self.items.get(i))
    }

    pub(crate) fn find_mut(&mut self, key: &str, key_of: impl Fn(&T) -> &str) -> Option<&mut T> {
        let index = self.position(key, key_of)?;
        self.items.get_mut(index)
    }

    /// Adopt an item at the end, or replace a same-keyed item in place.
    pub(crate) fn append(&mut self, item: T, key_of: impl Fn(&T) -> &str) {
        match self.position(key_of(&item), &key_of) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    /// Adopt an item at the front, or replace a same-keyed item in place.
    pub(crate) fn prepend(&mut self, item: T, key_of: impl Fn(&T) -> &str) {
        match self.position(key_of(&item), &key_of) {
            Some(index) => self.items[index] = item,
            None => self.items.insert(0, item),
        }
    }

    /// Adopt an item at the given position (clamped to the current length),
    /// or replace a same-keyed item in place.
    pub(crate) fn insert(&mut self, index: usize, item: T, key_of: impl Fn(&T) -> &str) {
        match self.position(key_of(&item), &key_of) {
            Some(existing) => self.items[existing] = item,
            None => {
                let index = index.min(self.items.len());
                self.items.insert(index, item);
            }
        }
    }

    /// Detach and return the item with the given key.
    pub(crate) fn remove_key(&mut self, key: &str, key_of: impl Fn(&T) -> &str) -> Option<T> {
        let index = self.position(key, key_of)?;
        Some(self.items.remove(index))
    }

    /// Detach and return the item at the given position.
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }
}
