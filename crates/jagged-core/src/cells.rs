//! Growable, nullable cell sequences
//!
//! [`Cells`] is the storage shared by grid rows and by row/column views.
//! Absent cells are `None`. Reads past the end return `None`; writes past
//! the end pad the sequence with `None` up to the written index.

use std::slice;

use crate::error::{checked_index, Error, Result};

/// Whether a container accepts absent values through [`Cells::set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Presence {
    /// `set(i, None)` is allowed
    #[default]
    Lenient,
    /// `set(i, None)` fails with [`Error::NullValue`]
    Strict,
}

/// An ordered, append-only sequence of optional values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cells<T> {
    items: Vec<Option<T>>,
    presence: Presence,
}

impl<T> Cells<T> {
    /// Create an empty container that accepts absent values
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            presence: Presence::Lenient,
        }
    }

    /// Create an empty container that rejects storing absent values
    pub fn strict() -> Self {
        Self {
            items: Vec::new(),
            presence: Presence::Strict,
        }
    }

    /// Create a container holding `len` absent cells
    pub fn absent(len: usize, presence: Presence) -> Self {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, || None);
        Self { items, presence }
    }

    /// Create a container from existing values
    pub fn from_options<I>(items: I, presence: Presence) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self {
            items: items.into_iter().collect(),
            presence,
        }
    }

    /// Create a lenient container where every cell is present
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_options(values.into_iter().map(Some), Presence::Lenient)
    }

    /// Get the presence policy
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Get the value at `index`, or `None` if it is absent or out of range
    pub fn get(&self, index: isize) -> Option<&T> {
        let index = usize::try_from(index).ok()?;
        self.items.get(index).and_then(Option::as_ref)
    }

    /// Store `value` at `index`, growing the container with absent cells if needed
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if `index` is too large to allocate
    /// cells up to, as [`Vec::resize_with`] does.
    pub fn set(&mut self, index: isize, value: Option<T>) -> Result<()> {
        let offset = checked_index(index)?;
        if value.is_none() && self.presence == Presence::Strict {
            return Err(Error::NullValue { index });
        }

        self.pad_to(offset + 1);
        self.items[offset] = value;
        Ok(())
    }

    /// Grow the container with absent cells until it holds at least `len` cells.
    ///
    /// Never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the new length cannot be allocated.
    pub fn pad_to(&mut self, len: usize) {
        if len > self.items.len() {
            self.items.resize_with(len, || None);
        }
    }

    /// Number of cells, absent ones included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the container holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the slot at `index` exists in storage (it may still be absent)
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Iterate over all cells in order
    pub fn iter(&self) -> slice::Iter<'_, Option<T>> {
        self.items.iter()
    }

    /// Borrow the cells as a slice
    pub fn as_slice(&self) -> &[Option<T>] {
        &self.items
    }

    /// Consume the container and return its cells
    pub fn into_vec(self) -> Vec<Option<T>> {
        self.items
    }

    /// Return the same cells under a different presence policy
    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }
}

impl<T> Default for Cells<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Option<T>> for Cells<T> {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::from_options(iter, Presence::Lenient)
    }
}

impl<'a, T> IntoIterator for &'a Cells<T> {
    type Item = &'a Option<T>;
    type IntoIter = slice::Iter<'a, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_range_is_absent() {
        let cells = Cells::from_values([1, 2]);
        assert_eq!(cells.get(0), Some(&1));
        assert_eq!(cells.get(2), None);
        assert_eq!(cells.get(-1), None);
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn test_set_pads_with_absent() {
        let mut cells = Cells::new();
        cells.set(3, Some("x")).unwrap();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells.as_slice(), &[None, None, None, Some("x")]);
    }

    #[test]
    fn test_set_in_range_overwrites() {
        let mut cells = Cells::from_values([1, 2, 3]);
        cells.set(1, Some(20)).unwrap();
        cells.set(2, None).unwrap();

        assert_eq!(cells.as_slice(), &[Some(1), Some(20), None]);
    }

    #[test]
    fn test_set_negative_index() {
        let mut cells: Cells<i32> = Cells::new();
        assert_eq!(cells.set(-1, Some(1)), Err(Error::InvalidIndex(-1)));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_strict_rejects_absent() {
        let mut cells: Cells<i32> = Cells::strict();
        assert_eq!(cells.set(2, None), Err(Error::NullValue { index: 2 }));
        // A rejected write leaves the length untouched
        assert_eq!(cells.len(), 0);

        cells.set(2, Some(7)).unwrap();
        assert_eq!(cells.as_slice(), &[None, None, Some(7)]);
    }

    #[test]
    fn test_length_never_shrinks() {
        let mut cells: Cells<i32> = Cells::new();
        cells.set(5, Some(1)).unwrap();
        cells.set(0, Some(2)).unwrap();
        cells.pad_to(2);

        assert_eq!(cells.len(), 6);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_set_huge_index_panics() {
        let mut cells: Cells<u8> = Cells::new();
        let _ = cells.set(isize::MAX, Some(1));
    }

    #[test]
    fn test_into_vec() {
        let mut cells = Cells::strict();
        cells.set(1, Some('b')).unwrap();

        assert_eq!(cells.into_vec(), vec![None, Some('b')]);
    }

    #[test]
    fn test_absent_constructor() {
        let cells: Cells<String> = Cells::absent(3, Presence::Strict);
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(Option::is_none));
        assert_eq!(cells.presence(), Presence::Strict);
    }
}
