//! Tripled view over the gallery items.

use crate::infra::constants::carousel::looping::COPIES;

/// The item list laid out three times back to back. Display index `i` shows
/// logical item `i % N`; the list is never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet<T> {
    items: Vec<T>,
}

impl<T> Default for SlideSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> SlideSet<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn logical_len(&self) -> usize {
        self.items.len()
    }

    /// Slides on the track, all copies included.
    pub fn len(&self) -> usize {
        self.items.len() * COPIES
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn logical_index(&self, display_index: usize) -> Option<usize> {
        (display_index < self.len()).then(|| display_index % self.items.len())
    }

    /// Which copy (0, 1 or 2) a display index belongs to.
    pub fn copy_of(&self, display_index: usize) -> Option<usize> {
        (display_index < self.len()).then(|| display_index / self.items.len())
    }

    pub fn item(&self, display_index: usize) -> Option<&T> {
        self.logical_index(display_index).map(|i| &self.items[i])
    }

    /// `(display_index, item)` for every slide on the track.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items.iter().cycle().take(self.len()).enumerate()
    }

    /// Swap in a new list; returns whether the logical length changed.
    pub fn replace(&mut self, items: Vec<T>) -> bool {
        let changed = items.len() != self.items.len();
        self.items = items;
        changed
    }
}
