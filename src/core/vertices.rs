use super::error::{Error, Result};

/// Ordered set of vertex labels with a dense index for each label.
///
/// Labels are looked up by linear scan, so `T` needs only equality. Indices
/// are positions in insertion order and are renumbered when a vertex is
/// removed: every label after the removed one moves one position down.
#[derive(Debug, Clone)]
pub struct VertexSet<T> {
    labels: Vec<T>,
}

impl<T> VertexSet<T> {
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.labels.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.labels.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.labels
    }

    /// Removes the label at `index` and returns it. Labels after it shift
    /// down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.labels.remove(index)
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

impl<T: PartialEq> VertexSet<T> {
    pub fn index_of(&self, label: &T) -> Result<usize> {
        self.labels
            .iter()
            .position(|other| other == label)
            .ok_or(Error::VertexNotFound)
    }

    pub fn exists(&self, label: &T) -> bool {
        self.index_of(label).is_ok()
    }

    /// Appends a label and returns its index.
    pub fn insert(&mut self, label: T) -> Result<usize> {
        if self.exists(&label) {
            return Err(Error::DuplicateVertex);
        }

        let index = self.labels.len();
        self.labels.push(label);
        Ok(index)
    }
}

impl<T> Default for VertexSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a VertexSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
