use crate::storage::{Store, StoreError};

/// A store that keeps the persisted collection in memory.
///
/// Useful for tests and benchmarks. It counts saves so callers can check
/// whether an operation reached persistence.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: Vec<T>,
    saves: usize,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            saves: 0,
        }
    }
}

impl<T> MemoryStore<T> {
    /// Creates a store that already holds `items`, as if they had been saved
    /// in an earlier run.
    #[must_use]
    pub const fn with_items(items: Vec<T>) -> Self {
        Self { items, saves: 0 }
    }

    /// The collection as last saved.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The number of times [`Store::save`] has been called.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl<T: Clone> Store<T> for MemoryStore<T> {
    fn load(&mut self) -> Result<Vec<T>, StoreError> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[T]) -> Result<(), StoreError> {
        self.items = items.to_vec();
        self.saves += 1;
        Ok(())
    }
}
