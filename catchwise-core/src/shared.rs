//! Hot-swappable shared reference data.
//!
//! Reference tables are built once and read by many callers. When a table has
//! to change at runtime the whole value is replaced; readers holding a
//! snapshot keep seeing the version they started with.

use std::sync::{Arc, PoisonError, RwLock};

/// A shared, atomically replaceable table.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use catchwise_core::SharedTables;
///
/// let shared = SharedTables::new(vec![1, 2, 3]);
/// let before = shared.snapshot();
///
/// shared.replace(vec![4]);
///
/// assert_eq!(*before, vec![1, 2, 3]);
/// assert_eq!(*shared.snapshot(), vec![4]);
/// ```
#[derive(Debug)]
pub struct SharedTables<T> {
    current: RwLock<Arc<T>>,
}

impl<T> SharedTables<T> {
    /// Wrap an initial table.
    pub fn new(initial: T) -> Self {
        Self::from_arc(Arc::new(initial))
    }

    /// Wrap an already shared table.
    pub const fn from_arc(initial: Arc<T>) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    /// Return the table currently in effect.
    pub fn snapshot(&self) -> Arc<T> {
        // The guarded value is a single `Arc`, so a poisoned lock still holds
        // a complete table.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the table, returning the previous one.
    pub fn replace(&self, next: T) -> Arc<T> {
        self.swap(Arc::new(next))
    }

    /// Replace the table with an already shared value, returning the previous
    /// one.
    pub fn swap(&self, next: Arc<T>) -> Arc<T> {
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        log::debug!("replaced shared reference table");
        previous
    }
}
