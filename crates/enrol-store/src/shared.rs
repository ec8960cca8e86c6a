use std::sync::{Mutex, MutexGuard};

use enrol_types::User;

use crate::{MemoryStorage, Storage};

/// A [`MemoryStorage`] that can be shared between threads.
///
/// Everything done inside one [`SharedStorage::with_lock`] call is atomic with
/// respect to other callers, which is what makes check-then-insert safe.
#[derive(Debug, Default)]
pub struct SharedStorage {
    inner: Mutex<MemoryStorage>,
}

impl SharedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_storage(storage: MemoryStorage) -> Self {
        Self {
            inner: Mutex::new(storage),
        }
    }

    pub fn with_lock<R>(&self, f: impl FnOnce(&mut MemoryStorage) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.lock().records().to_vec()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn into_inner(self) -> MemoryStorage {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // The store is a plain Vec with no multi-step updates, so a panic while
    // holding the lock cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, MemoryStorage> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
