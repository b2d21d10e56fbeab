//! Scoped acquisition: acquire a lock, run a body against the guarded value and release the lock
//! on every way out of the body, including a panic unwinding through it.
//!
//! ```
//! use std::sync::Mutex;
//! use ngenate_bounded_storage::storage_handle::synchronized;
//!
//! let counter = Mutex::new(0);
//! let value = synchronized(&counter, |count| {
//!     *count += 1;
//!     *count
//! })
//! .unwrap();
//!
//! assert_eq!(value, 1);
//! assert!(counter.try_lock().is_ok());
//! ```

use std::ops::DerefMut;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockWriteGuard};

use crate::{storage_traits::Storage, StorageError, StorageResult};

use super::{StorageHandle, StorageWriteGuard};

/// A lock that hands out exclusive access to its target through a guard that releases the lock
/// when dropped.
pub trait ScopedLock
{
    type Target: ?Sized;

    type Guard<'a>: DerefMut<Target = Self::Target>
    where
        Self: 'a;

    /// Blocks until exclusive access is acquired
    fn acquire(&self) -> StorageResult<Self::Guard<'_>>;
}

impl<T> ScopedLock for Mutex<T>
where
    T: ?Sized,
{
    type Target = T;
    type Guard<'a> = MutexGuard<'a, T> where Self: 'a;

    fn acquire(&self) -> StorageResult<Self::Guard<'_>>
    {
        self.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

/// Acquires the write side of the lock
impl<T> ScopedLock for RwLock<T>
where
    T: ?Sized,
{
    type Target = T;
    type Guard<'a> = RwLockWriteGuard<'a, T> where Self: 'a;

    fn acquire(&self) -> StorageResult<Self::Guard<'_>>
    {
        self.write().map_err(|_| StorageError::LockPoisoned)
    }
}

// parking lot locks do not poison so acquiring never fails
impl<T> ScopedLock for parking_lot::Mutex<T>
where
    T: ?Sized,
{
    type Target = T;
    type Guard<'a> = parking_lot::MutexGuard<'a, T> where Self: 'a;

    fn acquire(&self) -> StorageResult<Self::Guard<'_>>
    {
        Ok(self.lock())
    }
}

impl<S> ScopedLock for StorageHandle<S>
where
    S: Storage,
{
    type Target = S;
    type Guard<'a> = StorageWriteGuard<'a, S> where Self: 'a;

    fn acquire(&self) -> StorageResult<Self::Guard<'_>>
    {
        self.write()
    }
}

/// Runs body while holding lock and returns what body returns.
///
/// The guard is dropped when body returns and also when a panic unwinds out of body, so the lock
/// is never left held. A std lock poisoned by such a panic fails later calls with
/// [StorageError::LockPoisoned].
pub fn synchronized<L, R>(lock: &L, body: impl FnOnce(&mut L::Target) -> R) -> StorageResult<R>
where
    L: ScopedLock + ?Sized,
{
    let mut guard = lock.acquire()?;
    Ok(body(&mut *guard))
}
