//! Storage guards to provide RAII read and write access to storage types.
//!
//! # Internal Design
//! - They are light weight wrapper guards around std [RwLockReadGuard] and [RwLockWriteGuard]
//! - The lock is released when the guard is dropped, which includes unwinding out of a panicking
//!   scope. The only extra work on release is a trace line naming the storage's item type.

use crate::{storage_traits::Storage, StorageError};
use log::{debug, trace};
use std::{
    ops::{Deref, DerefMut},
    sync::{RwLockReadGuard, RwLockWriteGuard, TryLockError},
};

////////////////////////////////////////////////
// Storage Read Guard
////////////////////////////////////////////////

/// Shared access to a storage behind a [crate::storage_handle::StorageHandle] or
/// [crate::storage_handle::ErasedHandle]. Dereferences into the inner Storage
pub struct StorageReadGuard<'a, S>
where
    S: Storage + ?Sized + 'a,
{
    inner_guard: RwLockReadGuard<'a, S>,
}

impl<'a, S> StorageReadGuard<'a, S>
where
    S: Storage + ?Sized + 'a,
{
    pub fn new(inner_guard: RwLockReadGuard<'a, S>) -> Self
    {
        trace!("read lock taken on storage of '{}'", inner_guard.item_type_name());
        Self { inner_guard }
    }
}

impl<'a, S> Deref for StorageReadGuard<'a, S>
where
    S: Storage + ?Sized,
{
    type Target = S;

    fn deref(&self) -> &S
    {
        &self.inner_guard
    }
}

impl<'a, S> Drop for StorageReadGuard<'a, S>
where
    S: Storage + ?Sized,
{
    fn drop(&mut self)
    {
        trace!("read lock released on storage of '{}'", self.inner_guard.item_type_name());
    }
}

////////////////////////////////////////////////
// Storage Write Guard
////////////////////////////////////////////////

/// Exclusive access to a storage. Dereferences mutably into the inner Storage
pub struct StorageWriteGuard<'a, S>
where
    S: Storage + ?Sized + 'a,
{
    inner_guard: RwLockWriteGuard<'a, S>,
}

impl<'a, S> StorageWriteGuard<'a, S>
where
    S: Storage + ?Sized + 'a,
{
    pub fn new(inner_guard: RwLockWriteGuard<'a, S>) -> Self
    {
        trace!("write lock taken on storage of '{}'", inner_guard.item_type_name());
        Self { inner_guard }
    }
}

impl<'a, S> Deref for StorageWriteGuard<'a, S>
where
    S: Storage + ?Sized,
{
    type Target = S;

    fn deref(&self) -> &S
    {
        &self.inner_guard
    }
}

impl<'a, S> DerefMut for StorageWriteGuard<'a, S>
where
    S: Storage + ?Sized,
{
    fn deref_mut(&mut self) -> &mut S
    {
        &mut self.inner_guard
    }
}

impl<'a, S> Drop for StorageWriteGuard<'a, S>
where
    S: Storage + ?Sized,
{
    fn drop(&mut self)
    {
        trace!("write lock released on storage of '{}'", self.inner_guard.item_type_name());
    }
}

/// Maps a failed non blocking lock attempt onto a [StorageError]
pub(crate) fn try_lock_error<G>(err: TryLockError<G>, lock_kind: &'static str) -> StorageError
{
    match err
    {
        TryLockError::WouldBlock =>
        {
            debug!("{lock_kind} lock is held elsewhere");
            StorageError::LockUnavailable(lock_kind)
        }
        TryLockError::Poisoned(_) => StorageError::LockPoisoned,
    }
}
