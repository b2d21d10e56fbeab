use std::{
    any::{type_name, TypeId},
    sync::{Arc, RwLock},
};

use guardian::{ArcRwLockReadGuardian, ArcRwLockWriteGuardian};

use crate::{
    storage_traits::{ItemTypeIdNoSelf, Storage},
    Arw, StorageError, StorageResult,
};

use super::guards::{try_lock_error, StorageReadGuard, StorageWriteGuard};

/// A cloneable Smart Pointer to a storage that is shared between owners or threads.
///
/// Storages themselves are single owner values with no interior locking. This handle is the
/// external synchronization for callers that need to share one: every clone points at the same
/// storage and access goes through read / write guards.
///
/// The item type id can be checked at runtime without acquiring a lock.
//
// ---------------------------------------------------------------------------------------------
//
// # Internal Design
//
// ## Use of Arc<RwLock<StorageType>>
//
// The storage sits behind Arc<RwLock<S>> (aliased to Arw<S>) with the lock on the outside of the
// storage. Keeping the lock outside means storages stay plain values and a handle can be erased to
// Arw<dyn Storage> with an ordinary unsizing coercion. See [ErasedHandle] for the way back.
//
// ## try_* versus blocking access
//
// try_read and try_write never block and report a held lock as [StorageError::LockUnavailable].
// read_owned and write_owned block until the lock is available and return guards that own a
// clone of the Arc so they can outlive the borrow of the handle.
pub struct StorageHandle<S>
where
    S: Storage,
{
    storage: Arw<S>,
    item_type_id: TypeId,
}

impl<S> Clone for StorageHandle<S>
where
    S: Storage,
{
    fn clone(&self) -> Self
    {
        Self {
            storage: self.storage.clone(),
            item_type_id: self.item_type_id,
        }
    }
}

/// Convenience function to put a storage behind a [StorageHandle]
pub fn share<S>(storage: S) -> StorageHandle<S>
where
    S: Storage + ItemTypeIdNoSelf,
{
    StorageHandle::new(storage)
}

impl<S> StorageHandle<S>
where
    S: Storage + ItemTypeIdNoSelf,
{
    pub fn new(storage: S) -> Self
    {
        Self {
            storage: Arc::new(RwLock::new(storage)),
            item_type_id: S::item_type_id(),
        }
    }
}

impl<S> StorageHandle<S>
where
    S: Storage,
{
    pub fn item_type_id(&self) -> TypeId
    {
        self.item_type_id
    }

    /// True if both handles point to the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool
    {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    pub fn try_read(&self) -> StorageResult<StorageReadGuard<'_, S>>
    {
        match self.storage.try_read()
        {
            Ok(guard) => Ok(StorageReadGuard::new(guard)),
            Err(err) => Err(try_lock_error(err, "read")),
        }
    }

    pub fn try_write(&self) -> StorageResult<StorageWriteGuard<'_, S>>
    {
        match self.storage.try_write()
        {
            Ok(guard) => Ok(StorageWriteGuard::new(guard)),
            Err(err) => Err(try_lock_error(err, "write")),
        }
    }

    /// Blocks until the write lock is acquired
    pub fn write(&self) -> StorageResult<StorageWriteGuard<'_, S>>
    {
        let Ok(guard) = self.storage.write() else {
            return Err(StorageError::LockPoisoned);
        };

        Ok(StorageWriteGuard::new(guard))
    }

    /// Blocks until the read lock is acquired and returns a guard that owns its own pointer to
    /// the storage
    pub fn read_owned(&self) -> StorageResult<ArcRwLockReadGuardian<S>>
    {
        let Ok(guard) = ArcRwLockReadGuardian::take(self.storage.clone()) else {
            return Err(StorageError::LockPoisoned);
        };

        Ok(guard)
    }

    /// Blocks until the write lock is acquired and returns a guard that owns its own pointer to
    /// the storage
    pub fn write_owned(&self) -> StorageResult<ArcRwLockWriteGuardian<S>>
    {
        let Ok(guard) = ArcRwLockWriteGuardian::take(self.storage.clone()) else {
            return Err(StorageError::LockPoisoned);
        };

        Ok(guard)
    }

    /// Forget the concrete storage type and keep only dyn [Storage] access
    pub fn into_erased(self) -> ErasedHandle
    {
        let storage: Arw<dyn Storage> = self.storage;

        ErasedHandle {
            storage,
            item_type_id: self.item_type_id,
            storage_type_id: TypeId::of::<S>(),
            storage_type_name: type_name::<S>(),
        }
    }
}

/// A [StorageHandle] whose concrete storage type has been erased.
///
/// Length and item type information is available through the dyn [Storage] trait. Typed access
/// is a runtime checked downcast which fails with [StorageError::TypeBoundViolation] when the
/// requested type is not the stored type.
#[derive(Clone)]
pub struct ErasedHandle
{
    storage: Arw<dyn Storage>,
    item_type_id: TypeId,
    storage_type_id: TypeId,
    storage_type_name: &'static str,
}

impl ErasedHandle
{
    pub fn item_type_id(&self) -> TypeId
    {
        self.item_type_id
    }

    pub fn storage_type_name(&self) -> &'static str
    {
        self.storage_type_name
    }

    /// True if the erased storage is an S. Answered from the type id recorded at erasure so it
    /// never takes the lock
    pub fn is<S>(&self) -> bool
    where
        S: Storage,
    {
        self.storage_type_id == TypeId::of::<S>()
    }

    pub fn try_read(&self) -> StorageResult<StorageReadGuard<'_, dyn Storage>>
    {
        match self.storage.try_read()
        {
            Ok(guard) => Ok(StorageReadGuard::new(guard)),
            Err(err) => Err(try_lock_error(err, "read")),
        }
    }

    pub fn try_write(&self) -> StorageResult<StorageWriteGuard<'_, dyn Storage>>
    {
        match self.storage.try_write()
        {
            Ok(guard) => Ok(StorageWriteGuard::new(guard)),
            Err(err) => Err(try_lock_error(err, "write")),
        }
    }

    /// Runs body with the storage downcast to S while holding the read lock
    pub fn with_read_as<S, R>(&self, body: impl FnOnce(&S) -> R) -> StorageResult<R>
    where
        S: Storage,
    {
        let guard = self.try_read()?;

        let Some(storage) = guard.downcast_ref::<S>() else {
            return Err(StorageError::type_bound::<S>(self.storage_type_name));
        };

        Ok(body(storage))
    }

    /// Runs body with the storage downcast to S while holding the write lock
    pub fn with_write_as<S, R>(&self, body: impl FnOnce(&mut S) -> R) -> StorageResult<R>
    where
        S: Storage,
    {
        let mut guard = self.try_write()?;

        let Some(storage) = guard.downcast_mut::<S>() else {
            return Err(StorageError::type_bound::<S>(self.storage_type_name));
        };

        Ok(body(storage))
    }
}
