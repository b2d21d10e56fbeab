//! Errors shared by every storage, handle and lock helper in the crate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError
{
    /// A read was attempted on a storage that has never had an item put into it
    #[error("storage of '{item_type}' is empty")]
    EmptyContainer { item_type: &'static str },

    /// A value or storage of one type was requested as another. Only reachable through
    /// type erased access, the typed APIs reject this at compile time
    #[error("type bound violation: expected '{expected}' but found '{found}'")]
    TypeBoundViolation
    {
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to acquire {0} lock")]
    LockUnavailable(&'static str),

    #[error("lock was poisoned by a panic in a previous holder")]
    LockPoisoned,
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError
{
    pub fn empty<Item>() -> Self
    {
        StorageError::EmptyContainer {
            item_type: std::any::type_name::<Item>(),
        }
    }

    pub fn type_bound<Expected>(found: &'static str) -> Self
    {
        StorageError::TypeBoundViolation {
            expected: std::any::type_name::<Expected>(),
            found,
        }
    }
}
