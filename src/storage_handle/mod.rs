//! Shared access to storages: a Smart Pointer to any Storage type that implements
//! [crate::storage_traits::Storage], its guards and scoped locking helpers.
//! See [StorageHandle] and [synchronized] for details

pub mod handle;
mod guards;
mod scoped;

pub use handle::*;
pub use guards::*;
pub use scoped::*;
