//! Bounded Storage provides small single slot and list like storages whose items are constrained
//! to a declared type family at compile time, along with casting helpers that copy members of a
//! family into collections of the family's base type.
//!
//! The crate was made to give the "container of a base type and its subtypes" idea a home in a
//! language without subtyping. A family is a marker type with a base type, and every type that
//! may live in the family's storages declares itself a [storage_traits::Member] of it. Putting an
//! unrelated type into a storage is a compile error rather than a runtime failure.
//!
//! # Features
//!
//! * [storage_types::SlotStorage] holds at most one item. Writes replace, reads do not consume and
//!   reading an empty slot is an error ([StorageError::EmptyContainer]) rather than a default value.
//! * [casting::copy_all] and [casting::copy_members] append a read only source of members onto any
//!   [Extend] destination of the base type while preserving order.
//! * Storages are single owner values. If they must be shared across threads wrap them in a
//!   [storage_handle::StorageHandle] or run access through [storage_handle::synchronized].
//! * [vehicles] ships a small closed family that the demos and tests are written against.
//!
//! ```
//! use ngenate_bounded_storage::{
//!     storage_traits::Container,
//!     storage_types::SlotStorage,
//!     vehicles::{Sedan, Vehicles},
//! };
//!
//! let mut garage: SlotStorage<Vehicles, Sedan> = SlotStorage::new();
//! assert!(garage.take().is_err());
//!
//! garage.put(Sedan::new("12-GA-34"));
//! assert_eq!(garage.take().unwrap().plate(), "12-GA-34");
//! ```
//
// ----------------------------------------------------------------------------------------------
//
// # Internal Design
//
// ## Families instead of subtyping
//
// A family is modelled as a zero sized marker type implementing [storage_traits::Family] which
// names the base type of the family. Membership is a trait rather than a supertype relation so the
// compiler does the bound check. Upcasting a member into the base is an ordinary conversion
// ([Into]) so for closed families the base is normally an enum with one variant per member.
//
// ## Runtime type checks
//
// The only place where a type check happens at runtime is [storage_handle::ErasedHandle] which
// hides the concrete storage type behind dyn Storage. Downcasting there relies on downcast_rs and
// the lock sits outside the storage so guards are downcast after they have been acquired.

pub mod casting;
pub mod error;
pub mod storage_handle;
pub mod storage_traits;
pub mod storage_types;
pub mod vehicles;

use std::sync::{Arc, RwLock};

pub use error::{StorageError, StorageResult};

// ------------------------
// Type Aliases
// ------------------------

/// Arc Read Write lock pointer
pub type Arw<T> = Arc<RwLock<T>>;
