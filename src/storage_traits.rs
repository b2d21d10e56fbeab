//! Provides shared functionality and classification to storage types and the type families their
//! items are drawn from.
//!
//! # Design
//! - Storages must be [Send] and [Sync] so that they are compatible with threading and the
//!   DowncastSync base trait from downcast_rs
//! - Must be 'static due to [Storage]: [DowncastSync] which is ultimately bound to: 'static
//! - Family membership is a trait ([Member]) and not a generic bound on a base type. Rust has no
//!   subtyping between structs so "T is a Car or a child of Car" becomes "T declares itself a
//!   member of the Car family and knows how to become a Car". A storage instantiated with a non
//!   member fails to compile:
//!
//! ```compile_fail
//! use ngenate_bounded_storage::{storage_types::SlotStorage, vehicles::Vehicles};
//!
//! // String is not a member of the Vehicles family
//! let garage: SlotStorage<Vehicles, String> = SlotStorage::new();
//! ```
//!
//! Membership is per family. A sedan is a member of Vehicles, so a storage of another family
//! rejects it even though Sedan satisfies every other item bound:
//!
//! ```compile_fail
//! use ngenate_bounded_storage::{
//!     impl_member,
//!     storage_traits::{Container, Family},
//!     storage_types::SlotStorage,
//!     vehicles::Sedan,
//! };
//!
//! struct Fruits;
//!
//! #[derive(Debug, Clone)]
//! struct Apple;
//!
//! impl Family for Fruits {
//!     type Base = Apple;
//!
//!     fn name() -> &'static str {
//!         "Fruits"
//!     }
//! }
//!
//! impl_member!(Fruits, [Apple]);
//!
//! let mut basket: SlotStorage<Fruits, Sedan> = SlotStorage::new();
//! basket.put(Sedan::new("1"));
//! ```

use crate::StorageResult;
use downcast_rs::{impl_downcast, DowncastSync};
use std::any::TypeId;
use std::fmt::Debug;

/// # Trait Bounds
/// * [Sync] + [Send] to be maximally compatible with threading
/// * [Clone] so that read only sources can be copied into other storages without being consumed
/// * [Debug] so that storages and errors can always describe their contents
pub trait ItemTrait: Sync + Send + Clone + Debug + 'static {}
impl<T> ItemTrait for T where T: Sync + Send + Clone + Debug + 'static {}

/// A bounded type family. Implemented by a marker type which names the base type that every
/// member of the family can be converted into.
pub trait Family: Send + Sync + 'static
{
    type Base: ItemTrait;

    fn name() -> &'static str;
}

/// Declares that a type belongs to family `F`. The family's base type is always a member of
/// its own family.
pub trait Member<F: Family>: ItemTrait
{
    fn upcast(self) -> F::Base;
}

/// Implements [Member] of the given family for the list of given types
//
// # Design
// A macro is used here to take place of a blanket impl over `Into<F::Base>`. A blanket impl would
// make every type that happens to convert into the base a member of the family, which is exactly
// the implicit widening the family bound exists to prevent. Membership has to be opted into.
#[macro_export]
macro_rules! impl_member {

    ( $family:ty, [$($t:ty),*] ) => {

        $( impl $crate::storage_traits::Member<$family> for $t
        {
            fn upcast(self) -> <$family as $crate::storage_traits::Family>::Base
            {
                self.into()
            }
        }) *
    }
}

pub trait Storage: DowncastSync
{
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// Type name of the items held, available through a dyn Storage without knowing the concrete
    /// storage type
    fn item_type_name(&self) -> &'static str;
}

impl_downcast!(sync Storage);

pub trait ClearableStorage: Storage
{
    fn clear(&mut self);
}

pub trait ItemStorage: Storage
{
    type Item;
}

/// A single slot storage that can be written and read.
///
/// [Container::take] does not clear the slot. Reading before anything has been put is an error
/// and never produces a default item.
pub trait Container: ItemStorage
{
    /// Stores the item, replacing any previous item
    fn put(&mut self, item: Self::Item);

    /// Borrows the stored item
    fn take(&self) -> StorageResult<&Self::Item>;
}

/// Provides common read only functionality for storages whose items are contiguous
pub trait ItemSliceStorage: ItemStorage
{
    fn as_item_slice(&self) -> &[Self::Item];
}

// Allows extracting the item type id for cases where we only have a
// storage type parameter and no instance

pub trait ItemTypeIdNoSelf
{
    fn item_type_id() -> TypeId;
}
