//! SlotStorage is the bounded single item storage. It holds zero or one item of exactly its Item
//! type, where Item must be a member of the storage's family.
//
// #DESIGN
// - The slot is an Option internally but that Option never leaks out of the reading API that the
//   [Container] trait defines. [SlotStorage::get] is the one place an Option is returned and it is
//   explicitly named as the non failing alternative.
// - Writes are last write wins. There is no merging and no history.
// - Family phantom data plays the same role as key phantom data does on other storages: it makes
//   SlotStorage<Vehicles, Sedan> and SlotStorage<Fruits, Sedan> different types even if the item
//   type is the same.
// - The struct itself carries no Member bound so that derives and trait impls stay simple. The
//   family check fires on every constructor (new, with_item, default) and on the Container impl,
//   so a SlotStorage of a non member type can be named but never built or written to.

use crate::storage_traits::{
    ClearableStorage, Container, Family, ItemSliceStorage, ItemStorage, ItemTypeIdNoSelf, Member,
    Storage,
};
use crate::{StorageError, StorageResult};

use log::trace;
use std::any::{type_name, TypeId};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
pub struct SlotStorage<F, Item> {
    data: Option<Item>,
    family_phantom: PhantomData<F>,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl<F, Item> SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    /// Creates an empty slot
    pub fn new() -> Self {
        Self {
            data: None,
            family_phantom: <_>::default(),
        }
    }

    pub fn with_item(item: Item) -> Self {
        Self {
            data: Some(item),
            family_phantom: <_>::default(),
        }
    }

    pub fn get(&self) -> Option<&Item> {
        self.data.as_ref()
    }

    /// Same as [Container::take] but returns an owned copy of the item
    pub fn take_cloned(&self) -> StorageResult<Item> {
        self.take().cloned()
    }

    /// Stores item and hands back the item it replaced
    pub fn replace(&mut self, item: Item) -> Option<Item> {
        trace!("replace in slot of '{}'", type_name::<Item>());
        self.data.replace(item)
    }

    /// Reads the stored item as the family's base type
    pub fn take_upcast(&self) -> StorageResult<F::Base> {
        Ok(self.take_cloned()?.upcast())
    }
}

impl<F, Item> Default for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Storage trait family impl
////////////////////////////////////////////////////////////////////////////////

impl<F, Item> Storage for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn len(&self) -> usize {
        usize::from(self.data.is_some())
    }

    fn item_type_name(&self) -> &'static str {
        type_name::<Item>()
    }
}

impl<F, Item> ItemTypeIdNoSelf for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn item_type_id() -> TypeId {
        TypeId::of::<Item>()
    }
}

impl<F, Item> ItemStorage for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    type Item = Item;
}

impl<F, Item> Container for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn put(&mut self, item: Item) {
        trace!("put into slot of '{}'", type_name::<Item>());
        self.data = Some(item);
    }

    fn take(&self) -> StorageResult<&Item> {
        self.data.as_ref().ok_or_else(StorageError::empty::<Item>)
    }
}

impl<F, Item> ItemSliceStorage for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    /// Returns the stored item as a single item slice or an empty slice
    fn as_item_slice(&self) -> &[Item] {
        self.data.as_slice()
    }
}

impl<F, Item> ClearableStorage for SlotStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn clear(&mut self) {
        trace!("clear slot of '{}'", type_name::<Item>());
        self.data = None;
    }
}
