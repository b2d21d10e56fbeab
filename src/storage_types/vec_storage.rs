//! VecStorage is a simple wrapper around [Vec] whose items are bounded to a family. It implements
//! traits from [crate::storage_traits] where applicable.
//
// #DESIGN (Important)
// - [VecStorage] Does not try to introduce new semantics or substantially different abstractions
//   for handling a Vec. Its main goal is to be the ordered, family checked collection that the
//   [crate::casting] functions read from and write into, and to provide some insulation away from
//   the full std vec API so that this API can grow only as needed.
// - It implements [Extend] so it can be the destination of [crate::casting::copy_all] and it can
//   hand out a slice so it can be the source.

use crate::storage_traits::{
    ClearableStorage, Family, ItemSliceStorage, ItemStorage, ItemTypeIdNoSelf, Member, Storage,
};

use std::any::{type_name, TypeId};
use std::marker::PhantomData;

#[derive(Clone, Debug)]
pub struct VecStorage<F, Item> {
    data: Vec<Item>,

    // #DESIGN Unlike a normal Vec - family phantom data is required so that
    // the family bound is part of the type.
    family_phantom: PhantomData<F>,
}

////////////////////////////////////////////////////////////////////////////////
// Inherent methods
////////////////////////////////////////////////////////////////////////////////

impl<F, Item> VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    pub fn new() -> Self {
        Self {
            data: <_>::default(),
            family_phantom: <_>::default(),
        }
    }

    pub fn new_from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut data: Vec<Item> = Default::default();
        data.extend(iter);

        VecStorage {
            data,
            family_phantom: <_>::default(),
        }
    }

    pub fn push(&mut self, item: Item) {
        self.data.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.data
    }
}

impl<F, Item> Default for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Rust std traits impl
////////////////////////////////////////////////////////////////////////////////

impl<'a, F, Item> IntoIterator for &'a VecStorage<F, Item> {
    type Item = &'a Item;

    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        let iter: std::slice::Iter<Item> = self.data.iter();
        iter
    }
}

impl<F, Item> Extend<Item> for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<F, Item> FromIterator<Item> for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::new_from_iter(iter)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Storage trait family impl
////////////////////////////////////////////////////////////////////////////////

impl<F, Item> Storage for VecStorage<F, Item>
where
    // Both of these need to be bound for any VecStorage implement so that
    // we can guarantee to the compiler that they include Send + Sync
    F: Family,
    Item: Member<F>,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn item_type_name(&self) -> &'static str {
        type_name::<Item>()
    }
}

impl<F, Item> ItemTypeIdNoSelf for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn item_type_id() -> TypeId {
        TypeId::of::<Item>()
    }
}

impl<F, Item> ItemStorage for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    type Item = Item;
}

impl<F, Item> ItemSliceStorage for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn as_item_slice(&self) -> &[Item] {
        self.data.as_slice()
    }
}

impl<F, Item> ClearableStorage for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    fn clear(&mut self) {
        self.data.clear()
    }
}
