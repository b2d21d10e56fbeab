//! Provides functions for copying items out of a read only source into a destination of a wider
//! item type.
//!
//! There is no subtyping between item types so "a collection of a supertype" is expressed as any
//! [ExtendCollection] of the wider type, and "a collection of a subtype" is any
//! slice whose items convert into that wider type. For example:
//! - `&[Sedan]` into `Vec<Car>` with [copy_all], since `Sedan: Into<Car>`
//! - `&[Suv]` into `VecStorage<Vehicles, Car>` with [copy_members], since `Suv: Member<Vehicles>`
//!
//! The source is only ever borrowed immutably and the destination is only ever written to, so
//! both directions of the bound are checked by the compiler:
//!
//! ```compile_fail
//! use ngenate_bounded_storage::{casting::copy_all, vehicles::{Car, Sedan}};
//!
//! // A Car is not guaranteed to be a Sedan so narrowing is rejected
//! let mut sedans: Vec<Sedan> = Vec::new();
//! copy_all(&mut sedans, &[Car::from(Sedan::new("1"))]);
//! ```

// # Internal Design
//
// ## Cloning the source
//
// Items are cloned out of the source rather than moved. Taking the source by shared reference is
// what keeps it unchanged after the copy, and [crate::storage_traits::ItemTrait] already requires
// Clone for every family member.

use crate::storage_traits::{Family, Member};
use crate::storage_types::VecStorage;

use log::debug;
use std::any::type_name;
use std::collections::VecDeque;

/// A collection that can only be appended to, with a single item type.
//
// # Design
// [Extend] alone is not used as the destination bound because a Vec<T> where T: Copy is both
// Extend<T> and Extend<&T>, which leaves the destination's item type ambiguous at the call site.
// Having the item type as an associated type pins it down.
pub trait ExtendCollection {
    type Item;

    fn append_items<I: IntoIterator<Item = Self::Item>>(&mut self, items: I);
}

impl<T> ExtendCollection for Vec<T> {
    type Item = T;

    fn append_items<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }
}

impl<T> ExtendCollection for VecDeque<T> {
    type Item = T;

    fn append_items<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }
}

impl<F, Item> ExtendCollection for VecStorage<F, Item>
where
    F: Family,
    Item: Member<F>,
{
    type Item = Item;

    fn append_items<I: IntoIterator<Item = Item>>(&mut self, items: I) {
        self.extend(items);
    }
}

/// Appends every item of source onto destination, converting each into the destination's item
/// type. Source order is preserved and source is left unchanged.
pub fn copy_all<S, Dest>(destination: &mut Dest, source: &[S])
where
    Dest: ExtendCollection + ?Sized,
    S: Clone + Into<Dest::Item>,
{
    debug!(
        "copy_all: {} items of '{}' into '{}'",
        source.len(),
        type_name::<S>(),
        type_name::<Dest::Item>()
    );

    destination.append_items(source.iter().cloned().map(Into::into));
}

/// Appends every member in source onto a destination of the family's base type
pub fn copy_members<F, S, Dest>(destination: &mut Dest, source: &[S])
where
    F: Family,
    S: Member<F>,
    Dest: ExtendCollection<Item = F::Base> + ?Sized,
{
    debug!(
        "copy_members: {} items of '{}' into family '{}'",
        source.len(),
        type_name::<S>(),
        F::name()
    );

    destination.append_items(source.iter().cloned().map(<S as Member<F>>::upcast));
}

/// Upcasts every member of source into a new collection of the family's base type
pub fn upcast_all<F, S>(source: &[S]) -> Vec<F::Base>
where
    F: Family,
    S: Member<F>,
{
    let mut upcast: Vec<F::Base> = Vec::with_capacity(source.len());
    copy_members::<F, S, _>(&mut upcast, source);
    upcast
}
