// Family bounds are enforced by the compiler, so the interesting cases are the ones that do not
// compile. Each commented test below causes a compile error and is kept for reference /
// educational purposes. The passing tests at the bottom show the accepted spelling of the same
// idea.

#![allow(unused_imports)]

#[cfg(test)]
mod tests {

    use ngenate_bounded_storage::{
        casting::{copy_all, copy_members},
        storage_traits::{Container, Family, Member},
        storage_types::{SlotStorage, VecStorage},
        vehicles::{Car, Sedan, Suv, Vehicles},
    };

    #[derive(Debug, Clone, Copy)]
    struct Fruits;

    #[derive(Debug, Clone, PartialEq)]
    struct Apple;

    impl Family for Fruits {
        type Base = Apple;

        fn name() -> &'static str {
            "Fruits"
        }
    }

    ngenate_bounded_storage::impl_member!(Fruits, [Apple]);

    ////////////////////////////////////////////////////////////////////////////
    // Rejected at compile time
    ////////////////////////////////////////////////////////////////////////////

    // A sedan is not a member of the Fruits family. Unlike a language with subtyping there is no
    // implicit widening to "any object" either.
    // #[test]
    // fn unrelated_family_compile_error() {
    //     let mut basket: SlotStorage<Fruits, Sedan> = SlotStorage::new();
    //     basket.put(Sedan::new("1"));
    // }

    // A garage for sedans does not accept the base type even though every sedan is a car. The
    // reverse direction requires an explicit upcast.
    // #[test]
    // fn put_base_into_member_slot_compile_error() {
    //     let mut garage: SlotStorage<Vehicles, Sedan> = SlotStorage::new();
    //     garage.put(Car::from(Sedan::new("1")));
    // }

    // A slot of sedans can't be passed where a slot of cars is expected. Storages are invariant
    // in their item type, only their items can be upcast.
    // #[test]
    // fn storage_covariance_compile_error() {
    //     fn park(_garage: &SlotStorage<Vehicles, Car>) {}
    //
    //     let garage: SlotStorage<Vehicles, Sedan> = SlotStorage::new();
    //     park(&garage);
    // }

    // Copying narrows nothing: cars can't be copied into a list of suvs
    // #[test]
    // fn narrowing_copy_compile_error() {
    //     let mut suvs: Vec<Suv> = Vec::new();
    //     copy_all(&mut suvs, &[Car::from(Suv::new("1", 7))]);
    // }

    ////////////////////////////////////////////////////////////////////////////
    // Accepted spellings
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn other_family_storage() {
        let mut basket: SlotStorage<Fruits, Apple> = SlotStorage::new();
        basket.put(Apple);

        assert_eq!(basket.take().unwrap(), &Apple);
        assert_eq!(Fruits::name(), "Fruits");
    }

    #[test]
    fn explicit_upcast_then_park() {
        fn park(garage: &SlotStorage<Vehicles, Car>) -> &str {
            garage.take().map(Car::plate).unwrap_or("empty")
        }

        let sedans: SlotStorage<Vehicles, Sedan> = SlotStorage::with_item(Sedan::new("P-1"));
        let garage: SlotStorage<Vehicles, Car> =
            SlotStorage::with_item(sedans.take_upcast().unwrap());

        assert_eq!(park(&garage), "P-1");
    }

    #[test]
    fn copy_members_per_family() {
        let mut fruit: VecStorage<Fruits, Apple> = VecStorage::new();
        let mut cars: VecStorage<Vehicles, Car> = VecStorage::new();

        copy_members(&mut fruit, &[Apple, Apple]);
        copy_members(&mut cars, &[Suv::new("1", 7)]);

        assert_eq!(fruit.iter().count(), 2);
        assert_eq!(cars.iter().count(), 1);
    }
}
