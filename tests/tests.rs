use std::collections::VecDeque;

use ngenate_bounded_storage::{
    casting::{copy_all, copy_members},
    storage_handle::{share, synchronized, StorageHandle},
    storage_traits::{Container, ItemSliceStorage, Storage},
    storage_types::{SlotStorage, VecStorage},
    vehicles::{Car, Sedan, Suv, Vehicles},
    StorageError,
};

// A garage typed for the whole family takes a sedan once it is upcast and hands the
// same sedan back
#[test]
fn vehicle_garage_returns_the_stored_sedan()
{
    let sedan = Sedan::new("12-AB-34");

    let mut garage: SlotStorage<Vehicles, Car> = SlotStorage::new();
    garage.put(sedan.clone().into());

    let stored: &Car = garage.take().unwrap();

    assert_eq!(stored.as_sedan(), Some(&sedan));

    // A garage typed for sedans keeps the concrete type
    let mut sedan_garage: SlotStorage<Vehicles, Sedan> = SlotStorage::new();
    sedan_garage.put(sedan.clone());

    assert_eq!(sedan_garage.take().unwrap(), &sedan);
}

#[test]
fn every_read_of_an_empty_garage_fails()
{
    let garage: SlotStorage<Vehicles, Car> = SlotStorage::default();

    for _ in 0..2
    {
        match garage.take()
        {
            Err(StorageError::EmptyContainer { item_type }) =>
            {
                assert!(item_type.ends_with("Car"))
            }
            other => panic!("expected an empty container error, got {other:?}"),
        }
    }
}

#[test]
fn repeated_puts_keep_only_the_last()
{
    let mut garage: SlotStorage<Vehicles, Car> = SlotStorage::new();

    for plate in ["1", "2", "3"]
    {
        garage.put(Sedan::new(plate).into());
    }

    assert_eq!(garage.len(), 1);
    assert_eq!(garage.take().unwrap().plate(), "3");
}

// Copying a list of sedans and suvs into an empty list of cars keeps both members and their order
#[test]
fn copy_mixed_members_into_cars()
{
    let sedans = vec![Sedan::new("S-1")];
    let suvs = vec![Suv::new("U-1", 7)];
    let mut cars: Vec<Car> = Vec::new();

    copy_all(&mut cars, &sedans);
    copy_all(&mut cars, &suvs);

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].as_sedan(), Some(&sedans[0]));
    assert_eq!(cars[1].as_suv(), Some(&suvs[0]));
    assert_eq!(cars.iter().map(Car::plate).collect::<Vec<_>>(), vec!["S-1", "U-1"]);
}

#[test]
fn copy_keeps_existing_destination_items_first()
{
    let mut cars: VecDeque<Car> = VecDeque::from(vec![Car::from(Suv::new("old", 5))]);
    let storage: VecStorage<Vehicles, Sedan> =
        VecStorage::new_from_iter(vec![Sedan::new("new-1"), Sedan::new("new-2")]);

    copy_members(&mut cars, storage.as_item_slice());

    let plates: Vec<&str> = cars.iter().map(Car::plate).collect();
    assert_eq!(plates, vec!["old", "new-1", "new-2"]);
    assert_eq!(storage.len(), 2);
}

// A slot shared between threads through a handle is written under the write lock
#[test]
fn shared_garage_across_threads()
{
    let handle: StorageHandle<SlotStorage<Vehicles, Car>> = share(SlotStorage::new());

    let writers: Vec<_> = (0..8)
        .map(|i| {
            let handle = handle.clone();
            std::thread::spawn(move || {
                synchronized(&handle, |slot| slot.put(Suv::new(format!("T-{i}"), 7).into()))
                    .unwrap();
            })
        })
        .collect();

    for writer in writers
    {
        writer.join().unwrap();
    }

    let guard = handle.try_read().unwrap();
    assert_eq!(guard.len(), 1);
    assert!(guard.take().unwrap().plate().starts_with("T-"));
}

#[test]
fn erased_handle_rejects_other_families_members()
{
    let erased = share(SlotStorage::<Vehicles, Sedan>::with_item(Sedan::new("E")))
        .into_erased();

    assert_eq!(erased.try_read().unwrap().item_type_name(), std::any::type_name::<Sedan>());

    let err = erased
        .with_read_as(|slot: &SlotStorage<Vehicles, Car>| slot.len())
        .unwrap_err();

    match err
    {
        StorageError::TypeBoundViolation { expected, found } =>
        {
            assert!(expected.contains("Car"));
            assert!(found.contains("Sedan"));
        }
        other => panic!("expected a type bound violation, got {other:?}"),
    }
}
