use std::sync::Mutex;

use ngenate_bounded_storage::{
    casting::copy_all,
    storage_handle::{share, synchronized, StorageHandle},
    storage_traits::{Container, Storage},
    storage_types::{SlotStorage, VecStorage},
    vehicles::{Car, Sedan, Suv, VehicleVisitor, Vehicles},
    StorageResult,
};

/// Stands in for process wide state. Built once in main and passed to whoever needs it
struct SharedResource
{
    language: &'static str,
}

impl SharedResource
{
    fn operation(&self) -> String
    {
        format!("{} storage", self.language)
    }
}

struct Describe;

impl VehicleVisitor for Describe
{
    type Output = String;

    fn visit_sedan(&mut self, sedan: &Sedan) -> String
    {
        format!("sedan {}", sedan.plate())
    }

    fn visit_suv(&mut self, suv: &Suv) -> String
    {
        format!("suv {} with {} seats", suv.plate(), suv.seats())
    }
}

fn main() -> StorageResult<()>
{
    env_logger::init();

    // A garage for any vehicle and a garage that only takes sedans
    let mut garage: SlotStorage<Vehicles, Car> = SlotStorage::new();
    let mut sedan_garage: SlotStorage<Vehicles, Sedan> = SlotStorage::new();

    println!("Reading an empty garage");
    match garage.take()
    {
        Ok(car) => println!("  unexpected {car:?}"),
        Err(err) => println!("  {err}"),
    }

    garage.put(Suv::new("34-SU-56", 7).into());
    garage.put(Sedan::new("12-SE-34").into());
    sedan_garage.put(Sedan::new("78-SE-90"));

    println!("Last write wins");
    println!("  garage holds {}", garage.take()?.accept(&mut Describe));
    println!("  sedan garage holds {}", sedan_garage.take()?.plate());

    println!("Copy sedans and suvs into a list of cars");
    let sedans = vec![Sedan::new("A-1"), Sedan::new("A-2")];
    let suvs = [Suv::new("B-1", 5)];
    let mut cars: VecStorage<Vehicles, Car> = VecStorage::new();
    copy_all(&mut cars, &sedans);
    copy_all(&mut cars, &suvs);

    for car in &cars
    {
        println!("  {} -> {}", car.kind(), car.accept(&mut Describe));
    }
    println!("  sources still hold {} sedans and {} suvs", sedans.len(), suvs.len());

    println!("Scoped locking");
    let resource = SharedResource { language: "Rust" };
    let lock = Mutex::new(());
    let result = synchronized(&lock, |_| resource.operation())?;
    println!("  {result}");

    let handle: StorageHandle<SlotStorage<Vehicles, Sedan>> = share(sedan_garage);
    synchronized(&handle, |slot| slot.put(Sedan::new("99-LO-CK")))?;
    println!("  shared sedan garage now holds {}", handle.try_read()?.take()?.plate());

    println!("Type erased access");
    let erased = handle.into_erased();
    println!("  storage '{}' holds {} item", erased.storage_type_name(), erased.try_read()?.len());
    if let Err(err) = erased.with_read_as(|slot: &SlotStorage<Vehicles, Suv>| slot.len())
    {
        println!("  {err}");
    }

    Ok(())
}
