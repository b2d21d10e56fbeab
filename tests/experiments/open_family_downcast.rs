// This experiment demonstrates the open alternative to a closed family: instead of a base enum
// the family base is a boxed trait object and code that needs the concrete member downcasts it at
// runtime with downcast_rs.
//
// It works, but every narrowing becomes a runtime check returning an Option, and forgetting a
// member when matching is no longer caught by the compiler. The library keeps closed families with
// an enum base for that reason. An open family is still useful when members live in other crates,
// so the spelling is kept here as a reference.

#[cfg(test)]
mod tests {

    use downcast_rs::{impl_downcast, DowncastSync};
    use ngenate_bounded_storage::{
        casting::copy_all,
        storage_traits::{Container, Family, Member},
        storage_types::SlotStorage,
    };
    use std::{fmt::Debug, sync::Arc};

    trait Vehicle: DowncastSync + Debug {
        fn plate(&self) -> &str;
    }
    impl_downcast!(sync Vehicle);

    #[derive(Debug, Clone, PartialEq)]
    struct Sedan(String);

    #[derive(Debug, Clone, PartialEq)]
    struct Truck(String, u32);

    impl Vehicle for Sedan {
        fn plate(&self) -> &str {
            &self.0
        }
    }

    impl Vehicle for Truck {
        fn plate(&self) -> &str {
            &self.0
        }
    }

    // Arc rather than Box as family items must be Clone
    type AnyVehicle = Arc<dyn Vehicle>;

    #[derive(Debug, Clone, Copy)]
    struct OpenVehicles;

    impl Family for OpenVehicles {
        type Base = AnyVehicle;

        fn name() -> &'static str {
            "OpenVehicles"
        }
    }

    impl Member<OpenVehicles> for AnyVehicle {
        fn upcast(self) -> AnyVehicle {
            self
        }
    }

    impl Member<OpenVehicles> for Sedan {
        fn upcast(self) -> AnyVehicle {
            Arc::new(self)
        }
    }

    impl Member<OpenVehicles> for Truck {
        fn upcast(self) -> AnyVehicle {
            Arc::new(self)
        }
    }

    fn describe(vehicle: &AnyVehicle) -> String {
        if let Some(sedan) = vehicle.downcast_ref::<Sedan>() {
            format!("sedan {}", sedan.0)
        } else if let Some(truck) = vehicle.downcast_ref::<Truck>() {
            format!("truck {} carrying {}kg", truck.0, truck.1)
        } else {
            format!("unknown vehicle {}", vehicle.plate())
        }
    }

    #[test]
    fn downcast_from_open_garage() {
        let mut garage: SlotStorage<OpenVehicles, AnyVehicle> = SlotStorage::new();

        garage.put(Member::<OpenVehicles>::upcast(Truck("T-1".into(), 900)));

        let stored = garage.take().unwrap();
        assert!(stored.is::<Truck>());
        assert!(stored.downcast_ref::<Sedan>().is_none());
        assert_eq!(describe(stored), "truck T-1 carrying 900kg");
    }

    #[test]
    fn copy_members_into_open_list() {
        let sedans: Vec<AnyVehicle> = vec![Arc::new(Sedan("S-1".into()))];
        let mut vehicles: Vec<AnyVehicle> = vec![Arc::new(Truck("T-2".into(), 10))];

        copy_all(&mut vehicles, &sedans);

        let described: Vec<String> = vehicles.iter().map(describe).collect();
        assert_eq!(described, vec!["truck T-2 carrying 10kg", "sedan S-1"]);

        // Clones of an Arc share the member instance
        assert!(Arc::ptr_eq(&vehicles[1], &sedans[0]));
    }
}
