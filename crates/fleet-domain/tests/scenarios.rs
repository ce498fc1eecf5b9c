//! End-to-end vehicle scenarios across the domain model

use fleet_domain::{
    Bus, Driver, EmployeeId, GeoPosition, LicenseRank, PassengerVehicle, Truck, Vehicle,
};
use fleet_types::VehicleError;

struct Staff {
    id: usize,
    license: char,
}

impl Driver for Staff {
    fn employee_id(&self) -> EmployeeId {
        EmployeeId(self.id)
    }

    fn license_grade(&self) -> char {
        self.license
    }
}

fn berlin() -> GeoPosition {
    GeoPosition::new(13.4, 52.5).unwrap()
}

fn paris() -> GeoPosition {
    GeoPosition::new(2.3, 48.8).unwrap()
}

#[test]
fn test_refuel_never_exceeds_capacity() {
    let mut v = Vehicle::new(100.0, 150.0, berlin(), LicenseRank::B).unwrap();
    let amounts = [0.0, 12.5, 40.0, 0.3, 75.0, 150.0, 1.0];
    for x in amounts {
        let old = v.tank_level();
        v.refuel(x).unwrap();
        assert_eq!(v.tank_level(), (old + x).min(v.tank_capacity()));
        assert!(v.tank_level() <= v.tank_capacity());
    }
}

#[test]
fn test_speed_stays_in_bounds() {
    let mut v = Vehicle::new(50.0, 120.0, berlin(), LicenseRank::A).unwrap();
    v.start_engine();
    let steps: [(bool, f64); 8] = [
        (true, 50.0),
        (true, 80.0),
        (false, 30.0),
        (true, 0.0),
        (false, 500.0),
        (true, 119.9),
        (true, 1.0),
        (false, 0.5),
    ];
    for (accelerate, delta) in steps {
        if accelerate {
            v.accelerate(delta).unwrap();
        } else {
            v.brake(delta).unwrap();
        }
        assert!(v.current_speed() >= 0.0);
        assert!(v.current_speed() <= v.max_speed());
    }
}

#[test]
fn test_drive_is_all_or_nothing() {
    let mut v = Vehicle::new(100.0, 150.0, berlin(), LicenseRank::B).unwrap();
    v.refuel(50.0).unwrap();
    v.start_engine();
    let err = v.drive(paris()).unwrap_err();
    assert!(matches!(err, VehicleError::InsufficientFuel { .. }));
    assert_eq!(v.position(), berlin());
    assert_eq!(v.tank_level(), 50.0);

    v.refuel(50.0).unwrap();
    let km = v.drive(paris()).unwrap();
    assert_eq!(v.position(), paris());
    assert!((v.tank_level() - (100.0 - km / 10.0)).abs() < 1e-9);
}

#[test]
fn test_drive_state_gating() {
    let mut v = PassengerVehicle::new(60.0, 150.0, berlin(), 5).unwrap();
    v.vehicle_mut().refuel(50.0).unwrap();
    assert_eq!(
        v.vehicle_mut().drive(paris()),
        Err(VehicleError::EngineRequired)
    );

    let mut empty = PassengerVehicle::new(60.0, 150.0, berlin(), 5).unwrap();
    empty.vehicle_mut().start_engine();
    assert_eq!(
        empty.vehicle_mut().drive(paris()),
        Err(VehicleError::FuelEmpty)
    );
}

#[test]
fn test_bus_tightens_passenger_requirement() {
    let driver_c = Staff { id: 2001, license: 'C' };
    let mut car = PassengerVehicle::new(60.0, 150.0, berlin(), 5).unwrap();
    let mut bus = Bus::new(100.0, 80.0, berlin(), 50).unwrap();

    car.vehicle_mut().assign_driver(Some(&driver_c)).unwrap();
    assert!(matches!(
        bus.vehicle_mut().assign_driver(Some(&driver_c)),
        Err(VehicleError::DriverUnqualified { .. })
    ));

    let driver_d = Staff { id: 2002, license: 'D' };
    bus.vehicle_mut().assign_driver(Some(&driver_d)).unwrap();
    assert_eq!(bus.vehicle().driver().unwrap().id, EmployeeId(2002));
}

#[test]
fn test_truck_load_round_trip() {
    let mut truck = Truck::new(80.0, 120.0, berlin(), 25.0).unwrap();
    truck.load(7.5).unwrap();
    let before = truck.loaded_amount();
    for x in [0.0, 1.0, 10.0, truck.free_capacity()] {
        truck.load(x).unwrap();
        truck.unload(x).unwrap();
        assert!((truck.loaded_amount() - before).abs() < 1e-9);
    }
}

#[test]
fn test_truck_second_load_rejected() {
    let mut truck = Truck::new(80.0, 120.0, berlin(), 25.0).unwrap();
    truck.load(15.0).unwrap();
    assert!(matches!(
        truck.load(15.0),
        Err(VehicleError::CapacityExceeded { .. })
    ));
    assert_eq!(truck.loaded_amount(), 15.0);
}

#[test]
fn test_seat_capacity_fail_soft() {
    let mut car = PassengerVehicle::new(60.0, 150.0, berlin(), 2).unwrap();
    assert!(car.board(EmployeeId(1)));
    assert!(car.board(EmployeeId(2)));
    assert!(!car.board(EmployeeId(3)));
    assert_eq!(car.passenger_count(), 2);
}

#[test]
fn test_berlin_paris_distance() {
    let d = GeoPosition::distance_km(&berlin(), &paris());
    assert!((d - 878.0).abs() <= 20.0, "distance was {}", d);
}

#[test]
fn test_refuel_overflow_scenario() {
    let mut v = Vehicle::new(100.0, 150.0, berlin(), LicenseRank::A).unwrap();
    assert_eq!(v.tank_level(), 0.0);
    v.refuel(150.0).unwrap();
    assert_eq!(v.tank_level(), 100.0);
}

#[test]
fn test_license_rank_changes_are_not_revalidated() {
    let mut staff = Staff { id: 2003, license: 'C' };
    let mut truck = Truck::new(80.0, 120.0, berlin(), 25.0).unwrap();
    truck.vehicle_mut().assign_driver(Some(&staff)).unwrap();
    staff.license = 'A';
    // Snapshot taken at assignment is kept
    assert_eq!(truck.vehicle().driver().unwrap().rank, LicenseRank::C);
    assert!(truck.vehicle_mut().assign_driver(Some(&staff)).is_err());
}
