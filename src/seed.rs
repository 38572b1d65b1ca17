use crate::models::{
    Coordinate, Mechanic, MechanicAvailability, Order, OrderStatus, PointKind, RepairJob,
    RepairPriority, RepairStatus, RouteInfo, RouteStop, StopPriority, Vehicle, VehicleStatus,
    VehicleType,
};
use chrono::{Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashSet;
use uuid::Uuid;

pub const SEED_ORDER_COUNT: usize = 25;

const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];
const STREETS: [&str; 5] = ["Main St", "Oak Ave", "Maple Rd", "Broadway", "Park Lane"];
const CUSTOMER_TYPES: [&str; 5] = ["Individual", "Business", "Corporate", "Government", "Non-profit"];
const DRIVERS: [&str; 5] = [
    "James Wilson",
    "Maria Garcia",
    "Alex Johnson",
    "Sarah Lee",
    "Robert Chen",
];
const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

const ORDER_STATUSES: [OrderStatus; 4] = [
    OrderStatus::Delivered,
    OrderStatus::InTransit,
    OrderStatus::Processing,
    OrderStatus::Delayed,
];

static DEPOT: Lazy<Coordinate> = Lazy::new(|| Coordinate {
    lat: 40.7128,
    lng: -74.0060,
    kind: PointKind::Depot,
});

pub fn depot() -> Coordinate {
    *DEPOT
}

pub fn generate_order_id<R: Rng>(rng: &mut R) -> String {
    format!("ORD-{}", rng.random_range(10_000..100_000))
}

/// Diverse synthetic orders: pool-cycled customers, addresses, drivers and
/// regions, random status and item count, scheduled dates one day apart.
pub fn seed_orders(count: usize) -> Vec<Order> {
    let mut rng = rand::rng();
    let mut taken_ids = HashSet::new();
    let now = Utc::now();

    (0..count)
        .map(|index| {
            let mut id = generate_order_id(&mut rng);
            while !taken_ids.insert(id.clone()) {
                id = generate_order_id(&mut rng);
            }

            let hour = rng.random_range(9..17);
            let minute = rng.random_range(0..60);
            let meridiem = if hour < 12 { "AM" } else { "PM" };

            Order {
                id,
                customer: format!(
                    "{} Customer {}",
                    CUSTOMER_TYPES[index % CUSTOMER_TYPES.len()],
                    index + 1
                ),
                items: rng.random_range(1..=5),
                address: format!(
                    "{} {}, {}",
                    123 + index,
                    STREETS[index % STREETS.len()],
                    CITIES[index % CITIES.len()]
                ),
                status: ORDER_STATUSES[rng.random_range(0..ORDER_STATUSES.len())],
                scheduled_date: now + Duration::days(index as i64),
                driver: Some(DRIVERS[index % DRIVERS.len()].to_string()),
                delivery_time: Some(format!("{hour}:{minute:02} {meridiem}")),
                region: Some(REGIONS[index % REGIONS.len()].to_string()),
            }
        })
        .collect()
}

fn stop(
    id: u32,
    customer_name: &str,
    address: &str,
    priority: StopPriority,
    eta: &str,
    completed: bool,
) -> RouteStop {
    RouteStop {
        id,
        customer_name: customer_name.to_string(),
        address: address.to_string(),
        priority,
        eta: eta.to_string(),
        completed,
    }
}

fn customer_point(lat: f64, lng: f64) -> Coordinate {
    Coordinate {
        lat,
        lng,
        kind: PointKind::Customer,
    }
}

fn route(
    name: &str,
    total_distance: &str,
    estimated_time: &str,
    time_window: &str,
    optimized: bool,
    stops: Vec<RouteStop>,
    customer_points: Vec<Coordinate>,
) -> RouteInfo {
    let mut coordinates = vec![*DEPOT];
    coordinates.extend(customer_points);
    RouteInfo {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        total_distance: total_distance.to_string(),
        estimated_time: estimated_time.to_string(),
        delivery_stops: stops.len(),
        time_window: time_window.to_string(),
        optimized,
        stops,
        coordinates,
    }
}

pub fn seed_routes() -> Vec<RouteInfo> {
    vec![
        route(
            "Route #1",
            "47.3 miles",
            "2h 15min",
            "8AM - 3PM",
            true,
            vec![
                stop(101, "Customer 3845", "123 Main St, New York", StopPriority::Priority, "9:00 AM", false),
                stop(102, "Customer 5912", "456 Oak Ave, Brooklyn", StopPriority::Regular, "10:30 AM", false),
                stop(103, "Customer 2734", "789 Pine Rd, Queens", StopPriority::Express, "11:45 AM", false),
                stop(104, "Customer 6291", "321 Elm St, Bronx", StopPriority::Priority, "1:15 PM", false),
                stop(105, "Customer 4187", "654 Maple Ave, Staten Island", StopPriority::Regular, "2:30 PM", false),
                stop(106, "Customer 8521", "987 Cedar Blvd, Manhattan", StopPriority::Express, "3:00 PM", false),
            ],
            vec![
                customer_point(40.7328, -73.9860),
                customer_point(40.7428, -74.0260),
                customer_point(40.7028, -74.0160),
                customer_point(40.7228, -73.9960),
            ],
        ),
        route(
            "Route #2",
            "38.9 miles",
            "1h 45min",
            "9AM - 4PM",
            true,
            vec![
                stop(201, "Customer 7563", "234 State St, Manhattan", StopPriority::Express, "9:30 AM", true),
                stop(202, "Customer 4128", "567 Central Ave, Brooklyn", StopPriority::Priority, "10:45 AM", true),
                stop(203, "Customer 9356", "890 Broadway, Queens", StopPriority::Regular, "11:15 AM", false),
                stop(204, "Customer 2817", "432 Park Ave, Bronx", StopPriority::Express, "12:30 PM", false),
                stop(205, "Customer 6492", "765 Madison St, Staten Island", StopPriority::Regular, "2:00 PM", false),
            ],
            vec![
                customer_point(40.7528, -73.9760),
                customer_point(40.7628, -74.0160),
                customer_point(40.7328, -74.0260),
                customer_point(40.7028, -73.9860),
            ],
        ),
        route(
            "Route #3",
            "52.1 miles",
            "2h 30min",
            "7AM - 2PM",
            false,
            vec![
                stop(301, "Customer 5817", "345 River Rd, Manhattan", StopPriority::Priority, "8:15 AM", true),
                stop(302, "Customer 9234", "678 Ocean Ave, Brooklyn", StopPriority::Regular, "9:45 AM", true),
                stop(303, "Customer 4571", "901 Mountain Blvd, Queens", StopPriority::Express, "11:00 AM", true),
                stop(304, "Customer 8329", "543 Valley Way, Bronx", StopPriority::Regular, "12:15 PM", false),
                stop(305, "Customer 6785", "876 Desert St, Staten Island", StopPriority::Priority, "1:30 PM", false),
                stop(306, "Customer 3142", "219 Forest Ave, Manhattan", StopPriority::Express, "2:45 PM", false),
            ],
            vec![
                customer_point(40.7428, -74.0360),
                customer_point(40.7228, -73.9760),
                customer_point(40.7528, -74.0160),
                customer_point(40.7328, -73.9860),
            ],
        ),
    ]
}

#[derive(Debug)]
pub struct FleetSeed {
    pub vehicles: Vec<Vehicle>,
    pub mechanics: Vec<Mechanic>,
    pub repair_jobs: Vec<RepairJob>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub fn seed_fleet() -> FleetSeed {
    let vehicles = vec![
        Vehicle {
            id: Uuid::new_v4().to_string(),
            name: "Delivery Truck 01".to_string(),
            vehicle_type: VehicleType::Truck,
            license_plate: "TR-5432".to_string(),
            status: VehicleStatus::Active,
            last_maintenance: date(2023, 9, 15),
            mileage: 45_289,
        },
        Vehicle {
            id: Uuid::new_v4().to_string(),
            name: "City Van 03".to_string(),
            vehicle_type: VehicleType::Van,
            license_plate: "VN-7821".to_string(),
            status: VehicleStatus::Maintenance,
            last_maintenance: date(2023, 10, 20),
            mileage: 28_734,
        },
        Vehicle {
            id: Uuid::new_v4().to_string(),
            name: "Courier Bike 05".to_string(),
            vehicle_type: VehicleType::Motorcycle,
            license_plate: "MB-1234".to_string(),
            status: VehicleStatus::Active,
            last_maintenance: date(2023, 11, 5),
            mileage: 12_903,
        },
        Vehicle {
            id: Uuid::new_v4().to_string(),
            name: "Delivery Car 02".to_string(),
            vehicle_type: VehicleType::Car,
            license_plate: "CR-9876".to_string(),
            status: VehicleStatus::OutOfService,
            last_maintenance: date(2023, 8, 30),
            mileage: 67_421,
        },
    ];

    let mechanics = vec![
        Mechanic {
            id: Uuid::new_v4().to_string(),
            name: "John Smith".to_string(),
            specialization: "Engine Repairs".to_string(),
            availability: MechanicAvailability::Available,
            contact_number: "555-123-4567".to_string(),
        },
        Mechanic {
            id: Uuid::new_v4().to_string(),
            name: "Maria Garcia".to_string(),
            specialization: "Electrical Systems".to_string(),
            availability: MechanicAvailability::Busy,
            contact_number: "555-234-5678".to_string(),
        },
        Mechanic {
            id: Uuid::new_v4().to_string(),
            name: "Ahmed Khan".to_string(),
            specialization: "Brake Systems".to_string(),
            availability: MechanicAvailability::Available,
            contact_number: "555-345-6789".to_string(),
        },
    ];

    let repair_jobs = vec![
        RepairJob {
            id: Uuid::new_v4().to_string(),
            vehicle_id: vehicles[1].id.clone(),
            description: "Transmission fluid leak".to_string(),
            priority: RepairPriority::High,
            status: RepairStatus::InProgress,
            assigned_mechanic_id: Some(mechanics[0].id.clone()),
            created_at: date(2023, 10, 18),
            estimated_completion_date: Some(date(2023, 10, 22)),
            actual_completion_date: None,
            cost: Some(450.0),
        },
        RepairJob {
            id: Uuid::new_v4().to_string(),
            vehicle_id: vehicles[3].id.clone(),
            description: "Engine overheating".to_string(),
            priority: RepairPriority::Critical,
            status: RepairStatus::Pending,
            assigned_mechanic_id: None,
            created_at: date(2023, 10, 15),
            estimated_completion_date: None,
            actual_completion_date: None,
            cost: None,
        },
    ];

    FleetSeed {
        vehicles,
        mechanics,
        repair_jobs,
    }
}
