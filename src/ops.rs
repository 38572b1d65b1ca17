use crate::analytics;
use crate::debounce::Debouncer;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Coordinate, CreateOrderPayload, CreateRoutePayload, DailyStat, DeliveryPerformance,
    DriverPerformance, FleetOverview, Mechanic, MechanicAvailability, MechanicPayload, OpsSettings,
    Order, OrderAnalytics, OrderStatus, PointKind, RepairJob, RepairJobPayload, RepairStatus,
    RouteInfo, RouteStop, StopPayload, Vehicle, VehiclePayload, VehicleStatus, VehicleUtilization,
};
use crate::query::{run_query, QueryPage, QueryParams};
use crate::seed;
use crate::store::EntityStore;
use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use uuid::Uuid;

const MAX_ORDER_ID_ATTEMPTS: usize = 32;

/// Facade the presentation shell talks to. Owns every store plus the
/// debounce slot shared by the search boxes; cheap to clone.
#[derive(Clone)]
pub struct OpsCore {
    settings: OpsSettings,
    orders: Arc<EntityStore<Order>>,
    routes: Arc<EntityStore<RouteInfo>>,
    vehicles: Arc<EntityStore<Vehicle>>,
    mechanics: Arc<EntityStore<Mechanic>>,
    repair_jobs: Arc<EntityStore<RepairJob>>,
    search_debounce: Arc<Debouncer>,
}

impl OpsCore {
    pub fn new(settings: OpsSettings) -> Self {
        let debounce = Debouncer::new(Duration::from_millis(settings.search_debounce_ms));
        Self {
            settings,
            orders: Arc::new(EntityStore::new("order")),
            routes: Arc::new(EntityStore::new("route")),
            vehicles: Arc::new(EntityStore::new("vehicle")),
            mechanics: Arc::new(EntityStore::new("mechanic")),
            repair_jobs: Arc::new(EntityStore::new("repair job")),
            search_debounce: Arc::new(debounce),
        }
    }

    /// Core pre-loaded with the synthetic dataset the dashboard ships with.
    pub fn with_seed_data(settings: OpsSettings) -> Self {
        let fleet = seed::seed_fleet();
        let debounce = Debouncer::new(Duration::from_millis(settings.search_debounce_ms));
        Self {
            settings,
            orders: Arc::new(EntityStore::with_records(
                "order",
                seed::seed_orders(seed::SEED_ORDER_COUNT),
            )),
            routes: Arc::new(EntityStore::with_records("route", seed::seed_routes())),
            vehicles: Arc::new(EntityStore::with_records("vehicle", fleet.vehicles)),
            mechanics: Arc::new(EntityStore::with_records("mechanic", fleet.mechanics)),
            repair_jobs: Arc::new(EntityStore::with_records("repair job", fleet.repair_jobs)),
            search_debounce: Arc::new(debounce),
        }
    }

    pub fn settings(&self) -> &OpsSettings {
        &self.settings
    }

    // ─── Orders ─────────────────────────────────────────────────────────────

    pub fn query_orders(&self, params: &QueryParams) -> AppResult<QueryPage<Order>> {
        let snapshot = self.orders.all()?;
        Ok(run_query(&snapshot, params, self.settings.page_size))
    }

    /// Debounced variant for search-as-you-type: the query runs once the
    /// input stream has been quiet for the configured window, against the
    /// store state at fire time, and the page is delivered on `results`.
    pub fn query_orders_debounced(
        &self,
        params: QueryParams,
        results: mpsc::Sender<QueryPage<Order>>,
    ) {
        let orders = self.orders.clone();
        let page_size = self.settings.page_size;
        self.search_debounce.submit(move || {
            let snapshot = match orders.all() {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    tracing::warn!(error = %error, "debounced order query failed");
                    return;
                }
            };
            let page = run_query(&snapshot, &params, page_size);
            if results.try_send(page).is_err() {
                tracing::warn!("debounced order query listener dropped");
            }
        });
    }

    pub fn is_searching(&self) -> bool {
        self.search_debounce.is_pending()
    }

    pub fn cancel_pending_search(&self) {
        self.search_debounce.cancel();
    }

    pub fn create_order(&self, payload: CreateOrderPayload) -> AppResult<Order> {
        required(&payload.customer, "Customer name is required")?;
        required(&payload.address, "Delivery address is required")?;
        if payload.items == 0 {
            return Err(AppError::Validation(
                "Item count must be at least 1".to_string(),
            ));
        }

        let id = self.allocate_order_id()?;
        let order = Order {
            id,
            customer: payload.customer,
            items: payload.items,
            address: payload.address,
            status: payload.status.unwrap_or(OrderStatus::Processing),
            scheduled_date: payload.scheduled_date.unwrap_or_else(Utc::now),
            driver: payload.driver,
            delivery_time: payload.delivery_time,
            region: payload.region,
        };
        let order = self.orders.insert(order)?;
        tracing::info!(id = %order.id, "order created");
        Ok(order)
    }

    pub fn set_order_status(&self, id: &str, status: OrderStatus) -> AppResult<Order> {
        let order = self.orders.update(id, |order| order.status = status)?;
        tracing::info!(id = %order.id, status = status.as_str(), "order status changed");
        Ok(order)
    }

    pub fn delete_order(&self, id: &str) -> AppResult<Order> {
        self.orders.remove(id)
    }

    pub fn get_order(&self, id: &str) -> AppResult<Option<Order>> {
        self.orders.get(id)
    }

    pub fn order_analytics(&self) -> AppResult<OrderAnalytics> {
        let snapshot = self.orders.all()?;
        Ok(analytics::order_analytics(&snapshot))
    }

    fn allocate_order_id(&self) -> AppResult<String> {
        let mut rng = rand::rng();
        for _ in 0..MAX_ORDER_ID_ATTEMPTS {
            let candidate = seed::generate_order_id(&mut rng);
            if !self.orders.contains(&candidate)? {
                return Ok(candidate);
            }
        }
        Err(AppError::Internal(
            "Could not allocate a unique order id".to_string(),
        ))
    }

    // ─── Routes ─────────────────────────────────────────────────────────────

    pub fn list_routes(&self) -> AppResult<Vec<RouteInfo>> {
        self.routes.all()
    }

    pub fn get_route(&self, id: &str) -> AppResult<RouteInfo> {
        self.routes
            .get(id)?
            .ok_or_else(|| AppError::NotFound(format!("No route with id {id}")))
    }

    pub fn create_route(&self, payload: CreateRoutePayload) -> AppResult<RouteInfo> {
        required(&payload.name, "Route name is required")?;
        required(&payload.time_window, "Time window is required")?;

        let route = RouteInfo {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            total_distance: "0.0 miles".to_string(),
            estimated_time: "0h 0min".to_string(),
            delivery_stops: 0,
            time_window: payload.time_window,
            optimized: false,
            stops: Vec::new(),
            coordinates: vec![seed::depot()],
        };
        let route = self.routes.insert(route)?;
        tracing::info!(id = %route.id, name = %route.name, "route created");
        Ok(route)
    }

    pub fn delete_route(&self, id: &str) -> AppResult<RouteInfo> {
        self.routes.remove(id)
    }

    pub fn query_stops(&self, route_id: &str, params: &QueryParams) -> AppResult<QueryPage<RouteStop>> {
        let route = self.get_route(route_id)?;
        Ok(run_query(&route.stops, params, self.settings.page_size))
    }

    pub fn add_stop(&self, route_id: &str, payload: StopPayload) -> AppResult<RouteInfo> {
        required(&payload.customer_name, "Customer name is required")?;
        required(&payload.address, "Address is required")?;
        required(&payload.eta, "Estimated arrival time is required")?;

        let mut route = self.get_route(route_id)?;
        let next_id = route.stops.iter().map(|stop| stop.id).max().unwrap_or(0) + 1;
        route.stops.push(RouteStop {
            id: next_id,
            customer_name: payload.customer_name,
            address: payload.address,
            priority: payload.priority,
            eta: payload.eta,
            completed: false,
        });
        route.delivery_stops = route.stops.len();
        self.routes.replace(route)
    }

    pub fn update_stop(&self, route_id: &str, stop: RouteStop) -> AppResult<RouteInfo> {
        let mut route = self.get_route(route_id)?;
        let Some(slot) = route.stops.iter_mut().find(|existing| existing.id == stop.id) else {
            return Err(AppError::NotFound(format!(
                "No stop {} on route {route_id}",
                stop.id
            )));
        };
        *slot = stop;
        self.routes.replace(route)
    }

    pub fn remove_stop(&self, route_id: &str, stop_id: u32) -> AppResult<RouteInfo> {
        let mut route = self.get_route(route_id)?;
        let Some(index) = route.stops.iter().position(|stop| stop.id == stop_id) else {
            return Err(AppError::NotFound(format!(
                "No stop {stop_id} on route {route_id}"
            )));
        };
        route.stops.remove(index);
        route.delivery_stops = route.stops.len();
        self.routes.replace(route)
    }

    pub fn set_stop_completed(
        &self,
        route_id: &str,
        stop_id: u32,
        completed: bool,
    ) -> AppResult<RouteInfo> {
        let mut route = self.get_route(route_id)?;
        let Some(slot) = route.stops.iter_mut().find(|stop| stop.id == stop_id) else {
            return Err(AppError::NotFound(format!(
                "No stop {stop_id} on route {route_id}"
            )));
        };
        slot.completed = completed;
        self.routes.replace(route)
    }

    pub fn export_route(&self, id: &str) -> AppResult<String> {
        let route = self.get_route(id)?;
        Ok(serde_json::to_string_pretty(&route)?)
    }

    /// Simulated optimization: waits the configured window, then stamps
    /// plausible totals and regenerated coordinates. There is no real
    /// distance or traffic computation behind this.
    pub async fn optimize_route(&self, route_id: &str, level: u8) -> AppResult<RouteInfo> {
        if !(1..=10).contains(&level) {
            return Err(AppError::Validation(
                "Optimization level must be between 1 and 10".to_string(),
            ));
        }

        let route = self.get_route(route_id)?;
        if route.stops.is_empty() {
            return Err(AppError::Validation(
                "Add at least one stop before optimizing".to_string(),
            ));
        }

        let delay_ms = {
            let mut rng = rand::rng();
            self.settings.optimize_base_delay_ms + rng.random_range(0..=self.settings.optimize_jitter_ms)
        };
        tracing::info!(id = %route.id, level, delay_ms, "optimizing route");
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let optimized = simulate_optimized(route);
        let optimized = self.routes.replace(optimized)?;
        tracing::info!(id = %optimized.id, distance = %optimized.total_distance, "route optimized");
        Ok(optimized)
    }

    /// Fire-and-track form of `optimize_route`: the returned task cancels
    /// the pending simulation when dropped, so a dismissed wizard never
    /// leaves a timer running.
    pub fn spawn_optimization(&self, route_id: &str, level: u8) -> OptimizationTask {
        let core = self.clone();
        let route_id = route_id.to_string();
        OptimizationTask {
            handle: Some(tokio::spawn(async move {
                core.optimize_route(&route_id, level).await
            })),
        }
    }

    // ─── Fleet ──────────────────────────────────────────────────────────────

    pub fn query_vehicles(&self, params: &QueryParams) -> AppResult<QueryPage<Vehicle>> {
        let snapshot = self.vehicles.all()?;
        Ok(run_query(&snapshot, params, self.settings.page_size))
    }

    pub fn add_vehicle(&self, payload: VehiclePayload) -> AppResult<Vehicle> {
        required(&payload.name, "Vehicle name is required")?;
        required(&payload.license_plate, "License plate is required")?;

        let vehicle = Vehicle {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            vehicle_type: payload.vehicle_type,
            license_plate: payload.license_plate,
            status: payload.status,
            last_maintenance: payload.last_maintenance,
            mileage: payload.mileage,
        };
        let vehicle = self.vehicles.insert(vehicle)?;
        tracing::info!(id = %vehicle.id, name = %vehicle.name, "vehicle added");
        Ok(vehicle)
    }

    pub fn update_vehicle(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        required(&vehicle.name, "Vehicle name is required")?;
        required(&vehicle.license_plate, "License plate is required")?;
        self.vehicles.replace(vehicle)
    }

    pub fn remove_vehicle(&self, id: &str) -> AppResult<Vehicle> {
        self.vehicles.remove(id)
    }

    pub fn query_mechanics(&self, params: &QueryParams) -> AppResult<QueryPage<Mechanic>> {
        let snapshot = self.mechanics.all()?;
        Ok(run_query(&snapshot, params, self.settings.page_size))
    }

    pub fn add_mechanic(&self, payload: MechanicPayload) -> AppResult<Mechanic> {
        required(&payload.name, "Mechanic name is required")?;
        required(&payload.contact_number, "Contact number is required")?;

        let mechanic = Mechanic {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            specialization: payload.specialization,
            availability: payload.availability,
            contact_number: payload.contact_number,
        };
        self.mechanics.insert(mechanic)
    }

    pub fn update_mechanic(&self, mechanic: Mechanic) -> AppResult<Mechanic> {
        required(&mechanic.name, "Mechanic name is required")?;
        required(&mechanic.contact_number, "Contact number is required")?;
        self.mechanics.replace(mechanic)
    }

    pub fn remove_mechanic(&self, id: &str) -> AppResult<Mechanic> {
        self.mechanics.remove(id)
    }

    pub fn query_repair_jobs(&self, params: &QueryParams) -> AppResult<QueryPage<RepairJob>> {
        let snapshot = self.repair_jobs.all()?;
        Ok(run_query(&snapshot, params, self.settings.page_size))
    }

    pub fn add_repair_job(&self, payload: RepairJobPayload) -> AppResult<RepairJob> {
        required(&payload.description, "Repair description is required")?;
        if !self.vehicles.contains(&payload.vehicle_id)? {
            return Err(AppError::NotFound(format!(
                "No vehicle with id {}",
                payload.vehicle_id
            )));
        }

        let job = RepairJob {
            id: Uuid::new_v4().to_string(),
            vehicle_id: payload.vehicle_id,
            description: payload.description,
            priority: payload.priority,
            status: RepairStatus::Pending,
            assigned_mechanic_id: None,
            created_at: Utc::now().date_naive(),
            estimated_completion_date: payload.estimated_completion_date,
            actual_completion_date: None,
            cost: payload.cost,
        };
        let job = self.repair_jobs.insert(job)?;
        tracing::info!(id = %job.id, vehicle = %job.vehicle_id, "repair job opened");
        Ok(job)
    }

    pub fn update_repair_job(&self, job: RepairJob) -> AppResult<RepairJob> {
        required(&job.description, "Repair description is required")?;
        self.repair_jobs.replace(job)
    }

    pub fn remove_repair_job(&self, id: &str) -> AppResult<RepairJob> {
        self.repair_jobs.remove(id)
    }

    /// Assigning a mechanic moves the job to In Progress; unassigning
    /// leaves the current status untouched.
    pub fn assign_mechanic(&self, job_id: &str, mechanic_id: Option<&str>) -> AppResult<RepairJob> {
        if let Some(mechanic_id) = mechanic_id {
            if !self.mechanics.contains(mechanic_id)? {
                return Err(AppError::NotFound(format!(
                    "No mechanic with id {mechanic_id}"
                )));
            }
        }

        self.repair_jobs.update(job_id, |job| {
            job.assigned_mechanic_id = mechanic_id.map(ToString::to_string);
            if mechanic_id.is_some() {
                job.status = RepairStatus::InProgress;
            }
        })
    }

    pub fn fleet_overview(&self) -> AppResult<FleetOverview> {
        let vehicles = self.vehicles.all()?;
        let mechanics = self.mechanics.all()?;
        let jobs = self.repair_jobs.all()?;

        Ok(FleetOverview {
            active_vehicles: count_status(&vehicles, VehicleStatus::Active),
            in_maintenance: count_status(&vehicles, VehicleStatus::Maintenance),
            out_of_service: count_status(&vehicles, VehicleStatus::OutOfService),
            open_repair_jobs: jobs
                .iter()
                .filter(|job| {
                    matches!(job.status, RepairStatus::Pending | RepairStatus::InProgress)
                })
                .count(),
            available_mechanics: mechanics
                .iter()
                .filter(|mechanic| mechanic.availability == MechanicAvailability::Available)
                .count(),
        })
    }

    // ─── Analytics ──────────────────────────────────────────────────────────

    pub fn daily_stats(&self, days: usize) -> Vec<DailyStat> {
        analytics::generate_daily_stats(days)
    }

    pub fn delivery_performance(&self) -> Vec<DeliveryPerformance> {
        analytics::delivery_performance()
    }

    pub fn driver_performance(&self) -> Vec<DriverPerformance> {
        analytics::driver_performance()
    }

    pub fn vehicle_utilization(&self) -> Vec<VehicleUtilization> {
        analytics::vehicle_utilization()
    }
}

/// Pending simulated optimization. Dropping it aborts the simulation if the
/// timer has not fired yet.
pub struct OptimizationTask {
    handle: Option<JoinHandle<AppResult<RouteInfo>>>,
}

impl OptimizationTask {
    pub async fn wait(mut self) -> AppResult<RouteInfo> {
        let Some(handle) = self.handle.take() else {
            return Err(AppError::Internal("Optimization already consumed".to_string()));
        };
        match handle.await {
            Ok(result) => result,
            Err(join_error) if join_error.is_cancelled() => {
                Err(AppError::Internal("Optimization was canceled".to_string()))
            }
            Err(join_error) => Err(AppError::Internal(join_error.to_string())),
        }
    }

    pub fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for OptimizationTask {
    fn drop(&mut self) {
        self.abort();
    }
}

fn required(value: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

fn count_status(vehicles: &[Vehicle], status: VehicleStatus) -> usize {
    vehicles.iter().filter(|v| v.status == status).count()
}

fn simulate_optimized(mut route: RouteInfo) -> RouteInfo {
    let mut rng = rand::rng();
    route.total_distance = format!(
        "{}.{} miles",
        rng.random_range(20..50),
        rng.random_range(0..10)
    );
    route.estimated_time = format!(
        "{}h {}min",
        1 + rng.random_range(0..3),
        rng.random_range(0..60)
    );

    let depot = seed::depot();
    let mut coordinates = vec![depot];
    coordinates.extend(route.stops.iter().map(|_| Coordinate {
        lat: depot.lat + (rng.random::<f64>() * 0.1 - 0.05),
        lng: depot.lng + (rng.random::<f64>() * 0.1 - 0.05),
        kind: PointKind::Customer,
    }));
    route.coordinates = coordinates;
    route.delivery_stops = route.stops.len();
    route.optimized = true;
    route
}

#[cfg(test)]
mod tests {
    use super::OpsCore;
    use crate::errors::AppError;
    use crate::models::{
        CreateOrderPayload, CreateRoutePayload, MechanicAvailability, MechanicPayload, OpsSettings,
        OrderStatus, RepairJobPayload, RepairPriority, RepairStatus, StopPayload, StopPriority,
        VehiclePayload, VehicleStatus, VehicleType,
    };
    use crate::query::QueryParams;
    use chrono::NaiveDate;

    fn core() -> OpsCore {
        OpsCore::new(OpsSettings::default())
    }

    fn order_payload(customer: &str) -> CreateOrderPayload {
        CreateOrderPayload {
            customer: customer.to_string(),
            items: 2,
            address: "123 Main St, New York".to_string(),
            status: None,
            scheduled_date: None,
            driver: None,
            delivery_time: None,
            region: None,
        }
    }

    fn vehicle_payload(name: &str) -> VehiclePayload {
        VehiclePayload {
            name: name.to_string(),
            vehicle_type: VehicleType::Van,
            license_plate: "VN-0001".to_string(),
            status: VehicleStatus::Active,
            last_maintenance: NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date"),
            mileage: 1_000,
        }
    }

    #[test]
    fn create_order_rejects_blank_customer_without_touching_the_store() {
        let core = core();
        let err = core
            .create_order(order_payload("   "))
            .expect_err("blank customer");
        assert!(matches!(err, AppError::Validation(_)));

        let page = core
            .query_orders(&QueryParams::default())
            .expect("query orders");
        assert_eq!(page.total_matching, 0);
    }

    #[test]
    fn create_order_defaults_to_processing_with_a_fresh_id() {
        let core = core();
        let order = core.create_order(order_payload("Acme Freight")).expect("create");
        assert!(order.id.starts_with("ORD-"));
        assert_eq!(order.status, OrderStatus::Processing);
    }

    #[test]
    fn set_status_and_delete_surface_not_found() {
        let core = core();
        let err = core
            .set_order_status("ORD-00000", OrderStatus::Delivered)
            .expect_err("unknown order");
        assert!(matches!(err, AppError::NotFound(_)));

        let err = core.delete_order("ORD-00000").expect_err("unknown order");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn deleting_an_order_shrinks_the_query_result() {
        let core = core();
        let first = core.create_order(order_payload("First Customer")).expect("create");
        core.create_order(order_payload("Second Customer")).expect("create");

        let before = core
            .query_orders(&QueryParams::default())
            .expect("query before");
        assert_eq!(before.total_matching, 2);

        core.delete_order(&first.id).expect("delete");
        let after = core
            .query_orders(&QueryParams::default())
            .expect("query after");
        assert_eq!(after.total_matching, 1);
        assert!(after.items.iter().all(|order| order.id != first.id));
    }

    #[test]
    fn route_wizard_validation_matches_the_forms() {
        let core = core();
        let err = core
            .create_route(CreateRoutePayload {
                name: String::new(),
                time_window: "9AM - 5PM".to_string(),
            })
            .expect_err("missing name");
        assert!(matches!(err, AppError::Validation(_)));

        let route = core
            .create_route(CreateRoutePayload {
                name: "Downtown Loop".to_string(),
                time_window: "9AM - 5PM".to_string(),
            })
            .expect("create route");
        assert!(!route.optimized);
        assert_eq!(route.delivery_stops, 0);

        let err = core
            .add_stop(
                &route.id,
                StopPayload {
                    customer_name: "Customer 1001".to_string(),
                    address: "123 Main St".to_string(),
                    priority: StopPriority::Regular,
                    eta: "  ".to_string(),
                },
            )
            .expect_err("missing eta");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn stops_get_max_plus_one_ids_and_counts_stay_in_sync() {
        let core = core();
        let route = core
            .create_route(CreateRoutePayload {
                name: "Harbor Run".to_string(),
                time_window: "8AM - 2PM".to_string(),
            })
            .expect("create route");

        let stop = |name: &str| StopPayload {
            customer_name: name.to_string(),
            address: "456 Oak Ave, Brooklyn".to_string(),
            priority: StopPriority::Express,
            eta: "10:30 AM".to_string(),
        };

        let route = core.add_stop(&route.id, stop("Customer 17")).expect("first stop");
        let route = core.add_stop(&route.id, stop("Customer 18")).expect("second stop");
        assert_eq!(route.stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(route.delivery_stops, 2);

        let route = core.remove_stop(&route.id, 1).expect("remove stop");
        assert_eq!(route.delivery_stops, 1);

        let route = core.add_stop(&route.id, stop("Customer 19")).expect("third stop");
        assert_eq!(route.stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn repair_jobs_require_an_existing_vehicle() {
        let core = core();
        let err = core
            .add_repair_job(RepairJobPayload {
                vehicle_id: "missing".to_string(),
                description: "Brake pads worn".to_string(),
                priority: RepairPriority::Medium,
                estimated_completion_date: None,
                cost: None,
            })
            .expect_err("unknown vehicle");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn assigning_a_mechanic_moves_the_job_to_in_progress() {
        let core = core();
        let vehicle = core.add_vehicle(vehicle_payload("City Van 09")).expect("vehicle");
        let mechanic = core
            .add_mechanic(MechanicPayload {
                name: "Dana Cole".to_string(),
                specialization: "Suspension".to_string(),
                availability: MechanicAvailability::Available,
                contact_number: "555-987-6543".to_string(),
            })
            .expect("mechanic");
        let job = core
            .add_repair_job(RepairJobPayload {
                vehicle_id: vehicle.id.clone(),
                description: "Rattling on rough roads".to_string(),
                priority: RepairPriority::Low,
                estimated_completion_date: None,
                cost: None,
            })
            .expect("job");
        assert_eq!(job.status, RepairStatus::Pending);

        let assigned = core
            .assign_mechanic(&job.id, Some(&mechanic.id))
            .expect("assign");
        assert_eq!(assigned.status, RepairStatus::InProgress);
        assert_eq!(assigned.assigned_mechanic_id.as_deref(), Some(mechanic.id.as_str()));

        let unassigned = core.assign_mechanic(&job.id, None).expect("unassign");
        assert_eq!(unassigned.status, RepairStatus::InProgress);
        assert!(unassigned.assigned_mechanic_id.is_none());
    }

    #[test]
    fn fleet_overview_counts_statuses() {
        let core = core();
        core.add_vehicle(vehicle_payload("Truck A")).expect("vehicle");
        let mut maintenance = vehicle_payload("Truck B");
        maintenance.status = VehicleStatus::Maintenance;
        maintenance.license_plate = "TR-0002".to_string();
        core.add_vehicle(maintenance).expect("vehicle");

        let overview = core.fleet_overview().expect("overview");
        assert_eq!(overview.active_vehicles, 1);
        assert_eq!(overview.in_maintenance, 1);
        assert_eq!(overview.out_of_service, 0);
    }

    #[tokio::test]
    async fn optimize_requires_stops_and_a_sane_level() {
        let core = core();
        let route = core
            .create_route(CreateRoutePayload {
                name: "Empty Route".to_string(),
                time_window: "9AM - 5PM".to_string(),
            })
            .expect("create route");

        let err = core.optimize_route(&route.id, 0).await.expect_err("level 0");
        assert!(matches!(err, AppError::Validation(_)));

        let err = core
            .optimize_route(&route.id, 7)
            .await
            .expect_err("no stops yet");
        assert!(matches!(err, AppError::Validation(_)));
    }
}
