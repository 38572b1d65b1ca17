use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─── Orders ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Delivered,
    #[serde(rename = "In Transit")]
    InTransit,
    Processing,
    Delayed,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::InTransit => "In Transit",
            Self::Processing => "Processing",
            Self::Delayed => "Delayed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub items: u32,
    pub address: String,
    pub status: OrderStatus,
    pub scheduled_date: DateTime<Utc>,
    pub driver: Option<String>,
    pub delivery_time: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub customer: String,
    pub items: u32,
    pub address: String,
    pub status: Option<OrderStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub driver: Option<String>,
    pub delivery_time: Option<String>,
    pub region: Option<String>,
}

// ─── Routes ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopPriority {
    Priority,
    Regular,
    Express,
}

impl StopPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "Priority",
            Self::Regular => "Regular",
            Self::Express => "Express",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub id: u32,
    pub customer_name: String,
    pub address: String,
    pub priority: StopPriority,
    pub eta: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointKind {
    Customer,
    Depot,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: PointKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInfo {
    pub id: String,
    pub name: String,
    pub total_distance: String,
    pub estimated_time: String,
    pub delivery_stops: usize,
    pub time_window: String,
    pub optimized: bool,
    pub stops: Vec<RouteStop>,
    pub coordinates: Vec<Coordinate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutePayload {
    pub name: String,
    pub time_window: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPayload {
    pub customer_name: String,
    pub address: String,
    pub priority: StopPriority,
    pub eta: String,
}

// ─── Fleet ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    Van,
    Car,
    Motorcycle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Active,
    Maintenance,
    #[serde(rename = "Out of Service")]
    OutOfService,
}

impl VehicleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Maintenance => "Maintenance",
            Self::OutOfService => "Out of Service",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub license_plate: String,
    pub status: VehicleStatus,
    pub last_maintenance: NaiveDate,
    pub mileage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub license_plate: String,
    pub status: VehicleStatus,
    pub last_maintenance: NaiveDate,
    pub mileage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MechanicAvailability {
    Available,
    Busy,
    #[serde(rename = "Off Duty")]
    OffDuty,
}

impl MechanicAvailability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Busy => "Busy",
            Self::OffDuty => "Off Duty",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mechanic {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub availability: MechanicAvailability,
    pub contact_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MechanicPayload {
    pub name: String,
    pub specialization: String,
    pub availability: MechanicAvailability,
    pub contact_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairPriority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl RepairStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairJob {
    pub id: String,
    pub vehicle_id: String,
    pub description: String,
    pub priority: RepairPriority,
    pub status: RepairStatus,
    pub assigned_mechanic_id: Option<String>,
    pub created_at: NaiveDate,
    pub estimated_completion_date: Option<NaiveDate>,
    pub actual_completion_date: Option<NaiveDate>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairJobPayload {
    pub vehicle_id: String,
    pub description: String,
    pub priority: RepairPriority,
    pub estimated_completion_date: Option<NaiveDate>,
    pub cost: Option<f64>,
}

// ─── Analytics ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    pub date: String,
    pub deliveries: u32,
    pub on_time: u32,
    pub delayed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPerformance {
    pub name: String,
    pub value: u32,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPerformance {
    pub name: String,
    pub deliveries: u32,
    pub rating: f64,
    pub on_time_percentage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUtilization {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverTally {
    pub total_deliveries: u32,
    pub on_time_deliveries: u32,
    pub delayed_deliveries: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAnalytics {
    pub total_orders: usize,
    pub delivered_orders: usize,
    pub in_transit_orders: usize,
    pub processing_orders: usize,
    pub delayed_orders: usize,
    pub on_time_rate: f64,
    pub region_counts: BTreeMap<String, u32>,
    pub driver_performance: BTreeMap<String, DriverTally>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    pub active_vehicles: usize,
    pub in_maintenance: usize,
    pub out_of_service: usize,
    pub open_repair_jobs: usize,
    pub available_mechanics: usize,
}

// ─── Settings ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpsSettings {
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub optimize_base_delay_ms: u64,
    pub optimize_jitter_ms: u64,
}

impl Default for OpsSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            search_debounce_ms: 300,
            optimize_base_delay_ms: 2_000,
            optimize_jitter_ms: 1_000,
        }
    }
}
