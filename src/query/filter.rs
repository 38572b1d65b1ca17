use crate::models::{
    Mechanic, MechanicAvailability, Order, OrderStatus, RepairJob, RepairStatus, RouteStop, Vehicle,
    VehicleStatus,
};
use serde::{Deserialize, Serialize};

/// Status-bucket test keyed by the symbolic filter strings the dashboard
/// sends. Unrecognized keys fall through to the match-everything bucket;
/// there is no validation layer upstream.
pub trait Filterable {
    fn filter_matches(&self, key: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderFilter {
    #[default]
    All,
    Pending,
    Transit,
    Delivered,
    Delayed,
}

impl OrderFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "transit" => Self::Transit,
            "delivered" => Self::Delivered,
            "delayed" => Self::Delayed,
            _ => Self::All,
        }
    }

    pub fn admits(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == OrderStatus::Processing,
            Self::Transit => status == OrderStatus::InTransit,
            Self::Delivered => status == OrderStatus::Delivered,
            Self::Delayed => status == OrderStatus::Delayed,
        }
    }
}

impl Filterable for Order {
    fn filter_matches(&self, key: &str) -> bool {
        OrderFilter::parse(key).admits(self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StopFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StopFilter {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }
}

impl Filterable for RouteStop {
    fn filter_matches(&self, key: &str) -> bool {
        match StopFilter::parse(key) {
            StopFilter::All => true,
            StopFilter::Pending => !self.completed,
            StopFilter::Completed => self.completed,
        }
    }
}

impl Filterable for Vehicle {
    fn filter_matches(&self, key: &str) -> bool {
        match key {
            "active" => self.status == VehicleStatus::Active,
            "maintenance" => self.status == VehicleStatus::Maintenance,
            "out-of-service" => self.status == VehicleStatus::OutOfService,
            _ => true,
        }
    }
}

impl Filterable for Mechanic {
    fn filter_matches(&self, key: &str) -> bool {
        match key {
            "available" => self.availability == MechanicAvailability::Available,
            "busy" => self.availability == MechanicAvailability::Busy,
            "off-duty" => self.availability == MechanicAvailability::OffDuty,
            _ => true,
        }
    }
}

impl Filterable for RepairJob {
    fn filter_matches(&self, key: &str) -> bool {
        match key {
            "pending" => self.status == RepairStatus::Pending,
            "in-progress" => self.status == RepairStatus::InProgress,
            "completed" => self.status == RepairStatus::Completed,
            "cancelled" => self.status == RepairStatus::Cancelled,
            _ => true,
        }
    }
}
