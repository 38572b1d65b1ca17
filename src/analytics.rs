use crate::models::{
    DailyStat, DeliveryPerformance, DriverPerformance, DriverTally, Order, OrderAnalytics,
    OrderStatus, VehicleUtilization,
};
use chrono::{Datelike, Duration, Utc, Weekday};
use rand::Rng;
use std::collections::BTreeMap;

/// Synthetic per-day delivery counts: weekday traffic above weekend
/// traffic, a mild upward trend toward today, 80-95 % on time.
pub fn generate_daily_stats(days: usize) -> Vec<DailyStat> {
    let mut rng = rand::rng();
    let today = Utc::now().date_naive();

    (0..days)
        .map(|index| {
            let date = today - Duration::days((days - index - 1) as i64);
            let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

            let base = if is_weekend {
                rng.random_range(70..100)
            } else {
                rng.random_range(100..150)
            };
            let trend_factor = 1.0 + (index as f64 * 0.01);
            let deliveries = (base as f64 * trend_factor) as u32;

            let on_time_percentage = 0.8 + rng.random::<f64>() * 0.15;
            let on_time = (deliveries as f64 * on_time_percentage) as u32;

            DailyStat {
                date: date.format("%b %d").to_string(),
                deliveries,
                on_time,
                delayed: deliveries - on_time,
            }
        })
        .collect()
}

pub fn delivery_performance() -> Vec<DeliveryPerformance> {
    let breakdown = [
        ("On Time", 82, "#22c55e"),
        ("Delayed", 13, "#f97316"),
        ("Rescheduled", 5, "#3b82f6"),
    ];
    breakdown
        .into_iter()
        .map(|(name, value, color)| DeliveryPerformance {
            name: name.to_string(),
            value,
            color: color.to_string(),
        })
        .collect()
}

pub fn driver_performance() -> Vec<DriverPerformance> {
    let drivers = [
        ("Alex Johnson", 342, 4.9, 97),
        ("Maria Garcia", 315, 4.8, 95),
        ("James Wilson", 287, 4.7, 94),
        ("Sarah Lee", 276, 4.9, 96),
        ("Robert Chen", 254, 4.6, 92),
    ];
    drivers
        .into_iter()
        .map(|(name, deliveries, rating, on_time_percentage)| DriverPerformance {
            name: name.to_string(),
            deliveries,
            rating,
            on_time_percentage,
        })
        .collect()
}

pub fn vehicle_utilization() -> Vec<VehicleUtilization> {
    let fleets = [("Van Fleet", 87), ("Truck Fleet", 76), ("Motorcycle Fleet", 92)];
    fleets
        .into_iter()
        .map(|(name, value)| VehicleUtilization {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Live rollup over the order store: status totals, on-time rate, and
/// per-region / per-driver tallies.
pub fn order_analytics(orders: &[Order]) -> OrderAnalytics {
    let total_orders = orders.len();
    let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();
    let delivered_orders = count(OrderStatus::Delivered);
    let in_transit_orders = count(OrderStatus::InTransit);
    let processing_orders = count(OrderStatus::Processing);
    let delayed_orders = count(OrderStatus::Delayed);

    let on_time_rate = if total_orders > 0 {
        (delivered_orders as f64 - delayed_orders as f64) / total_orders as f64 * 100.0
    } else {
        0.0
    };

    let mut region_counts: BTreeMap<String, u32> = BTreeMap::new();
    let mut driver_performance: BTreeMap<String, DriverTally> = BTreeMap::new();
    for order in orders {
        if let Some(region) = &order.region {
            *region_counts.entry(region.clone()).or_insert(0) += 1;
        }
        if let Some(driver) = &order.driver {
            let tally = driver_performance.entry(driver.clone()).or_default();
            tally.total_deliveries += 1;
            match order.status {
                OrderStatus::Delivered => tally.on_time_deliveries += 1,
                OrderStatus::Delayed => tally.delayed_deliveries += 1,
                _ => {}
            }
        }
    }

    OrderAnalytics {
        total_orders,
        delivered_orders,
        in_transit_orders,
        processing_orders,
        delayed_orders,
        on_time_rate,
        region_counts,
        driver_performance,
    }
}
