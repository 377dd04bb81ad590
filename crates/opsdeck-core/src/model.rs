//! Operational entities: employees, orders, and picking waves
//!
//! These are fixed sample sets, read-only from the core's perspective. Status
//! fields are enumerated types; unrecognized values fail deserialization at
//! the load boundary, which the store treats as "no saved state".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpsdeckError;

/// Warehouse floor employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub trained: bool,
    /// Picking efficiency, percent
    pub efficiency: u8,
    pub tasks_completed: u32,
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub status: OrderStatus,
    pub items: u32,
    pub priority: Priority,
}

/// Order fulfillment stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Picking,
    Packing,
    Completed,
}

impl OrderStatus {
    /// All valid order statuses
    pub const VALID_STATUSES: &'static [&'static str] =
        &["pending", "picking", "packing", "completed"];
}

impl FromStr for OrderStatus {
    type Err = OpsdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "picking" => Ok(OrderStatus::Picking),
            "packing" => Ok(OrderStatus::Packing),
            "completed" => Ok(OrderStatus::Completed),
            other => Err(OpsdeckError::Other(format!(
                "unknown order status: {} (expected: {})",
                other,
                Self::VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Picking => write!(f, "Picking"),
            OrderStatus::Packing => write!(f, "Packing"),
            OrderStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Normal => write!(f, "Normal"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// A batch of orders released together for picking/packing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub id: String,
    pub status: WaveStatus,
    pub items: u32,
    /// Minutes spent so far, absent for waves that have not started
    pub completed_minutes: Option<u32>,
}

impl Wave {
    /// Render the elapsed time column as the dashboard shows it
    pub fn time_display(&self) -> String {
        match self.completed_minutes {
            Some(mins) => format!("{} min", mins),
            None => "-".to_string(),
        }
    }
}

/// Wave lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaveStatus {
    Pending,
    InProgress,
    Complete,
}

impl WaveStatus {
    /// All valid wave statuses
    pub const VALID_STATUSES: &'static [&'static str] = &["pending", "in-progress", "complete"];
}

impl FromStr for WaveStatus {
    type Err = OpsdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(WaveStatus::Pending),
            "in-progress" => Ok(WaveStatus::InProgress),
            "complete" => Ok(WaveStatus::Complete),
            other => Err(OpsdeckError::Other(format!(
                "unknown wave status: {} (expected: {})",
                other,
                Self::VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for WaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveStatus::Pending => write!(f, "Pending"),
            WaveStatus::InProgress => write!(f, "In Progress"),
            WaveStatus::Complete => write!(f, "Complete"),
        }
    }
}

/// The sample employee roster
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "EMP-001".into(),
            name: "Alex Turner".into(),
            trained: true,
            efficiency: 92,
            tasks_completed: 45,
        },
        Employee {
            id: "EMP-002".into(),
            name: "Maria Garcia".into(),
            trained: true,
            efficiency: 88,
            tasks_completed: 42,
        },
        Employee {
            id: "EMP-003".into(),
            name: "James Lee".into(),
            trained: false,
            efficiency: 76,
            tasks_completed: 38,
        },
        Employee {
            id: "EMP-004".into(),
            name: "Linda Chen".into(),
            trained: true,
            efficiency: 95,
            tasks_completed: 51,
        },
        Employee {
            id: "EMP-005".into(),
            name: "Robert Taylor".into(),
            trained: true,
            efficiency: 83,
            tasks_completed: 40,
        },
    ]
}

/// The sample order book
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".into(),
            customer: "John Smith".into(),
            status: OrderStatus::Picking,
            items: 5,
            priority: Priority::High,
        },
        Order {
            id: "ORD-002".into(),
            customer: "Sarah Johnson".into(),
            status: OrderStatus::Packing,
            items: 3,
            priority: Priority::Normal,
        },
        Order {
            id: "ORD-003".into(),
            customer: "Mike Davis".into(),
            status: OrderStatus::Completed,
            items: 8,
            priority: Priority::High,
        },
        Order {
            id: "ORD-004".into(),
            customer: "Emily Brown".into(),
            status: OrderStatus::Pending,
            items: 2,
            priority: Priority::Normal,
        },
        Order {
            id: "ORD-005".into(),
            customer: "David Wilson".into(),
            status: OrderStatus::Picking,
            items: 6,
            priority: Priority::High,
        },
    ]
}

/// The sample wave schedule
pub fn sample_waves() -> Vec<Wave> {
    vec![
        Wave {
            id: "WAVE-101".into(),
            status: WaveStatus::Complete,
            items: 120,
            completed_minutes: Some(45),
        },
        Wave {
            id: "WAVE-102".into(),
            status: WaveStatus::InProgress,
            items: 95,
            completed_minutes: Some(35),
        },
        Wave {
            id: "WAVE-103".into(),
            status: WaveStatus::Pending,
            items: 110,
            completed_minutes: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_parses_case_insensitively() {
        assert_eq!("Picking".parse::<OrderStatus>().unwrap(), OrderStatus::Picking);
        assert_eq!("COMPLETED".parse::<OrderStatus>().unwrap(), OrderStatus::Completed);
    }

    #[test]
    fn unknown_order_status_is_rejected() {
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn unknown_wave_status_fails_deserialization() {
        let json = r#"{"id":"WAVE-9","status":"stalled","items":10,"completed_minutes":null}"#;
        assert!(serde_json::from_str::<Wave>(json).is_err());
    }

    #[test]
    fn wave_time_display_uses_dash_for_unstarted() {
        let waves = sample_waves();
        assert_eq!(waves[0].time_display(), "45 min");
        assert_eq!(waves[2].time_display(), "-");
    }

    #[test]
    fn sample_roster_has_four_of_five_trained() {
        let employees = sample_employees();
        assert_eq!(employees.len(), 5);
        assert_eq!(employees.iter().filter(|e| e.trained).count(), 4);
    }
}
