use crate::models::asset::{Asset, AssetStatus};
use crate::models::employee::Employee;
use crate::models::repair::Repair;
use crate::store::domains::asset_store::AssetStore;
use crate::store::domains::employee_store::EmployeeStore;
use crate::store::domains::repair_store::RepairStore;
use chrono::Utc;
use std::sync::Arc;

/// Bundles the three domain stores; constructed once in `main` and shared
/// through `AppState`.
pub struct StoreContext {
    pub employee_store: Arc<EmployeeStore>,
    pub asset_store: Arc<AssetStore>,
    pub repair_store: Arc<RepairStore>,
}

impl StoreContext {
    pub fn new() -> Self {
        Self {
            employee_store: Arc::new(EmployeeStore::new()),
            asset_store: Arc::new(AssetStore::new()),
            repair_store: Arc::new(RepairStore::new()),
        }
    }

    /// Demo dataset the service ships with. Id counters continue past the
    /// highest seeded id.
    pub fn seeded() -> Self {
        let employees = vec![
            Employee {
                id: 1,
                name: "Alice Johnson".to_string(),
                role: None,
                department: None,
            },
            Employee {
                id: 2,
                name: "Bob Smith".to_string(),
                role: None,
                department: None,
            },
            Employee {
                id: 3,
                name: "Charlie Brown".to_string(),
                role: None,
                department: None,
            },
        ];

        let assets = vec![
            Asset {
                id: 1,
                asset_type: "Laptop".to_string(),
                brand: "Dell".to_string(),
                serial_number: "DL1234".to_string(),
                status: AssetStatus::Assigned,
                employee_id: Some(1),
            },
            Asset {
                id: 2,
                asset_type: "Mouse".to_string(),
                brand: "Logitech".to_string(),
                serial_number: "LG9876".to_string(),
                status: AssetStatus::Assigned,
                employee_id: Some(2),
            },
            Asset {
                id: 3,
                asset_type: "Earphones".to_string(),
                brand: "Sony".to_string(),
                serial_number: "SN1122".to_string(),
                status: AssetStatus::Assigned,
                employee_id: Some(1),
            },
        ];

        let repairs = vec![Repair {
            id: 1,
            employee_id: 1,
            asset_id: 1,
            description: "Battery issue".to_string(),
            status: "Open".to_string(),
            reported_at: Utc::now(),
        }];

        Self {
            employee_store: Arc::new(EmployeeStore::with_employees(employees)),
            asset_store: Arc::new(AssetStore::with_assets(assets)),
            repair_store: Arc::new(RepairStore::with_repairs(repairs)),
        }
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_context_continues_id_allocation_past_seeds() {
        let context = StoreContext::seeded();
        let employee = context
            .employee_store
            .create_employee(crate::models::employee::EmployeeRequest {
                name: "Dana".to_string(),
                ..Default::default()
            });
        assert_eq!(employee.id, 4);

        let asset = context
            .asset_store
            .create_asset(crate::models::asset::AssetRequest {
                asset_type: "Monitor".to_string(),
                brand: "LG".to_string(),
                serial_number: "LG0001".to_string(),
                ..Default::default()
            });
        assert_eq!(asset.id, 4);

        let repair = context
            .repair_store
            .create_repair(crate::models::repair::RepairRequest {
                employee_id: 2,
                asset_id: 2,
                description: "Scroll wheel broken".to_string(),
                status: None,
            });
        assert_eq!(repair.id, 2);
    }
}
