use crate::models::repair::{Repair, RepairRequest, RepairUpdate};
use chrono::Utc;
use std::sync::RwLock;

const DEFAULT_STATUS: &str = "Open";

struct RepairState {
    repairs: Vec<Repair>,
    next_id: u32,
}

pub struct RepairStore {
    state: RwLock<RepairState>,
}

impl RepairStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RepairState {
                repairs: vec![],
                next_id: 1,
            }),
        }
    }

    pub fn with_repairs(repairs: Vec<Repair>) -> Self {
        let next_id = repairs.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(RepairState { repairs, next_id }),
        }
    }

    pub fn get_repairs(&self) -> Vec<Repair> {
        let state = self.state.read().unwrap();
        state.repairs.clone()
    }

    pub fn get_repair(&self, id: u32) -> Option<Repair> {
        let state = self.state.read().unwrap();
        state.repairs.iter().find(|r| r.id == id).cloned()
    }

    pub fn create_repair(&self, request: RepairRequest) -> Repair {
        let mut state = self.state.write().unwrap();
        let repair = Repair {
            id: state.next_id,
            employee_id: request.employee_id,
            asset_id: request.asset_id,
            description: request.description,
            status: request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            reported_at: Utc::now(),
        };
        state.next_id += 1;
        state.repairs.push(repair.clone());
        repair
    }

    pub fn update_repair(&self, id: u32, update: RepairUpdate) -> Option<Repair> {
        let mut state = self.state.write().unwrap();
        let repair = state.repairs.iter_mut().find(|r| r.id == id)?;
        if let Some(employee_id) = update.employee_id {
            repair.employee_id = employee_id;
        }
        if let Some(asset_id) = update.asset_id {
            repair.asset_id = asset_id;
        }
        if let Some(description) = update.description {
            repair.description = description;
        }
        if let Some(status) = update.status {
            repair.status = status;
        }
        Some(repair.clone())
    }

    pub fn delete_repair(&self, id: u32) {
        let mut state = self.state.write().unwrap();
        state.repairs.retain(|r| r.id != id);
    }

    pub fn get_repairs_for_employee(&self, employee_id: u32) -> Vec<Repair> {
        let state = self.state.read().unwrap();
        state
            .repairs
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect()
    }
}

impl Default for RepairStore {
    fn default() -> Self {
        Self::new()
    }
}
