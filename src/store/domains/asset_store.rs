use crate::models::asset::{Asset, AssetRequest, AssetStatus, AssetUpdate};
use std::sync::RwLock;

struct AssetState {
    assets: Vec<Asset>,
    next_id: u32,
}

/// In-memory asset collection plus the asset-to-employee assignment
/// relationship. Assignment is a plain foreign key: nothing here checks that
/// the employee id exists, and employee deletion does not cascade.
pub struct AssetStore {
    state: RwLock<AssetState>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(AssetState {
                assets: vec![],
                next_id: 1,
            }),
        }
    }

    pub fn with_assets(assets: Vec<Asset>) -> Self {
        let next_id = assets.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(AssetState { assets, next_id }),
        }
    }

    pub fn get_assets(&self) -> Vec<Asset> {
        let state = self.state.read().unwrap();
        state.assets.clone()
    }

    pub fn create_asset(&self, request: AssetRequest) -> Asset {
        let mut state = self.state.write().unwrap();
        let asset = Asset {
            id: state.next_id,
            asset_type: request.asset_type,
            brand: request.brand,
            serial_number: request.serial_number,
            status: request.status.unwrap_or_default(),
            employee_id: request.employee_id,
        };
        state.next_id += 1;
        state.assets.push(asset.clone());
        asset
    }

    pub fn update_asset(&self, id: u32, update: AssetUpdate) -> Option<Asset> {
        let mut state = self.state.write().unwrap();
        let asset = state.assets.iter_mut().find(|a| a.id == id)?;
        if let Some(asset_type) = update.asset_type {
            asset.asset_type = asset_type;
        }
        if let Some(brand) = update.brand {
            asset.brand = brand;
        }
        if let Some(serial_number) = update.serial_number {
            asset.serial_number = serial_number;
        }
        if let Some(status) = update.status {
            asset.status = status;
        }
        if let Some(employee_id) = update.employee_id {
            asset.employee_id = employee_id;
        }
        Some(asset.clone())
    }

    pub fn delete_asset(&self, id: u32) {
        let mut state = self.state.write().unwrap();
        state.assets.retain(|a| a.id != id);
    }

    /// Hands the asset to an employee and forces the status along with it.
    pub fn assign_asset(&self, id: u32, employee_id: u32) -> Option<Asset> {
        let mut state = self.state.write().unwrap();
        let asset = state.assets.iter_mut().find(|a| a.id == id)?;
        asset.employee_id = Some(employee_id);
        asset.status = AssetStatus::Assigned;
        Some(asset.clone())
    }

    pub fn unassign_asset(&self, id: u32) -> Option<Asset> {
        let mut state = self.state.write().unwrap();
        let asset = state.assets.iter_mut().find(|a| a.id == id)?;
        asset.employee_id = None;
        asset.status = AssetStatus::Available;
        Some(asset.clone())
    }

    pub fn get_assets_for_employee(&self, employee_id: u32) -> Vec<Asset> {
        let state = self.state.read().unwrap();
        state
            .assets
            .iter()
            .filter(|a| a.employee_id == Some(employee_id))
            .cloned()
            .collect()
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}
