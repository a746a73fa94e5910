pub mod asset_store;
pub mod employee_store;
pub mod repair_store;
