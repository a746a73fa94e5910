use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repair ticket raised by an employee for one of their assets. `reported_at`
/// is stamped with server wall-clock time at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Repair {
    pub id: u32,
    pub employee_id: u32,
    pub asset_id: u32,
    pub description: String,
    pub status: String,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepairRequest {
    pub employee_id: u32,
    pub asset_id: u32,
    pub description: String,
    pub status: Option<String>,
}

/// Partial update for PUT. No repair field is nullable, so an explicit JSON
/// `null` has nothing to clear and reads the same as an absent field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepairUpdate {
    pub employee_id: Option<u32>,
    pub asset_id: Option<u32>,
    pub description: Option<String>,
    pub status: Option<String>,
}
