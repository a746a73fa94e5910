use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum AssetStatus {
    #[default]
    Available,
    Assigned,
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let status_str = match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
        };
        write!(f, "{}", status_str)
    }
}

/// A piece of hardware tracked by the service. `employee_id` is set while the
/// asset is checked out; `status` is expected to mirror it but nothing enforces
/// that for caller-supplied updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: u32,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub brand: String,
    pub serial_number: String,
    pub status: AssetStatus,
    pub employee_id: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetRequest {
    #[serde(rename = "type")]
    pub asset_type: String,
    pub brand: String,
    pub serial_number: String,
    pub status: Option<AssetStatus>,
    pub employee_id: Option<u32>,
}

/// Partial update for PUT. `employee_id` is the one nullable field: absent
/// leaves the assignment alone, explicit JSON `null` clears it (status is not
/// derived here; only assign/unassign couple the two).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub brand: Option<String>,
    pub serial_number: Option<String>,
    pub status: Option<AssetStatus>,
    #[serde(
        default,
        deserialize_with = "crate::models::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub employee_id: Option<Option<u32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    pub employee_id: u32,
}
