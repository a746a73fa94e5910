use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmployeeRequest {
    pub name: String,
    pub role: Option<String>,
    pub department: Option<String>,
}

/// Partial update for PUT; absent fields keep their current value. For the
/// nullable fields an explicit JSON `null` clears the stored value, so the
/// outer `Option` distinguishes absent (`None`) from null (`Some(None)`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::models::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "crate::models::deserialize_nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub department: Option<Option<String>>,
}
