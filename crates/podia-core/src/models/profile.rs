use crate::models::diabetes_type::DiabetesType;

use serde::{Deserialize, Serialize};

/// One-per-identity health profile.
///
/// Every field is optional: a save submits only the fields the user filled
/// in, and the store merges them into whatever is already persisted. Fields
/// absent from a patch are preserved, not deleted. The merge happens
/// server-side; the store answers every patch with the full merged record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diabetes_type: Option<DiabetesType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_year: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_phone: Option<String>,
}
