use serde::{Deserialize, Serialize};

use super::hospital::Hospital;

/// A hospital administrator account as returned by the `/hospital-admins`
/// resource. Unlike the session identity this shape may embed the assigned
/// hospital record.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct HospitalAdmin {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "hospitalId", default)]
    pub hospital_id: Option<String>,
    #[serde(default)]
    pub hospital: Option<Hospital>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}
