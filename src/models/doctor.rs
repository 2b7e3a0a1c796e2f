use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    #[serde(default)]
    pub designation: String,
    #[serde(rename = "hospitalId")]
    pub hospital_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}
