use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Prescription {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "patientEnrollmentId")]
    pub patient_enrollment_id: String,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
    #[serde(rename = "doctorId", default)]
    pub doctor_id: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}
