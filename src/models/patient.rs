use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PatientEnrollment {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "doctorId", default)]
    pub doctor_id: Option<String>,
    #[serde(rename = "hospitalId", default)]
    pub hospital_id: Option<String>,
    #[serde(rename = "dateOfAdmission", default)]
    pub date_of_admission: Option<String>,
}
