use serde::{Deserialize, Serialize};

use super::doctor::Doctor;
use super::patient::PatientEnrollment;
use super::user::User;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Hospital {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "licenseNumber", default)]
    pub license_number: String,
    #[serde(rename = "establishedYear", default)]
    pub established_year: u32,
    #[serde(rename = "bedCapacity", default)]
    pub bed_capacity: u32,
    #[serde(rename = "emergencyContact", default)]
    pub emergency_contact: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct HospitalStatistics {
    pub doctors: u32,
    pub patients: u32,
    pub prescriptions: u32,
}

/// `GET /hospitals/{id}` aggregate.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct HospitalDetails {
    pub hospital: Hospital,
    pub statistics: HospitalStatistics,
    #[serde(default)]
    pub admins: Vec<User>,
}

/// `GET /hospital-admins/my-hospital` aggregate.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct MyHospital {
    pub hospital: Hospital,
    pub statistics: HospitalStatistics,
    #[serde(rename = "recentDoctors", default)]
    pub recent_doctors: Vec<Doctor>,
    #[serde(rename = "recentPatients", default)]
    pub recent_patients: Vec<PatientEnrollment>,
}
