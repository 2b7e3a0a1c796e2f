pub mod admin;
pub mod doctor;
pub mod hospital;
pub mod patient;
pub mod prescription;
pub mod user;

pub use admin::HospitalAdmin;
pub use doctor::Doctor;
pub use hospital::{Hospital, HospitalDetails, MyHospital};
pub use patient::PatientEnrollment;
pub use prescription::Prescription;
pub use user::{User, UserRole};
