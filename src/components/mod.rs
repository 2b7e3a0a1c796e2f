pub mod app;
pub mod dashboard;
pub mod doctor_form;
pub mod doctors;
pub mod hospital_admin_form;
pub mod hospital_admins;
pub mod hospital_detail;
pub mod hospital_form;
pub mod hospitals;
pub mod loading;
pub mod login_screen;
pub mod my_hospital;
pub mod navbar;
pub mod patient_detail;
pub mod patient_form;
pub mod patients;
pub mod prescription_form;
pub mod prescriptions;
pub mod register_screen;
pub mod route_guard;
pub mod toast;

pub use app::App;
