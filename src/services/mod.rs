pub mod api_client;
pub mod error;
pub mod session;

pub use api_client::{
    ApiClient, HospitalPayload, NewDoctor, NewHospitalAdmin, NewPatient, NewPrescription,
    RegisterPayload, UpdateDoctor, UpdatePatient, UpdatePrescription,
};
pub use error::ApiError;
pub use session::SessionStore;
