// ============================================================================
// API CLIENT - single choke-point for all backend communication
// ============================================================================
// Stateless apart from the injected SessionStore: attaches the bearer token,
// serializes bodies, unwraps the {success, data} envelope and translates
// every failure into a display-ready ApiError.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::{
    Doctor, Hospital, HospitalAdmin, HospitalDetails, MyHospital, PatientEnrollment, Prescription,
    User, UserRole,
};
use crate::services::error::ApiError;
use crate::services::session::SessionStore;
use crate::utils::API_BASE_URL;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            session,
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str, session: SessionStore) -> Self {
        Self {
            base_url: base_url.to_string(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// `POST /auth/login`. On success the credential is written to the
    /// session store before returning.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        log::info!("🔐 Logging in {}", email);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: AuthEnvelope = self.post_json("/auth/login", &body).await?;
        let (token, user) = resp.into_parts()?;
        self.session.set(&token);
        log::info!("✅ Logged in as {} ({})", user.name, user.role().label());
        Ok(user)
    }

    /// `POST /auth/register`. Does not establish a session; the caller is
    /// routed back to the sign-in view.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError> {
        log::info!("📝 Registering {}", payload.email);
        let resp: AuthEnvelope = self.post_json("/auth/register", payload).await?;
        let (_token, user) = resp.into_parts()?;
        Ok(user)
    }

    /// `GET /auth/me` - exchange the persisted credential for an identity.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let resp: MeEnvelope = self.get_json("/auth/me").await?;
        if !resp.success {
            return Err(ApiError::InvalidResponse);
        }
        resp.user.ok_or(ApiError::InvalidResponse)
    }

    // ------------------------------------------------------------------
    // Hospitals
    // ------------------------------------------------------------------

    pub async fn get_hospitals(&self) -> Result<Vec<Hospital>, ApiError> {
        let env: Envelope<Vec<Hospital>> = self.get_json("/hospitals").await?;
        env.into_data()
    }

    pub async fn get_hospital_details(&self, id: &str) -> Result<HospitalDetails, ApiError> {
        let env: Envelope<HospitalDetails> =
            self.get_json(&format!("/hospitals/{}", id)).await?;
        env.into_data()
    }

    pub async fn create_hospital(&self, payload: &HospitalPayload) -> Result<Hospital, ApiError> {
        let env: Envelope<Hospital> = self.post_json("/hospitals", payload).await?;
        env.into_data()
    }

    pub async fn update_hospital(
        &self,
        id: &str,
        payload: &HospitalPayload,
    ) -> Result<Hospital, ApiError> {
        let env: Envelope<Hospital> = self
            .put_json(&format!("/hospitals/{}", id), payload)
            .await?;
        env.into_data()
    }

    pub async fn delete_hospital(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/hospitals/{}", id)).await
    }

    // ------------------------------------------------------------------
    // Doctors
    // ------------------------------------------------------------------

    pub async fn get_doctors(&self, hospital_id: Option<&str>) -> Result<Vec<Doctor>, ApiError> {
        let query = list_query(&[("hospitalId", hospital_id)]);
        let env: Envelope<Vec<Doctor>> = self.get_json(&format!("/doctors{}", query)).await?;
        env.into_data()
    }

    pub async fn get_doctor(&self, id: &str) -> Result<Doctor, ApiError> {
        let env: Envelope<Doctor> = self.get_json(&format!("/doctors/{}", id)).await?;
        env.into_data()
    }

    pub async fn create_doctor(&self, payload: &NewDoctor) -> Result<Doctor, ApiError> {
        let env: Envelope<Doctor> = self.post_json("/doctors", payload).await?;
        env.into_data()
    }

    pub async fn update_doctor(&self, id: &str, payload: &UpdateDoctor) -> Result<Doctor, ApiError> {
        let env: Envelope<Doctor> = self.put_json(&format!("/doctors/{}", id), payload).await?;
        env.into_data()
    }

    pub async fn delete_doctor(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/doctors/{}", id)).await
    }

    // ------------------------------------------------------------------
    // Patients
    // ------------------------------------------------------------------

    pub async fn get_patients(
        &self,
        hospital_id: Option<&str>,
        doctor_id: Option<&str>,
    ) -> Result<Vec<PatientEnrollment>, ApiError> {
        let query = list_query(&[("hospitalId", hospital_id), ("doctorId", doctor_id)]);
        let env: Envelope<Vec<PatientEnrollment>> =
            self.get_json(&format!("/patients{}", query)).await?;
        env.into_data()
    }

    pub async fn get_patient(&self, id: &str) -> Result<PatientEnrollment, ApiError> {
        let env: Envelope<PatientEnrollment> =
            self.get_json(&format!("/patients/{}", id)).await?;
        env.into_data()
    }

    pub async fn create_patient(&self, payload: &NewPatient) -> Result<PatientEnrollment, ApiError> {
        let env: Envelope<PatientEnrollment> = self.post_json("/patients", payload).await?;
        env.into_data()
    }

    pub async fn update_patient(
        &self,
        id: &str,
        payload: &UpdatePatient,
    ) -> Result<PatientEnrollment, ApiError> {
        let env: Envelope<PatientEnrollment> = self
            .put_json(&format!("/patients/{}", id), payload)
            .await?;
        env.into_data()
    }

    pub async fn delete_patient(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/patients/{}", id)).await
    }

    // ------------------------------------------------------------------
    // Prescriptions
    // ------------------------------------------------------------------

    pub async fn get_prescriptions(
        &self,
        patient_id: Option<&str>,
        hospital_id: Option<&str>,
        doctor_id: Option<&str>,
    ) -> Result<Vec<Prescription>, ApiError> {
        let query = list_query(&[
            ("patientId", patient_id),
            ("hospitalId", hospital_id),
            ("doctorId", doctor_id),
        ]);
        let env: Envelope<Vec<Prescription>> =
            self.get_json(&format!("/prescriptions{}", query)).await?;
        env.into_data()
    }

    pub async fn get_prescription(&self, id: &str) -> Result<Prescription, ApiError> {
        let env: Envelope<Prescription> =
            self.get_json(&format!("/prescriptions/{}", id)).await?;
        env.into_data()
    }

    pub async fn create_prescription(
        &self,
        payload: &NewPrescription,
    ) -> Result<Prescription, ApiError> {
        let env: Envelope<Prescription> = self.post_json("/prescriptions", payload).await?;
        env.into_data()
    }

    pub async fn update_prescription(
        &self,
        id: &str,
        payload: &UpdatePrescription,
    ) -> Result<Prescription, ApiError> {
        let env: Envelope<Prescription> = self
            .put_json(&format!("/prescriptions/{}", id), payload)
            .await?;
        env.into_data()
    }

    pub async fn delete_prescription(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/prescriptions/{}", id)).await
    }

    // ------------------------------------------------------------------
    // Hospital admins
    // ------------------------------------------------------------------

    pub async fn get_hospital_admins(&self) -> Result<Vec<HospitalAdmin>, ApiError> {
        let env: Envelope<Vec<HospitalAdmin>> = self.get_json("/hospital-admins").await?;
        env.into_data()
    }

    pub async fn create_hospital_admin(
        &self,
        payload: &NewHospitalAdmin,
    ) -> Result<HospitalAdmin, ApiError> {
        let env: Envelope<HospitalAdmin> = self.post_json("/hospital-admins", payload).await?;
        env.into_data()
    }

    pub async fn update_hospital_admin(
        &self,
        id: &str,
        payload: &UpdateHospitalAdmin,
    ) -> Result<HospitalAdmin, ApiError> {
        let env: Envelope<HospitalAdmin> = self
            .put_json(&format!("/hospital-admins/{}", id), payload)
            .await?;
        env.into_data()
    }

    pub async fn delete_hospital_admin(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/hospital-admins/{}", id)).await
    }

    pub async fn my_hospital(&self) -> Result<MyHospital, ApiError> {
        let env: Envelope<MyHospital> = self.get_json("/hospital-admins/my-hospital").await?;
        env.into_data()
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.get() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_body(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_body(response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_body(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .authorize(Request::delete(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let ack: Ack = Self::read_body(response).await?;
        if !ack.success {
            return Err(ApiError::InvalidResponse);
        }
        Ok(())
    }

    /// Translate a non-2xx response into the server's `message` (or the
    /// generic fallback), and a 2xx response into its decoded body.
    async fn read_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "An error occurred".to_string());
            return Err(ApiError::Api { status, message });
        }
        response
            .json::<T>()
            .await
            .map_err(|_| ApiError::InvalidResponse)
    }
}

/// Build the query string for a list operation. Supplied filters are combined
/// conjunctively; no filters means no `?` at all.
fn list_query(filters: &[(&str, Option<&str>)]) -> String {
    let parts: Vec<String> = filters
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?{}", parts.join("&"))
    }
}

// ----------------------------------------------------------------------
// Wire envelopes
// ----------------------------------------------------------------------

#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default = "Option::default")]
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::InvalidResponse);
        }
        self.data.ok_or(ApiError::InvalidResponse)
    }
}

#[derive(Deserialize)]
struct AuthEnvelope {
    success: bool,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

impl AuthEnvelope {
    fn into_parts(self) -> Result<(String, User), ApiError> {
        if !self.success {
            return Err(ApiError::InvalidResponse);
        }
        self.token.zip(self.user).ok_or(ApiError::InvalidResponse)
    }
}

#[derive(Deserialize)]
struct MeEnvelope {
    success: bool,
    #[serde(default)]
    user: Option<User>,
}

#[derive(Deserialize)]
struct Ack {
    success: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

// ----------------------------------------------------------------------
// Request payloads
// ----------------------------------------------------------------------

#[derive(Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(rename = "hospitalId", skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct HospitalPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "licenseNumber")]
    pub license_number: String,
    #[serde(rename = "establishedYear")]
    pub established_year: u32,
    #[serde(rename = "bedCapacity")]
    pub bed_capacity: u32,
    #[serde(rename = "emergencyContact")]
    pub emergency_contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub password: String,
    pub specialization: String,
    pub designation: String,
    #[serde(rename = "hospitalId")]
    pub hospital_id: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct UpdateDoctor {
    pub name: String,
    pub specialization: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "doctorId", skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
    #[serde(rename = "hospitalId", skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(rename = "dateOfAdmission", skip_serializing_if = "Option::is_none")]
    pub date_of_admission: Option<String>,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct UpdatePatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "dateOfAdmission", skip_serializing_if = "Option::is_none")]
    pub date_of_admission: Option<String>,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct NewPrescription {
    #[serde(rename = "patientEnrollmentId")]
    pub patient_enrollment_id: String,
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
    #[serde(rename = "doctorId", skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<String>,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct UpdatePrescription {
    pub medication: String,
    pub dosage: String,
    pub instructions: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct NewHospitalAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "hospitalId")]
    pub hospital_id: String,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct UpdateHospitalAdmin {
    pub name: String,
    pub email: String,
    #[serde(rename = "hospitalId")]
    pub hospital_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_with_both_filters_contains_both_parameters() {
        let query = list_query(&[("hospitalId", Some("h1")), ("doctorId", Some("d2"))]);
        assert_eq!(query, "?hospitalId=h1&doctorId=d2");
    }

    #[test]
    fn query_with_one_filter_skips_the_other() {
        let query = list_query(&[("hospitalId", None), ("doctorId", Some("d2"))]);
        assert_eq!(query, "?doctorId=d2");
    }

    #[test]
    fn query_without_filters_is_empty() {
        assert_eq!(list_query(&[("hospitalId", None), ("doctorId", None)]), "");
    }

    #[test]
    fn envelope_unwraps_data() {
        let env: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["a","b"]}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn envelope_without_data_is_invalid() {
        let env: Envelope<Vec<String>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(env.into_data(), Err(ApiError::InvalidResponse));
    }

    #[test]
    fn unsuccessful_envelope_is_invalid_even_with_data() {
        let env: Envelope<u32> =
            serde_json::from_str(r#"{"success":false,"data":7}"#).unwrap();
        assert_eq!(env.into_data(), Err(ApiError::InvalidResponse));
    }

    #[test]
    fn auth_envelope_requires_token_and_user() {
        let env: AuthEnvelope = serde_json::from_str(
            r#"{"success":true,"token":"t1","user":{"id":"u1","name":"Dr","email":"d@x.com","role":"DOCTOR","hospitalId":"h1","specialization":"ENT"}}"#,
        )
        .unwrap();
        let (token, user) = env.into_parts().unwrap();
        assert_eq!(token, "t1");
        assert_eq!(user.hospital_id(), Some("h1"));

        let rejected: AuthEnvelope = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(rejected.into_parts().unwrap_err(), ApiError::InvalidResponse);
    }

    #[test]
    fn error_body_message_passes_through_verbatim() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Email already exists"}"#).unwrap();
        let err = ApiError::Api {
            status: 409,
            message: body.message.unwrap_or_else(|| "An error occurred".to_string()),
        };
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn error_body_fallback_when_message_missing() {
        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(
            body.message.unwrap_or_else(|| "An error occurred".to_string()),
            "An error occurred"
        );
    }

    #[test]
    fn register_payload_omits_fields_its_role_does_not_need() {
        let payload = RegisterPayload {
            name: "Root".into(),
            email: "root@x.com".into(),
            password: "pw".into(),
            role: UserRole::SuperAdmin,
            hospital_id: None,
            specialization: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("hospitalId"));
        assert!(json.contains("\"role\":\"SUPER_ADMIN\""));
    }

    #[test]
    fn admin_update_payload_uses_wire_field_names() {
        let payload = UpdateHospitalAdmin {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            hospital_id: "h7".into(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"hospitalId\":\"h7\""));
        assert!(!json.contains("hospital_id"));
    }

    #[test]
    fn client_base_url_is_injectable() {
        let client = ApiClient::with_base_url("http://api.test", SessionStore::default());
        assert_eq!(client.base_url, "http://api.test");
    }
}
