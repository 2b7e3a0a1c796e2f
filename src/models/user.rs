use serde::{Deserialize, Serialize};

/// The closed role set. Determines visible navigation and data scoping;
/// real enforcement happens server-side.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "SUPER_ADMIN")]
    SuperAdmin,
    #[serde(rename = "HOSPITAL_ADMIN")]
    HospitalAdmin,
    #[serde(rename = "DOCTOR")]
    Doctor,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::HospitalAdmin => "Hospital Admin",
            UserRole::Doctor => "Doctor",
        }
    }
}

/// Role-dependent part of an identity. Each variant carries exactly the
/// fields that role requires, so a hospital admin without a hospital or a
/// super admin with one cannot be represented.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum RoleProfile {
    #[serde(rename = "SUPER_ADMIN")]
    SuperAdmin,
    #[serde(rename = "HOSPITAL_ADMIN")]
    HospitalAdmin {
        #[serde(rename = "hospitalId")]
        hospital_id: String,
    },
    #[serde(rename = "DOCTOR")]
    Doctor {
        #[serde(rename = "hospitalId")]
        hospital_id: String,
        #[serde(default)]
        specialization: String,
    },
}

/// Resolved identity of the signed-in user.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl User {
    pub fn role(&self) -> UserRole {
        match self.profile {
            RoleProfile::SuperAdmin => UserRole::SuperAdmin,
            RoleProfile::HospitalAdmin { .. } => UserRole::HospitalAdmin,
            RoleProfile::Doctor { .. } => UserRole::Doctor,
        }
    }

    pub fn hospital_id(&self) -> Option<&str> {
        match &self.profile {
            RoleProfile::SuperAdmin => None,
            RoleProfile::HospitalAdmin { hospital_id }
            | RoleProfile::Doctor { hospital_id, .. } => Some(hospital_id),
        }
    }

    pub fn specialization(&self) -> Option<&str> {
        match &self.profile {
            RoleProfile::Doctor { specialization, .. } => Some(specialization),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn super_admin_carries_no_hospital() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Root","email":"root@x.com","role":"SUPER_ADMIN"}"#,
        )
        .unwrap();
        assert_eq!(user.role(), UserRole::SuperAdmin);
        assert_eq!(user.hospital_id(), None);
    }

    #[test]
    fn doctor_carries_hospital_and_specialization() {
        let user: User = serde_json::from_str(
            r#"{"_id":"u2","name":"Dr. Gray","email":"gray@x.com","role":"DOCTOR","hospitalId":"h1","specialization":"Cardiology"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u2");
        assert_eq!(user.role(), UserRole::Doctor);
        assert_eq!(user.hospital_id(), Some("h1"));
        assert_eq!(user.specialization(), Some("Cardiology"));
    }

    #[test]
    fn hospital_admin_requires_a_hospital() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"id":"u3","name":"Admin","email":"a@x.com","role":"HOSPITAL_ADMIN"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn role_serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserRole::HospitalAdmin).unwrap(),
            "\"HOSPITAL_ADMIN\""
        );
    }
}
