use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{PatientEnrollment, User, UserRole};
use crate::utils::{confirm, format_date};

const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::HospitalAdmin,
    UserRole::Doctor,
];

/// List filters for the signed-in identity: admins see their hospital,
/// doctors see their own patients, super admins see everything.
fn scope_of(user: &User) -> (Option<String>, Option<String>) {
    match user.role() {
        UserRole::SuperAdmin => (None, None),
        UserRole::HospitalAdmin => (user.hospital_id().map(str::to_string), None),
        UserRole::Doctor => (None, Some(user.id.clone())),
    }
}

#[function_component(PatientsPage)]
pub fn patients_page() -> Html {
    html! {
        <RouteGuard allowed={ALL_ROLES}>
            <PatientsContent />
        </RouteGuard>
    }
}

#[function_component(PatientsContent)]
fn patients_content() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let patients = use_state(|| None::<Vec<PatientEnrollment>>);

    let user = auth.user();
    let is_doctor = user.as_ref().map(|u| u.role()) == Some(UserRole::Doctor);
    let scope = user.as_ref().map(scope_of);

    {
        let patients = patients.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(scope.clone(), move |scope| {
            if let Some((hospital_id, doctor_id)) = scope.clone() {
                spawn_local(async move {
                    match client
                        .get_patients(hospital_id.as_deref(), doctor_id.as_deref())
                        .await
                    {
                        Ok(list) => {
                            log::info!("📋 Loaded {} patients", list.len());
                            patients.set(Some(list));
                        }
                        Err(e) => {
                            log::error!("❌ Failed to load patients: {}", e);
                            toast.error(e.to_string());
                            patients.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_delete = {
        let auth = auth.clone();
        let toast = toast.clone();
        let patients = patients.clone();
        Callback::from(move |patient: PatientEnrollment| {
            if !confirm(&format!("Delete patient {}?", patient.name)) {
                return;
            }
            let client = auth.client().clone();
            let toast = toast.clone();
            let patients = patients.clone();
            spawn_local(async move {
                match client.delete_patient(&patient.id).await {
                    Ok(()) => {
                        toast.success("Patient deleted");
                        if let Some(list) = (*patients).clone() {
                            patients.set(Some(
                                list.into_iter().filter(|p| p.id != patient.id).collect(),
                            ));
                        }
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    let Some(list) = (*patients).clone() else {
        return html! { <LoadingSpinner /> };
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Patients"}</h1>
                <button class="btn-primary" onclick={{
                    let route = route.clone();
                    Callback::from(move |_| route.go(Route::PatientNew))
                }}>{"+ Add Patient"}</button>
            </div>

            if list.is_empty() {
                <div class="empty-state card">
                    <p>{"No patients found."}</p>
                </div>
            } else {
                <table class="data-table card">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Age"}</th>
                            <th>{"Gender"}</th>
                            <th>{"Admitted"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.iter().map(|patient| {
                            let view = {
                                let route = route.clone();
                                let id = patient.id.clone();
                                Callback::from(move |_| {
                                    route.go(Route::PatientDetail { id: id.clone() })
                                })
                            };
                            let edit = {
                                let route = route.clone();
                                let id = patient.id.clone();
                                Callback::from(move |_| {
                                    route.go(Route::PatientEdit { id: id.clone() })
                                })
                            };
                            let prescribe = {
                                let route = route.clone();
                                let id = patient.id.clone();
                                Callback::from(move |_| {
                                    route.go(Route::PrescriptionNew {
                                        patient_id: Some(id.clone()),
                                    })
                                })
                            };
                            let delete = {
                                let on_delete = on_delete.clone();
                                let patient = patient.clone();
                                Callback::from(move |_| on_delete.emit(patient.clone()))
                            };
                            html! {
                                <tr key={patient.id.clone()}>
                                    <td>{ &patient.name }</td>
                                    <td>{ patient.age }</td>
                                    <td>{ &patient.gender }</td>
                                    <td>{ patient
                                        .date_of_admission
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_else(|| "-".to_string()) }</td>
                                    <td class="row-actions">
                                        <button class="btn-outline" onclick={view}>{"View"}</button>
                                        <button class="btn-outline" onclick={edit}>{"Edit"}</button>
                                        if is_doctor {
                                            <button class="btn-outline" onclick={prescribe}>
                                                {"Add Prescription"}
                                            </button>
                                        }
                                        <button class="btn-danger" onclick={delete}>{"Delete"}</button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(json: &str) -> User {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn super_admin_lists_unscoped() {
        let u = user(r#"{"id":"u1","name":"Root","email":"r@x.com","role":"SUPER_ADMIN"}"#);
        assert_eq!(scope_of(&u), (None, None));
    }

    #[test]
    fn hospital_admin_is_scoped_to_their_hospital() {
        let u = user(
            r#"{"id":"u2","name":"Ada","email":"a@x.com","role":"HOSPITAL_ADMIN","hospitalId":"h9"}"#,
        );
        assert_eq!(scope_of(&u), (Some("h9".to_string()), None));
    }

    #[test]
    fn doctor_is_scoped_to_their_own_id() {
        let u = user(
            r#"{"id":"d3","name":"Gregory","email":"g@x.com","role":"DOCTOR","hospitalId":"h9"}"#,
        );
        assert_eq!(scope_of(&u), (None, Some("d3".to_string())));
    }
}
