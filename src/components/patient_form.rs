use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{User, UserRole};
use crate::services::{NewPatient, UpdatePatient};
use crate::utils::{input_value, select_value};

const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::HospitalAdmin,
    UserRole::Doctor,
];

const GENDERS: &[&str] = &["Male", "Female", "Other"];

/// New enrollments are attributed to the identity creating them: doctors
/// stamp themselves and their hospital, admins stamp their hospital.
fn attribution(user: &User) -> (Option<String>, Option<String>) {
    match user.role() {
        UserRole::SuperAdmin => (None, None),
        UserRole::HospitalAdmin => (None, user.hospital_id().map(str::to_string)),
        UserRole::Doctor => (
            Some(user.id.clone()),
            user.hospital_id().map(str::to_string),
        ),
    }
}

#[derive(Properties, PartialEq)]
pub struct PatientFormProps {
    /// `Some` edits an existing enrollment, `None` creates one.
    pub id: Option<String>,
}

#[function_component(PatientFormPage)]
pub fn patient_form_page(props: &PatientFormProps) -> Html {
    html! {
        <RouteGuard allowed={ALL_ROLES}>
            <PatientFormContent id={props.id.clone()} />
        </RouteGuard>
    }
}

#[function_component(PatientFormContent)]
fn patient_form_content(props: &PatientFormProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();

    let name = use_state(String::new);
    let age = use_state(String::new);
    let gender = use_state(|| GENDERS[0].to_string());
    let date_of_admission = use_state(String::new);
    let loading = use_state(|| props.id.is_some());
    let submitting = use_state(|| false);

    let editing = props.id.is_some();

    {
        let name = name.clone();
        let age = age.clone();
        let gender = gender.clone();
        let date_of_admission = date_of_admission.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    match client.get_patient(&id).await {
                        Ok(patient) => {
                            name.set(patient.name);
                            age.set(patient.age.to_string());
                            gender.set(patient.gender);
                            date_of_admission.set(patient.date_of_admission.unwrap_or_default());
                        }
                        Err(e) => toast.error(e.to_string()),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_submit = {
        let auth = auth.clone();
        let route = route.clone();
        let toast = toast.clone();
        let name = name.clone();
        let age = age.clone();
        let gender = gender.clone();
        let date_of_admission = date_of_admission.clone();
        let submitting = submitting.clone();
        let id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(age) = age.trim().parse::<u32>() else {
                toast.error("Age must be a number");
                return;
            };

            let Some(user) = auth.user() else {
                return;
            };

            let client = auth.client().clone();
            let route = route.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let id = id.clone();
            let name = (*name).clone();
            let gender = (*gender).clone();
            let admission =
                (!date_of_admission.is_empty()).then(|| (*date_of_admission).clone());

            submitting.set(true);
            spawn_local(async move {
                let result = match &id {
                    Some(id) => client
                        .update_patient(
                            id,
                            &UpdatePatient {
                                name,
                                age,
                                gender,
                                date_of_admission: admission,
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => {
                        let (doctor_id, hospital_id) = attribution(&user);
                        client
                            .create_patient(&NewPatient {
                                name,
                                age,
                                gender,
                                doctor_id,
                                hospital_id,
                                date_of_admission: admission,
                            })
                            .await
                            .map(|_| ())
                    }
                };
                match result {
                    Ok(()) => {
                        toast.success(if id.is_some() {
                            "Patient updated successfully"
                        } else {
                            "Patient enrolled successfully"
                        });
                        route.go(Route::Patients);
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                submitting.set(false);
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    html! {
        <div class="page narrow">
            <div class="page-header">
                <h1>{ if editing { "Edit Patient" } else { "Enroll Patient" } }</h1>
            </div>

            <form class="card form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" value={(*name).clone()} oninput={{
                        let name = name.clone();
                        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
                    }} />
                </div>

                <div class="form-group">
                    <label for="age">{"Age"}</label>
                    <input type="number" id="age" min="0" value={(*age).clone()} oninput={{
                        let age = age.clone();
                        Callback::from(move |e: InputEvent| age.set(input_value(&e)))
                    }} />
                </div>

                <div class="form-group">
                    <label for="gender">{"Gender"}</label>
                    <select id="gender" onchange={{
                        let gender = gender.clone();
                        Callback::from(move |e: Event| gender.set(select_value(&e)))
                    }}>
                        { for GENDERS.iter().map(|g| html! {
                            <option value={g.to_string()} selected={*gender == *g}>
                                { g.to_string() }
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="admission">{"Date of Admission (optional)"}</label>
                    <input type="date" id="admission" value={(*date_of_admission).clone()} oninput={{
                        let date_of_admission = date_of_admission.clone();
                        Callback::from(move |e: InputEvent| date_of_admission.set(input_value(&e)))
                    }} />
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::Patients))
                    }}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Enroll Patient"
                        }}
                    </button>
                </div>
            </form>
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
    fn doctor_enrollments_carry_doctor_and_hospital() {
        let u = user(
            r#"{"id":"d1","name":"Gregory","email":"g@x.com","role":"DOCTOR","hospitalId":"h2"}"#,
        );
        assert_eq!(
            attribution(&u),
            (Some("d1".to_string()), Some("h2".to_string()))
        );
    }

    #[test]
    fn admin_enrollments_carry_only_the_hospital() {
        let u = user(
            r#"{"id":"a1","name":"Ada","email":"a@x.com","role":"HOSPITAL_ADMIN","hospitalId":"h2"}"#,
        );
        assert_eq!(attribution(&u), (None, Some("h2".to_string())));
    }

    #[test]
    fn super_admin_enrollments_are_unattributed() {
        let u = user(r#"{"id":"s1","name":"Root","email":"r@x.com","role":"SUPER_ADMIN"}"#);
        assert_eq!(attribution(&u), (None, None));
    }
}
