use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{PatientEnrollment, UserRole};
use crate::services::{NewPrescription, UpdatePrescription};
use crate::utils::{input_value, select_value, textarea_value};

const DOCTOR_ONLY: &[UserRole] = &[UserRole::Doctor];

#[derive(Properties, PartialEq)]
pub struct PrescriptionFormProps {
    /// `Some` edits an existing prescription, `None` creates one.
    #[prop_or_default]
    pub id: Option<String>,
    /// Pre-selected patient for the create form.
    #[prop_or_default]
    pub patient_id: Option<String>,
}

#[function_component(PrescriptionFormPage)]
pub fn prescription_form_page(props: &PrescriptionFormProps) -> Html {
    html! {
        <RouteGuard allowed={DOCTOR_ONLY}>
            <PrescriptionFormContent id={props.id.clone()} patient_id={props.patient_id.clone()} />
        </RouteGuard>
    }
}

#[function_component(PrescriptionFormContent)]
fn prescription_form_content(props: &PrescriptionFormProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();

    let patient_id = use_state(|| props.patient_id.clone().unwrap_or_default());
    let medication = use_state(String::new);
    let dosage = use_state(String::new);
    let instructions = use_state(String::new);
    let patients = use_state(|| None::<Vec<PatientEnrollment>>);
    let loading = use_state(|| props.id.is_some());
    let submitting = use_state(|| false);

    let editing = props.id.is_some();
    let doctor_id = auth.user().map(|u| u.id);

    // The create form needs the doctor's patients for the select.
    {
        let patients = patients.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        let doctor_id = doctor_id.clone();
        use_effect_with(editing, move |editing| {
            if !*editing {
                spawn_local(async move {
                    match client.get_patients(None, doctor_id.as_deref()).await {
                        Ok(list) => patients.set(Some(list)),
                        Err(e) => {
                            toast.error(e.to_string());
                            patients.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    // Prefill when editing.
    {
        let medication = medication.clone();
        let dosage = dosage.clone();
        let instructions = instructions.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    match client.get_prescription(&id).await {
                        Ok(p) => {
                            medication.set(p.medication);
                            dosage.set(p.dosage);
                            instructions.set(p.instructions);
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
        let patient_id = patient_id.clone();
        let medication = medication.clone();
        let dosage = dosage.clone();
        let instructions = instructions.clone();
        let submitting = submitting.clone();
        let id = props.id.clone();
        let doctor_id = doctor_id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if id.is_none() && patient_id.is_empty() {
                toast.error("Please select a patient");
                return;
            }

            let client = auth.client().clone();
            let route = route.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let id = id.clone();
            let doctor_id = doctor_id.clone();
            let patient_id = (*patient_id).clone();
            let medication = (*medication).clone();
            let dosage = (*dosage).clone();
            let instructions = (*instructions).clone();

            submitting.set(true);
            spawn_local(async move {
                let result = match &id {
                    Some(id) => client
                        .update_prescription(
                            id,
                            &UpdatePrescription {
                                medication,
                                dosage,
                                instructions,
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => client
                        .create_prescription(&NewPrescription {
                            patient_enrollment_id: patient_id,
                            medication,
                            dosage,
                            instructions,
                            doctor_id,
                        })
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toast.success(if id.is_some() {
                            "Prescription updated successfully"
                        } else {
                            "Prescription created successfully"
                        });
                        route.go(Route::Prescriptions);
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
                <h1>{ if editing { "Edit Prescription" } else { "New Prescription" } }</h1>
            </div>

            <form class="card form" onsubmit={on_submit}>
                if !editing {
                    <div class="form-group">
                        <label for="patient">{"Patient"}</label>
                        { match (*patients).clone() {
                            None => html! { <LoadingSpinner /> },
                            Some(list) => html! {
                                <select id="patient" onchange={{
                                    let patient_id = patient_id.clone();
                                    Callback::from(move |e: Event| patient_id.set(select_value(&e)))
                                }}>
                                    <option value="" selected={patient_id.is_empty()}>
                                        {"Select a patient"}
                                    </option>
                                    { for list.iter().map(|p| html! {
                                        <option value={p.id.clone()} selected={*patient_id == p.id}>
                                            { &p.name }
                                        </option>
                                    })}
                                </select>
                            },
                        }}
                    </div>
                }

                <div class="form-group">
                    <label for="medication">{"Medication"}</label>
                    <input type="text" id="medication" value={(*medication).clone()} oninput={{
                        let medication = medication.clone();
                        Callback::from(move |e: InputEvent| medication.set(input_value(&e)))
                    }} />
                </div>

                <div class="form-group">
                    <label for="dosage">{"Dosage"}</label>
                    <input type="text" id="dosage" value={(*dosage).clone()} oninput={{
                        let dosage = dosage.clone();
                        Callback::from(move |e: InputEvent| dosage.set(input_value(&e)))
                    }} />
                </div>

                <div class="form-group">
                    <label for="instructions">{"Instructions"}</label>
                    <textarea id="instructions" value={(*instructions).clone()} oninput={{
                        let instructions = instructions.clone();
                        Callback::from(move |e: InputEvent| instructions.set(textarea_value(&e)))
                    }} />
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::Prescriptions))
                    }}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Create Prescription"
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
