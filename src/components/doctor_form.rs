use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Hospital, UserRole};
use crate::services::{NewDoctor, UpdateDoctor};
use crate::utils::{input_value, select_value};

const ADMINS: &[UserRole] = &[UserRole::SuperAdmin, UserRole::HospitalAdmin];

#[derive(Properties, PartialEq)]
pub struct DoctorFormProps {
    /// `Some` edits an existing doctor, `None` creates one.
    pub id: Option<String>,
}

#[function_component(DoctorFormPage)]
pub fn doctor_form_page(props: &DoctorFormProps) -> Html {
    html! {
        <RouteGuard allowed={ADMINS}>
            <DoctorFormContent id={props.id.clone()} />
        </RouteGuard>
    }
}

#[function_component(DoctorFormContent)]
fn doctor_form_content(props: &DoctorFormProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let specialization = use_state(String::new);
    let designation = use_state(String::new);
    // Hospital admins create doctors in their own hospital.
    let own_hospital = auth
        .user()
        .and_then(|u| u.hospital_id().map(str::to_string));
    let hospital_id = use_state(|| own_hospital.clone().unwrap_or_default());
    let hospitals = use_state(|| None::<Vec<Hospital>>);
    let loading = use_state(|| props.id.is_some());
    let submitting = use_state(|| false);

    let editing = props.id.is_some();
    let needs_select = own_hospital.is_none() && !editing;

    // Only the create form shows the hospital select, and only for users
    // who are not already bound to a hospital.
    {
        let hospitals = hospitals.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(needs_select, move |needs_select| {
            if *needs_select {
                spawn_local(async move {
                    match client.get_hospitals().await {
                        Ok(list) => hospitals.set(Some(list)),
                        Err(e) => {
                            toast.error(e.to_string());
                            hospitals.set(Some(Vec::new()));
                        }
                    }
                });
            }
            || ()
        });
    }

    // Prefill when editing.
    {
        let name = name.clone();
        let specialization = specialization.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    match client.get_doctor(&id).await {
                        Ok(doctor) => {
                            name.set(doctor.name);
                            specialization.set(doctor.specialization);
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
        let email = email.clone();
        let password = password.clone();
        let specialization = specialization.clone();
        let designation = designation.clone();
        let hospital_id = hospital_id.clone();
        let submitting = submitting.clone();
        let id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if id.is_none() && hospital_id.is_empty() {
                toast.error("Please select a hospital");
                return;
            }

            let client = auth.client().clone();
            let route = route.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let id = id.clone();
            let name = (*name).clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let specialization = (*specialization).clone();
            let designation = (*designation).clone();
            let hospital_id = (*hospital_id).clone();

            submitting.set(true);
            spawn_local(async move {
                let result = match &id {
                    Some(id) => client
                        .update_doctor(
                            id,
                            &UpdateDoctor {
                                name,
                                specialization,
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => client
                        .create_doctor(&NewDoctor {
                            name,
                            email,
                            password,
                            specialization,
                            designation,
                            hospital_id,
                        })
                        .await
                        .map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toast.success(if id.is_some() {
                            "Doctor updated successfully"
                        } else {
                            "Doctor created successfully"
                        });
                        route.go(Route::Doctors);
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
                <h1>{ if editing { "Edit Doctor" } else { "Add Doctor" } }</h1>
            </div>

            <form class="card form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" value={(*name).clone()} oninput={{
                        let name = name.clone();
                        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
                    }} />
                </div>

                if !editing {
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" value={(*email).clone()} oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| email.set(input_value(&e)))
                        }} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" value={(*password).clone()} oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| password.set(input_value(&e)))
                        }} />
                    </div>
                }

                <div class="form-group">
                    <label for="specialization">{"Specialization"}</label>
                    <input type="text" id="specialization" value={(*specialization).clone()} oninput={{
                        let specialization = specialization.clone();
                        Callback::from(move |e: InputEvent| specialization.set(input_value(&e)))
                    }} />
                </div>

                if !editing {
                    <div class="form-group">
                        <label for="designation">{"Designation"}</label>
                        <input type="text" id="designation" value={(*designation).clone()} oninput={{
                            let designation = designation.clone();
                            Callback::from(move |e: InputEvent| designation.set(input_value(&e)))
                        }} />
                    </div>

                    if needs_select {
                        <div class="form-group">
                            <label for="hospital">{"Hospital"}</label>
                            { match (*hospitals).clone() {
                                None => html! { <LoadingSpinner /> },
                                Some(list) => html! {
                                    <select id="hospital" value={(*hospital_id).clone()} onchange={{
                                        let hospital_id = hospital_id.clone();
                                        Callback::from(move |e: Event| hospital_id.set(select_value(&e)))
                                    }}>
                                        <option value="" selected={hospital_id.is_empty()}>
                                            {"Select a hospital"}
                                        </option>
                                        { for list.iter().map(|h| html! {
                                            <option value={h.id.clone()} selected={*hospital_id == h.id}>
                                                { &h.name }
                                            </option>
                                        })}
                                    </select>
                                },
                            }}
                        </div>
                    }
                }

                <div class="form-actions">
                    <button type="button" class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::Doctors))
                    }}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Add Doctor"
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}
