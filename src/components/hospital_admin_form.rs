use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Hospital, UserRole};
use crate::services::NewHospitalAdmin;
use crate::utils::{input_value, select_value};

const SUPER_ADMIN_ONLY: &[UserRole] = &[UserRole::SuperAdmin];

#[function_component(HospitalAdminFormPage)]
pub fn hospital_admin_form_page() -> Html {
    html! {
        <RouteGuard allowed={SUPER_ADMIN_ONLY}>
            <HospitalAdminFormContent />
        </RouteGuard>
    }
}

#[function_component(HospitalAdminFormContent)]
fn hospital_admin_form_content() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let hospital_id = use_state(String::new);
    let hospitals = use_state(|| None::<Vec<Hospital>>);
    let submitting = use_state(|| false);

    {
        let hospitals = hospitals.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.get_hospitals().await {
                    Ok(list) => hospitals.set(Some(list)),
                    Err(e) => {
                        toast.error(e.to_string());
                        hospitals.set(Some(Vec::new()));
                    }
                }
            });
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
        let hospital_id = hospital_id.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if hospital_id.is_empty() {
                toast.error("Please select a hospital");
                return;
            }

            let client = auth.client().clone();
            let route = route.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let payload = NewHospitalAdmin {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                hospital_id: (*hospital_id).clone(),
            };

            submitting.set(true);
            spawn_local(async move {
                match client.create_hospital_admin(&payload).await {
                    Ok(_) => {
                        toast.success("Hospital admin created successfully");
                        route.go(Route::HospitalAdmins);
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="page narrow">
            <div class="page-header">
                <h1>{"Add Hospital Admin"}</h1>
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

                <div class="form-group">
                    <label for="hospital">{"Hospital"}</label>
                    { match (*hospitals).clone() {
                        None => html! { <LoadingSpinner /> },
                        Some(list) => html! {
                            <select id="hospital" onchange={{
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

                <div class="form-actions">
                    <button type="button" class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::HospitalAdmins))
                    }}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Saving..." } else { "Create Admin" } }
                    </button>
                </div>
            </form>
        </div>
    }
}
