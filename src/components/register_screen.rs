use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Hospital, UserRole};
use crate::services::RegisterPayload;
use crate::utils::select_value;

#[function_component(RegisterScreen)]
pub fn register_screen() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let specialization_ref = use_node_ref();
    // The role drives which fields render, so it lives in state.
    let role = use_state(|| UserRole::Doctor);
    let hospital_id = use_state(String::new);
    let hospitals = use_state(Vec::<Hospital>::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    {
        let route = route.clone();
        let authenticated = auth.user().is_some();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                route.go(Route::Dashboard);
            }
            || ()
        });
    }

    // Hospital list for the affiliation select.
    {
        let hospitals = hospitals.clone();
        let client = auth.client().clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.get_hospitals().await {
                    Ok(data) => hospitals.set(data),
                    Err(e) => log::error!("❌ Failed to fetch hospitals: {}", e),
                }
            });
            || ()
        });
    }

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            role.set(match select_value(&e).as_str() {
                "SUPER_ADMIN" => UserRole::SuperAdmin,
                "HOSPITAL_ADMIN" => UserRole::HospitalAdmin,
                _ => UserRole::Doctor,
            });
        })
    };

    let on_hospital_change = {
        let hospital_id = hospital_id.clone();
        Callback::from(move |e: Event| hospital_id.set(select_value(&e)))
    };

    let on_submit = {
        let auth = auth.clone();
        let toast = toast.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let specialization_ref = specialization_ref.clone();
        let role = role.clone();
        let hospital_id = hospital_id.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name), Some(email), Some(password)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let needs_hospital =
                matches!(*role, UserRole::HospitalAdmin | UserRole::Doctor);
            if needs_hospital && hospital_id.is_empty() {
                error.set(Some("Please select a hospital".to_string()));
                return;
            }

            let payload = RegisterPayload {
                name: name.value(),
                email: email.value(),
                password: password.value(),
                role: *role,
                hospital_id: needs_hospital.then(|| (*hospital_id).clone()),
                specialization: matches!(*role, UserRole::Doctor).then(|| {
                    specialization_ref
                        .cast::<HtmlInputElement>()
                        .map(|i| i.value())
                        .unwrap_or_default()
                }),
            };

            let auth = auth.clone();
            let toast = toast.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            error.set(None);
            spawn_local(async move {
                match auth.register(&payload).await {
                    Ok(()) => toast.success("Registration successful, please sign in"),
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let go_login = {
        let route = route.clone();
        Callback::from(move |_| route.go(Route::Login))
    };

    let needs_hospital = matches!(*role, UserRole::HospitalAdmin | UserRole::Doctor);

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="auth-logo">{"🏥"}</div>
                    <h1>{"Create Account"}</h1>
                    <p>{"Register for the Hospital Management System"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    if let Some(message) = (*error).clone() {
                        <div class="form-error">{ message }</div>
                    }

                    <div class="form-group">
                        <label for="name">{"Full Name"}</label>
                        <input type="text" id="name" placeholder="Enter your full name"
                            ref={name_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="email" id="email" placeholder="Enter your email"
                            ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input type="password" id="password" placeholder="Enter your password"
                            ref={password_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="role">{"Role"}</label>
                        <select id="role" onchange={on_role_change}>
                            <option value="DOCTOR" selected={*role == UserRole::Doctor}>{"Doctor"}</option>
                            <option value="HOSPITAL_ADMIN" selected={*role == UserRole::HospitalAdmin}>{"Hospital Admin"}</option>
                            <option value="SUPER_ADMIN" selected={*role == UserRole::SuperAdmin}>{"Super Admin"}</option>
                        </select>
                    </div>

                    if needs_hospital {
                        <div class="form-group">
                            <label for="hospital">{"Hospital"}</label>
                            <select id="hospital" onchange={on_hospital_change} required=true>
                                <option value="" selected={hospital_id.is_empty()}>{"Select a hospital"}</option>
                                { for hospitals.iter().map(|h| html! {
                                    <option value={h.id.clone()} selected={*hospital_id == h.id}>{ &h.name }</option>
                                })}
                            </select>
                        </div>
                    }

                    if *role == UserRole::Doctor {
                        <div class="form-group">
                            <label for="specialization">{"Specialization"}</label>
                            <input type="text" id="specialization"
                                placeholder="Enter your specialization"
                                ref={specialization_ref} required=true />
                        </div>
                    }

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Creating account..." } else { "Create Account" } }
                    </button>
                </form>

                <div class="auth-footer">
                    <p>{"Already have an account? "}
                        <button class="link-button" onclick={go_login}>{"Sign in here"}</button>
                    </p>
                </div>
            </div>
        </div>
    }
}
