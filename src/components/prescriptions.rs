use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Prescription, User, UserRole};
use crate::utils::{confirm, format_date};

const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::HospitalAdmin,
    UserRole::Doctor,
];

/// `(hospitalId, doctorId)` list filters for the signed-in identity.
fn scope_of(user: &User) -> (Option<String>, Option<String>) {
    match user.role() {
        UserRole::SuperAdmin => (None, None),
        UserRole::HospitalAdmin => (user.hospital_id().map(str::to_string), None),
        UserRole::Doctor => (None, Some(user.id.clone())),
    }
}

#[function_component(PrescriptionsPage)]
pub fn prescriptions_page() -> Html {
    html! {
        <RouteGuard allowed={ALL_ROLES}>
            <PrescriptionsContent />
        </RouteGuard>
    }
}

#[function_component(PrescriptionsContent)]
fn prescriptions_content() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let prescriptions = use_state(|| None::<Vec<Prescription>>);
    let patient_names = use_state(HashMap::<String, String>::new);

    let user = auth.user();
    let is_doctor = user.as_ref().map(|u| u.role()) == Some(UserRole::Doctor);
    let scope = user.as_ref().map(scope_of);

    {
        let prescriptions = prescriptions.clone();
        let patient_names = patient_names.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(scope.clone(), move |scope| {
            if let Some((hospital_id, doctor_id)) = scope.clone() {
                spawn_local(async move {
                    // Patient names come from a joined fetch under the same
                    // scope as the prescription list.
                    match futures::try_join!(
                        client.get_prescriptions(
                            None,
                            hospital_id.as_deref(),
                            doctor_id.as_deref()
                        ),
                        client.get_patients(hospital_id.as_deref(), doctor_id.as_deref())
                    ) {
                        Ok((list, patients)) => {
                            log::info!("📋 Loaded {} prescriptions", list.len());
                            patient_names.set(
                                patients.into_iter().map(|p| (p.id, p.name)).collect(),
                            );
                            prescriptions.set(Some(list));
                        }
                        Err(e) => {
                            log::error!("❌ Failed to load prescriptions: {}", e);
                            toast.error(e.to_string());
                            prescriptions.set(Some(Vec::new()));
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
        let prescriptions = prescriptions.clone();
        Callback::from(move |id: String| {
            if !confirm("Delete this prescription?") {
                return;
            }
            let client = auth.client().clone();
            let toast = toast.clone();
            let prescriptions = prescriptions.clone();
            spawn_local(async move {
                match client.delete_prescription(&id).await {
                    Ok(()) => {
                        toast.success("Prescription deleted");
                        if let Some(list) = (*prescriptions).clone() {
                            prescriptions.set(Some(
                                list.into_iter().filter(|p| p.id != id).collect(),
                            ));
                        }
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    let Some(list) = (*prescriptions).clone() else {
        return html! { <LoadingSpinner /> };
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Prescriptions"}</h1>
                if is_doctor {
                    <button class="btn-primary" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| {
                            route.go(Route::PrescriptionNew { patient_id: None })
                        })
                    }}>{"+ New Prescription"}</button>
                }
            </div>

            if list.is_empty() {
                <div class="empty-state card">
                    <p>{"No prescriptions found."}</p>
                </div>
            } else {
                <div class="card-grid">
                    { for list.iter().map(|p| {
                        let patient = patient_names
                            .get(&p.patient_enrollment_id)
                            .cloned()
                            .unwrap_or_else(|| "Unknown patient".to_string());
                        let edit = {
                            let route = route.clone();
                            let id = p.id.clone();
                            Callback::from(move |_| {
                                route.go(Route::PrescriptionEdit { id: id.clone() })
                            })
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = p.id.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };
                        html! {
                            <div class="card" key={p.id.clone()}>
                                <h3>{ &p.medication }</h3>
                                <p class="tag">{ patient }</p>
                                <p>{ &p.dosage }</p>
                                <p class="muted">{ &p.instructions }</p>
                                <p class="muted">{ format_date(&p.created_at) }</p>
                                if is_doctor {
                                    <div class="card-actions">
                                        <button class="btn-outline" onclick={edit}>{"Edit"}</button>
                                        <button class="btn-danger" onclick={delete}>{"Delete"}</button>
                                    </div>
                                }
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
