use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Hospital, UserRole};
use crate::utils::{confirm, format_date};

const ADMINS: &[UserRole] = &[UserRole::SuperAdmin, UserRole::HospitalAdmin];

#[function_component(HospitalsPage)]
pub fn hospitals_page() -> Html {
    html! {
        <RouteGuard allowed={ADMINS}>
            <HospitalsList />
        </RouteGuard>
    }
}

#[function_component(HospitalsList)]
fn hospitals_list() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let hospitals = use_state(|| None::<Vec<Hospital>>);

    {
        let hospitals = hospitals.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.get_hospitals().await {
                    Ok(data) => hospitals.set(Some(data)),
                    Err(e) => {
                        log::error!("❌ Failed to fetch hospitals: {}", e);
                        toast.error(e.to_string());
                        hospitals.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let is_super_admin = auth
        .user()
        .map(|u| u.role() == UserRole::SuperAdmin)
        .unwrap_or(false);

    let Some(list) = (*hospitals).clone() else {
        return html! { <LoadingSpinner /> };
    };

    let on_delete = {
        let auth = auth.clone();
        let toast = toast.clone();
        let hospitals = hospitals.clone();
        Callback::from(move |id: String| {
            if !confirm("Are you sure you want to delete this hospital?") {
                return;
            }
            let client = auth.client().clone();
            let toast = toast.clone();
            let hospitals = hospitals.clone();
            spawn_local(async move {
                match client.delete_hospital(&id).await {
                    Ok(()) => {
                        let remaining = hospitals
                            .as_ref()
                            .map(|list| {
                                list.iter().filter(|h| h.id != id).cloned().collect()
                            })
                            .unwrap_or_default();
                        hospitals.set(Some(remaining));
                        toast.success("Hospital deleted successfully");
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>{"Hospitals"}</h1>
                    <p>{"Manage hospital information and settings"}</p>
                </div>
                if is_super_admin {
                    <button class="btn-primary" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::HospitalNew))
                    }}>
                        {"+ Add Hospital"}
                    </button>
                }
            </div>

            if list.is_empty() {
                <div class="card empty-state">
                    <h3>{"No hospitals found"}</h3>
                    <p>{ if is_super_admin {
                        "Get started by creating your first hospital."
                    } else {
                        "No hospitals are available for your account."
                    }}</p>
                </div>
            } else {
                <div class="card-grid">
                    { for list.iter().map(|hospital| {
                        let id = hospital.id.clone();
                        html! {
                            <div class="card" key={hospital.id.clone()}>
                                <div class="card-actions">
                                    if is_super_admin {
                                        <button class="btn-ghost" onclick={{
                                            let route = route.clone();
                                            let id = id.clone();
                                            Callback::from(move |_| {
                                                route.go(Route::HospitalEdit { id: id.clone() })
                                            })
                                        }}>{"Edit"}</button>
                                        <button class="btn-ghost btn-danger" onclick={{
                                            let on_delete = on_delete.clone();
                                            let id = id.clone();
                                            Callback::from(move |_| on_delete.emit(id.clone()))
                                        }}>{"Delete"}</button>
                                    }
                                </div>
                                <h3>{ &hospital.name }</h3>
                                <p class="card-subtitle">{ &hospital.address }</p>
                                <p class="card-meta">
                                    { format!("Created: {}", format_date(&hospital.created_at)) }
                                </p>
                                <button class="btn-outline" onclick={{
                                    let route = route.clone();
                                    let id = id.clone();
                                    Callback::from(move |_| {
                                        route.go(Route::HospitalDetail { id: id.clone() })
                                    })
                                }}>{"View Details"}</button>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
