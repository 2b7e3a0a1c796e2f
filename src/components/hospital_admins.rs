use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{HospitalAdmin, UserRole};
use crate::utils::{confirm, format_date};

const SUPER_ADMIN_ONLY: &[UserRole] = &[UserRole::SuperAdmin];

#[function_component(HospitalAdminsPage)]
pub fn hospital_admins_page() -> Html {
    html! {
        <RouteGuard allowed={SUPER_ADMIN_ONLY}>
            <HospitalAdminsContent />
        </RouteGuard>
    }
}

#[function_component(HospitalAdminsContent)]
fn hospital_admins_content() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let admins = use_state(|| None::<Vec<HospitalAdmin>>);

    {
        let admins = admins.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.get_hospital_admins().await {
                    Ok(list) => {
                        log::info!("📋 Loaded {} hospital admins", list.len());
                        admins.set(Some(list));
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load hospital admins: {}", e);
                        toast.error(e.to_string());
                        admins.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_delete = {
        let auth = auth.clone();
        let toast = toast.clone();
        let admins = admins.clone();
        Callback::from(move |admin: HospitalAdmin| {
            if !confirm(&format!("Delete admin {}?", admin.name)) {
                return;
            }
            let client = auth.client().clone();
            let toast = toast.clone();
            let admins = admins.clone();
            spawn_local(async move {
                match client.delete_hospital_admin(&admin.id).await {
                    Ok(()) => {
                        toast.success("Hospital admin deleted");
                        if let Some(list) = (*admins).clone() {
                            admins.set(Some(
                                list.into_iter().filter(|a| a.id != admin.id).collect(),
                            ));
                        }
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    let Some(list) = (*admins).clone() else {
        return html! { <LoadingSpinner /> };
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Hospital Admins"}</h1>
                <button class="btn-primary" onclick={{
                    let route = route.clone();
                    Callback::from(move |_| route.go(Route::HospitalAdminNew))
                }}>{"+ Add Admin"}</button>
            </div>

            if list.is_empty() {
                <div class="empty-state card">
                    <p>{"No hospital admins found."}</p>
                </div>
            } else {
                <div class="card-grid">
                    { for list.iter().map(|admin| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let admin = admin.clone();
                            Callback::from(move |_| on_delete.emit(admin.clone()))
                        };
                        html! {
                            <div class="card" key={admin.id.clone()}>
                                <h3>{ &admin.name }</h3>
                                <p class="muted">{ &admin.email }</p>
                                <p class="tag">{
                                    admin
                                        .hospital
                                        .as_ref()
                                        .map(|h| h.name.clone())
                                        .unwrap_or_else(|| "Unassigned".to_string())
                                }</p>
                                if let Some(created) = &admin.created_at {
                                    <p class="muted">{ format!("Since {}", format_date(created)) }</p>
                                }
                                <div class="card-actions">
                                    <button class="btn-danger" onclick={delete}>{"Delete"}</button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
