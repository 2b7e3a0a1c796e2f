use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{HospitalDetails, UserRole};
use crate::utils::format_date;

const ADMINS: &[UserRole] = &[UserRole::SuperAdmin, UserRole::HospitalAdmin];

#[derive(Properties, PartialEq)]
pub struct HospitalDetailProps {
    pub id: String,
}

#[function_component(HospitalDetailPage)]
pub fn hospital_detail_page(props: &HospitalDetailProps) -> Html {
    html! {
        <RouteGuard allowed={ADMINS}>
            <HospitalDetailContent id={props.id.clone()} />
        </RouteGuard>
    }
}

#[function_component(HospitalDetailContent)]
fn hospital_detail_content(props: &HospitalDetailProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let details = use_state(|| None::<HospitalDetails>);
    let failed = use_state(|| false);

    {
        let details = details.clone();
        let failed = failed.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match client.get_hospital_details(&id).await {
                    Ok(data) => details.set(Some(data)),
                    Err(e) => {
                        log::error!("❌ Failed to fetch hospital {}: {}", id, e);
                        toast.error(e.to_string());
                        failed.set(true);
                    }
                }
            });
            || ()
        });
    }

    if *failed {
        return html! {
            <div class="card empty-state">
                <h3>{"Hospital not found"}</h3>
            </div>
        };
    }

    let Some(details) = (*details).clone() else {
        return html! { <LoadingSpinner /> };
    };

    let hospital = &details.hospital;
    let stats = &details.statistics;

    html! {
        <div class="page">
            <button class="btn-ghost" onclick={{
                let route = route.clone();
                Callback::from(move |_| route.go(Route::Hospitals))
            }}>{"← Back to Hospitals"}</button>

            <div class="hero-banner">
                <h1>{ &hospital.name }</h1>
                <p>{ &hospital.address }</p>
                <p>{ format!("Established: {}", hospital.established_year) }</p>
            </div>

            <div class="stats-grid">
                <div class="card stat-card">
                    <h3>{"Doctors"}</h3>
                    <div class="stat-value">{ stats.doctors }</div>
                </div>
                <div class="card stat-card">
                    <h3>{"Patients"}</h3>
                    <div class="stat-value">{ stats.patients }</div>
                </div>
                <div class="card stat-card">
                    <h3>{"Prescriptions"}</h3>
                    <div class="stat-value">{ stats.prescriptions }</div>
                </div>
            </div>

            <div class="panel-grid">
                <div class="card">
                    <h2>{"Contact"}</h2>
                    <div class="info-row">
                        <div class="info-label">{"Phone"}</div>
                        <div class="info-value">{ &hospital.phone }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"Email"}</div>
                        <div class="info-value">{ &hospital.email }</div>
                    </div>
                    if let Some(website) = &hospital.website {
                        <div class="info-row">
                            <div class="info-label">{"Website"}</div>
                            <div class="info-value">{ website }</div>
                        </div>
                    }
                    <div class="info-row">
                        <div class="info-label">{"Emergency Contact"}</div>
                        <div class="info-value">{ &hospital.emergency_contact }</div>
                    </div>
                </div>

                <div class="card">
                    <h2>{"Facility"}</h2>
                    <div class="info-row">
                        <div class="info-label">{"License Number"}</div>
                        <div class="info-value">{ &hospital.license_number }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"Bed Capacity"}</div>
                        <div class="info-value">{ hospital.bed_capacity }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"Registered"}</div>
                        <div class="info-value">{ format_date(&hospital.created_at) }</div>
                    </div>
                    if let Some(description) = &hospital.description {
                        <p class="card-subtitle">{ description }</p>
                    }
                </div>
            </div>

            <div class="card">
                <h2>{ format!("Administrators ({})", details.admins.len()) }</h2>
                if details.admins.is_empty() {
                    <p class="card-subtitle">{"No administrators assigned yet"}</p>
                } else {
                    <ul class="plain-list">
                        { for details.admins.iter().map(|admin| html! {
                            <li key={admin.id.clone()}>
                                <span class="info-label">{ &admin.name }</span>
                                <span class="info-value">{ &admin.email }</span>
                            </li>
                        })}
                    </ul>
                }
            </div>
        </div>
    }
}
