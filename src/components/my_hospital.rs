use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_toast};
use crate::models::{MyHospital, UserRole};
use crate::utils::format_date;

const HOSPITAL_ADMIN_ONLY: &[UserRole] = &[UserRole::HospitalAdmin];

#[function_component(MyHospitalPage)]
pub fn my_hospital_page() -> Html {
    html! {
        <RouteGuard allowed={HOSPITAL_ADMIN_ONLY}>
            <MyHospitalContent />
        </RouteGuard>
    }
}

#[function_component(MyHospitalContent)]
fn my_hospital_content() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let aggregate = use_state(|| None::<Option<MyHospital>>);

    {
        let aggregate = aggregate.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match client.my_hospital().await {
                    Ok(data) => {
                        log::info!("✅ Loaded hospital overview for {}", data.hospital.name);
                        aggregate.set(Some(Some(data)));
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load hospital overview: {}", e);
                        toast.error(e.to_string());
                        aggregate.set(Some(None));
                    }
                }
            });
            || ()
        });
    }

    let Some(loaded) = (*aggregate).clone() else {
        return html! { <LoadingSpinner /> };
    };

    let Some(data) = loaded else {
        return html! {
            <div class="page">
                <div class="empty-state card">
                    <p>{"No hospital is assigned to this account."}</p>
                </div>
            </div>
        };
    };

    html! {
        <div class="page">
            <div class="hero card">
                <h1>{ &data.hospital.name }</h1>
                <p class="muted">{ &data.hospital.address }</p>
                if data.hospital.established_year > 0 {
                    <p class="muted">{ format!("Established {}", data.hospital.established_year) }</p>
                }
            </div>

            <div class="stats-grid">
                <div class="stat-card card">
                    <span class="stat-value">{ data.statistics.doctors }</span>
                    <span class="stat-label">{"Doctors"}</span>
                </div>
                <div class="stat-card card">
                    <span class="stat-value">{ data.statistics.patients }</span>
                    <span class="stat-label">{"Patients"}</span>
                </div>
                <div class="stat-card card">
                    <span class="stat-value">{ data.statistics.prescriptions }</span>
                    <span class="stat-label">{"Prescriptions"}</span>
                </div>
                <div class="stat-card card">
                    <span class="stat-value">{ data.hospital.bed_capacity }</span>
                    <span class="stat-label">{"Bed Capacity"}</span>
                </div>
            </div>

            <div class="split-panels">
                <div class="card">
                    <h2>{"Recent Doctors"}</h2>
                    if data.recent_doctors.is_empty() {
                        <p class="muted">{"No doctors yet."}</p>
                    } else {
                        <ul class="plain-list">
                            { for data.recent_doctors.iter().map(|d| html! {
                                <li key={d.id.clone()}>
                                    { &d.name }
                                    <span class="muted">{ format!(" {}", d.specialization) }</span>
                                </li>
                            })}
                        </ul>
                    }
                </div>

                <div class="card">
                    <h2>{"Recent Patients"}</h2>
                    if data.recent_patients.is_empty() {
                        <p class="muted">{"No patients yet."}</p>
                    } else {
                        <ul class="plain-list">
                            { for data.recent_patients.iter().map(|p| html! {
                                <li key={p.id.clone()}>
                                    { &p.name }
                                    if let Some(date) = &p.date_of_admission {
                                        <span class="muted">
                                            { format!(" admitted {}", format_date(date)) }
                                        </span>
                                    }
                                </li>
                            })}
                        </ul>
                    }
                </div>
            </div>
        </div>
    }
}
