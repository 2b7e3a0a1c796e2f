use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{User, UserRole};
use crate::services::{ApiClient, ApiError};

const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::HospitalAdmin,
    UserRole::Doctor,
];

#[derive(Clone, Copy, PartialEq, Default)]
struct Stats {
    hospitals: usize,
    doctors: usize,
    patients: usize,
    prescriptions: usize,
}

/// Gather the four counters concurrently, scoped to what the role may see.
/// Doctors have no access to hospital or doctor lists, so those counters
/// substitute empty defaults instead of failing the group.
async fn fetch_stats(client: &ApiClient, user: &User) -> Result<Stats, ApiError> {
    match user.role() {
        UserRole::SuperAdmin => {
            let (hospitals, doctors, patients, prescriptions) = futures::try_join!(
                client.get_hospitals(),
                client.get_doctors(None),
                client.get_patients(None, None),
                client.get_prescriptions(None, None, None),
            )?;
            Ok(Stats {
                hospitals: hospitals.len(),
                doctors: doctors.len(),
                patients: patients.len(),
                prescriptions: prescriptions.len(),
            })
        }
        UserRole::HospitalAdmin => {
            let hospital_id = user.hospital_id();
            let (hospitals, doctors, patients, prescriptions) = futures::try_join!(
                client.get_hospitals(),
                client.get_doctors(hospital_id),
                client.get_patients(hospital_id, None),
                client.get_prescriptions(None, hospital_id, None),
            )?;
            Ok(Stats {
                hospitals: hospitals.len(),
                doctors: doctors.len(),
                patients: patients.len(),
                prescriptions: prescriptions.len(),
            })
        }
        UserRole::Doctor => {
            let (patients, prescriptions) = futures::try_join!(
                client.get_patients(None, Some(&user.id)),
                client.get_prescriptions(None, None, Some(&user.id)),
            )?;
            Ok(Stats {
                patients: patients.len(),
                prescriptions: prescriptions.len(),
                ..Stats::default()
            })
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <RouteGuard allowed={ALL_ROLES}>
            <DashboardContent />
        </RouteGuard>
    }
}

#[function_component(DashboardContent)]
fn dashboard_content() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let stats = use_state(|| None::<Stats>);

    let Some(user) = auth.user() else {
        return Html::default();
    };

    {
        let stats = stats.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        let user = user.clone();
        use_effect_with(user.id.clone(), move |_| {
            spawn_local(async move {
                match fetch_stats(&client, &user).await {
                    Ok(data) => stats.set(Some(data)),
                    Err(e) => {
                        log::error!("❌ Failed to fetch dashboard stats: {}", e);
                        toast.error(e.to_string());
                        stats.set(Some(Stats::default()));
                    }
                }
            });
            || ()
        });
    }

    let Some(stats) = *stats else {
        return html! { <LoadingSpinner /> };
    };

    let role = user.role();
    let is_doctor = role == UserRole::Doctor;

    let stat_card = |title: &str, value: usize, description: &str| {
        html! {
            <div class="card stat-card">
                <h3>{ title.to_string() }</h3>
                <div class="stat-value">{ value }</div>
                <p class="stat-description">{ description.to_string() }</p>
            </div>
        }
    };

    let quick_action = |label: &str, description: &str, target: Route| {
        let route = route.clone();
        let onclick = Callback::from(move |_| route.go(target.clone()));
        html! {
            <button class="quick-action" {onclick}>
                <div class="quick-action-title">{ label.to_string() }</div>
                <div class="quick-action-description">{ description.to_string() }</div>
            </button>
        }
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Dashboard"}</h1>
                <p>{ format!(
                    "Welcome back, {}! Here's an overview of your {} dashboard.",
                    user.name,
                    role.label().to_lowercase()
                )}</p>
            </div>

            <div class="stats-grid">
                if !is_doctor {
                    { stat_card(
                        "Hospitals",
                        stats.hospitals,
                        if role == UserRole::SuperAdmin { "Total hospitals" } else { "Your hospital" },
                    )}
                    { stat_card("Doctors", stats.doctors, "Active doctors") }
                }
                { stat_card(
                    "Patients",
                    stats.patients,
                    if is_doctor { "Your patients" } else { "Total patients" },
                )}
                { stat_card(
                    "Prescriptions",
                    stats.prescriptions,
                    if is_doctor { "Your prescriptions" } else { "Total prescriptions" },
                )}
            </div>

            <div class="panel-grid">
                <div class="card">
                    <h2>{"Quick Actions"}</h2>
                    <p class="card-subtitle">{"Common tasks for your role"}</p>
                    if role == UserRole::SuperAdmin {
                        { quick_action(
                            "Create New Hospital",
                            "Add a new hospital to the system",
                            Route::HospitalNew,
                        )}
                    }
                    if role != UserRole::Doctor {
                        { quick_action(
                            "Add New Doctor",
                            "Register a new doctor to your hospital",
                            Route::DoctorNew,
                        )}
                    }
                    { quick_action(
                        "Enroll New Patient",
                        "Add a new patient enrollment",
                        Route::PatientNew,
                    )}
                    if is_doctor {
                        { quick_action(
                            "Create Prescription",
                            "Add a new prescription for a patient",
                            Route::PrescriptionNew { patient_id: None },
                        )}
                    }
                </div>

                <div class="card">
                    <h2>{"System Information"}</h2>
                    <p class="card-subtitle">{"Your account and system details"}</p>
                    <div class="info-row">
                        <div class="info-label">{"Role"}</div>
                        <div class="info-value">{ role.label() }</div>
                    </div>
                    <div class="info-row">
                        <div class="info-label">{"Email"}</div>
                        <div class="info-value">{ &user.email }</div>
                    </div>
                    if user.hospital_id().is_some() {
                        <div class="info-row">
                            <div class="info-label">{"Hospital Access"}</div>
                            <div class="info-value">{"Limited to assigned hospital"}</div>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
