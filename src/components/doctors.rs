use std::collections::HashMap;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Doctor, PatientEnrollment, UserRole};
use crate::utils::{confirm, format_date};

const ADMINS: &[UserRole] = &[UserRole::SuperAdmin, UserRole::HospitalAdmin];

#[function_component(DoctorsPage)]
pub fn doctors_page() -> Html {
    html! {
        <RouteGuard allowed={ADMINS}>
            <DoctorsContent />
        </RouteGuard>
    }
}

/// Doctor list plus its view-dialog payload: the doctor and their patients.
#[derive(Clone, PartialEq)]
struct DoctorView {
    doctor: Doctor,
    patients: Option<Vec<PatientEnrollment>>,
}

#[function_component(DoctorsContent)]
fn doctors_content() -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let doctors = use_state(|| None::<Vec<Doctor>>);
    let hospital_names = use_state(HashMap::<String, String>::new);
    let viewing = use_state(|| None::<DoctorView>);

    let user = auth.user();
    // Hospital admins only ever see their own roster.
    let scope = user.as_ref().and_then(|u| u.hospital_id().map(str::to_string));

    {
        let doctors = doctors.clone();
        let hospital_names = hospital_names.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(scope.clone(), move |scope| {
            let scope = scope.clone();
            spawn_local(async move {
                match futures::try_join!(
                    client.get_doctors(scope.as_deref()),
                    client.get_hospitals()
                ) {
                    Ok((list, hospitals)) => {
                        log::info!("📋 Loaded {} doctors", list.len());
                        hospital_names.set(
                            hospitals
                                .into_iter()
                                .map(|h| (h.id, h.name))
                                .collect(),
                        );
                        doctors.set(Some(list));
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load doctors: {}", e);
                        toast.error(e.to_string());
                        doctors.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let on_view = {
        let auth = auth.clone();
        let toast = toast.clone();
        let viewing = viewing.clone();
        Callback::from(move |doctor: Doctor| {
            viewing.set(Some(DoctorView {
                doctor: doctor.clone(),
                patients: None,
            }));
            let client = auth.client().clone();
            let toast = toast.clone();
            let viewing = viewing.clone();
            spawn_local(async move {
                match client.get_patients(None, Some(&doctor.id)).await {
                    Ok(patients) => viewing.set(Some(DoctorView {
                        doctor,
                        patients: Some(patients),
                    })),
                    Err(e) => {
                        toast.error(e.to_string());
                        viewing.set(Some(DoctorView {
                            doctor,
                            patients: Some(Vec::new()),
                        }));
                    }
                }
            });
        })
    };

    let on_delete = {
        let auth = auth.clone();
        let toast = toast.clone();
        let doctors = doctors.clone();
        Callback::from(move |doctor: Doctor| {
            if !confirm(&format!("Delete doctor {}?", doctor.name)) {
                return;
            }
            let client = auth.client().clone();
            let toast = toast.clone();
            let doctors = doctors.clone();
            spawn_local(async move {
                match client.delete_doctor(&doctor.id).await {
                    Ok(()) => {
                        toast.success("Doctor deleted");
                        if let Some(list) = (*doctors).clone() {
                            doctors.set(Some(
                                list.into_iter().filter(|d| d.id != doctor.id).collect(),
                            ));
                        }
                    }
                    Err(e) => toast.error(e.to_string()),
                }
            });
        })
    };

    let Some(list) = (*doctors).clone() else {
        return html! { <LoadingSpinner /> };
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Doctors"}</h1>
                <button class="btn-primary" onclick={{
                    let route = route.clone();
                    Callback::from(move |_| route.go(Route::DoctorNew))
                }}>{"+ Add Doctor"}</button>
            </div>

            if list.is_empty() {
                <div class="empty-state card">
                    <p>{"No doctors found."}</p>
                </div>
            } else {
                <div class="card-grid">
                    { for list.iter().map(|doctor| {
                        let hospital = hospital_names
                            .get(&doctor.hospital_id)
                            .cloned()
                            .unwrap_or_else(|| "Unknown hospital".to_string());
                        let view = {
                            let on_view = on_view.clone();
                            let doctor = doctor.clone();
                            Callback::from(move |_| on_view.emit(doctor.clone()))
                        };
                        let edit = {
                            let route = route.clone();
                            let id = doctor.id.clone();
                            Callback::from(move |_| route.go(Route::DoctorEdit { id: id.clone() }))
                        };
                        let delete = {
                            let on_delete = on_delete.clone();
                            let doctor = doctor.clone();
                            Callback::from(move |_| on_delete.emit(doctor.clone()))
                        };
                        html! {
                            <div class="card" key={doctor.id.clone()}>
                                <h3>{ &doctor.name }</h3>
                                <p class="muted">{ &doctor.email }</p>
                                <p>{ &doctor.specialization }</p>
                                if !doctor.designation.is_empty() {
                                    <p class="muted">{ &doctor.designation }</p>
                                }
                                <p class="tag">{ hospital }</p>
                                <div class="card-actions">
                                    <button class="btn-outline" onclick={view}>{"View"}</button>
                                    <button class="btn-outline" onclick={edit}>{"Edit"}</button>
                                    <button class="btn-danger" onclick={delete}>{"Delete"}</button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }

            if let Some(view) = (*viewing).clone() {
                <div class="dialog-backdrop" onclick={{
                    let viewing = viewing.clone();
                    Callback::from(move |_| viewing.set(None))
                }}>
                    <div class="dialog card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <h2>{ &view.doctor.name }</h2>
                        <p class="muted">{ &view.doctor.specialization }</p>
                        <h3>{"Patients"}</h3>
                        { match &view.patients {
                            None => html! { <LoadingSpinner /> },
                            Some(patients) if patients.is_empty() => html! {
                                <p class="muted">{"No patients assigned."}</p>
                            },
                            Some(patients) => html! {
                                <ul class="plain-list">
                                    { for patients.iter().map(|p| html! {
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
                            },
                        }}
                        <div class="form-actions">
                            <button class="btn-outline" onclick={{
                                let viewing = viewing.clone();
                                Callback::from(move |_| viewing.set(None))
                            }}>{"Close"}</button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
