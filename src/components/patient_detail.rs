use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{PatientEnrollment, Prescription, UserRole};
use crate::utils::format_date;

const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::HospitalAdmin,
    UserRole::Doctor,
];

#[derive(Properties, PartialEq)]
pub struct PatientDetailProps {
    pub id: String,
}

#[function_component(PatientDetailPage)]
pub fn patient_detail_page(props: &PatientDetailProps) -> Html {
    html! {
        <RouteGuard allowed={ALL_ROLES}>
            <PatientDetailContent id={props.id.clone()} />
        </RouteGuard>
    }
}

#[function_component(PatientDetailContent)]
fn patient_detail_content(props: &PatientDetailProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let record = use_state(|| None::<Option<(PatientEnrollment, Vec<Prescription>)>>);

    let is_doctor = auth.user().map(|u| u.role()) == Some(UserRole::Doctor);

    {
        let record = record.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match futures::try_join!(
                    client.get_patient(&id),
                    client.get_prescriptions(Some(&id), None, None)
                ) {
                    Ok((patient, prescriptions)) => {
                        record.set(Some(Some((patient, prescriptions))));
                    }
                    Err(e) => {
                        log::error!("❌ Failed to load patient {}: {}", id, e);
                        toast.error(e.to_string());
                        record.set(Some(None));
                    }
                }
            });
            || ()
        });
    }

    let Some(loaded) = (*record).clone() else {
        return html! { <LoadingSpinner /> };
    };

    let Some((patient, prescriptions)) = loaded else {
        return html! {
            <div class="page">
                <div class="empty-state card">
                    <p>{"Patient not found."}</p>
                    <button class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::Patients))
                    }}>{"Back to Patients"}</button>
                </div>
            </div>
        };
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{ &patient.name }</h1>
                <div class="row-actions">
                    if is_doctor {
                        <button class="btn-primary" onclick={{
                            let route = route.clone();
                            let id = patient.id.clone();
                            Callback::from(move |_| {
                                route.go(Route::PrescriptionNew {
                                    patient_id: Some(id.clone()),
                                })
                            })
                        }}>{"+ Add Prescription"}</button>
                    }
                    <button class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::Patients))
                    }}>{"Back"}</button>
                </div>
            </div>

            <div class="card detail-panel">
                <div class="detail-row">
                    <span class="detail-label">{"Age"}</span>
                    <span>{ patient.age }</span>
                </div>
                <div class="detail-row">
                    <span class="detail-label">{"Gender"}</span>
                    <span>{ &patient.gender }</span>
                </div>
                if let Some(date) = &patient.date_of_admission {
                    <div class="detail-row">
                        <span class="detail-label">{"Date of Admission"}</span>
                        <span>{ format_date(date) }</span>
                    </div>
                }
            </div>

            <h2>{"Prescriptions"}</h2>
            if prescriptions.is_empty() {
                <div class="empty-state card">
                    <p>{"No prescriptions on record."}</p>
                </div>
            } else {
                <div class="card-grid">
                    { for prescriptions.iter().map(|p| html! {
                        <div class="card" key={p.id.clone()}>
                            <h3>{ &p.medication }</h3>
                            <p>{ &p.dosage }</p>
                            <p class="muted">{ &p.instructions }</p>
                            <p class="muted">{ format_date(&p.created_at) }</p>
                        </div>
                    })}
                </div>
            }
        </div>
    }
}
