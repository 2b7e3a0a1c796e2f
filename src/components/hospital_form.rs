use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::components::route_guard::RouteGuard;
use crate::hooks::{use_auth, use_route, use_toast, Route};
use crate::models::{Hospital, UserRole};
use crate::services::HospitalPayload;
use crate::utils::{input_value, textarea_value};

const SUPER_ADMIN_ONLY: &[UserRole] = &[UserRole::SuperAdmin];

/// Form buffer; numeric fields stay strings until submit-time validation.
#[derive(Clone, PartialEq, Default)]
struct HospitalForm {
    name: String,
    address: String,
    phone: String,
    email: String,
    website: String,
    license_number: String,
    established_year: String,
    bed_capacity: String,
    emergency_contact: String,
    description: String,
}

impl HospitalForm {
    fn from_hospital(h: &Hospital) -> Self {
        Self {
            name: h.name.clone(),
            address: h.address.clone(),
            phone: h.phone.clone(),
            email: h.email.clone(),
            website: h.website.clone().unwrap_or_default(),
            license_number: h.license_number.clone(),
            established_year: h.established_year.to_string(),
            bed_capacity: h.bed_capacity.to_string(),
            emergency_contact: h.emergency_contact.clone(),
            description: h.description.clone().unwrap_or_default(),
        }
    }

    fn into_payload(self) -> Result<HospitalPayload, String> {
        let established_year = self
            .established_year
            .trim()
            .parse::<u32>()
            .map_err(|_| "Established year must be a number".to_string())?;
        let bed_capacity = self
            .bed_capacity
            .trim()
            .parse::<u32>()
            .map_err(|_| "Bed capacity must be a number".to_string())?;
        Ok(HospitalPayload {
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: (!self.website.is_empty()).then_some(self.website),
            license_number: self.license_number,
            established_year,
            bed_capacity,
            emergency_contact: self.emergency_contact,
            description: (!self.description.is_empty()).then_some(self.description),
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct HospitalFormProps {
    /// `Some` edits an existing hospital, `None` creates one.
    pub id: Option<String>,
}

#[function_component(HospitalFormPage)]
pub fn hospital_form_page(props: &HospitalFormProps) -> Html {
    html! {
        <RouteGuard allowed={SUPER_ADMIN_ONLY}>
            <HospitalFormContent id={props.id.clone()} />
        </RouteGuard>
    }
}

#[function_component(HospitalFormContent)]
fn hospital_form_content(props: &HospitalFormProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let toast = use_toast();
    let form = use_state(HospitalForm::default);
    let loading = use_state(|| props.id.is_some());
    let submitting = use_state(|| false);

    // Prefill when editing.
    {
        let form = form.clone();
        let loading = loading.clone();
        let toast = toast.clone();
        let client = auth.client().clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                spawn_local(async move {
                    match client.get_hospital_details(&id).await {
                        Ok(details) => {
                            form.set(HospitalForm::from_hospital(&details.hospital));
                        }
                        Err(e) => toast.error(e.to_string()),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_submit = {
        let auth = auth.clone();
        let route = route.clone();
        let toast = toast.clone();
        let form = form.clone();
        let submitting = submitting.clone();
        let id = props.id.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = match (*form).clone().into_payload() {
                Ok(payload) => payload,
                Err(message) => {
                    toast.error(message);
                    return;
                }
            };

            let client = auth.client().clone();
            let route = route.clone();
            let toast = toast.clone();
            let submitting = submitting.clone();
            let id = id.clone();
            submitting.set(true);
            spawn_local(async move {
                let result = match &id {
                    Some(id) => client.update_hospital(id, &payload).await,
                    None => client.create_hospital(&payload).await,
                };
                match result {
                    Ok(_) => {
                        toast.success(if id.is_some() {
                            "Hospital updated successfully"
                        } else {
                            "Hospital created successfully"
                        });
                        route.go(Route::Hospitals);
                    }
                    Err(e) => toast.error(e.to_string()),
                }
                submitting.set(false);
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let text_field = |label: &str,
                      id: &str,
                      value: String,
                      apply: fn(&mut HospitalForm, String)| {
        let form = form.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            apply(&mut next, input_value(&e));
            form.set(next);
        });
        html! {
            <div class="form-group">
                <label for={id.to_string()}>{ label.to_string() }</label>
                <input type="text" id={id.to_string()} {value} {oninput} />
            </div>
        }
    };

    let editing = props.id.is_some();

    html! {
        <div class="page narrow">
            <div class="page-header">
                <h1>{ if editing { "Edit Hospital" } else { "Create New Hospital" } }</h1>
            </div>

            <form class="card form" onsubmit={on_submit}>
                { text_field("Name", "name", form.name.clone(), |f, v| f.name = v) }
                { text_field("Address", "address", form.address.clone(), |f, v| f.address = v) }
                { text_field("Phone", "phone", form.phone.clone(), |f, v| f.phone = v) }
                { text_field("Email", "email", form.email.clone(), |f, v| f.email = v) }
                { text_field("Website (optional)", "website", form.website.clone(), |f, v| f.website = v) }
                { text_field("License Number", "license", form.license_number.clone(), |f, v| f.license_number = v) }
                { text_field("Established Year", "year", form.established_year.clone(), |f, v| f.established_year = v) }
                { text_field("Bed Capacity", "beds", form.bed_capacity.clone(), |f, v| f.bed_capacity = v) }
                { text_field("Emergency Contact", "emergency", form.emergency_contact.clone(), |f, v| f.emergency_contact = v) }

                <div class="form-group">
                    <label for="description">{"Description (optional)"}</label>
                    <textarea id="description" value={form.description.clone()} oninput={{
                        let form = form.clone();
                        Callback::from(move |e: InputEvent| {
                            let mut next = (*form).clone();
                            next.description = textarea_value(&e);
                            form.set(next);
                        })
                    }} />
                </div>

                <div class="form-actions">
                    <button type="button" class="btn-outline" onclick={{
                        let route = route.clone();
                        Callback::from(move |_| route.go(Route::Hospitals))
                    }}>{"Cancel"}</button>
                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting {
                            "Saving..."
                        } else if editing {
                            "Save Changes"
                        } else {
                            "Create Hospital"
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> HospitalForm {
        HospitalForm {
            name: "General".into(),
            address: "1 Main St".into(),
            phone: "555-0100".into(),
            email: "info@general.org".into(),
            website: String::new(),
            license_number: "LIC-9".into(),
            established_year: "1987".into(),
            bed_capacity: "240".into(),
            emergency_contact: "555-0199".into(),
            description: String::new(),
        }
    }

    #[test]
    fn numeric_fields_are_parsed() {
        let payload = filled_form().into_payload().unwrap();
        assert_eq!(payload.established_year, 1987);
        assert_eq!(payload.bed_capacity, 240);
        assert_eq!(payload.website, None);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn bad_year_is_rejected_with_a_message() {
        let mut form = filled_form();
        form.established_year = "ancient".into();
        assert_eq!(
            form.into_payload().unwrap_err(),
            "Established year must be a number"
        );
    }

    #[test]
    fn optional_fields_pass_through_when_present() {
        let mut form = filled_form();
        form.website = "https://general.org".into();
        form.description = "Tertiary care".into();
        let payload = form.into_payload().unwrap();
        assert_eq!(payload.website.as_deref(), Some("https://general.org"));
        assert_eq!(payload.description.as_deref(), Some("Tertiary care"));
    }
}
