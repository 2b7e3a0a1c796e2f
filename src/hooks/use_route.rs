// ============================================================================
// ROUTE CONTEXT - view switching by state
// ============================================================================
// Navigation is a plain state transition on the root component; redirects
// are `navigate` calls. No URL handling.
// ============================================================================

use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Hospitals,
    HospitalDetail { id: String },
    HospitalNew,
    HospitalEdit { id: String },
    Doctors,
    DoctorNew,
    DoctorEdit { id: String },
    Patients,
    PatientDetail { id: String },
    PatientNew,
    PatientEdit { id: String },
    Prescriptions,
    PrescriptionNew { patient_id: Option<String> },
    PrescriptionEdit { id: String },
    HospitalAdmins,
    HospitalAdminNew,
    MyHospital,
}

#[derive(Clone, PartialEq)]
pub struct RouteHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

impl RouteHandle {
    pub fn go(&self, route: Route) {
        self.navigate.emit(route);
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteProviderProps {
    pub children: Children,
}

#[function_component(RouteProvider)]
pub fn route_provider(props: &RouteProviderProps) -> Html {
    let route = use_state(|| Route::Login);

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            log::debug!("Navigating to {:?}", next);
            route.set(next);
        })
    };

    let handle = RouteHandle {
        route: (*route).clone(),
        navigate,
    };

    html! {
        <ContextProvider<RouteHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<RouteHandle>>
    }
}

#[hook]
pub fn use_route() -> RouteHandle {
    use_context::<RouteHandle>().expect("use_route must be used inside RouteProvider")
}
