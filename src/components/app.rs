// ============================================================================
// APP ROOT - provider stack and view switch
// ============================================================================

use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::doctor_form::DoctorFormPage;
use crate::components::doctors::DoctorsPage;
use crate::components::hospital_admin_form::HospitalAdminFormPage;
use crate::components::hospital_admins::HospitalAdminsPage;
use crate::components::hospital_detail::HospitalDetailPage;
use crate::components::hospital_form::HospitalFormPage;
use crate::components::hospitals::HospitalsPage;
use crate::components::login_screen::LoginScreen;
use crate::components::my_hospital::MyHospitalPage;
use crate::components::navbar::Navbar;
use crate::components::patient_detail::PatientDetailPage;
use crate::components::patient_form::PatientFormPage;
use crate::components::patients::PatientsPage;
use crate::components::prescription_form::PrescriptionFormPage;
use crate::components::prescriptions::PrescriptionsPage;
use crate::components::register_screen::RegisterScreen;
use crate::hooks::{use_route, AuthProvider, Route, RouteProvider, ToastProvider};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <RouteProvider>
            <ToastProvider>
                <AuthProvider>
                    <Shell />
                </AuthProvider>
            </ToastProvider>
        </RouteProvider>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let route = use_route();

    let view = match route.route.clone() {
        Route::Login => html! { <LoginScreen /> },
        Route::Register => html! { <RegisterScreen /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Hospitals => html! { <HospitalsPage /> },
        Route::HospitalDetail { id } => html! { <HospitalDetailPage {id} /> },
        Route::HospitalNew => html! { <HospitalFormPage id={None::<String>} /> },
        Route::HospitalEdit { id } => html! { <HospitalFormPage id={Some(id)} /> },
        Route::Doctors => html! { <DoctorsPage /> },
        Route::DoctorNew => html! { <DoctorFormPage id={None::<String>} /> },
        Route::DoctorEdit { id } => html! { <DoctorFormPage id={Some(id)} /> },
        Route::Patients => html! { <PatientsPage /> },
        Route::PatientDetail { id } => html! { <PatientDetailPage {id} /> },
        Route::PatientNew => html! { <PatientFormPage id={None::<String>} /> },
        Route::PatientEdit { id } => html! { <PatientFormPage id={Some(id)} /> },
        Route::Prescriptions => html! { <PrescriptionsPage /> },
        Route::PrescriptionNew { patient_id } => html! {
            <PrescriptionFormPage {patient_id} />
        },
        Route::PrescriptionEdit { id } => html! { <PrescriptionFormPage id={Some(id)} /> },
        Route::HospitalAdmins => html! { <HospitalAdminsPage /> },
        Route::HospitalAdminNew => html! { <HospitalAdminFormPage /> },
        Route::MyHospital => html! { <MyHospitalPage /> },
    };

    html! {
        <div class="app-shell">
            <Navbar />
            <main class="app-main">
                { view }
            </main>
        </div>
    }
}
