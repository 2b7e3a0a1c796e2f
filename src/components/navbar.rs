use yew::prelude::*;

use crate::hooks::{use_auth, use_route, Route};
use crate::models::UserRole;

pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub roles: &'static [UserRole],
}

const ALL_ROLES: &[UserRole] = &[
    UserRole::SuperAdmin,
    UserRole::HospitalAdmin,
    UserRole::Doctor,
];
const ADMINS: &[UserRole] = &[UserRole::SuperAdmin, UserRole::HospitalAdmin];

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Dashboard",
            route: Route::Dashboard,
            roles: ALL_ROLES,
        },
        NavItem {
            label: "Hospitals",
            route: Route::Hospitals,
            roles: ADMINS,
        },
        NavItem {
            label: "Doctors",
            route: Route::Doctors,
            roles: ADMINS,
        },
        NavItem {
            label: "Patients",
            route: Route::Patients,
            roles: ALL_ROLES,
        },
        NavItem {
            label: "Prescriptions",
            route: Route::Prescriptions,
            roles: ALL_ROLES,
        },
        NavItem {
            label: "Hospital Admins",
            route: Route::HospitalAdmins,
            roles: &[UserRole::SuperAdmin],
        },
        NavItem {
            label: "My Hospital",
            route: Route::MyHospital,
            roles: &[UserRole::HospitalAdmin],
        },
    ]
}

/// Navigation entries visible to a role.
pub fn visible_items(role: UserRole) -> Vec<NavItem> {
    nav_items()
        .into_iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_auth();
    let route = use_route();

    let Some(user) = auth.user() else {
        return Html::default();
    };

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| auth.logout())
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <span class="brand-icon">{"🏥"}</span>
                <span class="brand-name">{"HospitalMS"}</span>
            </div>
            <div class="navbar-links">
                { for visible_items(user.role()).into_iter().map(|item| {
                    let active = route.route == item.route;
                    let onclick = {
                        let route = route.clone();
                        let target = item.route.clone();
                        Callback::from(move |_| route.go(target.clone()))
                    };
                    html! {
                        <button
                            class={classes!("nav-link", active.then_some("active"))}
                            {onclick}
                        >
                            { item.label }
                        </button>
                    }
                })}
            </div>
            <div class="navbar-user">
                <div class="user-info">
                    <p class="user-name">{ &user.name }</p>
                    <p class="user-role">{ user.role().label() }</p>
                </div>
                <button class="btn-logout" onclick={on_logout}>{"Sign Out"}</button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: UserRole) -> Vec<&'static str> {
        visible_items(role).into_iter().map(|i| i.label).collect()
    }

    #[test]
    fn super_admin_sees_everything_but_my_hospital() {
        assert_eq!(
            labels(UserRole::SuperAdmin),
            vec![
                "Dashboard",
                "Hospitals",
                "Doctors",
                "Patients",
                "Prescriptions",
                "Hospital Admins"
            ]
        );
    }

    #[test]
    fn hospital_admin_sees_their_hospital_but_not_admin_management() {
        assert_eq!(
            labels(UserRole::HospitalAdmin),
            vec![
                "Dashboard",
                "Hospitals",
                "Doctors",
                "Patients",
                "Prescriptions",
                "My Hospital"
            ]
        );
    }

    #[test]
    fn doctor_sees_only_care_views() {
        assert_eq!(
            labels(UserRole::Doctor),
            vec!["Dashboard", "Patients", "Prescriptions"]
        );
    }
}
