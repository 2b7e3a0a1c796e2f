// ============================================================================
// ROUTE GUARD - per-view role gate
// ============================================================================
// Purely a function of (loading, current role, permitted roles); safe to
// re-evaluate on every render. Advisory only: the backend is the real
// enforcement boundary, this just keeps views out of the wrong hands in
// the UI.
// ============================================================================

use yew::prelude::*;

use crate::components::loading::LoadingSpinner;
use crate::hooks::{use_auth, use_route, Route};
use crate::models::UserRole;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GuardDecision {
    /// Identity still resolving: render the neutral loading state so
    /// unauthorized content never flashes.
    Loading,
    Allow,
    RedirectLogin,
    RedirectDashboard,
}

pub fn decide(loading: bool, role: Option<UserRole>, allowed: &[UserRole]) -> GuardDecision {
    if loading {
        return GuardDecision::Loading;
    }
    match role {
        None => GuardDecision::RedirectLogin,
        Some(role) if allowed.contains(&role) => GuardDecision::Allow,
        Some(_) => GuardDecision::RedirectDashboard,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub allowed: &'static [UserRole],
    pub children: Children,
}

#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let auth = use_auth();
    let route = use_route();
    let decision = decide(
        auth.is_loading(),
        auth.user().map(|u| u.role()),
        props.allowed,
    );

    {
        let route = route.clone();
        use_effect_with(decision, move |decision| {
            match decision {
                GuardDecision::RedirectLogin => route.go(Route::Login),
                GuardDecision::RedirectDashboard => route.go(Route::Dashboard),
                GuardDecision::Loading | GuardDecision::Allow => {}
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Loading => html! { <LoadingSpinner /> },
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
        GuardDecision::RedirectLogin | GuardDecision::RedirectDashboard => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAFF: &[UserRole] = &[UserRole::SuperAdmin, UserRole::HospitalAdmin];

    #[test]
    fn loading_wins_over_everything() {
        assert_eq!(
            decide(true, Some(UserRole::Doctor), STAFF),
            GuardDecision::Loading
        );
        assert_eq!(decide(true, None, STAFF), GuardDecision::Loading);
    }

    #[test]
    fn anonymous_visitors_go_to_login() {
        assert_eq!(decide(false, None, STAFF), GuardDecision::RedirectLogin);
    }

    #[test]
    fn permitted_roles_render() {
        assert_eq!(
            decide(false, Some(UserRole::SuperAdmin), STAFF),
            GuardDecision::Allow
        );
        assert_eq!(
            decide(false, Some(UserRole::HospitalAdmin), STAFF),
            GuardDecision::Allow
        );
    }

    #[test]
    fn excluded_roles_are_sent_to_the_dashboard() {
        assert_eq!(
            decide(false, Some(UserRole::Doctor), STAFF),
            GuardDecision::RedirectDashboard
        );
    }
}
