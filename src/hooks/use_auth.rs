// ============================================================================
// AUTH CONTEXT - session lifecycle and identity resolution
// ============================================================================
// Three-phase machine: Unresolved -> Authenticated | Anonymous. The provider
// constructs the session store and gateway client explicitly and injects
// them through the component tree; nothing here is module-level state.
// ============================================================================

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_route::{use_route, Route};
use crate::models::User;
use crate::services::{ApiClient, ApiError, RegisterPayload, SessionStore};

#[derive(Clone, PartialEq, Debug)]
pub enum AuthPhase {
    /// Startup: a persisted credential may still be resolving.
    Unresolved,
    Authenticated(User),
    Anonymous,
}

impl AuthPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthPhase::Unresolved)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AuthHandle {
    phase: UseStateHandle<AuthPhase>,
    client: ApiClient,
    navigate: Callback<Route>,
}

// The gateway client carries no comparable state; context consumers only
// need to re-render when the phase changes.
impl PartialEq for AuthHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.phase == *other.phase
    }
}

impl AuthHandle {
    pub fn phase(&self) -> AuthPhase {
        (*self.phase).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn user(&self) -> Option<User> {
        self.phase.user().cloned()
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Exchange credentials for a session and land on the dashboard.
    /// The caller owns error presentation.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let user = self.client.login(email, password).await?;
        self.phase.set(AuthPhase::Authenticated(user));
        self.navigate.emit(Route::Dashboard);
        Ok(())
    }

    /// Create an account. Registration does not establish a session; the
    /// user signs in afterwards.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        self.client.register(payload).await?;
        self.navigate.emit(Route::Login);
        Ok(())
    }

    /// Always succeeds and is idempotent: clears the credential and the
    /// identity, then lands on the sign-in view.
    pub fn logout(&self) {
        log::info!("👋 Logging out");
        self.client.session().clear();
        self.phase.set(AuthPhase::Anonymous);
        self.navigate.emit(Route::Login);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let route = use_route();
    let client = (*use_memo((), |_| ApiClient::new(SessionStore::new()))).clone();
    let phase = use_state(|| AuthPhase::Unresolved);

    // Resolve the persisted credential exactly once per page load. Guards
    // see `Unresolved` until this completes, success or failure.
    {
        let phase = phase.clone();
        let client = client.clone();
        use_effect_with((), move |_| {
            if client.session().get().is_some() {
                spawn_local(async move {
                    match client.current_user().await {
                        Ok(user) => {
                            log::info!("✅ Session restored for {}", user.email);
                            phase.set(AuthPhase::Authenticated(user));
                        }
                        Err(e) => {
                            // Dead or rejected token: drop it so the next
                            // load does not retry it.
                            log::warn!("Session resolution failed: {}", e);
                            client.session().clear();
                            phase.set(AuthPhase::Anonymous);
                        }
                    }
                });
            } else {
                phase.set(AuthPhase::Anonymous);
            }
            || ()
        });
    }

    let handle = AuthHandle {
        phase,
        client,
        navigate: route.navigate.clone(),
    };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<AuthHandle>>
    }
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth must be used inside AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_phase_is_loading_and_userless() {
        assert!(AuthPhase::Unresolved.is_loading());
        assert!(AuthPhase::Unresolved.user().is_none());
    }

    #[test]
    fn anonymous_phase_is_resolved_and_userless() {
        assert!(!AuthPhase::Anonymous.is_loading());
        assert!(AuthPhase::Anonymous.user().is_none());
    }

    #[test]
    fn authenticated_phase_exposes_the_identity() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","name":"Root","email":"root@x.com","role":"SUPER_ADMIN"}"#,
        )
        .unwrap();
        let phase = AuthPhase::Authenticated(user.clone());
        assert!(!phase.is_loading());
        assert_eq!(phase.user(), Some(&user));
    }
}
