use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::{use_auth, use_route, Route};

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let route = use_route();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Already signed in (e.g. restored session): straight to the dashboard.
    {
        let route = route.clone();
        let authenticated = auth.user().is_some();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                route.go(Route::Dashboard);
            }
            || ()
        });
    }

    let on_submit = {
        let auth = auth.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();
            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }

            let auth = auth.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            error.set(None);
            spawn_local(async move {
                if let Err(e) = auth.login(&email, &password).await {
                    log::error!("❌ Login failed: {}", e);
                    error.set(Some(e.to_string()));
                }
                submitting.set(false);
            });
        })
    };

    let go_register = {
        let route = route.clone();
        Callback::from(move |_| route.go(Route::Register))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <div class="auth-header">
                    <div class="auth-logo">{"🏥"}</div>
                    <h1>{"Hospital Management System"}</h1>
                    <p>{"Sign in to your account"}</p>
                </div>

                <form class="auth-form" onsubmit={on_submit}>
                    if let Some(message) = (*error).clone() {
                        <div class="form-error">{ message }</div>
                    }

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>

                <div class="auth-footer">
                    <p>{"Don't have an account? "}
                        <button class="link-button" onclick={go_register}>
                            {"Register here"}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
