use yew::prelude::*;

/// Neutral loading state: no content, no redirect.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="loading-container">
            <div class="spinner"></div>
        </div>
    }
}
