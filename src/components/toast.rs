use yew::prelude::*;

use crate::hooks::{use_toast, ToastKind};

/// Overlay that renders the active toasts; click to dismiss early.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let toasts = use_toast();

    html! {
        <div class="toast-host">
            { for toasts.items().into_iter().map(|toast| {
                let class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };
                let onclick = {
                    let toasts = toasts.clone();
                    let id = toast.id;
                    Callback::from(move |_| toasts.dismiss(id))
                };
                html! {
                    <div key={toast.id.to_string()} {class} {onclick}>
                        { &toast.message }
                    </div>
                }
            })}
        </div>
    }
}
