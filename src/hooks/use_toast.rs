use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(PartialEq, Default)]
pub struct ToastList {
    pub items: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(toast) => items.push(toast),
            ToastAction::Dismiss(id) => items.retain(|t| t.id != id),
        }
        Rc::new(ToastList { items })
    }
}

#[derive(Clone)]
pub struct ToastHandle {
    list: UseReducerHandle<ToastList>,
    next_id: Rc<Cell<u32>>,
}

impl PartialEq for ToastHandle {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl ToastHandle {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.list.dispatch(ToastAction::Dismiss(id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.list.items.clone()
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.list.dispatch(ToastAction::Push(Toast { id, kind, message }));

        // Auto-dismiss; firing after unmount is a no-op dispatch.
        let list = self.list.clone();
        Timeout::new(TOAST_DISMISS_MS, move || {
            list.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0u32));

    let handle = ToastHandle {
        list,
        next_id: next_id.clone(),
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <crate::components::toast::ToastHost />
        </ContextProvider<ToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("use_toast must be used inside ToastProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reducer_pushes_and_dismisses() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Toast {
            id: 1,
            kind: ToastKind::Error,
            message: "boom".into(),
        }));
        let list = list.reduce(ToastAction::Push(Toast {
            id: 2,
            kind: ToastKind::Success,
            message: "saved".into(),
        }));
        assert_eq!(list.items.len(), 2);

        let list = list.reduce(ToastAction::Dismiss(1));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].id, 2);
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_noop() {
        let list = Rc::new(ToastList::default()).reduce(ToastAction::Dismiss(9));
        assert!(list.items.is_empty());
    }
}
