pub mod use_auth;
pub mod use_route;
pub mod use_toast;

pub use use_auth::{use_auth, AuthProvider};
pub use use_route::{use_route, Route, RouteProvider};
pub use use_toast::{use_toast, ToastKind, ToastProvider};
