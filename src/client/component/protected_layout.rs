use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState, Permission},
    router::Route,
};

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresDeveloper() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Developer] }
    }
}

/// Renders the nested route only once the session is known and holds every
/// permission. Logged-out visitors are sent to the login page.
///
/// This is presentation only; the backend checks the same roles on every call.
#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let state = auth_context.read().clone();
    let fetch_completed = state.is_resolved();
    let user_logged_in = state.is_authenticated();
    let logged_out = matches!(state, AuthState::NotLoggedIn);
    let has_required_permissions = state.has_all_permissions(&permissions);

    use_effect(use_reactive!(|logged_out| {
        if logged_out {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {}
        } else if let AuthState::Error(err) = state {
            ErrorPage { status: err.status, message: err.message }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page".to_string() }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
        // Otherwise render nothing while the effect redirects
    }
}
