use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{fa_brands_icons::FaDiscord, fa_solid_icons::FaMusic},
    Icon,
};

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if auth_context.read().is_authenticated() {
            nav.push(Route::Profile {});
        }
    });

    let state = auth_context.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                    div {
                        class: "flex flex-col items-center gap-4",
                        Icon { width: 96, height: 96, icon: FaMusic }
                        p {
                            class: "text-2xl",
                            {SITE_NAME}
                        }
                    }
                    a {
                        href: "/api/auth/login",
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon { width: 24, height: 24, icon: FaDiscord }
                        "Login with Discord"
                    }
                }
            }
        }
    }
}
