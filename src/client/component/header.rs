use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{fa_brands_icons::FaDiscord, fa_solid_icons::FaMusic},
    Icon,
};

use crate::client::{
    component::UserAvatar,
    constant::SITE_NAME,
    model::auth::{AuthContext, Permission},
    router::Route,
};

#[component]
pub fn Header() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();

    let fetch_completed = state.is_resolved();
    let user = state.user().cloned();
    let is_developer = state.has_permission(Permission::Developer);

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Landing {},
                div {
                    class: "flex items-center gap-3",
                    Icon { width: 32, height: 32, icon: FaMusic }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user) = user {
                if is_developer {
                    Link {
                        to: Route::Tickets {},
                        class: "btn btn-ghost hidden sm:flex",
                        "Tickets"
                    }
                    Link {
                        to: Route::DevConsole {},
                        class: "btn btn-outline",
                        "Dev"
                    }
                }
                Link {
                    to: Route::Profile {},
                    class: "btn btn-ghost flex gap-2 items-center",
                    UserAvatar { user: user.clone(), size_class: "w-8" }
                    span { class: "hidden sm:inline", "{user.shown_name()}" }
                }
                a {
                    href: "/api/auth/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    class: "btn btn-outline flex gap-2 items-center",
                    Icon { width: 22, height: 22, icon: FaDiscord }
                    "Login"
                }
            }
        }
    })
}
