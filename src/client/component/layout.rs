use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {}
        div {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 bg-base-200 text-sm",
            div {
                class: "flex gap-4",
                Link { to: Route::Terms {}, class: "link link-hover", "Terms" }
                Link { to: Route::Privacy {}, class: "link link-hover", "Privacy" }
            }
        }
    })
}
