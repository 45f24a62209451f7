use dioxus::prelude::*;

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[cfg(feature = "web")]
use crate::client::{api::user::get_user, model::auth::AuthState};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth_context = use_context_provider(AuthContext::new);

    // Resolve the session once on load; 401 means logged out, not an error
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read() {
                let state = match result {
                    Ok(user) => AuthState::from(user.clone()),
                    Err(err) => {
                        tracing::error!("Failed to fetch current user: {}", err);
                        AuthState::Error(err.clone())
                    }
                };
                auth_context.set(state);
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Dashboard for the Sonora Discord music bot"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
