use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMusic, Icon};

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    model::auth::{AuthContext, Permission},
    router::Route,
};

const FEATURES: [(&str, &str); 4] = [
    (
        "Control playback",
        "Pause, skip, and stop the music from your browser while you sit in voice.",
    ),
    (
        "Shape the queue",
        "Reorder upcoming tracks or pull one out without typing a single command.",
    ),
    (
        "Make it yours",
        "Set a display name and avatar shown across the dashboard.",
    ),
    (
        "Get help fast",
        "Support tickets opened in Discord land straight with the team.",
    ),
];

#[component]
pub fn Landing() -> Element {
    let auth_context = use_context::<AuthContext>();
    let state = auth_context.read();
    let logged_in = state.is_authenticated();
    let is_developer = state.has_permission(Permission::Developer);

    rsx! {
        Title { "{SITE_NAME} | Music for your Discord server" }
        Page {
            class: "flex flex-col items-center gap-12",
            div {
                class: "hero py-12",
                div {
                    class: "hero-content text-center flex-col gap-6",
                    Icon { width: 96, height: 96, icon: FaMusic }
                    h1 { class: "text-4xl sm:text-5xl font-bold", "{SITE_NAME}" }
                    p {
                        class: "max-w-xl opacity-80",
                        "A music bot for Discord with a dashboard to run the party from anywhere."
                    }
                    if logged_in {
                        div {
                            class: "flex gap-2",
                            Link { to: Route::Profile {}, class: "btn btn-primary", "Your profile" }
                            if is_developer {
                                Link { to: Route::DevConsole {}, class: "btn btn-outline", "Developer console" }
                            }
                        }
                        GuildJump {}
                    } else {
                        a { href: "/api/auth/login", class: "btn btn-primary", "Login with Discord" }
                    }
                }
            }
            div {
                class: "grid gap-4 sm:grid-cols-2 w-full max-w-4xl",
                for (title, body) in FEATURES {
                    div {
                        key: "{title}",
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            h2 { class: "card-title", "{title}" }
                            p { class: "opacity-80", "{body}" }
                        }
                    }
                }
            }
        }
    }
}

/// Opens a guild's control panel by ID, for users arriving without the bot's link.
#[component]
fn GuildJump() -> Element {
    let mut guild_id = use_signal(String::new);
    let nav = navigator();

    let parsed = guild_id().trim().parse::<u64>().ok();

    rsx! {
        form {
            class: "join",
            onsubmit: move |evt| {
                evt.prevent_default();
                if let Some(guild_id) = parsed {
                    nav.push(Route::Guild { guild_id });
                }
            },
            input {
                class: "input input-bordered join-item",
                placeholder: "Server ID",
                inputmode: "numeric",
                value: "{guild_id}",
                oninput: move |evt| guild_id.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn join-item",
                disabled: parsed.is_none(),
                "Open"
            }
        }
    }
}
