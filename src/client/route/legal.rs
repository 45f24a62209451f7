use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME};

#[component]
fn LegalPage(title: String, sections: Vec<(&'static str, &'static str)>) -> Element {
    rsx! {
        Title { "{title} | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            article {
                class: "prose max-w-3xl w-full",
                h1 { "{title}" }
                for (heading, body) in sections {
                    section {
                        key: "{heading}",
                        h2 { "{heading}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Terms() -> Element {
    rsx! {
        LegalPage {
            title: "Terms of Service".to_string(),
            sections: vec![
                (
                    "Using Sonora",
                    "Sonora is provided as is. You may use the bot and this dashboard in any Discord server where you have permission to add it, as long as you follow Discord's own terms.",
                ),
                (
                    "Your account",
                    "You sign in with Discord. You are responsible for what happens in your session and for the display name and avatar you choose.",
                ),
                (
                    "Acceptable use",
                    "Do not abuse the bot, automate requests against this dashboard, or upload content you do not have the right to share. Accounts that do may be suspended or banned.",
                ),
                (
                    "Changes",
                    "These terms may change as the service evolves. Continued use after a change means you accept the updated terms.",
                ),
            ],
        }
    }
}

#[component]
pub fn Privacy() -> Element {
    rsx! {
        LegalPage {
            title: "Privacy Policy".to_string(),
            sections: vec![
                (
                    "What we store",
                    "Your Discord ID and username, the optional display name and avatar you set here, and a session cookie while you are logged in.",
                ),
                (
                    "Support tickets",
                    "Ticket messages are kept so the team can follow up. They are only visible to Sonora developers.",
                ),
                (
                    "Security logs",
                    "Sign-in events with IP address and browser are recorded to protect accounts from abuse.",
                ),
                (
                    "Removal",
                    "Open a support ticket to have your profile data deleted.",
                ),
            ],
        }
    }
}
