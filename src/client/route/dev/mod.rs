//! Developer-only pages. Every call behind them is re-checked by the backend.

mod access;
mod accounts;
mod changelog;
mod console;

pub use access::DevAccess;
pub use accounts::DevAccounts;
pub use changelog::DevChangelog;
pub use console::DevConsole;

use dioxus::prelude::*;

use crate::client::router::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum DevTab {
    Console,
    Changelog,
    Accounts,
    Access,
}

#[component]
pub fn DevTabs(active_tab: DevTab) -> Element {
    let tabs = [
        (DevTab::Console, Route::DevConsole {}, "Console"),
        (DevTab::Changelog, Route::DevChangelog {}, "Changelog"),
        (DevTab::Accounts, Route::DevAccounts {}, "Accounts"),
        (DevTab::Access, Route::DevAccess {}, "Access"),
    ];

    rsx! {
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6",
            for (tab, route, label) in tabs {
                Link {
                    key: "{label}",
                    to: route,
                    role: "tab",
                    class: if tab == active_tab { "tab tab-active" } else { "tab" },
                    "{label}"
                }
            }
        }
    }
}
