use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresDeveloper, RequiresLoggedIn};
use crate::client::route::{
    dev::{DevAccess, DevAccounts, DevChangelog, DevConsole},
    guild::Guild,
    legal::{Privacy, Terms},
    ticket::{TicketDetail, Tickets},
    Landing, Login, NotFound, Profile,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Landing {},

        #[route("/login")]
        Login {},

        #[route("/terms")]
        Terms {},

        #[route("/privacy")]
        Privacy {},

        #[layout(RequiresLoggedIn)]
            #[route("/guild/:guild_id")]
            Guild { guild_id: u64 },

            #[route("/profile")]
            Profile {},
        #[end_layout]

        #[layout(RequiresDeveloper)]
            #[route("/tickets")]
            Tickets {},

            #[route("/tickets/:code")]
            TicketDetail { code: String },

            #[nest("/dev")]
                #[route("/")]
                DevConsole {},

                #[route("/changelog")]
                DevChangelog {},

                #[route("/accounts")]
                DevAccounts {},

                #[route("/access")]
                DevAccess {},
            #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
