//! Per-guild control panel: what is playing, playback buttons, and the queue.

mod now_playing;
mod queue;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Banner, Page, StatusBanner,
        },
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::guild::GuildDto,
};

use now_playing::NowPlaying;
use queue::QueueTable;

#[cfg(feature = "web")]
use crate::client::{
    api::guild::get_guild, constant::GUILD_POLL_MS, hook::use_poll, model::error::ApiError,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(not(feature = "web"))]
use crate::client::hook::use_idle_poll;

#[component]
pub fn Guild(guild_id: u64) -> Element {
    let banner = use_signal(|| None::<Banner>);
    let mut current_id = use_signal(|| guild_id);

    // Follow route changes between guilds without remounting
    use_effect(use_reactive!(|guild_id| {
        if *current_id.peek() != guild_id {
            current_id.set(guild_id);
        }
    }));

    #[cfg(feature = "web")]
    let mut guild = use_poll(GUILD_POLL_MS, banner, move || get_guild(current_id()));
    #[cfg(not(feature = "web"))]
    let mut guild = use_idle_poll::<GuildDto>();

    let on_changed = move |_| guild.refresh();
    let cache = guild.data.read().clone();

    rsx! {
        match cache {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(data) => rsx! {
                Title { "{data.name} | {SITE_NAME}" }
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        StatusBanner { message: banner }
                        GuildHeader { guild: data.clone() }
                        NowPlaying {
                            guild_id,
                            track: data.current_track.clone(),
                            banner,
                            on_changed,
                        }
                        QueueTable {
                            guild_id,
                            queue: data.queue.clone(),
                            banner,
                            on_changed,
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn GuildHeader(guild: GuildDto) -> Element {
    let initial = guild.name.chars().next().unwrap_or('?');

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex-row items-center gap-4",
                if let Some(icon) = &guild.icon {
                    img {
                        src: "{icon}",
                        alt: "{guild.name} icon",
                        class: "w-16 h-16 rounded-full",
                    }
                } else {
                    div {
                        class: "w-16 h-16 rounded-full bg-neutral flex items-center justify-center font-bold text-2xl",
                        "{initial}"
                    }
                }
                div {
                    class: "flex-1",
                    h1 { class: "text-2xl font-bold", "{guild.name}" }
                    p {
                        class: "text-sm opacity-70",
                        "{guild.member_count} members"
                    }
                }
                if let Some(channel) = &guild.voice_channel {
                    div { class: "badge badge-success badge-outline", "In {channel}" }
                } else {
                    div { class: "badge badge-ghost", "Not in voice" }
                }
            }
        }
    }
}

/// Reports a control or queue command: refresh on success, banner on failure.
#[cfg(feature = "web")]
fn report_command(
    result: Result<(), ApiError>,
    what: &str,
    mut banner: Signal<Option<Banner>>,
    on_changed: EventHandler<()>,
) {
    match result {
        Ok(()) => on_changed.call(()),
        Err(err) => {
            tracing::error!("{} failed: {}", what, err);
            banner.set(Some(Banner::from_api_error(&err)));
        }
    }
}
