use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaForward, FaMusic, FaPause, FaPlay, FaStop},
    Icon,
};

use crate::{
    client::component::Banner,
    model::guild::{format_duration, PlaybackAction, TrackDto},
};

#[cfg(feature = "web")]
use super::report_command;
#[cfg(feature = "web")]
use crate::client::api::guild::send_playback_action;

#[component]
pub(super) fn NowPlaying(
    guild_id: u64,
    track: Option<TrackDto>,
    banner: Signal<Option<Banner>>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut busy = use_signal(|| false);

    let mut send = move |action: PlaybackAction| {
        busy.set(true);
        #[cfg(feature = "web")]
        spawn(async move {
            let result = send_playback_action(guild_id, action).await;
            report_command(result, action.label(), banner, on_changed);
            busy.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (action, guild_id, banner, on_changed);
    };

    let Some(track) = track else {
        return rsx! {
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body items-center text-center opacity-70",
                    Icon { width: 32, height: 32, icon: FaMusic }
                    p { "Nothing is playing right now." }
                }
            }
        };
    };

    let disabled = busy();
    let progress = track.progress_percent();
    let elapsed = format_duration(track.current_time);
    let total = format_duration(track.duration);

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-4",
                div {
                    class: "flex items-center gap-4",
                    if let Some(artwork) = &track.artwork {
                        img {
                            src: "{artwork}",
                            alt: "{track.title} artwork",
                            class: "w-20 h-20 rounded-lg object-cover",
                        }
                    }
                    div {
                        class: "flex-1 min-w-0",
                        p { class: "text-xs uppercase opacity-60", if track.paused { "Paused" } else { "Now playing" } }
                        h2 { class: "text-xl font-bold truncate", "{track.title}" }
                        p { class: "opacity-80 truncate", "{track.artist}" }
                        if let Some(requested_by) = &track.requested_by {
                            p { class: "text-sm opacity-60", "Requested by {requested_by}" }
                        }
                    }
                }
                div {
                    class: "flex items-center gap-3 text-sm",
                    span { "{elapsed}" }
                    progress {
                        class: "progress progress-primary flex-1",
                        value: "{progress}",
                        max: "100",
                    }
                    span { "{total}" }
                }
                div {
                    class: "flex justify-center gap-2",
                    if track.paused {
                        button {
                            class: "btn btn-primary",
                            disabled: disabled,
                            onclick: move |_| send(PlaybackAction::Resume),
                            Icon { width: 16, height: 16, icon: FaPlay }
                            "Resume"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: disabled,
                            onclick: move |_| send(PlaybackAction::Pause),
                            Icon { width: 16, height: 16, icon: FaPause }
                            "Pause"
                        }
                    }
                    button {
                        class: "btn",
                        disabled: disabled,
                        onclick: move |_| send(PlaybackAction::Skip),
                        Icon { width: 16, height: 16, icon: FaForward }
                        "Skip"
                    }
                    button {
                        class: "btn btn-error btn-outline",
                        disabled: disabled,
                        onclick: move |_| send(PlaybackAction::Stop),
                        Icon { width: 16, height: 16, icon: FaStop }
                        "Stop"
                    }
                }
            }
        }
    }
}
