use dioxus::prelude::*;

use super::{DevTab, DevTabs};
use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Banner, ConfirmationModal, Page, StatusBanner,
        },
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, Permission},
            cache::Cache,
        },
    },
    model::admin::{BotCommand, BotStatusDto, MaintenanceDto, MAX_MAINTENANCE_MESSAGE_LEN},
};

#[cfg(feature = "web")]
use crate::client::{
    api::admin::{get_bot_status, send_bot_command, set_maintenance},
    constant::DEV_CONSOLE_POLL_MS,
    hook::use_poll,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(not(feature = "web"))]
use crate::client::hook::use_idle_poll;

/// Formats an uptime as `1d 2h 3m`, dropping leading zero units.
fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3600;
    let minutes = (seconds % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[component]
pub fn DevConsole() -> Element {
    let banner = use_signal(|| None::<Banner>);

    #[cfg(feature = "web")]
    let mut status = use_poll(DEV_CONSOLE_POLL_MS, banner, get_bot_status);
    #[cfg(not(feature = "web"))]
    let mut status = use_idle_poll::<BotStatusDto>();

    let on_changed = move |_| status.refresh();
    let cache = status.data.read().clone();

    rsx! {
        Title { "Developer Console | {SITE_NAME}" }
        match cache {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(data) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-lg sm:text-2xl mb-6", "Developer Console" }
                        DevTabs { active_tab: DevTab::Console }
                        StatusBanner { message: banner }
                        div {
                            class: "flex flex-col gap-6",
                            StatusStats { status: data.clone() }
                            BotControls { paused: data.paused, banner, on_changed }
                            MaintenanceForm { current: data.maintenance.clone(), banner, on_changed }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn StatusStats(status: BotStatusDto) -> Element {
    let (state_label, state_class) = match (status.online, status.paused) {
        (false, _) => ("Offline", "text-error"),
        (true, true) => ("Paused", "text-warning"),
        (true, false) => ("Online", "text-success"),
    };

    rsx! {
        div {
            class: "stats stats-vertical lg:stats-horizontal bg-base-200 w-full",
            div {
                class: "stat",
                div { class: "stat-title", "Bot" }
                div { class: "stat-value {state_class}", "{state_label}" }
                div {
                    class: "stat-desc",
                    if let Some(version) = &status.version { "v{version}" } else { "unknown version" }
                }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Guilds" }
                div { class: "stat-value", "{status.guild_count}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Active players" }
                div { class: "stat-value", "{status.active_players}" }
            }
            div {
                class: "stat",
                div { class: "stat-title", "Uptime" }
                div { class: "stat-value text-2xl", "{format_uptime(status.uptime_seconds)}" }
                div {
                    class: "stat-desc",
                    if status.maintenance.enabled { "Maintenance mode on" } else { "Maintenance mode off" }
                }
            }
        }
    }
}

#[component]
fn BotControls(paused: bool, banner: Signal<Option<Banner>>, on_changed: EventHandler<()>) -> Element {
    let auth_context = use_context::<AuthContext>();
    let is_owner = auth_context.read().has_permission(Permission::Owner);

    let mut is_sending = use_signal(|| false);
    let mut show_confirm = use_signal(|| false);
    let mut pending_command = use_signal(|| None::<BotCommand>);

    let mut send = move |command: BotCommand| {
        is_sending.set(true);
        #[cfg(feature = "web")]
        {
            let mut banner = banner;
            spawn(async move {
                match send_bot_command(command).await {
                    Ok(()) => {
                        banner.set(Some(Banner::success(format!("{} sent.", command.label()))));
                        on_changed.call(());
                    }
                    Err(err) => {
                        tracing::error!("Bot command {} failed: {}", command.as_str(), err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_sending.set(false);
                show_confirm.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (command, banner, on_changed);
    };

    let sending = is_sending();
    let toggle = if paused { BotCommand::Resume } else { BotCommand::Pause };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Bot controls" }
                div {
                    class: "flex flex-wrap gap-2",
                    button {
                        class: "btn btn-primary",
                        disabled: sending,
                        onclick: move |_| send(toggle),
                        if paused { "Resume all playback" } else { "Pause all playback" }
                    }
                    for command in [BotCommand::Restart, BotCommand::Shutdown] {
                        button {
                            key: "{command.as_str()}",
                            class: "btn btn-error btn-outline",
                            title: if !is_owner { "Owner only" },
                            disabled: sending || !is_owner,
                            onclick: move |_| {
                                pending_command.set(Some(command));
                                show_confirm.set(true);
                            },
                            "{command.label()}"
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_confirm,
            title: "Confirm bot command".to_string(),
            message: rsx!(
                if let Some(command) = pending_command() {
                    p {
                        class: "py-4",
                        "Send "
                        span { class: "font-bold", "{command.label()}" }
                        " to the bot? Every guild loses playback until it is back."
                    }
                }
            ),
            confirm_text: "Send".to_string(),
            is_processing: sending,
            processing_text: "Sending...".to_string(),
            on_confirm: move |_| {
                if let Some(command) = pending_command() {
                    send(command);
                }
            },
        }
    }
}

#[component]
fn MaintenanceForm(
    current: MaintenanceDto,
    banner: Signal<Option<Banner>>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut enabled = use_signal(|| current.enabled);
    let mut message = use_signal(|| current.message.clone().unwrap_or_default());
    let mut is_saving = use_signal(|| false);

    let too_long = message().chars().count() > MAX_MAINTENANCE_MESSAGE_LEN;
    let saving = is_saving();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if too_long {
            return;
        }
        let text = message().trim().to_string();
        let payload = MaintenanceDto {
            enabled: enabled(),
            message: (!text.is_empty()).then_some(text),
        };
        is_saving.set(true);

        #[cfg(feature = "web")]
        {
            let mut banner = banner;
            spawn(async move {
                match set_maintenance(payload).await {
                    Ok(saved) => {
                        let state = if saved.enabled { "enabled" } else { "disabled" };
                        banner.set(Some(Banner::success(format!("Maintenance mode {}.", state))));
                        on_changed.call(());
                    }
                    Err(err) => {
                        tracing::error!("Failed to update maintenance mode: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (payload, banner, on_changed);
    };

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "Maintenance mode" }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-warning",
                        checked: enabled(),
                        disabled: saving,
                        onchange: move |evt| enabled.set(evt.checked()),
                    }
                    span { "Reject new playback and show the message below" }
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    class: if too_long { "textarea-error" },
                    placeholder: "Message shown to users (optional)",
                    disabled: saving,
                    value: "{message}",
                    oninput: move |evt| message.set(evt.value()),
                }
                if too_long {
                    p { class: "text-sm text-error", "Message must be at most {MAX_MAINTENANCE_MESSAGE_LEN} characters" }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-warning",
                        disabled: saving || too_long,
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_drops_leading_zero_units() {
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(3 * 3600 + 5 * 60), "3h 5m");
        assert_eq!(format_uptime(2 * 86_400 + 3600 + 60), "2d 1h 1m");
    }
}
