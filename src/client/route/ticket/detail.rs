use dioxus::prelude::*;

use super::status_badge_class;
use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Banner, Page, StatusBanner,
        },
        constant::SITE_NAME,
        format::format_timestamp,
        model::cache::Cache,
        router::Route,
    },
    model::ticket::{TicketCode, TicketDto, TicketMessageDto, TicketStatus, MAX_TICKET_MESSAGE_LEN},
};

#[cfg(feature = "web")]
use crate::client::{
    api::ticket::{get_ticket, post_ticket_message, update_ticket_status},
    constant::TICKET_DETAIL_POLL_MS,
    hook::use_poll,
    model::error::ApiError,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(not(feature = "web"))]
use crate::client::hook::use_idle_poll;

#[component]
pub fn TicketDetail(code: String) -> Element {
    let banner = use_signal(|| None::<Banner>);
    let mut current_code = use_signal(|| TicketCode::parse(&code).ok());

    use_effect(use_reactive!(|code| {
        let parsed = TicketCode::parse(&code).ok();
        if *current_code.peek() != parsed {
            current_code.set(parsed);
        }
    }));

    #[cfg(feature = "web")]
    let mut ticket = use_poll(TICKET_DETAIL_POLL_MS, banner, move || {
        let code = current_code();
        async move {
            match code {
                Some(code) => get_ticket(&code).await,
                None => Err(ApiError::new(400, "Malformed ticket code")),
            }
        }
    });
    #[cfg(not(feature = "web"))]
    let mut ticket = use_idle_poll::<TicketDto>();

    let on_changed = move |_| ticket.refresh();

    if let Err(message) = TicketCode::parse(&code) {
        return rsx! { ErrorPage { status: 400, message } };
    }

    let cache = ticket.data.read().clone();

    rsx! {
        Title { "{code} | {SITE_NAME}" }
        match cache {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(data) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-4xl flex flex-col gap-6",
                        Link { to: Route::Tickets {}, class: "btn btn-ghost self-start", "← Back to tickets" }
                        StatusBanner { message: banner }
                        TicketHeader { ticket: data.clone(), banner, on_changed }
                        MessageThread { messages: data.messages.clone() }
                        if data.status.is_open() {
                            ReplyForm { code: data.code.clone(), banner, on_changed }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn TicketHeader(
    ticket: TicketDto,
    banner: Signal<Option<Banner>>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut busy = use_signal(|| false);
    let code = ticket.code.clone();

    let change_status = move |status: TicketStatus| {
        busy.set(true);
        #[cfg(feature = "web")]
        {
            let code = code.clone();
            let mut banner = banner;
            spawn(async move {
                match update_ticket_status(&code, status).await {
                    Ok(_) => {
                        banner.set(Some(Banner::success(format!("Marked {}.", status.label()))));
                        on_changed.call(());
                    }
                    Err(err) => {
                        tracing::error!("Failed to update ticket status: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (status, &code, banner, on_changed);
    };

    let disabled = busy();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                div {
                    class: "flex flex-wrap items-center justify-between gap-2",
                    h1 { class: "text-2xl font-bold", "{ticket.subject}" }
                    span {
                        class: "badge badge-lg {status_badge_class(ticket.status)}",
                        "{ticket.status.label()}"
                    }
                }
                p {
                    class: "text-sm opacity-70",
                    span { class: "font-mono", "{ticket.code}" }
                    " · opened by {ticket.user_name} on {format_timestamp(&ticket.created_at)}"
                }
                div {
                    class: "flex flex-wrap gap-2",
                    for status in ticket.status.next_statuses() {
                        {
                            let mut change_status = change_status.clone();
                            rsx! {
                                button {
                                    key: "{status.as_str()}",
                                    class: "btn btn-sm btn-outline",
                                    disabled: disabled,
                                    onclick: move |_| change_status(status),
                                    "Mark {status.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageThread(messages: Vec<TicketMessageDto>) -> Element {
    if messages.is_empty() {
        return rsx! {
            div { class: "text-center py-8 opacity-50", "No messages yet" }
        };
    }

    rsx! {
        div {
            class: "flex flex-col",
            for (index, message) in messages.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: if message.staff { "chat chat-end" } else { "chat chat-start" },
                    div {
                        class: "chat-header",
                        "{message.author} "
                        time { class: "text-xs opacity-50", "{format_timestamp(&message.created_at)}" }
                    }
                    div {
                        class: if message.staff { "chat-bubble chat-bubble-primary whitespace-pre-wrap" } else { "chat-bubble whitespace-pre-wrap" },
                        "{message.content}"
                    }
                    if message.staff {
                        div { class: "chat-footer opacity-50", "Staff" }
                    }
                }
            }
        }
    }
}

#[component]
fn ReplyForm(code: TicketCode, banner: Signal<Option<Banner>>, on_changed: EventHandler<()>) -> Element {
    let mut content = use_signal(String::new);
    let mut is_sending = use_signal(|| false);

    let length = content().chars().count();
    let too_long = length > MAX_TICKET_MESSAGE_LEN;
    let empty = content().trim().is_empty();
    let sending = is_sending();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if empty || too_long {
            return;
        }
        is_sending.set(true);

        #[cfg(feature = "web")]
        {
            let code = code.clone();
            let mut banner = banner;
            spawn(async move {
                match post_ticket_message(&code, content()).await {
                    Ok(_) => {
                        content.set(String::new());
                        on_changed.call(());
                    }
                    Err(err) => {
                        tracing::error!("Failed to send ticket reply: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_sending.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (&code, banner, on_changed);
    };

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body gap-3",
                textarea {
                    class: "textarea textarea-bordered w-full min-h-28",
                    placeholder: "Write a reply...",
                    disabled: sending,
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }
                div {
                    class: "flex items-center justify-between",
                    span {
                        class: if too_long { "text-sm text-error" } else { "text-sm opacity-60" },
                        "{length} / {MAX_TICKET_MESSAGE_LEN}"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending || empty || too_long,
                        if sending {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Sending..."
                        } else {
                            "Send reply"
                        }
                    }
                }
            }
        }
    }
}
