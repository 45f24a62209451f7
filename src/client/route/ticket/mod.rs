mod detail;

pub use detail::TicketDetail;

use dioxus::prelude::*;

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
    model::ticket::{TicketStatus, TicketSummaryDto},
};

#[cfg(feature = "web")]
use crate::client::{api::ticket::get_tickets, constant::TICKET_LIST_POLL_MS, hook::use_poll};
#[cfg(not(feature = "web"))]
use crate::client::hook::use_idle_poll;

pub(crate) fn status_badge_class(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Pending => "badge-warning",
        TicketStatus::InProgress => "badge-info",
        TicketStatus::Resolved => "badge-success",
        TicketStatus::Closed => "badge-ghost",
    }
}

#[component]
pub fn Tickets() -> Element {
    let banner = use_signal(|| None::<Banner>);
    let mut filter = use_signal(|| None::<TicketStatus>);

    #[cfg(feature = "web")]
    let tickets = use_poll(TICKET_LIST_POLL_MS, banner, move || get_tickets(filter()));
    #[cfg(not(feature = "web"))]
    let tickets = use_idle_poll::<Vec<TicketSummaryDto>>();

    let cache = tickets.data.read().clone();

    rsx! {
        Title { "Tickets | {SITE_NAME}" }
        match cache {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(list) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-6xl",
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h1 { class: "text-lg sm:text-2xl", "Support Tickets" }
                            select {
                                class: "select select-bordered select-sm",
                                onchange: move |evt| {
                                    filter.set(evt.value().parse::<TicketStatus>().ok());
                                },
                                option { value: "", selected: filter().is_none(), "All statuses" }
                                for status in TicketStatus::ALL {
                                    option {
                                        key: "{status.as_str()}",
                                        value: "{status.as_str()}",
                                        selected: filter() == Some(status),
                                        "{status.label()}"
                                    }
                                }
                            }
                        }
                        StatusBanner { message: banner }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                TicketTable { tickets: list }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn TicketTable(tickets: Vec<TicketSummaryDto>) -> Element {
    if tickets.is_empty() {
        return rsx! {
            div { class: "text-center py-8 opacity-50", "No tickets found" }
        };
    }

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Code" }
                        th { "Subject" }
                        th { class: "hidden md:table-cell", "User" }
                        th { "Status" }
                        th { class: "hidden md:table-cell", "Updated" }
                    }
                }
                tbody {
                    for ticket in tickets {
                        tr {
                            key: "{ticket.code}",
                            td {
                                Link {
                                    to: Route::TicketDetail { code: ticket.code.to_string() },
                                    class: "link link-primary font-mono",
                                    "{ticket.code}"
                                }
                            }
                            td { "{ticket.subject}" }
                            td { class: "hidden md:table-cell", "{ticket.user_name}" }
                            td {
                                span {
                                    class: "badge {status_badge_class(ticket.status)}",
                                    "{ticket.status.label()}"
                                }
                            }
                            td { class: "hidden md:table-cell text-sm opacity-70", "{format_timestamp(&ticket.updated_at)}" }
                        }
                    }
                }
            }
        }
    }
}
