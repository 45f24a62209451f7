use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaArrowDown, FaArrowUp, FaTrash},
    Icon,
};

use crate::{
    client::component::Banner,
    model::guild::{format_duration, QueueEntryDto},
};

#[cfg(feature = "web")]
use super::report_command;
#[cfg(feature = "web")]
use crate::client::api::guild::{move_in_queue, remove_from_queue};

#[derive(Clone, Copy)]
enum QueueEdit {
    Remove(u32),
    Move { from: u32, to: u32 },
}

#[component]
pub(super) fn QueueTable(
    guild_id: u64,
    queue: Vec<QueueEntryDto>,
    banner: Signal<Option<Banner>>,
    on_changed: EventHandler<()>,
) -> Element {
    let mut busy = use_signal(|| false);

    let mut edit = move |edit: QueueEdit| {
        busy.set(true);
        #[cfg(feature = "web")]
        spawn(async move {
            let (result, what) = match edit {
                QueueEdit::Remove(position) => {
                    (remove_from_queue(guild_id, position).await, "Remove from queue")
                }
                QueueEdit::Move { from, to } => {
                    (move_in_queue(guild_id, from, to).await, "Move in queue")
                }
            };
            report_command(result, what, banner, on_changed);
            busy.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (edit, guild_id, banner, on_changed);
    };

    let disabled = busy();
    let last_index = queue.len().saturating_sub(1);

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "Up next ({queue.len()})" }
                if queue.is_empty() {
                    div { class: "text-center py-8 opacity-50", "The queue is empty" }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Title" }
                                    th { class: "hidden sm:table-cell", "Length" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for (index, entry) in queue.iter().enumerate() {
                                    {
                                        let position = entry.position;
                                        let previous = index.checked_sub(1).and_then(|i| queue.get(i)).map(|e| e.position);
                                        let next = queue.get(index + 1).map(|e| e.position);
                                        rsx! {
                                            tr {
                                                key: "{position}",
                                                td { "{position}" }
                                                td {
                                                    div { class: "font-medium", "{entry.title}" }
                                                    div { class: "text-xs opacity-70", "{entry.artist}" }
                                                }
                                                td { class: "hidden sm:table-cell", "{format_duration(entry.duration)}" }
                                                td {
                                                    div {
                                                        class: "flex gap-1 justify-end",
                                                        button {
                                                            class: "btn btn-sm btn-ghost",
                                                            title: "Move up",
                                                            disabled: disabled || index == 0,
                                                            onclick: move |_| {
                                                                if let Some(to) = previous {
                                                                    edit(QueueEdit::Move { from: position, to });
                                                                }
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaArrowUp }
                                                        }
                                                        button {
                                                            class: "btn btn-sm btn-ghost",
                                                            title: "Move down",
                                                            disabled: disabled || index == last_index,
                                                            onclick: move |_| {
                                                                if let Some(to) = next {
                                                                    edit(QueueEdit::Move { from: position, to });
                                                                }
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaArrowDown }
                                                        }
                                                        button {
                                                            class: "btn btn-sm btn-error btn-outline",
                                                            title: "Remove",
                                                            disabled: disabled,
                                                            onclick: move |_| edit(QueueEdit::Remove(position)),
                                                            Icon { width: 14, height: 14, icon: FaTrash }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
