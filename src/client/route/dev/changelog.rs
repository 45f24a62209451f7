use dioxus::prelude::*;

use super::{DevTab, DevTabs};
use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Banner, ConfirmationModal, Markdown, Page, StatusBanner,
        },
        constant::SITE_NAME,
        format::format_timestamp,
        model::cache::Cache,
    },
    model::admin::{ChangelogEntryDto, CreateChangelogEntryDto},
};

#[cfg(feature = "web")]
use crate::client::api::admin::{create_changelog_entry, delete_changelog_entry, get_changelog};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn DevChangelog() -> Element {
    let mut entries = use_signal(Cache::<Vec<ChangelogEntryDto>>::default);
    let mut banner = use_signal(|| None::<Banner>);
    let refetch_trigger = use_signal(|| 0u32);

    // Not polled: only this page edits the changelog, so refetch after each change
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_changelog().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Some(err) = entries.write().apply(result.clone()) {
                tracing::error!("Failed to fetch changelog: {}", err);
                banner.set(Some(Banner::from_api_error(&err)));
            }
        }
    });

    let cache = entries.read().clone();

    rsx! {
        Title { "Changelog | {SITE_NAME}" }
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
                        h1 { class: "text-lg sm:text-2xl mb-6", "Developer Console" }
                        DevTabs { active_tab: DevTab::Changelog }
                        StatusBanner { message: banner }
                        div {
                            class: "grid gap-6 lg:grid-cols-2",
                            NewEntryForm { banner, refetch_trigger }
                            EntryList { entries: list, banner, refetch_trigger }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn NewEntryForm(banner: Signal<Option<Banner>>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut version = use_signal(String::new);
    let mut title = use_signal(String::new);
    let mut body = use_signal(String::new);
    let mut preview = use_signal(|| false);
    let mut is_saving = use_signal(|| false);

    let draft = CreateChangelogEntryDto {
        version: version().trim().to_string(),
        title: title().trim().to_string(),
        body: body(),
    };
    let validation = draft.validate();
    let saving = is_saving();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if draft.validate().is_err() {
            return;
        }
        is_saving.set(true);

        #[cfg(feature = "web")]
        {
            let draft = draft.clone();
            let mut banner = banner;
            spawn(async move {
                match create_changelog_entry(draft).await {
                    Ok(entry) => {
                        version.set(String::new());
                        title.set(String::new());
                        body.set(String::new());
                        preview.set(false);
                        banner.set(Some(Banner::success(format!("Published {}.", entry.version))));
                        refetch_trigger.set(refetch_trigger() + 1);
                    }
                    Err(err) => {
                        tracing::error!("Failed to create changelog entry: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = banner;
    };

    rsx! {
        form {
            class: "card bg-base-200 h-fit",
            onsubmit: on_submit,
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "New entry" }
                div {
                    class: "flex gap-2",
                    input {
                        class: "input input-bordered w-32",
                        placeholder: "1.4.0",
                        disabled: saving,
                        value: "{version}",
                        oninput: move |evt| version.set(evt.value()),
                    }
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Title",
                        disabled: saving,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                div {
                    role: "tablist",
                    class: "tabs tabs-boxed tabs-sm w-fit",
                    a {
                        role: "tab",
                        class: if !preview() { "tab tab-active" } else { "tab" },
                        onclick: move |_| preview.set(false),
                        "Write"
                    }
                    a {
                        role: "tab",
                        class: if preview() { "tab tab-active" } else { "tab" },
                        onclick: move |_| preview.set(true),
                        "Preview"
                    }
                }
                if preview() {
                    div {
                        class: "min-h-40 p-3 rounded-box bg-base-100",
                        Markdown { source: body() }
                    }
                } else {
                    textarea {
                        class: "textarea textarea-bordered w-full min-h-40 font-mono",
                        placeholder: "What changed? Markdown is supported.",
                        disabled: saving,
                        value: "{body}",
                        oninput: move |evt| body.set(evt.value()),
                    }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving || validation.is_err(),
                        if saving { "Publishing..." } else { "Publish" }
                    }
                }
            }
        }
    }
}

#[component]
fn EntryList(
    entries: Vec<ChangelogEntryDto>,
    banner: Signal<Option<Banner>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show_delete_modal = use_signal(|| false);
    let mut entry_to_delete = use_signal(|| None::<(String, String)>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match entry_to_delete() {
                Some((id, _)) => Some(delete_changelog_entry(&id).await),
                None => None,
            }
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
            let mut banner = banner;
            match result {
                Ok(()) => {
                    refetch_trigger.set(refetch_trigger() + 1);
                    show_delete_modal.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to delete changelog entry: {}", err);
                    banner.set(Some(Banner::from_api_error(err)));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        div {
            class: "flex flex-col gap-4",
            if entries.is_empty() {
                div { class: "text-center py-8 opacity-50", "No changelog entries yet" }
            }
            for entry in entries {
                {
                    let id = entry.id.clone();
                    let label = format!("{} - {}", entry.version, entry.title);
                    rsx! {
                        div {
                            key: "{entry.id}",
                            class: "card bg-base-200",
                            div {
                                class: "card-body gap-2",
                                div {
                                    class: "flex items-start justify-between gap-2",
                                    div {
                                        h3 { class: "font-bold", "{entry.title}" }
                                        p {
                                            class: "text-xs opacity-60",
                                            span { class: "badge badge-sm badge-outline mr-2", "v{entry.version}" }
                                            "{format_timestamp(&entry.created_at)}"
                                        }
                                    }
                                    button {
                                        class: "btn btn-sm btn-ghost text-error",
                                        onclick: move |_| {
                                            entry_to_delete.set(Some((id.clone(), label.clone())));
                                            show_delete_modal.set(true);
                                        },
                                        "Delete"
                                    }
                                }
                                Markdown { source: entry.body.clone() }
                            }
                        }
                    }
                }
            }
        }

        ConfirmationModal {
            show: show_delete_modal,
            title: "Delete entry".to_string(),
            message: rsx!(
                if let Some((_, label)) = entry_to_delete() {
                    p {
                        class: "py-4",
                        "Delete "
                        span { class: "font-bold", "\"{label}\"" }
                        " from the public changelog?"
                    }
                }
            ),
            confirm_text: "Delete".to_string(),
            is_processing: is_deleting(),
            processing_text: "Deleting...".to_string(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}
