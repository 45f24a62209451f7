use dioxus::prelude::*;

use super::{DevTab, DevTabs};
use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Banner, ConfirmationModal, Modal, Page, StatusBanner,
        },
        constant::SITE_NAME,
        format::format_timestamp,
        model::{
            auth::{AuthContext, Permission},
            cache::Cache,
        },
    },
    model::developer::{DeveloperAccountDto, DeveloperRole},
};

#[cfg(feature = "web")]
use crate::client::api::developer::{add_developer, get_developers, remove_developer};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn DevAccess() -> Element {
    let auth_context = use_context::<AuthContext>();
    let is_owner = auth_context.read().has_permission(Permission::Owner);

    let mut developers = use_signal(Cache::<Vec<DeveloperAccountDto>>::default);
    let mut banner = use_signal(|| None::<Banner>);
    let refetch_trigger = use_signal(|| 0u32);
    let mut show_add_modal = use_signal(|| false);

    // Fetch developers - resource re-runs when refetch_trigger changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_developers().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Some(err) = developers.write().apply(result.clone()) {
                tracing::error!("Failed to fetch developers: {}", err);
                banner.set(Some(Banner::from_api_error(&err)));
            }
        }
    });

    let cache = developers.read().clone();

    rsx! {
        Title { "Access | {SITE_NAME}" }
        match cache {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(list) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        h1 { class: "text-lg sm:text-2xl mb-6", "Developer Console" }
                        DevTabs { active_tab: DevTab::Access }
                        StatusBanner { message: banner }
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h2 { class: "text-lg font-semibold", "Developer access" }
                            if is_owner {
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| show_add_modal.set(true),
                                    "Add Developer"
                                }
                            }
                        }
                        if !is_owner {
                            p { class: "text-sm opacity-70 mb-4", "Only owners can grant or revoke access." }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                DeveloperList { developers: list, is_owner, banner, refetch_trigger }
                            }
                        }
                    }
                }
                AddDeveloperModal { show: show_add_modal, banner, refetch_trigger }
            },
        }
    }
}

#[component]
fn DeveloperList(
    developers: Vec<DeveloperAccountDto>,
    is_owner: bool,
    banner: Signal<Option<Banner>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let auth_context = use_context::<AuthContext>();
    let current_user_id = auth_context.read().user_id();

    let mut show_delete_modal = use_signal(|| false);
    let mut developer_to_delete = use_signal(|| None::<(u64, String)>);
    let mut is_deleting = use_signal(|| false);

    #[cfg(feature = "web")]
    let delete_future = use_resource(move || async move {
        if is_deleting() {
            match developer_to_delete() {
                Some((id, _)) => Some(remove_developer(id).await),
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
                    tracing::error!("Failed to remove developer: {}", err);
                    banner.set(Some(Banner::from_api_error(err)));
                }
            }
            is_deleting.set(false);
        }
    });

    rsx! {
        if developers.is_empty() {
            div { class: "text-center py-8 opacity-50", "No developers found" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Discord ID" }
                            th { "Role" }
                            th { class: "hidden md:table-cell", "Added" }
                            if is_owner {
                                th { class: "text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        for developer in &developers {
                            {
                                let developer_id = developer.discord_id;
                                let developer_name = developer.name.clone();
                                let is_current_user = Some(developer_id) == current_user_id;
                                let removable = developer.role == DeveloperRole::Developer;
                                rsx! {
                                    tr {
                                        key: "{developer_id}",
                                        td {
                                            div {
                                                class: "flex items-center gap-2",
                                                span { "{developer.name}" }
                                                if is_current_user {
                                                    span { class: "badge badge-sm badge-primary", "You" }
                                                }
                                            }
                                        }
                                        td { class: "font-mono", "{developer_id}" }
                                        td {
                                            span {
                                                class: if removable { "badge badge-outline" } else { "badge badge-secondary" },
                                                "{developer.role.label()}"
                                            }
                                        }
                                        td { class: "hidden md:table-cell text-sm opacity-70", "{format_timestamp(&developer.created_at)}" }
                                        if is_owner {
                                            td {
                                                div {
                                                    class: "flex gap-2 justify-end",
                                                    button {
                                                        class: "btn btn-sm btn-error",
                                                        disabled: !removable,
                                                        title: if !removable { "Owners cannot be removed" },
                                                        onclick: move |_| {
                                                            developer_to_delete.set(Some((developer_id, developer_name.clone())));
                                                            show_delete_modal.set(true);
                                                        },
                                                        "Remove"
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

        ConfirmationModal {
            show: show_delete_modal,
            title: "Remove Developer".to_string(),
            message: rsx!(
                if let Some((_, name)) = developer_to_delete() {
                    p {
                        class: "py-4",
                        "Are you sure you want to revoke developer access from "
                        span { class: "font-bold", "\"{name}\"" }
                        "? They will lose access to tickets, accounts, and the console."
                    }
                }
            ),
            confirm_text: "Remove Developer".to_string(),
            is_processing: is_deleting(),
            processing_text: "Removing...".to_string(),
            on_confirm: move |_| is_deleting.set(true),
        }
    }
}

#[component]
fn AddDeveloperModal(
    mut show: Signal<bool>,
    banner: Signal<Option<Banner>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut discord_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut error_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Reset form when modal opens
    use_effect(move || {
        if show() {
            discord_id.set(String::new());
            name.set(String::new());
            error_message.set(None);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let Ok(id) = discord_id().trim().parse::<u64>() else {
            error_message.set(Some("Discord ID must be a number".to_string()));
            return;
        };
        let developer_name = name().trim().to_string();
        if developer_name.is_empty() {
            error_message.set(Some("Name is required".to_string()));
            return;
        }

        error_message.set(None);
        is_submitting.set(true);

        #[cfg(feature = "web")]
        {
            let mut banner = banner;
            spawn(async move {
                match add_developer(id, developer_name).await {
                    Ok(account) => {
                        banner.set(Some(Banner::success(format!("{} can now use the console.", account.name))));
                        refetch_trigger.set(refetch_trigger() + 1);
                        show.set(false);
                    }
                    Err(err) => {
                        tracing::error!("Failed to add developer: {}", err);
                        error_message.set(Some(err.message.clone()));
                    }
                }
                is_submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (id, developer_name, banner);
    };

    let submitting = is_submitting();

    rsx! {
        Modal {
            show,
            title: "Add Developer".to_string(),
            prevent_close: submitting,
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                label {
                    class: "form-control flex flex-col gap-2",
                    span { class: "label-text", "Discord ID" }
                    input {
                        class: "input input-bordered w-full font-mono",
                        inputmode: "numeric",
                        placeholder: "123456789012345678",
                        disabled: submitting,
                        value: "{discord_id}",
                        oninput: move |evt| discord_id.set(evt.value()),
                    }
                }
                label {
                    class: "form-control flex flex-col gap-2",
                    span { class: "label-text", "Name" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Shown in the access list",
                        disabled: submitting,
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                if let Some(err) = error_message() {
                    div { class: "alert alert-error", span { "{err}" } }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: submitting,
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting,
                        if submitting {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "Adding..."
                        } else {
                            "Add Developer"
                        }
                    }
                }
            }
        }
    }
}
