use dioxus::prelude::*;

use super::{DevTab, DevTabs};
use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Banner, Modal, Page, StatusBanner,
        },
        constant::SITE_NAME,
        format::{format_optional_timestamp, format_timestamp},
        model::{cache::Cache, error::ApiError},
    },
    model::account::{
        AccountStatus, AuthUserDto, MfaMethodDto, SecurityLogEntryDto, UpdateAccountStatusDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::account::{get_accounts, get_mfa_methods, get_security_log, update_account_status},
    constant::ACCOUNTS_POLL_MS,
    hook::use_poll,
};
#[cfg(feature = "web")]
use dioxus_logger::tracing;
#[cfg(not(feature = "web"))]
use crate::client::hook::use_idle_poll;

fn status_badge_class(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "badge-success",
        AccountStatus::Suspended => "badge-warning",
        AccountStatus::Banned => "badge-error",
    }
}

#[component]
pub fn DevAccounts() -> Element {
    let banner = use_signal(|| None::<Banner>);
    let mut search = use_signal(String::new);
    let mut selected = use_signal(|| None::<AuthUserDto>);
    let mut show_details = use_signal(|| false);

    #[cfg(feature = "web")]
    let mut accounts = use_poll(ACCOUNTS_POLL_MS, banner, get_accounts);
    #[cfg(not(feature = "web"))]
    let mut accounts = use_idle_poll::<Vec<AuthUserDto>>();

    let on_updated = move |account: AuthUserDto| {
        selected.set(Some(account));
        accounts.refresh();
    };

    let cache = accounts.data.read().clone();
    let query = search().trim().to_lowercase();

    rsx! {
        Title { "Accounts | {SITE_NAME}" }
        match cache {
            Cache::Loading => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::Fetched(list) => {
                let filtered: Vec<AuthUserDto> = list
                    .into_iter()
                    .filter(|account| {
                        query.is_empty()
                            || account.username.to_lowercase().contains(&query)
                            || account.email.as_deref().is_some_and(|e| e.to_lowercase().contains(&query))
                            || account.id.contains(&query)
                    })
                    .collect();

                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full",
                        div {
                            class: "w-full max-w-6xl",
                            h1 { class: "text-lg sm:text-2xl mb-6", "Developer Console" }
                            DevTabs { active_tab: DevTab::Accounts }
                            StatusBanner { message: banner }
                            div {
                                class: "flex items-center justify-between gap-4 mb-4",
                                h2 { class: "text-lg font-semibold", "Auth accounts" }
                                input {
                                    class: "input input-bordered input-sm w-64",
                                    placeholder: "Search username, email, or ID",
                                    value: "{search}",
                                    oninput: move |evt| search.set(evt.value()),
                                }
                            }
                            div {
                                class: "card bg-base-200",
                                div {
                                    class: "card-body",
                                    AccountTable {
                                        accounts: filtered,
                                        on_select: move |account: AuthUserDto| {
                                            selected.set(Some(account));
                                            show_details.set(true);
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(account) = selected() {
            AccountModal { show: show_details, account, banner, on_updated }
        }
    }
}

#[component]
fn AccountTable(accounts: Vec<AuthUserDto>, on_select: EventHandler<AuthUserDto>) -> Element {
    if accounts.is_empty() {
        return rsx! {
            div { class: "text-center py-8 opacity-50", "No accounts found" }
        };
    }

    rsx! {
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-zebra w-full",
                thead {
                    tr {
                        th { "Username" }
                        th { class: "hidden md:table-cell", "Email" }
                        th { "Status" }
                        th { "MFA" }
                        th { class: "hidden lg:table-cell", "Last login" }
                        th { class: "text-right", "Actions" }
                    }
                }
                tbody {
                    for account in accounts {
                        {
                            let row = account.clone();
                            rsx! {
                                tr {
                                    key: "{account.id}",
                                    td { "{account.username}" }
                                    td { class: "hidden md:table-cell", "{account.email.clone().unwrap_or_default()}" }
                                    td {
                                        span {
                                            class: "badge {status_badge_class(account.status)}",
                                            "{account.status.label()}"
                                        }
                                    }
                                    td { if account.mfa_enabled { "On" } else { "Off" } }
                                    td { class: "hidden lg:table-cell text-sm opacity-70", "{format_optional_timestamp(account.last_login.as_ref())}" }
                                    td {
                                        div {
                                            class: "flex justify-end",
                                            button {
                                                class: "btn btn-sm",
                                                onclick: move |_| on_select.call(row.clone()),
                                                "Manage"
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

#[component]
fn AccountModal(
    show: Signal<bool>,
    account: AuthUserDto,
    banner: Signal<Option<Banner>>,
    on_updated: EventHandler<AuthUserDto>,
) -> Element {
    let mut account_id = use_signal(|| account.id.clone());
    let mut details = use_signal(|| None::<Result<(Vec<MfaMethodDto>, Vec<SecurityLogEntryDto>), ApiError>>);

    use_effect(use_reactive!(|account| {
        if *account_id.peek() != account.id {
            account_id.set(account.id.clone());
            details.set(None);
        }
    }));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let id = account_id();
        if !show() {
            return None;
        }
        let mfa = get_mfa_methods(&id).await;
        let log = get_security_log(&id).await;
        Some(mfa.and_then(|mfa| log.map(|log| (mfa, log))))
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch account details: {}", err);
            }
            details.set(Some(result.clone()));
        }
    });

    rsx! {
        Modal {
            show,
            title: account.username.clone(),
            prevent_close: false,
            class: "max-w-3xl",
            div {
                class: "flex flex-col gap-6",
                div {
                    class: "text-sm opacity-70",
                    p { "ID: {account.id}" }
                    p { "Created {format_timestamp(&account.created_at)}" }
                }
                StatusForm { account: account.clone(), banner, on_updated }
                match details() {
                    None => rsx! {
                        div { class: "flex justify-center py-4", span { class: "loading loading-spinner" } }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", "{err.message}" }
                    },
                    Some(Ok((mfa, log))) => rsx! {
                        MfaList { methods: mfa }
                        SecurityLog { entries: log }
                    },
                }
            }
        }
    }
}

#[component]
fn StatusForm(
    account: AuthUserDto,
    banner: Signal<Option<Banner>>,
    on_updated: EventHandler<AuthUserDto>,
) -> Element {
    let mut status = use_signal(|| account.status);
    let mut reason = use_signal(String::new);
    let mut is_saving = use_signal(|| false);

    let trimmed = reason().trim().to_string();
    let request = UpdateAccountStatusDto {
        status: status(),
        reason: (!trimmed.is_empty()).then_some(trimmed),
    };
    let validation = request.validate();
    let unchanged = status() == account.status;
    let saving = is_saving();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if request.validate().is_err() {
            return;
        }
        is_saving.set(true);

        #[cfg(feature = "web")]
        {
            let id = account.id.clone();
            let request = request.clone();
            let mut banner = banner;
            spawn(async move {
                match update_account_status(&id, request.status, request.reason).await {
                    Ok(updated) => {
                        banner.set(Some(Banner::success(format!(
                            "{} is now {}.",
                            updated.username,
                            updated.status.label()
                        ))));
                        reason.set(String::new());
                        on_updated.call(updated);
                    }
                    Err(err) => {
                        tracing::error!("Failed to update account status: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (&account, banner, on_updated);
    };

    rsx! {
        form {
            class: "flex flex-col gap-3",
            onsubmit: on_submit,
            h4 { class: "font-semibold", "Account status" }
            div {
                class: "flex gap-2",
                select {
                    class: "select select-bordered",
                    disabled: saving,
                    onchange: move |evt| {
                        let value = evt.value();
                        if let Some(next) = AccountStatus::ALL.into_iter().find(|s| s.as_str() == value) {
                            status.set(next);
                        }
                    },
                    for option_status in AccountStatus::ALL {
                        option {
                            key: "{option_status.as_str()}",
                            value: "{option_status.as_str()}",
                            selected: status() == option_status,
                            "{option_status.label()}"
                        }
                    }
                }
                if status().requires_reason() {
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "Reason (required)",
                        disabled: saving,
                        value: "{reason}",
                        oninput: move |evt| reason.set(evt.value()),
                    }
                }
            }
            if let (Err(message), false) = (&validation, unchanged) {
                p { class: "text-sm opacity-70", "{message}" }
            }
            div {
                class: "flex justify-end",
                button {
                    r#type: "submit",
                    class: "btn btn-warning",
                    disabled: saving || unchanged || validation.is_err(),
                    if saving { "Saving..." } else { "Update status" }
                }
            }
        }
    }
}

#[component]
fn MfaList(methods: Vec<MfaMethodDto>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",
            h4 { class: "font-semibold", "MFA methods" }
            if methods.is_empty() {
                p { class: "text-sm opacity-50", "No MFA methods enrolled" }
            }
            for (index, method) in methods.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "flex justify-between text-sm bg-base-200 rounded-box px-3 py-2",
                    span {
                        span { class: "badge badge-outline mr-2", "{method.kind}" }
                        "{method.label.clone().unwrap_or_default()}"
                    }
                    span {
                        class: "opacity-60",
                        "Last used: {format_optional_timestamp(method.last_used.as_ref())}"
                    }
                }
            }
        }
    }
}

#[component]
fn SecurityLog(entries: Vec<SecurityLogEntryDto>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",
            h4 { class: "font-semibold", "Security log" }
            if entries.is_empty() {
                p { class: "text-sm opacity-50", "No security events recorded" }
            } else {
                div {
                    class: "overflow-x-auto max-h-72",
                    table {
                        class: "table table-xs w-full",
                        thead {
                            tr {
                                th { "When" }
                                th { "Event" }
                                th { "IP" }
                                th { class: "hidden md:table-cell", "Client" }
                            }
                        }
                        tbody {
                            for (index, entry) in entries.into_iter().enumerate() {
                                tr {
                                    key: "{index}",
                                    td { "{format_timestamp(&entry.created_at)}" }
                                    td { "{entry.event}" }
                                    td { "{entry.ip.clone().unwrap_or_default()}" }
                                    td { class: "hidden md:table-cell truncate max-w-xs", "{entry.user_agent.clone().unwrap_or_default()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
