use dioxus::prelude::*;

use crate::{
    client::{
        component::{AvatarEditor, Banner, Page, StatusBanner, UserAvatar},
        constant::SITE_NAME,
        model::auth::AuthContext,
    },
    model::{
        profile::{normalize_display_name, MAX_DISPLAY_NAME_LEN},
        user::UserDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::profile::{clear_avatar, update_display_name};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn Profile() -> Element {
    let mut auth_context = use_context::<AuthContext>();
    let banner = use_signal(|| None::<Banner>);

    // Rendered under RequiresLoggedIn, so the user is present
    let Some(user) = auth_context.read().user().cloned() else {
        return rsx! {};
    };

    let on_saved = move |user: UserDto| auth_context.set_user(user);

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-2xl flex flex-col gap-6",
                h1 { class: "text-lg sm:text-2xl", "Your profile" }
                StatusBanner { message: banner }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body flex-row items-center gap-6",
                        UserAvatar { user: user.clone(), size_class: "w-24" }
                        div {
                            class: "flex flex-col gap-1",
                            p { class: "text-xl font-bold", "{user.shown_name()}" }
                            p { class: "text-sm opacity-70", "@{user.name}" }
                            if let Some(role) = user.role {
                                span { class: "badge badge-primary", "{role.label()}" }
                            }
                        }
                    }
                }
                DisplayNameForm { current: user.display_name.clone(), banner, on_saved }
                AvatarSection { has_avatar: user.avatar.is_some(), banner, on_saved }
            }
        }
    }
}

#[component]
fn DisplayNameForm(
    current: Option<String>,
    banner: Signal<Option<Banner>>,
    on_saved: EventHandler<UserDto>,
) -> Element {
    let mut name = use_signal(|| current.clone().unwrap_or_default());
    let mut is_saving = use_signal(|| false);

    let validation = normalize_display_name(&name());
    let saving = is_saving();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if normalize_display_name(&name()).is_err() {
            return;
        }
        is_saving.set(true);

        #[cfg(feature = "web")]
        {
            let mut banner = banner;
            spawn(async move {
                match update_display_name(name()).await {
                    Ok(user) => {
                        name.set(user.display_name.clone().unwrap_or_default());
                        on_saved.call(user);
                        banner.set(Some(Banner::success("Display name saved.")));
                    }
                    Err(err) => {
                        tracing::error!("Failed to update display name: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (banner, on_saved);
    };

    rsx! {
        form {
            class: "card bg-base-200",
            onsubmit: on_submit,
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "Display name" }
                p {
                    class: "text-sm opacity-70",
                    "Shown instead of your Discord username. Leave empty to use your Discord name."
                }
                input {
                    class: "input input-bordered w-full",
                    class: if validation.is_err() { "input-error" },
                    maxlength: "{MAX_DISPLAY_NAME_LEN}",
                    disabled: saving,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                if let Err(message) = &validation {
                    p { class: "text-sm text-error", "{message}" }
                }
                div {
                    class: "card-actions justify-end",
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: saving || validation.is_err(),
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn AvatarSection(
    has_avatar: bool,
    banner: Signal<Option<Banner>>,
    on_saved: EventHandler<UserDto>,
) -> Element {
    let mut is_clearing = use_signal(|| false);

    let on_clear = move |_| {
        is_clearing.set(true);
        #[cfg(feature = "web")]
        {
            let mut banner = banner;
            spawn(async move {
                match clear_avatar().await {
                    Ok(user) => {
                        on_saved.call(user);
                        banner.set(Some(Banner::success("Avatar removed.")));
                    }
                    Err(err) => {
                        tracing::error!("Failed to remove avatar: {}", err);
                        banner.set(Some(Banner::from_api_error(&err)));
                    }
                }
                is_clearing.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body gap-3",
                h2 { class: "card-title", "Avatar" }
                p {
                    class: "text-sm opacity-70",
                    "PNG or JPEG up to 20 MB. You'll crop it to a square before it is saved."
                }
                div {
                    class: "card-actions",
                    AvatarEditor { banner, on_saved }
                    if has_avatar {
                        button {
                            class: "btn btn-ghost",
                            disabled: is_clearing(),
                            onclick: on_clear,
                            "Remove avatar"
                        }
                    }
                }
            }
        }
    }
}
