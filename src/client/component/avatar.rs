use dioxus::prelude::*;

use crate::model::user::UserDto;

/// Round avatar: the custom upload if set, otherwise the first letter of the shown name.
#[component]
pub fn UserAvatar(user: UserDto, #[props(default = "w-10")] size_class: &'static str) -> Element {
    let name = user.shown_name().to_string();
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();

    rsx!(
        div {
            class: "avatar",
            class: if user.avatar.is_none() { "avatar-placeholder" },
            div {
                class: "{size_class} rounded-full bg-neutral text-neutral-content",
                if let Some(src) = user.avatar.clone() {
                    img { src, alt: "{name}" }
                } else {
                    span { "{initial}" }
                }
            }
        }
    )
}
