use dioxus::prelude::*;

use super::ModalFrame;

/// Larger modal that goes fullscreen on phones; used by the avatar crop editor.
#[component]
pub fn FullScreenModal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    children: Element,
) -> Element {
    rsx!(
        ModalFrame {
            show,
            title,
            prevent_close,
            box_class: "w-full h-full max-w-none max-h-none sm:w-11/12 sm:max-w-3xl sm:h-auto sm:max-h-[90vh] m-0 sm:m-auto rounded-none sm:rounded-box".to_string(),
            {children}
        }
    )
}
