pub mod confirmation_modal;
pub mod fullscreen_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;
pub use fullscreen_modal::FullScreenModal;

/// Standard dialog for short forms and confirmations.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        ModalFrame {
            show,
            title,
            prevent_close,
            box_class: format!("{class} w-11/12 max-w-lg"),
            {children}
        }
    )
}

/// daisyUI modal shell shared by [`Modal`] and [`FullScreenModal`]. Escape and
/// backdrop clicks close it unless `prevent_close` is set, e.g. while a request
/// is in flight.
#[component]
pub(super) fn ModalFrame(
    mut show: Signal<bool>,
    title: String,
    prevent_close: bool,
    box_class: String,
    children: Element,
) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 {box_class}",
                div {
                    class: "flex justify-between items-center mb-4",
                    h3 {
                        class: "font-bold text-lg",
                        "{title}"
                    }
                    if !prevent_close {
                        button {
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| show.set(false),
                            "✕"
                        }
                    }
                }
                div {
                    {children}
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
