use crate::icons::Close;
use dioxus::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button calls `onclose`.
#[component]
pub fn Modal(
    title: String,
    children: Element,
    onclose: EventHandler<MouseEvent>,
    #[props(default)] dialog_class: Option<String>,
) -> Element {
    let dialog_class = dialog_class.unwrap_or_default();
    rsx! {
        div {
            class: "modal-root",
            role: "dialog",
            aria_labelledby: "modal-title",
            // Backdrop
            div {
                class: "modal-backdrop",
                onclick: move |e| onclose.call(e),
            }
            // Dialog
            div { class: "modal-dialog {dialog_class}",
                div { class: "modal-header",
                    h3 { id: "modal-title", class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        aria_label: "Close",
                        onclick: move |e| onclose.call(e),
                        Close { size: 20 }
                    }
                }
                {children}
            }
        }
    }
}
