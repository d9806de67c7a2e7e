use crate::components::UsMap;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "app-shell",
            UsMap {}
        }
    }
}
