use crate::components::ui::Modal;
use crate::config::settings;
use crate::hooks::use_content_load_error;
use crate::icons::FileWarning;
use crate::models::{ContentView, RegionRecord};
use dioxus::prelude::*;
use tracing::error;

/// PDF viewer for one state's content.
#[component]
pub fn StateModal(show: bool, onhide: EventHandler<()>, content: Option<RegionRecord>) -> Element {
    let view = ContentView::for_record(&settings().public_url, content.as_ref());
    let mut load_error = use_content_load_error(view.clone());

    let Some(view) = view else {
        return rsx! {};
    };
    if !show {
        return rsx! {};
    }

    let failed = load_error.read().is_failed(&view.path);
    let frame_path = view.path.clone();
    let frame_title = view.title.clone();
    let [missing_line, path_line] = view.error_lines();

    rsx! {
        Modal {
            title: view.title.clone(),
            dialog_class: Some("state-modal-dialog".to_string()),
            onclose: move |_| onhide.call(()),
            div { class: "pdf-modal-body",
                if !failed {
                    iframe {
                        src: "{view.src}",
                        title: "{view.title} PDF",
                        class: "seamless-pdf",
                        onerror: move |_| {
                            if load_error.write().fail(&frame_path) {
                                error!("Failed to load PDF for {}", frame_title);
                            }
                        },
                    }
                } else {
                    div { class: "no-content-message",
                        FileWarning { size: 32, class: Some("no-content-icon".to_string()) }
                        p { "{missing_line}" }
                        p { "{path_line}" }
                    }
                }
            }
        }
    }
}
