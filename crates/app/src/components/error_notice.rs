use dioxus::prelude::*;

/// Inline failure notice for resource loads.
#[component]
pub fn ErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "error-notice", role: "alert",
            p { "{message}" }
        }
    }
}
