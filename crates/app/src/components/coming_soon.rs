use dioxus::prelude::*;

use crate::routes::Route;

/// Static stand-in for a feature that is not available yet.
///
/// Purely presentational: a title, a description, and a single back link as
/// the only escape hatch.
#[component]
pub fn ComingSoon(
    title: String,
    description: String,
    back_to: Route,
    back_label: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./coming_soon.css") }

        div { class: "coming-soon",
            div { class: "coming-soon-card",
                span { class: "coming-soon-flag", "Under construction" }
                h1 { class: "coming-soon-title", "{title}" }
                p { class: "coming-soon-message", "{description}" }
                Link { to: back_to.clone(),
                    class: "coming-soon-link",
                    "{back_label}"
                }
            }
        }
    }
}
