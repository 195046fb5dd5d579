use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader};

use crate::auth::use_role;
use crate::components::redirect::{Section, SectionRedirect};

/// Root landing route — forwards the signed-in user to their role's
/// dashboard. A session with no recognized role gets a notice instead of a
/// navigation, since there is nowhere sensible to send it.
#[component]
pub fn Home() -> Element {
    match use_role() {
        Some(role) => rsx! {
            SectionRedirect { section: Section::for_role(role) }
        },
        None => rsx! {
            div { class: "role-unassigned",
                Card {
                    CardHeader { "No role assigned" }
                    CardContent {
                        p { "Your account has no recognized role, so no dashboard is available." }
                        p { "Contact an administrator to have a role assigned." }
                    }
                }
            }
        },
    }
}
