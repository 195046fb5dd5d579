use dioxus::prelude::*;
use shared_types::{AuthData, Role};
use shared_ui::{Card, CardContent, CardHeader};

use crate::auth::use_auth;

/// Gate decision: a session passes iff its role is in the allow-list.
/// No session or an empty allow-list denies.
pub fn gate_permits(session: Option<&AuthData>, allowed: &[Role]) -> bool {
    session.map(|u| u.has_any_role(allowed)).unwrap_or(false)
}

/// Restrict nested content to sessions whose role is in `allowed`.
///
/// The missing-session case never reaches the gate — `AuthGuard` sits above
/// every area layout and redirects to the login page. A session whose role
/// is outside the allow-list gets a blocked screen instead of the content.
#[component]
pub fn RoleGate(allowed: Vec<Role>, children: Element) -> Element {
    let auth = use_auth();
    let permitted = gate_permits(auth.current_user.read().as_ref(), &allowed);

    if permitted {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            AccessDenied {}
        }
    }
}

/// Blocked screen shown when the session role is not permitted.
#[component]
fn AccessDenied() -> Element {
    rsx! {
        div { class: "access-denied",
            Card {
                CardHeader { "Access denied" }
                CardContent {
                    p { "Your role does not have access to this area." }
                    a { class: "access-denied-link", href: "/", "Back to your dashboard" }
                }
            }
        }
    }
}
