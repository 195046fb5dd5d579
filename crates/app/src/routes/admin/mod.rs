pub mod dashboard;
pub mod departments;
pub mod document_rules;
pub mod positions;
pub mod profile;

use dioxus::prelude::*;
use shared_types::Role;

use crate::components::role_gate::RoleGate;
use crate::routes::Route;

/// Default role for this area's profile page when the session role is
/// unavailable.
pub(crate) const DEFAULT_ROLE: Role = Role::Admin;

/// Layout gate for the admin area.
#[component]
pub fn AdminArea() -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::Admin],
            Outlet::<Route> {}
        }
    }
}
