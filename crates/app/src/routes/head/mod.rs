pub mod criteria_matrix;
pub mod dashboard;
pub mod profile;

use dioxus::prelude::*;
use shared_types::Role;

use crate::components::role_gate::RoleGate;
use crate::routes::Route;

pub(crate) const DEFAULT_ROLE: Role = Role::Head;

/// Layout gate for the department head area.
#[component]
pub fn HeadArea() -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::Head],
            Outlet::<Route> {}
        }
    }
}
