pub mod approvals;
pub mod dashboard;
pub mod profile;

use dioxus::prelude::*;
use shared_types::Role;

use crate::components::role_gate::RoleGate;
use crate::routes::Route;

pub(crate) const DEFAULT_ROLE: Role = Role::TrainingDirector;

/// Layout gate for the training director area.
#[component]
pub fn DirectorArea() -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::TrainingDirector],
            Outlet::<Route> {}
        }
    }
}
