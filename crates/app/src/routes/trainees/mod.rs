pub mod dashboard;
pub mod documents;
pub mod profile;

use dioxus::prelude::*;
use shared_types::Role;

use crate::components::role_gate::RoleGate;
use crate::routes::Route;

pub(crate) const DEFAULT_ROLE: Role = Role::Trainee;

/// Layout gate for the trainee area.
#[component]
pub fn TraineeArea() -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::Trainee],
            Outlet::<Route> {}
        }
    }
}
