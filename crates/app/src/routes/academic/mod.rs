pub mod dashboard;
pub mod documents;
pub mod profile;

use dioxus::prelude::*;
use shared_types::Role;

use crate::components::role_gate::RoleGate;
use crate::routes::Route;

pub(crate) const DEFAULT_ROLE: Role = Role::AcademicStaffAffair;

/// Layout gate for the academic staff affairs area.
#[component]
pub fn AcademicArea() -> Element {
    rsx! {
        RoleGate { allowed: vec![Role::AcademicStaffAffair],
            Outlet::<Route> {}
        }
    }
}
