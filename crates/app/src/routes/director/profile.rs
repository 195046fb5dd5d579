use dioxus::prelude::*;

use crate::auth::use_role;
use crate::components::profile::RoleProfile;

#[component]
pub fn DirectorProfilePage() -> Element {
    let role = use_role().unwrap_or(super::DEFAULT_ROLE);

    rsx! {
        RoleProfile { role }
    }
}
