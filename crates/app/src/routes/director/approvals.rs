use dioxus::prelude::*;

use crate::components::coming_soon::ComingSoon;
use crate::routes::Route;

#[component]
pub fn DirectorApprovalsPage() -> Element {
    rsx! {
        ComingSoon {
            title: "Program Approvals",
            description: "The approval workflow for training programs has not shipped yet. Pending programs will be listed here for sign-off.",
            back_to: Route::DirectorDashboard {},
            back_label: "Back to dashboard",
        }
    }
}
