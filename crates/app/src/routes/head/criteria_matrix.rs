use dioxus::prelude::*;

use crate::components::coming_soon::ComingSoon;
use crate::routes::Route;

#[component]
pub fn HeadCriteriaMatrixPage() -> Element {
    rsx! {
        ComingSoon {
            title: "Criteria Matrix",
            description: "Cross-program admission criteria review is still being built. Program status tracking and criterion scoring will appear here.",
            back_to: Route::HeadDashboard {},
            back_label: "Back to dashboard",
        }
    }
}
