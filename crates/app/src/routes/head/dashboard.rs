use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn HeadDashboardPage() -> Element {
    let stats = use_resource(move || async move { server::api::get_review_stats().await });

    rsx! {
        PageHeader {
            PageTitle { "Review Queue" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                div { class: "stats-grid",
                    Card {
                        CardHeader { "Awaiting Review" }
                        CardContent {
                            span { class: "stat-value", "{s.awaiting_review}" }
                            span { class: "stat-label", "Submissions" }
                        }
                    }
                    Card {
                        CardHeader { "Approved" }
                        CardContent {
                            span { class: "stat-value", "{s.approved}" }
                            span { class: "stat-label", "This Term" }
                        }
                    }
                    Card {
                        CardHeader { "Rejected" }
                        CardContent {
                            span { class: "stat-value", "{s.rejected}" }
                            span { class: "stat-label", "This Term" }
                        }
                    }
                    Card {
                        CardHeader { "Criteria Matrix" }
                        CardContent {
                            span { class: "stat-value", "{s.programs_in_matrix}" }
                            span { class: "stat-label", "Programs Tracked" }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                ErrorNotice { message: AppError::friendly_message(&e.to_string()) }
            },
            None => rsx! {
                div { class: "stats-grid",
                    for _ in 0..4 {
                        Card {
                            CardContent { Skeleton { width: "100%", height: "60px" } }
                        }
                    }
                }
            },
        }
    }
}
