use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn AcademicDashboardPage() -> Element {
    let stats = use_resource(move || async move {
        server::api::get_processing_stats("7d".to_string()).await
    });

    rsx! {
        PageHeader {
            PageTitle { "Document Processing" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                div { class: "stats-grid",
                    Card {
                        CardHeader { "Received" }
                        CardContent {
                            span { class: "stat-value", "{s.received}" }
                            span { class: "stat-label", "This Week" }
                        }
                    }
                    Card {
                        CardHeader { "Verified" }
                        CardContent {
                            span { class: "stat-value", "{s.verified}" }
                            span { class: "stat-label", "Complete" }
                        }
                    }
                    Card {
                        CardHeader { "Returned" }
                        CardContent {
                            span { class: "stat-value", "{s.returned}" }
                            span { class: "stat-label", "Incomplete" }
                        }
                    }
                    Card {
                        CardHeader { "Overdue" }
                        CardContent {
                            span { class: "stat-value", "{s.overdue}" }
                            span { class: "stat-label", "Past Deadline" }
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
