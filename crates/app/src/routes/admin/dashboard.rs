use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn AdminDashboardPage() -> Element {
    let stats = use_resource(move || async move {
        server::api::get_admission_stats("30d".to_string()).await
    });

    rsx! {
        PageHeader {
            PageTitle { "Admission Overview" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                div { class: "stats-grid",
                    Card {
                        CardHeader { "Trainees" }
                        CardContent {
                            span { class: "stat-value", "{s.total_trainees}" }
                            span { class: "stat-label", "Registered" }
                        }
                    }
                    Card {
                        CardHeader { "Documents" }
                        CardContent {
                            span { class: "stat-value", "{s.total_documents}" }
                            span { class: "stat-label", "On File" }
                        }
                    }
                    Card {
                        CardHeader { "Departments" }
                        CardContent {
                            span { class: "stat-value", "{s.total_departments}" }
                            span { class: "stat-label", "Active" }
                        }
                    }
                    Card {
                        CardHeader { "Reviews" }
                        CardContent {
                            span { class: "stat-value", "{s.pending_reviews}" }
                            span { class: "stat-label", "Pending" }
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
