use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn DirectorDashboardPage() -> Element {
    let stats = use_resource(move || async move { server::api::get_oversight_stats().await });

    rsx! {
        PageHeader {
            PageTitle { "Program Oversight" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                div { class: "stats-grid",
                    Card {
                        CardHeader { "Programs" }
                        CardContent {
                            span { class: "stat-value", "{s.active_programs}" }
                            span { class: "stat-label", "Active" }
                        }
                    }
                    Card {
                        CardHeader { "Approvals" }
                        CardContent {
                            span { class: "stat-value", "{s.pending_approvals}" }
                            span { class: "stat-label", "Pending" }
                        }
                    }
                    Card {
                        CardHeader { "Enrollment" }
                        CardContent {
                            span { class: "stat-value", "{s.trainees_enrolled}" }
                            span { class: "stat-label", "Trainees" }
                        }
                    }
                    Card {
                        CardHeader { "Completion" }
                        CardContent {
                            span { class: "stat-value", {format!("{:.1}%", s.completion_rate_pct)} }
                            span { class: "stat-label", "Across Programs" }
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
