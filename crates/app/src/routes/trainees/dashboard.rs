use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Card, CardContent, CardHeader, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn TraineeDashboardPage() -> Element {
    let stats = use_resource(move || async move { server::api::get_trainee_document_stats().await });

    rsx! {
        PageHeader {
            PageTitle { "My Submissions" }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                div { class: "stats-grid",
                    Card {
                        CardHeader { "Required" }
                        CardContent {
                            span { class: "stat-value", "{s.required}" }
                            span { class: "stat-label", "Documents" }
                        }
                    }
                    Card {
                        CardHeader { "Submitted" }
                        CardContent {
                            span { class: "stat-value", "{s.submitted}" }
                            span { class: "stat-label", "Uploaded" }
                        }
                    }
                    Card {
                        CardHeader { "Approved" }
                        CardContent {
                            span { class: "stat-value", "{s.approved}" }
                            span { class: "stat-label", "Accepted" }
                        }
                    }
                    Card {
                        CardHeader { "Missing" }
                        CardContent {
                            span { class: "stat-value", "{s.missing}" }
                            span { class: "stat-label", "Still Needed" }
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
