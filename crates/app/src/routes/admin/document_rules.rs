use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Badge, BadgeVariant, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn AdminDocumentRulesPage() -> Element {
    let rules = use_resource(move || async move {
        server::api::get_document_rules()
            .await
            .map(|envelope| envelope.into_result())
    });

    rsx! {
        PageHeader {
            PageTitle { "Document Rules" }
        }

        match &*rules.read() {
            Some(Ok(Ok(items))) => rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Rule" }
                            th { "Code" }
                            th { "Document" }
                            th { "Values" }
                        }
                    }
                    tbody {
                        for rule in items.iter() {
                            tr { key: "{rule.id}",
                                td { "{rule.name}" }
                                td {
                                    if let Some(code) = rule.code.as_deref() {
                                        Badge { variant: BadgeVariant::Outline, "{code}" }
                                    } else {
                                        "\u{2014}"
                                    }
                                }
                                td { "{rule.document.name}" }
                                td { "{rule.rule_value_ids.len()}" }
                            }
                        }
                    }
                }
            },
            Some(Ok(Err(err))) => rsx! {
                ErrorNotice { message: err.message.clone() }
            },
            Some(Err(e)) => rsx! {
                ErrorNotice { message: AppError::friendly_message(&e.to_string()) }
            },
            None => rsx! {
                Skeleton { width: "100%", height: "200px" }
            },
        }
    }
}
