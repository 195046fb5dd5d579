use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Badge, BadgeVariant, PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn AcademicDocumentsPage() -> Element {
    let documents = use_resource(move || async move {
        server::api::get_documents()
            .await
            .map(|envelope| envelope.into_result())
    });

    rsx! {
        PageHeader {
            PageTitle { "Admission Documents" }
        }

        match &*documents.read() {
            Some(Ok(Ok(items))) => rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Document" }
                            th { "Code" }
                        }
                    }
                    tbody {
                        for doc in items.iter() {
                            tr { key: "{doc.id}",
                                td { "{doc.id}" }
                                td { "{doc.name}" }
                                td {
                                    if let Some(code) = doc.code.as_deref() {
                                        Badge { variant: BadgeVariant::Outline, "{code}" }
                                    } else {
                                        "\u{2014}"
                                    }
                                }
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
