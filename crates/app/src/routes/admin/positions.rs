use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn AdminPositionsPage() -> Element {
    let positions = use_resource(move || async move {
        server::api::get_positions()
            .await
            .map(|envelope| envelope.into_result())
    });

    rsx! {
        PageHeader {
            PageTitle { "Positions" }
        }

        match &*positions.read() {
            Some(Ok(Ok(items))) => rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "ID" }
                            th { "Name" }
                            th { "Code" }
                        }
                    }
                    tbody {
                        for position in items.iter() {
                            tr { key: "{position.id}",
                                td { "{position.id}" }
                                td { "{position.name}" }
                                td { {position.code.as_deref().unwrap_or("\u{2014}")} }
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
