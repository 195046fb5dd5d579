use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{PageHeader, PageTitle, Skeleton};

use crate::components::error_notice::ErrorNotice;

#[component]
pub fn AdminDepartmentsPage() -> Element {
    let departments = use_resource(move || async move {
        server::api::get_departments()
            .await
            .map(|envelope| envelope.into_result())
    });

    rsx! {
        PageHeader {
            PageTitle { "Departments" }
        }

        match &*departments.read() {
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
                        for dept in items.iter() {
                            tr { key: "{dept.id}",
                                td { "{dept.id}" }
                                td { "{dept.name}" }
                                td { {dept.code.as_deref().unwrap_or("\u{2014}")} }
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
