use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};
use std::collections::HashMap;

use crate::auth::use_auth;
use crate::components::error_notice::ErrorNotice;
use crate::routes::Route;

/// Sign-in page posting to the mock login endpoint.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let email_error = field_errors().get("email").cloned();
    let password_error = field_errors().get("password").cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            Card { class: "login-card",
                CardHeader {
                    CardTitle { "IDMAWA" }
                    CardDescription { "Admission document management" }
                }
                CardContent {
                    form { class: "login-form",
                        onsubmit: move |evt: FormEvent| async move {
                            evt.prevent_default();
                            submitting.set(true);
                            error.set(None);
                            field_errors.set(HashMap::new());

                            match server::api::login(email(), password()).await {
                                Ok(user) => {
                                    auth.set_user(user);
                                    navigator().push(Route::Home {});
                                }
                                Err(e) => {
                                    let raw = e.to_string();
                                    let fields = AppError::parse_field_errors(&raw);
                                    if fields.is_empty() {
                                        error.set(Some(AppError::friendly_message(&raw)));
                                    } else {
                                        field_errors.set(fields);
                                    }
                                    tracing::warn!("login rejected");
                                }
                            }
                            submitting.set(false);
                        },

                        label { class: "login-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(msg) = email_error {
                            span { class: "login-field-error", "{msg}" }
                        }

                        label { class: "login-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(msg) = password_error {
                            span { class: "login-field-error", "{msg}" }
                        }

                        if let Some(msg) = error() {
                            ErrorNotice { message: msg }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: submitting(),
                            if submitting() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
