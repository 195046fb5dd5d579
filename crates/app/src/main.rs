use dioxus::prelude::*;

mod auth;
mod components;
mod routes;

use auth::{use_auth, AuthState};
use routes::Route;

/// Shared profile state accessible across all routes.
/// Backed by `Memo`s that read directly from `AuthState` — always in sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub email: Memo<String>,
    pub avatar_url: Memo<Option<String>>,
}

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::telemetry::init_telemetry();
        server::config::load_site_config();

        let router = dioxus::server::router(App)
            .merge(server::seo::router())
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    let auth = use_auth();

    // Derive profile state from auth — updates when the user signs in/out
    let display_name = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .and_then(|u| u.username.clone())
            .unwrap_or_else(|| "Guest".to_string())
    });
    let email = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| "guest@idmawa.edu.vn".to_string())
    });
    let avatar_url = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .and_then(|u| u.avatar_url.clone())
    });

    use_context_provider(|| ProfileState {
        display_name,
        email,
        avatar_url,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
