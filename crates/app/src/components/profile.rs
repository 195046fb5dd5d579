use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageTitle,
};

use crate::auth::use_auth;
use crate::ProfileState;

/// Role-parameterized profile view shared by every area's profile page.
#[component]
pub fn RoleProfile(role: Role) -> Element {
    let auth = use_auth();
    let profile: ProfileState = use_context();

    let initials = (profile.display_name)()
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    let signed_in = auth
        .current_user
        .read()
        .as_ref()
        .and_then(|u| u.login_time)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    rsx! {
        PageHeader {
            PageTitle { "Profile" }
        }

        div { class: "profile-grid",
            Card {
                CardHeader {
                    CardTitle { "Account" }
                    CardDescription { {role.display_name()} }
                }
                CardContent {
                    div { class: "profile-identity",
                        Avatar {
                            if let Some(url) = (profile.avatar_url)() {
                                AvatarImage { src: url }
                            } else {
                                AvatarFallback { "{initials}" }
                            }
                        }
                        span { class: "profile-name", {(profile.display_name)()} }
                    }
                    div { class: "profile-field",
                        span { class: "profile-label", "Email" }
                        span { {(profile.email)()} }
                    }
                    div { class: "profile-field",
                        span { class: "profile-label", "Role" }
                        Badge { variant: BadgeVariant::Secondary, {role.as_tag()} }
                    }
                    if let Some(ts) = signed_in {
                        div { class: "profile-field",
                            span { class: "profile-label", "Signed in" }
                            span { "{ts}" }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Responsibilities" }
                }
                CardContent {
                    RoleResponsibilities { role }
                }
            }
        }
    }
}

/// Per-role detail section. Exhaustive so a new role cannot ship without a
/// profile rendering.
#[component]
fn RoleResponsibilities(role: Role) -> Element {
    let items: &[&str] = match role {
        Role::Admin => &[
            "Manage departments, positions, and document rules",
            "Oversee admission document workflow",
            "Administer staff accounts",
        ],
        Role::Head => &[
            "Review admission documents for the department",
            "Maintain the program criteria matrix",
        ],
        Role::AcademicStaffAffair => &[
            "Receive and verify trainee documents",
            "Return incomplete submissions",
        ],
        Role::Trainee => &[
            "Submit required admission documents",
            "Track document review status",
        ],
        Role::TrainingDirector => &[
            "Approve training programs",
            "Monitor enrollment and completion",
        ],
    };

    rsx! {
        ul { class: "profile-duties",
            for item in items.iter() {
                li { "{item}" }
            }
        }
    }
}
