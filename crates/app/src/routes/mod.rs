pub mod academic;
pub mod admin;
pub mod director;
pub mod head;
pub mod home;
pub mod login;
pub mod not_found;
pub mod trainees;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdFileText, LdFolder, LdLayoutDashboard, LdSettings, LdShield, LdUserCheck,
    LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{
    Avatar, AvatarFallback, AvatarImage, Badge, BadgeVariant, Button, ButtonVariant, Navbar,
    NavbarActions, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator,
    SidebarTrigger,
};

use crate::auth::{use_auth, use_role, use_sidebar_sections};
use crate::components::redirect::{Section, SectionRedirect};
use crate::ProfileState;

use academic::AcademicArea;
use admin::AdminArea;
use director::DirectorArea;
use head::HeadArea;
use home::Home;
use login::Login;
use not_found::NotFound;
use trainees::TraineeArea;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    // ── Admin area ──
    #[layout(AdminArea)]
    #[route("/admin")]
    AdminHome {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/departments")]
    AdminDepartments {},
    #[route("/admin/positions")]
    AdminPositions {},
    #[route("/admin/document-rules")]
    AdminDocumentRules {},
    #[route("/admin/profile")]
    AdminProfile {},
    #[end_layout]
    // ── Department head area ──
    #[layout(HeadArea)]
    #[route("/head")]
    HeadHome {},
    #[route("/head/dashboard")]
    HeadDashboard {},
    #[route("/head/criteria-matrix")]
    HeadCriteriaMatrix {},
    #[route("/head/profile")]
    HeadProfile {},
    #[end_layout]
    // ── Academic staff affairs area ──
    #[layout(AcademicArea)]
    #[route("/academic")]
    AcademicHome {},
    #[route("/academic/dashboard")]
    AcademicDashboard {},
    #[route("/academic/documents")]
    AcademicDocuments {},
    #[route("/academic/profile")]
    AcademicProfile {},
    #[end_layout]
    // ── Trainee area ──
    #[layout(TraineeArea)]
    #[route("/trainees")]
    TraineeHome {},
    #[route("/trainees/dashboard")]
    TraineeDashboard {},
    #[route("/trainees/documents")]
    TraineeDocuments {},
    #[route("/trainees/profile")]
    TraineeProfile {},
    #[end_layout]
    // ── Training director area ──
    #[layout(DirectorArea)]
    #[route("/director")]
    DirectorHome {},
    #[route("/director/dashboard")]
    DirectorDashboard {},
    #[route("/director/approvals")]
    DirectorApprovals {},
    #[route("/director/profile")]
    DirectorProfile {},
    #[end_layout]
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if no session exists.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes; a
/// `SuspenseBoundary` in `App` catches the suspension and shows a spinner.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! {
                Outlet::<Route> {}
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let profile: ProfileState = use_context();
    let mut auth = use_auth();
    let sections = use_sidebar_sections();
    let role = use_role();

    let page_title = match &route {
        Route::Home {} => "Overview",
        Route::AdminHome {} | Route::AdminDashboard {} => "Admin Dashboard",
        Route::AdminDepartments {} => "Departments",
        Route::AdminPositions {} => "Positions",
        Route::AdminDocumentRules {} => "Document Rules",
        Route::HeadHome {} | Route::HeadDashboard {} => "Head Dashboard",
        Route::HeadCriteriaMatrix {} => "Criteria Matrix",
        Route::AcademicHome {} | Route::AcademicDashboard {} => "Staff Affairs Dashboard",
        Route::AcademicDocuments {} => "Documents",
        Route::TraineeHome {} | Route::TraineeDashboard {} => "My Dashboard",
        Route::TraineeDocuments {} => "My Documents",
        Route::DirectorHome {} | Route::DirectorDashboard {} => "Director Dashboard",
        Route::DirectorApprovals {} => "Program Approvals",
        Route::AdminProfile {}
        | Route::HeadProfile {}
        | Route::AcademicProfile {}
        | Route::TraineeProfile {}
        | Route::DirectorProfile {} => "Profile",
        Route::Login {} => "Sign In",
        Route::NotFound { .. } => "Not Found",
    };

    let initials = (profile.display_name)()
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: true,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "IDMAWA" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    if sections.admin {
                        SidebarGroup {
                            SidebarGroupLabel { "Administration" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::AdminDashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::AdminHome {} | Route::AdminDashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::AdminDepartments {},
                                        SidebarMenuButton { active: matches!(route, Route::AdminDepartments {}),
                                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                            "Departments"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::AdminPositions {},
                                        SidebarMenuButton { active: matches!(route, Route::AdminPositions {}),
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                            "Positions"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::AdminDocumentRules {},
                                        SidebarMenuButton { active: matches!(route, Route::AdminDocumentRules {}),
                                            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                                            "Document Rules"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::AdminProfile {},
                                        SidebarMenuButton { active: matches!(route, Route::AdminProfile {}),
                                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                            "Profile"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if sections.head {
                        SidebarGroup {
                            SidebarGroupLabel { "Department Head" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::HeadDashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::HeadHome {} | Route::HeadDashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::HeadCriteriaMatrix {},
                                        SidebarMenuButton { active: matches!(route, Route::HeadCriteriaMatrix {}),
                                            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                            "Criteria Matrix"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::HeadProfile {},
                                        SidebarMenuButton { active: matches!(route, Route::HeadProfile {}),
                                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                            "Profile"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if sections.academic {
                        SidebarGroup {
                            SidebarGroupLabel { "Staff Affairs" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::AcademicDashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::AcademicHome {} | Route::AcademicDashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::AcademicDocuments {},
                                        SidebarMenuButton { active: matches!(route, Route::AcademicDocuments {}),
                                            Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                                            "Documents"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::AcademicProfile {},
                                        SidebarMenuButton { active: matches!(route, Route::AcademicProfile {}),
                                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                            "Profile"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if sections.trainees {
                        SidebarGroup {
                            SidebarGroupLabel { "Trainee" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::TraineeDashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::TraineeHome {} | Route::TraineeDashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::TraineeDocuments {},
                                        SidebarMenuButton { active: matches!(route, Route::TraineeDocuments {}),
                                            Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
                                            "My Documents"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::TraineeProfile {},
                                        SidebarMenuButton { active: matches!(route, Route::TraineeProfile {}),
                                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                            "Profile"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if sections.director {
                        SidebarGroup {
                            SidebarGroupLabel { "Training Director" }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::DirectorDashboard {},
                                        SidebarMenuButton { active: matches!(route, Route::DirectorHome {} | Route::DirectorDashboard {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Dashboard"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::DirectorApprovals {},
                                        SidebarMenuButton { active: matches!(route, Route::DirectorApprovals {}),
                                            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                            "Approvals"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::DirectorProfile {},
                                        SidebarMenuButton { active: matches!(route, Route::DirectorProfile {}),
                                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                            "Profile"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Role" }
                        if let Some(role) = role {
                            Badge { variant: BadgeVariant::Secondary, {role.as_tag()} }
                        } else {
                            Badge { variant: BadgeVariant::Outline, "UNASSIGNED" }
                        }
                    }
                }
            }

            SidebarInset {
                Navbar {
                    SidebarTrigger {
                        span { class: "navbar-trigger-icon", "\u{2630}" }
                    }

                    Separator { horizontal: false }

                    span { class: "navbar-title", "{page_title}" }

                    NavbarActions {
                        Avatar {
                            if let Some(url) = (profile.avatar_url)() {
                                AvatarImage { src: url }
                            } else {
                                AvatarFallback { "{initials}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                spawn(async move {
                                    let _ = server::api::logout().await;
                                });
                                auth.clear_auth();
                                navigator().push(Route::Login {});
                            },
                            "Sign Out"
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// ── Section root forwarders ──

#[component]
fn AdminHome() -> Element {
    rsx! {
        SectionRedirect { section: Section::Admin }
    }
}

#[component]
fn HeadHome() -> Element {
    rsx! {
        SectionRedirect { section: Section::Head }
    }
}

#[component]
fn AcademicHome() -> Element {
    rsx! {
        SectionRedirect { section: Section::Academic }
    }
}

#[component]
fn TraineeHome() -> Element {
    rsx! {
        SectionRedirect { section: Section::Trainees }
    }
}

#[component]
fn DirectorHome() -> Element {
    rsx! {
        SectionRedirect { section: Section::Director }
    }
}

// ── Page route components ──

#[component]
fn AdminDashboard() -> Element {
    admin::dashboard::AdminDashboardPage()
}

#[component]
fn AdminDepartments() -> Element {
    admin::departments::AdminDepartmentsPage()
}

#[component]
fn AdminPositions() -> Element {
    admin::positions::AdminPositionsPage()
}

#[component]
fn AdminDocumentRules() -> Element {
    admin::document_rules::AdminDocumentRulesPage()
}

#[component]
fn AdminProfile() -> Element {
    admin::profile::AdminProfilePage()
}

#[component]
fn HeadDashboard() -> Element {
    head::dashboard::HeadDashboardPage()
}

#[component]
fn HeadCriteriaMatrix() -> Element {
    head::criteria_matrix::HeadCriteriaMatrixPage()
}

#[component]
fn HeadProfile() -> Element {
    head::profile::HeadProfilePage()
}

#[component]
fn AcademicDashboard() -> Element {
    academic::dashboard::AcademicDashboardPage()
}

#[component]
fn AcademicDocuments() -> Element {
    academic::documents::AcademicDocumentsPage()
}

#[component]
fn AcademicProfile() -> Element {
    academic::profile::AcademicProfilePage()
}

#[component]
fn TraineeDashboard() -> Element {
    trainees::dashboard::TraineeDashboardPage()
}

#[component]
fn TraineeDocuments() -> Element {
    trainees::documents::TraineeDocumentsPage()
}

#[component]
fn TraineeProfile() -> Element {
    trainees::profile::TraineeProfilePage()
}

#[component]
fn DirectorDashboard() -> Element {
    director::dashboard::DirectorDashboardPage()
}

#[component]
fn DirectorApprovals() -> Element {
    director::approvals::DirectorApprovalsPage()
}

#[component]
fn DirectorProfile() -> Element {
    director::profile::DirectorProfilePage()
}
