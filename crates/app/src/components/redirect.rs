use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::Skeleton;

use crate::routes::Route;

/// A role-scoped area of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Admin,
    Head,
    Academic,
    Trainees,
    Director,
}

/// All sections, in sidebar order.
#[cfg_attr(not(test), allow(dead_code))]
pub const ALL_SECTIONS: &[Section] = &[
    Section::Admin,
    Section::Head,
    Section::Academic,
    Section::Trainees,
    Section::Director,
];

impl Section {
    /// Canonical landing route for a bare section root.
    pub fn target(&self) -> Route {
        match self {
            Section::Admin => Route::AdminDashboard {},
            Section::Head => Route::HeadDashboard {},
            Section::Academic => Route::AcademicDashboard {},
            Section::Trainees => Route::TraineeDashboard {},
            Section::Director => Route::DirectorDashboard {},
        }
    }

    /// The section a role lands in.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Section::Admin,
            Role::Head => Section::Head,
            Role::AcademicStaffAffair => Section::Academic,
            Role::Trainee => Section::Trainees,
            Role::TrainingDirector => Section::Director,
        }
    }
}

/// Forwards a bare section root to its canonical sub-route.
///
/// Issues a single `replace` from a mount-time effect, so back-navigation
/// skips the forwarder. Shows a transient skeleton while the router
/// processes the navigation.
#[component]
pub fn SectionRedirect(section: Section) -> Element {
    let nav = navigator();
    use_effect(move || {
        nav.replace(section.target());
    });

    rsx! {
        div { class: "section-redirect",
            Skeleton { width: "100%", height: "160px" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_section_targets_its_canonical_sub_route() {
        assert_eq!(Section::Admin.target().to_string(), "/admin/dashboard");
        assert_eq!(Section::Head.target().to_string(), "/head/dashboard");
        assert_eq!(Section::Academic.target().to_string(), "/academic/dashboard");
        assert_eq!(Section::Trainees.target().to_string(), "/trainees/dashboard");
        assert_eq!(Section::Director.target().to_string(), "/director/dashboard");
    }

    #[test]
    fn targets_are_stable_across_calls() {
        for section in ALL_SECTIONS {
            assert_eq!(section.target(), section.target());
        }
    }

    #[test]
    fn every_role_maps_into_a_section() {
        assert_eq!(Section::for_role(Role::Admin), Section::Admin);
        assert_eq!(Section::for_role(Role::Head), Section::Head);
        assert_eq!(
            Section::for_role(Role::AcademicStaffAffair),
            Section::Academic
        );
        assert_eq!(Section::for_role(Role::Trainee), Section::Trainees);
        assert_eq!(Section::for_role(Role::TrainingDirector), Section::Director);
    }
}
