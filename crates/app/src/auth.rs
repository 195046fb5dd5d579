use dioxus::prelude::*;
use shared_types::{AuthData, Role};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthData>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthData) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    /// Parsed primary role of the signed-in user, if recognized.
    pub fn role(&self) -> Option<Role> {
        self.current_user
            .read()
            .as_ref()
            .and_then(|u| u.primary_role())
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Parsed role of the current session, if any.
pub fn use_role() -> Option<Role> {
    use_auth().role()
}

/// True iff the session role equals `role` exactly.
#[allow(dead_code)]
pub fn use_has_role(role: Role) -> bool {
    use_auth()
        .current_user
        .read()
        .as_ref()
        .map(|u| u.has_role(role))
        .unwrap_or(false)
}

/// True iff the session role is one of `roles`. False for an empty list.
#[allow(dead_code)]
pub fn use_has_any_role(roles: &[Role]) -> bool {
    use_auth()
        .current_user
        .read()
        .as_ref()
        .map(|u| u.has_any_role(roles))
        .unwrap_or(false)
}

/// Which sidebar sections are visible for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SidebarSections {
    pub admin: bool,
    pub head: bool,
    pub academic: bool,
    pub trainees: bool,
    pub director: bool,
}

/// Sidebar visibility for a role. Each role sees exactly its own area; an
/// unrecognized or missing role sees none.
pub fn sections_for(role: Option<Role>) -> SidebarSections {
    let Some(role) = role else {
        return SidebarSections::default();
    };
    match role {
        Role::Admin => SidebarSections {
            admin: true,
            ..Default::default()
        },
        Role::Head => SidebarSections {
            head: true,
            ..Default::default()
        },
        Role::AcademicStaffAffair => SidebarSections {
            academic: true,
            ..Default::default()
        },
        Role::Trainee => SidebarSections {
            trainees: true,
            ..Default::default()
        },
        Role::TrainingDirector => SidebarSections {
            director: true,
            ..Default::default()
        },
    }
}

pub fn use_sidebar_sections() -> SidebarSections {
    sections_for(use_role())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_role_sees_no_sections() {
        assert_eq!(sections_for(None), SidebarSections::default());
    }

    #[test]
    fn each_role_sees_exactly_its_own_section() {
        let cases = [
            (Role::Admin, "admin"),
            (Role::Head, "head"),
            (Role::AcademicStaffAffair, "academic"),
            (Role::Trainee, "trainees"),
            (Role::TrainingDirector, "director"),
        ];
        for (role, _) in cases {
            let sections = sections_for(Some(role));
            let visible = [
                sections.admin,
                sections.head,
                sections.academic,
                sections.trainees,
                sections.director,
            ];
            assert_eq!(visible.iter().filter(|v| **v).count(), 1, "{role:?}");
        }
        assert!(sections_for(Some(Role::Admin)).admin);
        assert!(sections_for(Some(Role::Head)).head);
        assert!(sections_for(Some(Role::AcademicStaffAffair)).academic);
        assert!(sections_for(Some(Role::Trainee)).trainees);
        assert!(sections_for(Some(Role::TrainingDirector)).director);
    }
}
