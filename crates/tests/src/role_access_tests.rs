//! Role predicate tests over session payloads.

use pretty_assertions::assert_eq;
use shared_types::{AuthData, Role, ALL_ROLES};

fn session(tag: &str) -> AuthData {
    AuthData {
        role: Some(tag.to_string()),
        ..AuthData::default()
    }
}

#[test]
fn has_any_role_matches_disjunction_of_has_role() {
    let user = session("HEAD");
    for a in ALL_ROLES {
        for b in ALL_ROLES {
            let expected = user.has_role(*a) || user.has_role(*b);
            assert_eq!(user.has_any_role(&[*a, *b]), expected, "{a:?} {b:?}");
        }
    }
}

#[test]
fn has_any_role_empty_list_is_false_for_every_role() {
    for role in ALL_ROLES {
        let user = session(role.as_tag());
        assert!(!user.has_any_role(&[]));
    }
}

#[test]
fn fixture_session_passes_admin_checks_only() {
    let user = server::mock::auth_data();
    assert!(user.has_role(Role::Admin));
    assert!(!user.has_role(Role::Head));
    assert!(user.has_any_role(&[Role::Head, Role::Admin]));
    assert!(!user.has_any_role(&[Role::Head, Role::Trainee]));
}

#[test]
fn role_tags_are_stable_wire_identifiers() {
    assert_eq!(Role::Admin.as_tag(), "ADMIN");
    assert_eq!(Role::Head.as_tag(), "HEAD");
    assert_eq!(Role::AcademicStaffAffair.as_tag(), "ACADEMIC_STAFF_AFFAIR");
    assert_eq!(Role::Trainee.as_tag(), "TRAINEE");
    assert_eq!(Role::TrainingDirector.as_tag(), "TRAINING_DIRECTOR");
}

#[test]
fn lowercase_tags_do_not_authenticate() {
    let user = session("admin");
    for role in ALL_ROLES {
        assert!(!user.has_role(*role));
    }
}
