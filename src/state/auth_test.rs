use super::*;
use crate::testing::token_for_role;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.role.is_none());
    assert_eq!(state.display_name(), "");
}

// =============================================================
// from_store
// =============================================================

#[test]
fn from_store_mirrors_role_and_user() {
    let store = TokenStore::in_memory();
    let user = User { name: "Rina".to_owned(), ..User::default() };
    store.set_session(token_for_role("superadmin"), Some(user.clone()));

    let state = AuthState::from_store(&store);

    assert_eq!(state.role, Some(Role::SuperAdmin));
    assert_eq!(state.user, Some(user));
    assert_eq!(state.display_name(), "Rina");
}

#[test]
fn from_store_falls_back_to_email_for_display() {
    let store = TokenStore::in_memory();
    store.set_session(token_for_role("user"), Some(User { email: "warga@mail.id".to_owned(), ..User::default() }));

    let state = AuthState::from_store(&store);

    assert_eq!(state.role, Some(Role::User));
    assert_eq!(state.display_name(), "warga@mail.id");
}
