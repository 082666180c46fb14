use super::*;

#[test]
fn needs_reload_when_leaving_current_page() {
    assert!(needs_reload("/", LOGIN_PATH));
    assert!(needs_reload("/complaints", LOGIN_PATH));
}

#[test]
fn needs_reload_skips_page_already_shown() {
    assert!(!needs_reload("/login", LOGIN_PATH));
    assert!(!needs_reload("/login/", LOGIN_PATH));
}
