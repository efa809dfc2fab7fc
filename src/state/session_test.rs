use super::*;

fn session() -> (Session<MemoryTokenStore>, MemoryTokenStore) {
    let store = MemoryTokenStore::default();
    (Session::new(store.clone()), store)
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn empty_store_starts_unauthenticated() {
    let (session, _) = session();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

#[test]
fn seeded_store_starts_authenticated() {
    let store = MemoryTokenStore::default();
    store.save("abc123");
    let session = Session::new(store);
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc123"));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_token_and_sets_flag() {
    let (mut session, store) = session();
    session.login("abc123");
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc123"));
    assert_eq!(store.load(), Some("abc123".to_owned()));
}

#[test]
fn logout_clears_token_and_store() {
    let (mut session, store) = session();
    session.login("abc123");
    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(store.load().is_none());
}

#[test]
fn logout_is_idempotent() {
    let (mut session, store) = session();
    session.logout();
    session.logout();
    assert!(!session.is_authenticated());
    assert!(store.load().is_none());
}

#[test]
fn latest_login_wins() {
    let (mut session, store) = session();
    session.login("t1");
    session.login("t2");
    assert_eq!(session.token(), Some("t2"));
    assert_eq!(store.load(), Some("t2".to_owned()));
}

// =============================================================
// Cross-tab sync
// =============================================================

#[test]
fn sync_picks_up_external_logout() {
    let (mut session, store) = session();
    session.login("abc123");

    // Another tab removed the token from the shared store.
    store.clear();
    assert!(session.sync_from_store());
    assert!(!session.is_authenticated());
}

#[test]
fn sync_picks_up_external_login() {
    let (mut session, store) = session();
    store.save("from-other-tab");
    assert!(session.sync_from_store());
    assert_eq!(session.token(), Some("from-other-tab"));
}

#[test]
fn sync_without_change_reports_no_flip() {
    let (mut session, store) = session();
    session.login("abc123");

    // Same token rewritten elsewhere: flag unchanged.
    store.save("abc123");
    assert!(!session.sync_from_store());
    assert!(session.is_authenticated());
}

#[test]
fn sync_tracks_token_replacement() {
    let (mut session, store) = session();
    session.login("t1");
    store.save("t2");

    // Flag does not flip, but the token must follow the store.
    assert!(!session.sync_from_store());
    assert_eq!(session.token(), Some("t2"));
}
