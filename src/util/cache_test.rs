use super::*;

fn entry(stored_at: f64) -> CacheEntry {
    CacheEntry {
        stored_at,
        items: Vec::new(),
    }
}

#[test]
fn entry_is_fresh_within_ttl() {
    let e = entry(1_000.0);
    assert!(e.is_fresh(1_000.0, CACHE_TTL_MS));
    assert!(e.is_fresh(1_000.0 + CACHE_TTL_MS - 1.0, CACHE_TTL_MS));
}

#[test]
fn entry_expires_at_ttl() {
    let e = entry(1_000.0);
    assert!(!e.is_fresh(1_000.0 + CACHE_TTL_MS, CACHE_TTL_MS));
}

#[test]
fn clock_rollback_counts_as_stale() {
    let e = entry(1_000.0);
    assert!(!e.is_fresh(999.0, CACHE_TTL_MS));
}

#[test]
fn entry_round_trips_through_json() {
    let raw = serde_json::to_string(&entry(42.0)).expect("serialize");
    let back: CacheEntry = serde_json::from_str(&raw).expect("deserialize");
    assert!((back.stored_at - 42.0).abs() < f64::EPSILON);
    assert!(back.items.is_empty());
}
