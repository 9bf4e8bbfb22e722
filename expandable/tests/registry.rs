mod common;

use common::MockHost;
use expandable::{ChildId, ChildRegistry, LayoutParams, Size};

fn host_with(ids: &[&str]) -> MockHost {
    let mut host = MockHost::new();
    for id in ids {
        host.add(id, 10, LayoutParams::default());
    }
    host
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn test_register_tracks_in_attach_order() {
    let mut host = host_with(&["c", "a", "b"]);
    let mut registry = ChildRegistry::new();

    for id in ["c", "a", "b"] {
        assert!(registry.register(&mut host, id.into(), true, LayoutParams::default(), false));
    }

    let order: Vec<&str> = registry.participants().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_register_skips_non_expandable() {
    let mut host = host_with(&["header"]);
    let mut registry = ChildRegistry::new();

    assert!(!registry.register(&mut host, "header".into(), false, LayoutParams::default(), false));

    assert!(registry.is_empty());
    // Non-participants keep whatever visibility the host gave them.
    assert!(host.visible("header"));
}

#[test]
fn test_register_ignores_duplicates() {
    let mut host = host_with(&["a"]);
    let mut registry = ChildRegistry::new();

    assert!(registry.register(&mut host, "a".into(), true, LayoutParams::default(), true));
    assert!(!registry.register(&mut host, "a".into(), true, LayoutParams::fixed(3), true));

    assert_eq!(registry.len(), 1);
    // The first snapshot wins.
    let participant = registry.get(&ChildId::new("a")).unwrap();
    assert_eq!(participant.original.height(), Size::Auto);
}

#[test]
fn test_register_hides_when_collapsed() {
    let mut host = host_with(&["a"]);
    let mut registry = ChildRegistry::new();

    registry.register(&mut host, "a".into(), true, LayoutParams::default(), false);

    assert!(!host.visible("a"));
}

#[test]
fn test_register_shows_when_expanded() {
    let mut host = host_with(&["a"]);
    host.hide("a");
    let mut registry = ChildRegistry::new();

    registry.register(&mut host, "a".into(), true, LayoutParams::default(), true);

    assert!(host.visible("a"));
}

#[test]
fn test_register_captures_declared_size() {
    let mut host = host_with(&["weighted"]);
    let mut registry = ChildRegistry::new();

    registry.register(
        &mut host,
        "weighted".into(),
        true,
        LayoutParams::new(Size::Flex(2)),
        false,
    );

    let participant = registry.get(&ChildId::new("weighted")).unwrap();
    assert_eq!(participant.original.height(), Size::Flex(2));
    assert_eq!(participant.original.height().weight(), 2);
    assert_eq!(participant.original.params(), LayoutParams::new(Size::Flex(2)));
}

// =============================================================================
// Unregistration
// =============================================================================

#[test]
fn test_unregister_removes_and_keeps_order() {
    let mut host = host_with(&["a", "b", "c"]);
    let mut registry = ChildRegistry::new();
    for id in ["a", "b", "c"] {
        registry.register(&mut host, id.into(), true, LayoutParams::default(), false);
    }

    let removed = registry.unregister(&ChildId::new("b"));

    assert_eq!(removed.map(|p| p.id), Some(ChildId::new("b")));
    assert!(!registry.contains(&ChildId::new("b")));
    let order: Vec<&str> = registry.participants().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["a", "c"]);
}

#[test]
fn test_unregister_untracked_is_noop() {
    let mut registry = ChildRegistry::new();
    assert!(registry.unregister(&ChildId::new("ghost")).is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_reregister_after_unregister_appends() {
    let mut host = host_with(&["a", "b"]);
    let mut registry = ChildRegistry::new();
    registry.register(&mut host, "a".into(), true, LayoutParams::default(), false);
    registry.register(&mut host, "b".into(), true, LayoutParams::default(), false);

    registry.unregister(&ChildId::new("a"));
    registry.register(&mut host, "a".into(), true, LayoutParams::default(), false);

    let order: Vec<&str> = registry.participants().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
}
