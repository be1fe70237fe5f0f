//! Scenario tests for the tracker's public API.

use tracker::{Reconciled, Tracker, TrackerError};

// =============================================================================
// Helper functions
// =============================================================================

fn active(items: &Tracker<i32>) -> Vec<i32> {
    return items.active_items().copied().collect();
}

fn deleted(items: &Tracker<i32>) -> Vec<i32> {
    return items.deleted_items().copied().collect();
}

/// The tracker from the worked example, right before reconciliation.
fn example_tracker() -> Tracker<i32> {
    let mut items = Tracker::new();
    items.try_add(0).unwrap();
    items.try_add(1).unwrap();
    items.try_add(2).unwrap();
    items.delete(&2).unwrap();
    items.try_add(3).unwrap();
    items.delete(&3).unwrap();
    return items;
}

// =============================================================================
// Worked example
// =============================================================================

#[test]
fn worked_example() {
    let mut items = example_tracker();

    items.set_active_items([1, 2, 4]);
    items.try_add(5).unwrap();

    assert_eq!(active(&items), vec![5, 4, 2, 1]);
    assert_eq!(deleted(&items), vec![3, 0]);
}

#[test]
fn worked_example_with_shuffled_target() {
    let mut items = example_tracker();

    // 2 is restored after 4 is added, so it is the more recent of the two
    items.set_active_items([4, 2, 1]);
    items.try_add(5).unwrap();

    assert_eq!(active(&items), vec![5, 2, 4, 1]);
    assert_eq!(deleted(&items), vec![3, 0]);
}

// =============================================================================
// Direct mutations
// =============================================================================

#[test]
fn second_add_changes_nothing() {
    let mut items = Tracker::new();
    assert!(items.add(1));
    items.delete(&1).unwrap();
    let before = items.status(&1);

    assert!(!items.add(1));
    assert_eq!(
        items.try_add(1),
        Err(TrackerError::DuplicateKey { key: "1".to_string() }),
    );
    assert_eq!(items.status(&1), before);
}

#[test]
fn missing_keys_are_not_found() {
    let mut items: Tracker<&str> = Tracker::new();
    items.add("present");

    let err = items.update(&"absent").unwrap_err();
    assert_eq!(err.to_string(), "element with key '\"absent\"' not found");
    assert!(matches!(items.delete(&"absent"), Err(TrackerError::NotFound { .. })));
    assert_eq!(items.len(), 1);
}

#[test]
fn errors_propagate_with_question_mark() {
    fn undelete_all(items: &mut Tracker<i32>, keys: &[i32]) -> tracker::Result<()> {
        for key in keys {
            items.update(key)?;
        }
        return Ok(());
    }

    let mut items = Tracker::new();
    items.add(1);
    items.add(2);
    items.delete(&1).unwrap();

    // Mutations before the failing key stay applied
    assert!(undelete_all(&mut items, &[1, 9, 2]).is_err());
    assert_eq!(active(&items), vec![1, 2]);
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn reconcile_from_empty() {
    let mut items = Tracker::new();
    let report = items.set_active_items([1, 2, 3]);

    assert_eq!(report, Reconciled { added: 3, restored: 0, deleted: 0 });
    assert_eq!(active(&items), vec![3, 2, 1]);
    assert!(deleted(&items).is_empty());
}

#[test]
fn reconcile_with_same_membership_keeps_order() {
    let mut items = Tracker::new();
    items.add(1);
    items.add(2);
    items.add(3);
    let before = active(&items);

    let report = items.set_active_items([3, 1, 2]);
    assert!(report.is_noop());
    assert_eq!(active(&items), before);
}

#[test]
fn reconcile_twice_is_idempotent() {
    let mut items = example_tracker();
    items.set_active_items([1, 2, 4, 6]);
    let active_once = active(&items);
    let deleted_once = deleted(&items);
    let stamp = items.now();

    let report = items.set_active_items([6, 4, 2, 1]);
    assert!(report.is_noop());
    assert_eq!(active(&items), active_once);
    assert_eq!(deleted(&items), deleted_once);

    // No transition took a timestamp during the second call
    assert_eq!(items.now(), stamp + 1);
}

#[test]
fn reconcile_deletes_in_one_step() {
    let mut items = Tracker::new();
    for key in 0..5 {
        items.add(key);
    }

    let report = items.set_active_items([]);
    assert_eq!(report.deleted, 5);
    assert_eq!(items.active_len(), 0);
    assert_eq!(deleted(&items).len(), 5);
}

#[test]
fn reconcile_then_restore_directly() {
    let mut items = Tracker::new();
    items.set_active_items([1, 2]);
    items.set_active_items([2]);
    items.update(&1).unwrap();

    assert_eq!(active(&items), vec![1, 2]);
    assert!(deleted(&items).is_empty());
}

#[test]
fn string_keys() {
    let mut items: Tracker<String> = Tracker::new();
    items.set_active_items(["a", "b", "c"].map(String::from));
    items.set_active_items(["c", "d"].map(String::from));

    let active: Vec<&str> = items.active_items().map(String::as_str).collect();
    assert_eq!(active, vec!["d", "c"]);
    let deleted: Vec<&str> = items.deleted_items().map(String::as_str).collect();
    assert_eq!(deleted.len(), 2);
    assert!(deleted.contains(&"a") && deleted.contains(&"b"));
}

// =============================================================================
// Read views
// =============================================================================

#[test]
fn views_are_restartable() {
    let items = example_tracker();
    let view = items.active_items();

    let first: Vec<_> = view.clone().collect();
    let second: Vec<_> = view.collect();
    assert_eq!(first, second);
    assert_eq!(items.active_items().collect::<Vec<_>>(), first);
}

#[test]
fn views_report_exact_length() {
    let items = example_tracker();
    assert_eq!(items.active_items().len(), 2);
    assert_eq!(items.deleted_items().len(), 2);
    assert_eq!(items.active_items().rev().copied().collect::<Vec<_>>(), vec![0, 1]);
}
