use super::*;

fn buf(text: &str) -> Buffer {
    Buffer::new(text)
}

#[test]
fn test_empty_history() {
    let mut history = EditHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.cursor(), None);
    assert_eq!(history.current(), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    assert_eq!(history.undo(), None);
    assert_eq!(history.redo(), None);
    assert_eq!(history.cursor(), None);
}

#[test]
fn test_undo_redo() {
    let mut history = EditHistory::new();
    history.record(buf("a"));
    history.record(buf("ab"));
    assert_eq!(history.cursor(), Some(1));
    assert!(history.can_undo());
    assert!(!history.can_redo());

    assert_eq!(history.undo(), Some(buf("a")));
    assert_eq!(history.cursor(), Some(0));
    assert!(history.can_redo());

    assert_eq!(history.redo(), Some(buf("ab")));
    assert_eq!(history.cursor(), Some(1));
    assert_eq!(history.redo(), None);
}

#[test]
fn test_undo_at_oldest_entry_is_idempotent() {
    let mut history = EditHistory::new();
    history.record(buf("first"));

    for _ in 0..3 {
        assert_eq!(history.undo(), None);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&buf("first")));
    }
}

#[test]
fn test_record_after_undo_discards_redo_tail() {
    let mut history = EditHistory::new();
    history.record(buf("A"));
    history.record(buf("B"));
    history.undo();
    history.record(buf("C"));

    assert_eq!(history.entries(), &[buf("A"), buf("C")]);
    assert_eq!(history.cursor(), Some(1));
    assert!(!history.can_redo());
}

#[test]
fn test_record_truncates_several_entries() {
    let mut history = EditHistory::new();
    for text in ["1", "2", "3", "4"] {
        history.record(buf(text));
    }
    history.undo();
    history.undo();
    history.undo();
    history.record(buf("x"));

    assert_eq!(history.entries(), &[buf("1"), buf("x")]);
}

#[test]
fn test_round_trip_back_to_predating_entry() {
    let mut history = EditHistory::new();
    history.record(buf("base"));

    let edits = ["base1", "base12", "base123"];
    for text in edits {
        history.record(buf(text));
    }

    let mut last = None;
    for _ in edits {
        last = history.undo();
    }
    assert_eq!(last, Some(buf("base")));
}

#[test]
fn test_empty_string_is_recordable() {
    let mut history = EditHistory::new();
    history.record(buf("a"));
    history.record(buf(""));
    assert_eq!(history.undo(), Some(buf("a")));
    assert_eq!(history.redo(), Some(buf("")));
}
