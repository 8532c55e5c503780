use super::*;

#[test]
fn test_insert_reports_full_text() {
    let mut surface = TextSurface::new("ac");
    surface.set_selection(Selection::caret(1));

    let outcome = surface.insert_str("b");
    assert_eq!(outcome, SurfaceOutcome::TextChanged("abc".to_string()));
    assert_eq!(surface.selection(), Selection::caret(2));
}

#[test]
fn test_insert_replaces_selection() {
    let mut surface = TextSurface::new("hello world");
    surface.set_selection(Selection::new(0, 5));

    surface.insert_str("bye");
    assert_eq!(surface.text(), "bye world");
    assert_eq!(surface.cursor(), 3);
}

#[test]
fn test_delete_backward_grapheme() {
    let mut surface = TextSurface::new("ae\u{301}");
    surface.set_selection(Selection::caret(3));

    let outcome = surface.apply(Command::DeleteBackward);
    assert_eq!(outcome, SurfaceOutcome::TextChanged("a".to_string()));
    assert_eq!(surface.cursor(), 1);
}

#[test]
fn test_delete_at_edges_is_unchanged() {
    let mut surface = TextSurface::new("ab");
    assert_eq!(surface.apply(Command::DeleteBackward), SurfaceOutcome::Unchanged);

    surface.set_selection(Selection::caret(2));
    assert_eq!(surface.apply(Command::DeleteForward), SurfaceOutcome::Unchanged);
}

#[test]
fn test_select_and_collapse() {
    let mut surface = TextSurface::new("abc");
    surface.apply(Command::SelectRight);
    surface.apply(Command::SelectRight);
    assert_eq!(surface.selection(), Selection::new(0, 2));

    surface.apply(Command::CursorLeft);
    assert_eq!(surface.selection(), Selection::caret(0));
}

#[test]
fn test_select_all() {
    let mut surface = TextSurface::new("a\nb");
    assert_eq!(surface.apply(Command::SelectAll), SurfaceOutcome::SelectionChanged);
    assert_eq!(surface.selection(), Selection::new(0, 3));
}

#[test]
fn test_vertical_movement_clamps_column() {
    let mut surface = TextSurface::new("abcd\nxy\nlong line");
    surface.set_selection(Selection::caret(3));

    surface.apply(Command::CursorDown);
    assert_eq!(surface.cursor(), 7);

    surface.apply(Command::CursorDown);
    assert_eq!(surface.cursor(), 10);

    surface.apply(Command::CursorUp);
    assert_eq!(surface.cursor(), 7);

    surface.apply(Command::CursorUp);
    assert_eq!(surface.cursor(), 2);

    surface.apply(Command::CursorUp);
    assert_eq!(surface.cursor(), 0);
}

#[test]
fn test_line_start_end() {
    let mut surface = TextSurface::new("one\ntwo");
    surface.set_selection(Selection::caret(5));

    surface.apply(Command::CursorLineEnd);
    assert_eq!(surface.cursor(), 7);
    surface.apply(Command::CursorLineStart);
    assert_eq!(surface.cursor(), 4);
}

#[test]
fn test_set_text_clamps_caret() {
    let mut surface = TextSurface::new("long text");
    surface.set_selection(Selection::new(2, 9));

    surface.set_text("ab");
    assert_eq!(surface.selection(), Selection::new(2, 2));
}

#[test]
fn test_cursor_row_col_uses_display_width() {
    let mut surface = TextSurface::new("x\n日本");
    surface.set_selection(Selection::caret(4));
    assert_eq!(surface.cursor_row_col(), (1, 4));
}

#[test]
fn test_editor_commands_are_ignored() {
    let mut surface = TextSurface::new("a");
    assert_eq!(surface.apply(Command::Undo), SurfaceOutcome::Unchanged);
    assert_eq!(surface.apply(Command::Indent), SurfaceOutcome::Unchanged);
}
