use super::*;
use crate::kernel::editor::HeadingLevel;

#[test]
fn test_command_names() {
    assert_eq!(Command::CursorLeft.name(), "cursorLeft");
    assert_eq!(Command::Undo.name(), "undo");
    assert_eq!(Command::Format(FormatOp::UnorderedList).name(), "unordered-list");
}

#[test]
fn test_from_name_inverts_name() {
    let heading = FormatOp::Heading(HeadingLevel::new(5).expect("valid level"));
    for command in [
        Command::CursorLineEnd,
        Command::SelectAll,
        Command::DeleteForward,
        Command::Indent,
        Command::Redo,
        Command::Quit,
        Command::Format(FormatOp::Formula),
        Command::Format(heading),
    ] {
        assert_eq!(Command::from_name(command.name()), Some(command));
    }
    assert_eq!(Command::from_name("toggleSidebar"), None);
}

#[test]
fn test_is_editor_command() {
    assert!(Command::Undo.is_editor_command());
    assert!(Command::Indent.is_editor_command());
    assert!(Command::Format(FormatOp::Link).is_editor_command());
    assert!(!Command::InsertNewline.is_editor_command());
    assert!(!Command::Quit.is_editor_command());
}
