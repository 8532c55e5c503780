use super::*;

#[test]
fn test_slice_uses_char_offsets() {
    let buffer = Buffer::new("héllo wörld");
    assert_eq!(buffer.len_chars(), 11);
    assert_eq!(buffer.slice(0, 5), "héllo");
    assert_eq!(buffer.slice(6, 11), "wörld");
}

#[test]
fn test_slice_clamps_out_of_range() {
    let buffer = Buffer::new("abc");
    assert_eq!(buffer.slice(1, 100), "bc");
    assert_eq!(buffer.slice(50, 100), "");
}

#[test]
fn test_splice_returns_new_buffer() {
    let buffer = Buffer::new("hello world");
    let spliced = buffer.splice(5, 5, "****");
    assert_eq!(spliced, "hello**** world");
    assert_eq!(buffer, "hello world");
    assert_eq!(spliced.len_chars(), 15);
}

#[test]
fn test_splice_multibyte() {
    let buffer = Buffer::new("日本語");
    assert_eq!(buffer.splice(1, 2, "-"), "日-語");
}

#[test]
fn test_line_start() {
    let buffer = Buffer::new("line one\nline two\nthree");
    assert_eq!(buffer.line_start(0), 0);
    assert_eq!(buffer.line_start(4), 0);
    assert_eq!(buffer.line_start(9), 9);
    assert_eq!(buffer.line_start(12), 9);
    assert_eq!(buffer.line_start(23), 18);
}

#[test]
fn test_line_start_at_newline_belongs_to_previous_line() {
    let buffer = Buffer::new("ab\ncd");
    assert_eq!(buffer.line_start(2), 0);
    assert_eq!(buffer.line_start(3), 3);
}

#[test]
fn test_word_count() {
    assert_eq!(Buffer::new("").word_count(), 0);
    assert_eq!(Buffer::new("   ").word_count(), 0);
    assert_eq!(Buffer::new("\n\t \n").word_count(), 0);
    assert_eq!(Buffer::new("one two  three").word_count(), 3);
    assert_eq!(Buffer::new("  # Title\n\n- item  ").word_count(), 4);
}
