use super::*;

#[test]
fn editing_handles_multibyte_chars() {
    let mut input = Input::default();
    input.insert_str("あいう");
    input.move_left();
    input.backspace();
    assert_eq!(input.buf, "あう");
    assert_eq!(input.cursor, 1);

    input.insert_char('x');
    assert_eq!(input.buf, "あxう");

    input.move_end();
    input.delete();
    assert_eq!(input.buf, "あxう");
    input.move_home();
    input.delete();
    assert_eq!(input.buf, "xう");
}

#[test]
fn pasted_newlines_are_dropped() {
    let mut input = Input::default();
    input.insert_str("abc.\ndef\r\n.ghi");
    assert_eq!(input.buf, "abc.def.ghi");
}

#[test]
fn masked_input_hides_text() {
    let mut input = Input::masked();
    input.set("hunter2".to_string());
    assert_eq!(input.display(), "*******");
    assert_eq!(input.buf, "hunter2");
    assert_eq!(input.cursor, 7);
}

#[test]
fn cursor_stays_in_bounds() {
    let mut input = Input::default();
    input.backspace();
    input.move_left();
    input.move_right();
    assert_eq!(input.cursor, 0);
    input.set("ab".to_string());
    input.move_right();
    assert_eq!(input.cursor, 2);
    input.clear();
    assert_eq!(input.cursor, 0);
    assert!(input.buf.is_empty());
}
