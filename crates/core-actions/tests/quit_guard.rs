mod common;
use common::*;

use core_events::Key;
use core_state::QuitGuard;

#[test]
fn clean_document_quits_on_first_request() {
    let mut m = model(&["abc"]);
    assert!(press(&mut m, &[CTRL_Q]).quit);
}

#[test]
fn ctrl_c_is_also_quit() {
    let mut m = model(&["abc"]);
    assert!(press(&mut m, &[Key::Byte(0x03)]).quit);
}

#[test]
fn dirty_document_warns_once_then_quits() {
    let mut m = model(&["abc"]);
    type_text(&mut m, "x");
    let r = press(&mut m, &[CTRL_Q]);
    assert!(!r.quit);
    assert_eq!(
        status(&m),
        "WARNING!!! File has unsaved changes. Press Ctrl-Q 1 more times to quit."
    );
    assert!(press(&mut m, &[CTRL_Q]).quit);
}

#[test]
fn other_key_resets_the_counter() {
    let mut m = model(&["abc"]);
    type_text(&mut m, "x");
    assert!(!press(&mut m, &[CTRL_Q]).quit);
    press(&mut m, &[Key::ArrowRight]);
    assert!(!press(&mut m, &[CTRL_Q]).quit);
    assert!(press(&mut m, &[CTRL_Q]).quit);
}

#[test]
fn configured_quit_times_counts_down() {
    let mut m = model(&["abc"]);
    m.state_mut().quit_guard = QuitGuard::new(3);
    type_text(&mut m, "x");
    press(&mut m, &[CTRL_Q]);
    assert!(status(&m).contains("Press Ctrl-Q 3 more times"));
    press(&mut m, &[CTRL_Q]);
    assert!(status(&m).contains("Press Ctrl-Q 2 more times"));
    press(&mut m, &[CTRL_Q]);
    assert!(status(&m).contains("Press Ctrl-Q 1 more times"));
    assert!(press(&mut m, &[CTRL_Q]).quit);
}

#[test]
fn zero_quit_times_never_warns() {
    let mut m = model(&["abc"]);
    m.state_mut().quit_guard = QuitGuard::new(0);
    type_text(&mut m, "x");
    assert!(press(&mut m, &[CTRL_Q]).quit);
}
