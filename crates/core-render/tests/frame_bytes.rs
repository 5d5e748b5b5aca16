use core_model::{View, Viewport};
use core_render::RenderEngine;
use core_state::EditorState;
use core_text::Document;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

const ROW_END: &str = "\x1b[K\r\n";

fn view(rows: usize, cols: usize) -> View {
    View::new(Viewport::new(rows, cols))
}

fn frame(state: &EditorState, view: &View, now: Instant) -> String {
    let engine = RenderEngine::with_version("0.1.0");
    String::from_utf8(engine.compose(state, view, now).unwrap()).unwrap()
}

#[test]
fn empty_document_shows_centered_welcome() {
    let state = EditorState::new(Document::default());
    let v = view(6, 40);
    let got = frame(&state, &v, Instant::now());

    let mut want = String::from("\x1b[?25l\x1b[H");
    want.push_str(&format!("~{ROW_END}~{ROW_END}"));
    // 29-byte banner in 40 columns: 5 columns of padding, the first one is `~`.
    want.push_str(&format!("~    Tilde editor -- version 0.1.0{ROW_END}"));
    for _ in 0..3 {
        want.push_str(&format!("~{ROW_END}"));
    }
    want.push_str(&format!("\x1b[7m{:<37}1/0\x1b[m\r\n", "[No Name] - 0 lines "));
    want.push_str("\x1b[K");
    want.push_str("\x1b[1;1H\x1b[?25h");
    assert_eq!(got, want);
}

#[test]
fn banner_is_truncated_to_narrow_terminals() {
    let state = EditorState::new(Document::default());
    let v = view(3, 10);
    let got = frame(&state, &v, Instant::now());
    assert!(got.contains(&format!("Tilde edit{ROW_END}")));
    assert!(!got.contains("version"));
}

#[test]
fn document_rows_render_tabs_and_tildes() {
    let doc = Document::from_lines(["a\tb", "xyz"], 8);
    let state = EditorState::new(doc).with_file_name("t.txt");
    let v = view(3, 12);
    let got = frame(&state, &v, Instant::now());

    let mut want = String::from("\x1b[?25l\x1b[H");
    want.push_str(&format!("a       b{ROW_END}xyz{ROW_END}~{ROW_END}"));
    // "t.txt - 2 lines " is wider than the bar; the position never fits.
    want.push_str("\x1b[7mt.txt - 2 li\x1b[m\r\n");
    want.push_str("\x1b[K\x1b[1;1H\x1b[?25h");
    assert_eq!(got, want);
}

#[test]
fn no_banner_once_document_has_rows() {
    let state = EditorState::new(Document::from_lines([""], 8));
    let got = frame(&state, &view(6, 40), Instant::now());
    assert!(!got.contains("Tilde editor"));
}

#[test]
fn offsets_shift_rows_and_cursor() {
    let doc = Document::from_lines(["zero", "one", "two", "three"], 8);
    let state = EditorState::new(doc);
    let mut v = view(2, 3);
    v.viewport.row_offset = 1;
    v.viewport.col_offset = 1;
    v.cursor.cy = 2;
    v.cursor.cx = 3;
    v.rx = 3;
    let got = frame(&state, &v, Instant::now());
    assert!(got.starts_with(&format!("\x1b[?25l\x1b[Hne{ROW_END}wo{ROW_END}")));
    assert!(got.ends_with("\x1b[2;3H\x1b[?25h"));
}

#[test]
fn dirty_status_and_fresh_message() {
    let mut doc = Document::from_lines(["abc"], 8);
    doc.row_insert_byte(0, 0, b'x');
    let mut state = EditorState::new(doc);
    let t0 = Instant::now();
    state.set_status_at("HELP: Ctrl-S = save | Ctrl-Q = quit", t0);
    let v = view(1, 40);

    let fresh = frame(&state, &v, t0 + Duration::from_secs(1));
    let bar = format!("{:<37}1/1", "[No Name] - 1 lines (modified)");
    assert!(fresh.contains(&format!("\x1b[7m{bar}\x1b[m\r\n")));
    assert!(fresh.contains("\x1b[KHELP: Ctrl-S = save | Ctrl-Q = quit\x1b[1;1H"));

    let stale = frame(&state, &v, t0 + Duration::from_secs(6));
    assert!(stale.contains("\x1b[m\r\n\x1b[K\x1b[1;1H"));
}

#[test]
fn message_is_truncated_to_width() {
    let mut state = EditorState::new(Document::default());
    let now = Instant::now();
    state.set_status_at("0123456789abcdef", now);
    let got = frame(&state, &view(1, 10), now);
    assert!(got.contains("\x1b[K0123456789\x1b[1;1H"));
}

#[test]
fn render_writes_one_frame_and_counts_it() {
    let state = EditorState::new(Document::default());
    let v = view(2, 20);
    let mut engine = RenderEngine::with_version("9.9.9");
    let mut sink: Vec<u8> = Vec::new();
    let now = Instant::now();
    engine.render(&mut sink, &state, &v, now).unwrap();
    assert_eq!(sink, engine.compose(&state, &v, now).unwrap());
    assert_eq!(engine.frames_rendered(), 1);
}
