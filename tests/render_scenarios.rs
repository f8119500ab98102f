//! End-to-end flush scenarios checked against a VT100 emulator.

use dirtycell::{Color, Renderer};

/// Feed everything written so far into a fresh emulator.
fn emulate(width: u16, height: u16, bytes: &[u8]) -> vt100::Parser {
    let mut parser = vt100::Parser::new(height, width, 0);
    parser.process(bytes);
    parser
}

fn contents_at(parser: &vt100::Parser, x: u16, y: u16) -> String {
    let contents = parser
        .screen()
        .cell(y, x)
        .map(|cell| cell.contents().to_string())
        .unwrap_or_default();
    if contents.is_empty() {
        " ".to_string()
    } else {
        contents
    }
}

fn row_text(parser: &vt100::Parser, y: u16, x0: u16, x1: u16) -> String {
    (x0..x1).map(|x| contents_at(parser, x, y)).collect()
}

#[test]
fn single_cell_after_clear_emits_one_cell() {
    let mut r = Renderer::new(5, 3, Vec::new()).unwrap();
    r.clear(b'.', Color::Black, Color::Black);
    let first = r.flush().unwrap();
    assert_eq!(first.cells_written, 15);

    let before = r.sink().len();
    r.set_cell(2, 1, b'X', Color::Red, Color::Black);
    let second = r.flush().unwrap();

    assert_eq!(second.cells_written, 1);
    assert_eq!(second.cursor_moves, 1);
    assert_eq!(second.color_changes, 1);
    assert_eq!(&r.sink()[before..], b"\x1b[2;3H\x1b[31;40mX");

    let parser = emulate(5, 3, r.sink());
    assert_eq!(contents_at(&parser, 2, 1), "X");
    assert_eq!(contents_at(&parser, 1, 1), ".");
    let cell = parser.screen().cell(1, 2).unwrap();
    assert_eq!(cell.fgcolor(), vt100::Color::Idx(1));
    assert_eq!(cell.bgcolor(), vt100::Color::Idx(0));
}

#[test]
fn clear_repaints_whole_screen() {
    let mut r = Renderer::new(6, 4, Vec::new()).unwrap();
    r.clear(b'#', Color::Green, Color::Blue);
    r.flush().unwrap();

    let parser = emulate(6, 4, r.sink());
    for y in 0..4 {
        for x in 0..6 {
            assert_eq!(contents_at(&parser, x, y), "#");
            let cell = parser.screen().cell(y, x).unwrap();
            assert_eq!(cell.fgcolor(), vt100::Color::Idx(2));
            assert_eq!(cell.bgcolor(), vt100::Color::Idx(4));
        }
    }
}

#[test]
fn full_row_run_needs_one_move_and_one_color() {
    let mut r = Renderer::new(10, 3, Vec::new()).unwrap();
    r.draw_text(0, 2, "0123456789", Color::Cyan, Color::Black);
    let stats = r.flush().unwrap();

    assert_eq!(stats.cells_written, 10);
    assert_eq!(stats.cursor_moves, 1);
    assert_eq!(stats.color_changes, 1);

    let parser = emulate(10, 3, r.sink());
    assert_eq!(row_text(&parser, 2, 0, 10), "0123456789");
}

#[test]
fn write_char_wraps_onto_next_row() {
    let mut r = Renderer::new(4, 2, Vec::new()).unwrap();
    r.clear(b' ', Color::White, Color::Black);
    r.set_cursor(2, 0);
    for ch in *b"abcd" {
        r.write_char(ch, Color::Yellow, Color::Black);
    }
    assert_eq!(r.cursor(), Some((2, 1)));
    r.flush().unwrap();

    let parser = emulate(4, 2, r.sink());
    assert_eq!(contents_at(&parser, 2, 0), "a");
    assert_eq!(contents_at(&parser, 3, 0), "b");
    assert_eq!(contents_at(&parser, 0, 1), "c");
    assert_eq!(contents_at(&parser, 1, 1), "d");
}

#[test]
fn bottom_right_cell_does_not_scroll() {
    let mut r = Renderer::new(4, 2, Vec::new()).unwrap();
    r.clear(b'-', Color::White, Color::Black);
    r.flush().unwrap();
    r.set_cell(3, 1, b'Z', Color::Red, Color::Black);
    r.set_cell(0, 0, b'A', Color::Red, Color::Black);
    r.flush().unwrap();

    let parser = emulate(4, 2, r.sink());
    assert_eq!(contents_at(&parser, 0, 0), "A");
    assert_eq!(contents_at(&parser, 3, 1), "Z");
    assert_eq!(contents_at(&parser, 1, 0), "-");
}

#[test]
fn bright_toggle_repaints_in_bright_palette() {
    let mut r = Renderer::new(3, 2, Vec::new()).unwrap();
    r.clear(b'o', Color::Red, Color::Black);
    r.set_cell(1, 1, b'*', Color::Green, Color::Blue);
    r.flush().unwrap();

    r.set_bright_colors(true).unwrap();
    assert_eq!(r.dirty_range(), Some((0, 5)));
    let stats = r.flush().unwrap();
    assert_eq!(stats.cells_written, 6);

    let parser = emulate(3, 2, r.sink());
    let plain = parser.screen().cell(0, 0).unwrap();
    assert_eq!(plain.fgcolor(), vt100::Color::Idx(9));
    assert_eq!(plain.bgcolor(), vt100::Color::Idx(8));
    let star = parser.screen().cell(1, 1).unwrap();
    assert_eq!(star.fgcolor(), vt100::Color::Idx(10));
    assert_eq!(star.bgcolor(), vt100::Color::Idx(12));

    r.set_bright_colors(false).unwrap();
    r.flush().unwrap();
    let parser = emulate(3, 2, r.sink());
    assert_eq!(
        parser.screen().cell(0, 0).unwrap().fgcolor(),
        vt100::Color::Idx(1)
    );
}

#[test]
fn hide_cursor_reaches_terminal() {
    let mut r = Renderer::new(3, 1, Vec::new()).unwrap();
    r.hide_cursor(true).unwrap();
    assert!(emulate(3, 1, r.sink()).screen().hide_cursor());
    r.hide_cursor(false).unwrap();
    assert!(!emulate(3, 1, r.sink()).screen().hide_cursor());
}

#[test]
fn hud_line_update_touches_only_that_line() {
    let mut r = Renderer::new(20, 6, Vec::new()).unwrap();
    r.clear(b' ', Color::White, Color::Black);
    r.draw_text(0, 0, "Turn: 1 | Lives: 3", Color::White, Color::Black);
    r.flush().unwrap();

    r.draw_text(0, 0, "Turn: 2 | Lives: 3", Color::White, Color::Black);
    assert_eq!(r.dirty_range(), Some((0, 17)));
    let stats = r.flush().unwrap();
    assert_eq!(stats.cells_written, 18);

    let parser = emulate(20, 6, r.sink());
    assert_eq!(row_text(&parser, 0, 0, 18), "Turn: 2 | Lives: 3");
}
