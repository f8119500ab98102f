//! Board Demo: A small grid map redrawn incrementally.
//!
//! Demonstrates:
//! - Full paint after `clear`
//! - Per-frame updates that touch only the moving marker and the HUD
//! - Bright palette toggle forcing a repaint
//!
//! Press `q` or `Esc` to exit early, `b` to toggle bright colors.

use crossterm::event::{self, Event, KeyCode};
use dirtycell::{Color, Renderer, TerminalSession};
use std::io;
use std::time::Duration;

const BOARD: u16 = 8;
const ORIGIN_X: u16 = 4;
const ORIGIN_Y: u16 = 3;

/// Map glyph for the cell at (row, col).
fn tile(row: u16, col: u16) -> (u8, Color) {
    match (row * 7 + col * 3) % 11 {
        0 => (b'#', Color::White),
        4 => (b'I', Color::Cyan),
        8 => (b'L', Color::Green),
        _ if row == BOARD - 1 && col == BOARD - 1 => (b'X', Color::Magenta),
        _ => (b'.', Color::Blue),
    }
}

fn draw_board(screen: &mut Renderer<&mut io::Stdout>) {
    screen.clear(b' ', Color::White, Color::Black);

    let right = ORIGIN_X + BOARD * 2;
    let bottom = ORIGIN_Y + BOARD + 1;
    for x in ORIGIN_X..=right {
        screen.set_cell(x, ORIGIN_Y, b'-', Color::Yellow, Color::Black);
        screen.set_cell(x, bottom, b'-', Color::Yellow, Color::Black);
    }
    for y in ORIGIN_Y..=bottom {
        screen.set_cell(ORIGIN_X, y, b'|', Color::Yellow, Color::Black);
        screen.set_cell(right, y, b'|', Color::Yellow, Color::Black);
    }
    for row in 0..BOARD {
        for col in 0..BOARD {
            let (ch, fg) = tile(row, col);
            screen.set_cell(ORIGIN_X + 1 + col * 2, ORIGIN_Y + 1 + row, ch, fg, Color::Black);
        }
    }
    screen.draw_text(0, 1, "Controls: q = quit | b = bright", Color::White, Color::Black);
}

fn place_marker(screen: &mut Renderer<&mut io::Stdout>, pos: (u16, u16), on: bool) {
    let (row, col) = pos;
    let x = ORIGIN_X + 1 + col * 2;
    let y = ORIGIN_Y + 1 + row;
    if on {
        screen.set_cell(x, y, b'@', Color::Red, Color::Black);
    } else {
        let (ch, fg) = tile(row, col);
        screen.set_cell(x, y, ch, fg, Color::Black);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = TerminalSession::size()?;
    let _session = TerminalSession::enter(true)?;
    let mut stdout = io::stdout();
    let mut screen = Renderer::new(width, height, &mut stdout)?;
    screen.hide_cursor(true)?;

    draw_board(&mut screen);
    let stats = screen.flush()?;
    let mut pos = (0u16, 0u16);
    let mut bright = false;
    let mut total_bytes = stats.bytes_written;

    for turn in 1..=64u32 {
        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('b') => {
                        bright = !bright;
                        screen.set_bright_colors(bright)?;
                    }
                    _ => {}
                }
            }
        }

        place_marker(&mut screen, pos, false);
        pos = if pos.1 + 1 < BOARD {
            (pos.0, pos.1 + 1)
        } else {
            ((pos.0 + 1) % BOARD, 0)
        };
        place_marker(&mut screen, pos, true);

        let hud = format!("Turn: {turn:>3} | Pos: {},{} | Bytes: {total_bytes:>6}", pos.0, pos.1);
        screen.draw_text(0, 0, &hud, Color::White, Color::Black);

        total_bytes += screen.flush()?.bytes_written;
    }

    screen.hide_cursor(false)?;
    Ok(())
}
