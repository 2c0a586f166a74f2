//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use tictactoe_tui::{App, Palette, ui};

fn render(app: &App, palette: &Palette) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|f| ui::draw(f, app, palette)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn play(app: &mut App, keys: &str) {
    for key in keys.chars() {
        app.handle_key(KeyCode::Char(key));
    }
}

#[test]
fn test_new_game_shows_turn_and_numbered_cells() {
    let app = App::new();
    let screen = text(&render(&app, &Palette::default()));

    assert!(screen.contains("Player X's Turn"));
    for digit in 1..=9 {
        assert!(screen.contains(&digit.to_string()));
    }
}

#[test]
fn test_marks_and_win_headline() {
    let mut app = App::new();
    play(&mut app, "14253");
    let screen = text(&render(&app, &Palette::default()));

    assert!(screen.contains("Player X Wins!"));
    assert!(screen.contains(" O "));
}

#[test]
fn test_winning_line_is_highlighted() {
    let mut app = App::new();
    play(&mut app, "14253");
    let palette = Palette::default();
    let buffer = render(&app, &palette);

    let highlighted = buffer
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "X" && cell.bg == palette.highlight)
        .count();
    assert_eq!(highlighted, 3);

    let plain_o = buffer
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "O" && cell.bg != palette.highlight)
        .count();
    assert_eq!(plain_o, 2);
}

#[test]
fn test_draw_headline() {
    let mut app = App::new();
    play(&mut app, "123546879");
    let screen = text(&render(&app, &Palette::default()));
    assert!(screen.contains("Game Draw!"));
}
