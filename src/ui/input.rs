use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Key bindings shown in the footer, as (keys, action).
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "Select"),
    ("Enter", "Add"),
    ("PgUp/PgDn", "Page"),
    ("q", "Quit"),
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => {
            // The Add control only exists once cards are on screen.
            if !app.catalog().is_loading() {
                app.add_to_cart();
            }
        }
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_previous(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
}
