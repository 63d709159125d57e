//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;
use std::time::Instant;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::{App, Mode, Section};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: Mode, key: KeyCode) -> Option<Action> {
    match mode {
        Mode::Viewing => match key {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::ClosePhoto),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPhoto),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPhoto),
            KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::ToggleSlideshow),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        },
        Mode::Browsing(section) => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Tab => Some(Action::NextSection),
            KeyCode::Char('1') => Some(Action::GoToSection(Section::Home)),
            KeyCode::Char('2') => Some(Action::GoToSection(Section::Gallery)),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('s') => Some(Action::PlaySlideshow),
            _ => match section {
                Section::Home => match key {
                    KeyCode::Enter => Some(Action::GoToSection(Section::Gallery)),
                    _ => None,
                },
                Section::Gallery => match key {
                    KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
                    KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
                    KeyCode::Enter => Some(Action::OpenSelected),
                    _ => None,
                },
            },
        },
    }
}

/// 只关心左键按下
pub fn get_mouse_action(mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode, now: Instant) -> io::Result<bool> {
    if let Some(action) = get_action(app.mode(), key) {
        Ok(app.dispatch(action, now))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, now: Instant) {
    if let Some(action) = get_mouse_action(mouse) {
        app.dispatch(action, now);
    }
}
