//! Key mapping from terminal events to game commands and host controls.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Session controls handled by the host rather than the in-game dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start,
    /// Also serves as restart from the game-over panel
    Reset,
    Quit,
}

/// A mapped key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(GameCommand),
    Control(Control),
}

/// Map keyboard input to in-game commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Left => Some(GameCommand::MoveLeft),
        KeyCode::Right => Some(GameCommand::MoveRight),
        KeyCode::Down => Some(GameCommand::SoftDrop),

        // Rotation
        KeyCode::Up => Some(GameCommand::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::TogglePause),

        _ => None,
    }
}

/// Map keyboard input to session controls.
pub fn handle_control_key(key: KeyEvent) -> Option<Control> {
    if should_quit(key) {
        return Some(Control::Quit);
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(Control::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Control::Reset),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a key event, ignoring repeats and releases.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if let Some(control) = handle_control_key(key) {
        return Some(Input::Control(control));
    }
    handle_key_event(key).map(Input::Command)
}
