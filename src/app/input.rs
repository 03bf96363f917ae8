//! Key mapping

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::Screen;
use crate::catalog::resources::ResourceLink;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Quiz
    Select(usize),
    RequestHelp,
    Next,

    // Navigation
    ScrollUp,
    ScrollDown,
    ShowResources,
    StartPractice,
    CycleTopic,
    CopyLink(ResourceLink),
    Back,

    // Modes
    CommandMode,
    ToggleHelp,
    Quit,
}

/// Keys that work on every screen
fn global_key_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::ScrollDown),
            KeyCode::Char('u') => Some(Action::ScrollUp),
            _ => None,
        };
    }

    match key {
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Char(':') => Some(Action::CommandMode),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('t') => Some(Action::CycleTopic),
        KeyCode::Char('r') => Some(Action::ShowResources),
        KeyCode::Char('p') => Some(Action::StartPractice),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
        // Note: 'q' intentionally not mapped - use :q command to quit
        _ => None,
    }
}

fn quiz_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ 'a'..='f') => Some(Action::Select(c as usize - 'a' as usize)),
        KeyCode::Char(c @ '1'..='6') => Some(Action::Select(c as usize - '1' as usize)),
        KeyCode::Char('?') => Some(Action::RequestHelp),
        KeyCode::Char('n') | KeyCode::Enter => Some(Action::Next),
        _ => None,
    }
}

fn resources_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('v') => Some(Action::CopyLink(ResourceLink::Video)),
        KeyCode::Char('d') => Some(Action::CopyLink(ResourceLink::Docs)),
        KeyCode::Enter => Some(Action::StartPractice),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

/// Map a key press on `screen` to an action
pub fn key_to_action(screen: Screen, key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    let screen_action = if modifiers.contains(KeyModifiers::CONTROL) {
        None
    } else {
        match screen {
            Screen::Quiz => quiz_key_to_action(key),
            Screen::Resources => resources_key_to_action(key),
        }
    };

    screen_action.or_else(|| global_key_to_action(key, modifiers))
}
