// SPDX-License-Identifier: MPL-2.0
//! Iced keyboard events translated into lightbox [`KeyEvent`]s.
//!
//! Only the keys the lightbox maps are forwarded. Events a widget already
//! captured (e.g. a focused text input) arrive marked as handled, so the
//! resolver leaves them alone.

use super::subcomponents::key_actions::{KeyCode, KeyEvent};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Maps an iced logical key to the lightbox key code.
#[must_use]
pub fn key_code_from_iced(key: &Key) -> Option<KeyCode> {
    match key {
        Key::Named(Named::Escape) => Some(KeyCode::ESCAPE),
        Key::Named(Named::ArrowLeft) => Some(KeyCode::ARROW_LEFT),
        Key::Named(Named::ArrowUp) => Some(KeyCode::ARROW_UP),
        Key::Named(Named::ArrowRight) => Some(KeyCode::ARROW_RIGHT),
        Key::Named(Named::ArrowDown) => Some(KeyCode::ARROW_DOWN),
        Key::Character(c) if c.as_str().eq_ignore_ascii_case("z") => Some(KeyCode::Z),
        _ => None,
    }
}

/// Builds a key event from the parts of an iced key press.
#[must_use]
pub fn key_event_from_parts(key: &Key, modifiers: Modifiers, status: event::Status) -> Option<KeyEvent> {
    let event = KeyEvent::new(key_code_from_iced(key)?).with_modifiers(modifiers);
    Some(match status {
        event::Status::Captured => event.mark_handled(),
        event::Status::Ignored => event,
    })
}

/// Translates an iced keyboard event. Only key presses produce an event.
#[must_use]
pub fn key_event_from_iced(event: &keyboard::Event, status: event::Status) -> Option<KeyEvent> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => {
            key_event_from_parts(key, *modifiers, status)
        }
        _ => None,
    }
}

/// Document key listener as an iced subscription.
///
/// Returns [`Subscription::none`] while the lightbox is closed, so the
/// listener exists exactly as long as the focus trap is active.
pub fn subscription(is_active: bool) -> Subscription<KeyEvent> {
    if !is_active {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window| match &event {
        event::Event::Keyboard(keyboard_event) => key_event_from_iced(keyboard_event, status),
        _ => None,
    })
}
