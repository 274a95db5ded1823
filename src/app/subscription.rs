// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the Left/Right arrow keys to the same navigation messages as the
//! Previous/Next buttons. Keys already captured by a widget are ignored.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_to_message(&key).map(Message::Gallery)
            }
            _ => None,
        }
    })
}

/// Maps a pressed key to a gallery navigation message.
pub fn key_to_message(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::PreviousPressed),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::NextPressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_navigate() {
        assert_eq!(
            key_to_message(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::PreviousPressed)
        );
        assert_eq!(
            key_to_message(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::NextPressed)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(key_to_message(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(key_to_message(&Key::Character("n".into())), None);
    }
}
