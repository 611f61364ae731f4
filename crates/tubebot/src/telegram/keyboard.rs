//! Inline keyboard for the video/audio choice

use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup};
use tubecore::MediaKind;

use crate::messages;
use crate::session::ChoiceCallback;

/// One row with a button per media kind, each carrying `<kind>:<token>`.
pub fn choice_keyboard(token: &str) -> InlineKeyboardMarkup {
    let row = MediaKind::ALL
        .iter()
        .map(|&kind| {
            InlineKeyboardButton::callback(messages::button_label(kind), ChoiceCallback::new(kind, token).to_data())
        })
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(vec![row])
}

/// Callback payloads carried by a keyboard, in button order.
pub fn callback_payloads(keyboard: &InlineKeyboardMarkup) -> Vec<String> {
    keyboard
        .inline_keyboard
        .iter()
        .flatten()
        .filter_map(|button| match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
            _ => None,
        })
        .collect()
}
