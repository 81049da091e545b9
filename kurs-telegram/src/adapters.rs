//! Adapters from Telegram (teloxide) types to kurs_core types.
//! Depends only on teloxide and kurs_core type definitions.

use kurs_core::{CallbackSelection, Chat, ChatEvent, Message, ToCoreEvent, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Wraps a teloxide Message. Only text messages become events.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<ChatEvent> {
        let text = self.0.text()?;
        Some(ChatEvent::Message(Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_default(),
            chat: core_chat(&self.0.chat),
            content: text.to_string(),
            created_at: self.0.date,
        }))
    }
}

/// Wraps a teloxide CallbackQuery. Queries without data (e.g. game callbacks) are dropped.
///
/// The chat comes from the message the button was attached to. Inline-mode callbacks carry no
/// message; they are answered in the sender's private chat, whose id equals the user id.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Option<ChatEvent> {
        let data = self.0.data.as_deref()?;
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let chat = match &self.0.message {
            Some(message) => core_chat(message.chat()),
            None => Chat {
                id: user.id,
                chat_type: "private".to_string(),
            },
        };
        Some(ChatEvent::Callback(CallbackSelection {
            id: self.0.id.to_string(),
            user,
            chat,
            data: data.to_string(),
            created_at: chrono::Utc::now(),
        }))
    }
}
