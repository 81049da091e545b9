//! Core types: user, chat, inbound chat events, menu options, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// User identity (id, username, names).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name used when addressing the user: first name, then username, else empty.
    pub fn display_name(&self) -> &str {
        self.first_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("")
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// An inbound text message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A button press: the payload of a previously sent [`MenuOption`].
#[derive(Debug, Clone)]
pub struct CallbackSelection {
    /// Transport id of the callback (used to acknowledge it).
    pub id: String,
    pub user: User,
    /// Chat the selection originated from.
    pub chat: Chat,
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// One inbound update. Each event is handled once and independently of any other.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    Message(Message),
    Callback(CallbackSelection),
}

impl ChatEvent {
    pub fn chat(&self) -> &Chat {
        match self {
            ChatEvent::Message(m) => &m.chat,
            ChatEvent::Callback(c) => &c.chat,
        }
    }

    pub fn user(&self) -> &User {
        match self {
            ChatEvent::Message(m) => &m.user,
            ChatEvent::Callback(c) => &c.user,
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatEvent::Message(_) => "message",
            ChatEvent::Callback(_) => "callback",
        }
    }

    /// Message text or callback payload.
    pub fn content(&self) -> &str {
        match self {
            ChatEvent::Message(m) => &m.content,
            ChatEvent::Callback(c) => &c.data,
        }
    }
}

/// One selectable choice in a menu: the visible label and the payload delivered back on selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub payload: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the text that was sent.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update to a core [`ChatEvent`]. `None` when the update carries
/// nothing the bot reacts to (e.g. a photo without caption).
pub trait ToCoreEvent: Send + Sync {
    fn to_core(&self) -> Option<ChatEvent>;
}

/// Event handler capability: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &ChatEvent) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &ChatEvent) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &ChatEvent,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
