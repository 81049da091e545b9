//! Test doubles: a recording [`Bot`], a stub [`RateLookup`], and event builders.

use async_trait::async_trait;
use chrono::Utc;
use kurs_core::{
    Bot, BotError, CallbackSelection, Chat, ChatEvent, MenuOption, Message, Result, User,
};
use nbrb_client::{LookupError, RateLookup, RateRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One outbound call seen by [`RecordingBot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
    },
    Menu {
        chat_id: i64,
        prompt: String,
        options: Vec<MenuOption>,
    },
}

/// Records every send. With `failing()`, every send is recorded and then fails with a delivery error.
#[derive(Default)]
pub struct RecordingBot {
    sent: Mutex<Vec<Sent>>,
    fail: bool,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        self.sent.lock().unwrap().push(sent);
        if self.fail {
            Err(BotError::Delivery("Forbidden: bot was blocked by the user".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_menu(&self, chat: &Chat, prompt: &str, options: &[MenuOption]) -> Result<()> {
        self.record(Sent::Menu {
            chat_id: chat.id,
            prompt: prompt.to_string(),
            options: options.to_vec(),
        })
    }
}

/// What [`StubRates`] answers with.
pub enum StubOutcome {
    Rate(f64),
    Transport,
    Parse,
}

/// Rate lookup that returns a canned outcome and counts calls.
pub struct StubRates {
    outcome: StubOutcome,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl StubRates {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateLookup for StubRates {
    async fn fetch_rate(&self, bank_id: &str) -> std::result::Result<RateRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(bank_id.to_string());
        match self.outcome {
            StubOutcome::Rate(official_rate) => Ok(RateRecord {
                id: 431,
                date: "2024-05-02T00:00:00".to_string(),
                abbreviation: bank_id.to_string(),
                scale: 1,
                name: "Доллар США".to_string(),
                official_rate,
            }),
            StubOutcome::Transport => Err(LookupError::Transport("connection refused".to_string())),
            StubOutcome::Parse => Err(LookupError::Parse("missing field `Cur_OfficialRate`".to_string())),
        }
    }
}

pub const CHAT_ID: i64 = 42;

fn user(first_name: &str) -> User {
    User {
        id: 7,
        username: Some("anna_k".to_string()),
        first_name: Some(first_name.to_string()),
        last_name: None,
    }
}

fn chat() -> Chat {
    Chat {
        id: CHAT_ID,
        chat_type: "private".to_string(),
    }
}

pub fn text_event(first_name: &str, text: &str) -> ChatEvent {
    ChatEvent::Message(Message {
        id: "1".to_string(),
        user: user(first_name),
        chat: chat(),
        content: text.to_string(),
        created_at: Utc::now(),
    })
}

pub fn callback_event(data: &str) -> ChatEvent {
    ChatEvent::Callback(CallbackSelection {
        id: "cb-1".to_string(),
        user: user("Anna"),
        chat: chat(),
        data: data.to_string(),
        created_at: Utc::now(),
    })
}
