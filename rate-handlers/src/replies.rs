//! Texts and payload format shared by the conversation and its tests.

/// The only recognised command.
pub const START_COMMAND: &str = "/start";

/// Prefix of menu payloads that select a bank.
pub const BANK_PAYLOAD_PREFIX: &str = "bank:";

pub const HELP_TEXT: &str =
    "Извините, я не понимаю эту команду. Вы можете использовать команду /start, чтобы начать.";

pub const MENU_PROMPT: &str = "Выберите банк:";

pub fn greeting(name: &str) -> String {
    format!("Привет  {}, рады видеть вас.", name)
}

pub fn rate_reply(bank: &str, rate: &str) -> String {
    format!("Текущий курс валюты в {} составляет: {}", bank, rate)
}

pub fn rate_unavailable_reply(bank: &str) -> String {
    format!(
        "Не удалось получить курс валюты в {}. Попробуйте позже.",
        bank
    )
}

pub fn bank_payload(bank: &str) -> String {
    format!("{}{}", BANK_PAYLOAD_PREFIX, bank)
}

/// Bank identifier from a selection payload; `None` unless the payload starts with `bank:`.
pub fn parse_bank_payload(data: &str) -> Option<&str> {
    data.strip_prefix(BANK_PAYLOAD_PREFIX)
}
