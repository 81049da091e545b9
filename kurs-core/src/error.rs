use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// A reply could not be delivered to the chat transport.
    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Bank catalog unavailable: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
