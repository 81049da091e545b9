//! Handler that logs each event on the way in and the outcome on the way out.

use async_trait::async_trait;
use kurs_core::{ChatEvent, Handler, HandlerResponse, Result};
use tracing::{debug, info, instrument};

/// Logs each event in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &ChatEvent) -> Result<bool> {
        let user = event.user();
        info!(
            kind = event.kind(),
            user_id = user.id,
            username = %user.username.as_deref().unwrap_or("unknown"),
            chat_id = event.chat().id,
            content = %event.content(),
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &ChatEvent, response: &HandlerResponse) -> Result<()> {
        debug!(
            kind = event.kind(),
            chat_id = event.chat().id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}
