//! Source of the bank identifiers offered in the selection menu.

use async_trait::async_trait;
use kurs_core::Result;

/// Ordered list of selectable bank identifiers. Can be backed by config, a cache, or a remote call.
#[async_trait]
pub trait BankCatalog: Send + Sync {
    async fn list_banks(&self) -> Result<Vec<String>>;
}

/// Fixed list, typically from configuration.
#[derive(Debug, Clone)]
pub struct StaticBankCatalog {
    banks: Vec<String>,
}

impl StaticBankCatalog {
    /// Entries are trimmed; blank entries are dropped. Order is kept.
    pub fn new<I, S>(banks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let banks = banks
            .into_iter()
            .map(|b| b.as_ref().trim().to_string())
            .filter(|b| !b.is_empty())
            .collect();
        Self { banks }
    }

    /// Parses a comma-separated list such as `USD, EUR,RUB`.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    pub fn banks(&self) -> &[String] {
        &self.banks
    }
}

#[async_trait]
impl BankCatalog for StaticBankCatalog {
    async fn list_banks(&self) -> Result<Vec<String>> {
        Ok(self.banks.clone())
    }
}
