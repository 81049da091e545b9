//! # nbrb-client
//!
//! Looks up official exchange rates from the NBRB REST API (`/exrates/rates/{id}`).
//! One GET per lookup; no caching, no retry.

mod client;
mod error;
mod record;

pub use client::{RateLookup, RateLookupClient, DEFAULT_BASE_URL};
pub use error::LookupError;
pub use record::RateRecord;
