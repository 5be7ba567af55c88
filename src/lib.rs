//! # astrocast
//!
//! Client runtime for AI-generated astrology readings.
//!
//! This library wraps an external generative-AI chat endpoint and exposes
//! typed reading operations (horoscope, natal chart, numerology, palmistry,
//! matchmaking, geocoding). Every remote operation runs through the same
//! request layer: a TTL cache over an injected storage substrate, and a
//! retrying call wrapper with exponential backoff and a transient/terminal
//! failure taxonomy.
//!
//! ## Core Philosophy
//!
//! - **Cache before calling**: identical requests normalize to the same key
//!   and are answered locally while their content is still fresh
//! - **Classify failures, don't just catch them**: configuration and
//!   validation errors surface immediately; only transient faults burn the
//!   retry budget
//! - **Type-Safe**: one explicit result struct per content kind, no untyped
//!   JSON maps between layers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use astrocast::{AstrocastClient, Timeframe, ZodiacSign};
//!
//! #[tokio::main]
//! async fn main() -> astrocast::Result<()> {
//!     let client = AstrocastClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let reading = client
//!         .horoscope(ZodiacSign::Aries, Timeframe::Daily)
//!         .await?;
//!     println!("{}", reading.summary);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client implementation and builder |
//! | [`cache`] | TTL cache, key derivation and per-kind TTL policy |
//! | [`retry`] | Retrying call wrapper with exponential backoff |
//! | [`storage`] | Pluggable synchronous key-value substrate |
//! | [`transport`] | HTTP transport to the generative endpoint |
//! | [`readings`] | Domain operations and local numerology |
//! | [`types`] | Core type definitions (birth data, reading payloads) |

pub mod cache;
pub mod client;
pub mod prompt;
pub mod readings;
pub mod retry;
pub mod storage;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use cache::{CacheKey, CacheStats, ContentKind, TtlCache, TtlTable};
pub use client::{AstrocastClient, AstrocastClientBuilder};
pub use readings::{LoshuGrid, NumerologyProfile};
pub use retry::RetryPolicy;
pub use storage::{FileStore, MemoryStore, StorageBackend};
pub use types::{
    birth::{BirthData, ZodiacSign},
    reading::{
        CompatibilityReport, GeoLocation, HoroscopeReading, Language, NatalChart,
        NumerologyReading, PalmReading, Timeframe,
    },
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;

pub mod failure;
pub use failure::FailureClass;
