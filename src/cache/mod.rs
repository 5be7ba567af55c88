//! 读数缓存模块：基于 TTL 的响应缓存，避免对生成端点的重复调用。
//!
//! # Reading Cache Module
//!
//! This module provides TTL-based response caching over a pluggable
//! storage substrate, reducing remote calls for repeated requests.
//!
//! ## Overview
//!
//! Caching is valuable for:
//! - Reducing API costs by avoiding duplicate generation requests
//! - Answering repeated queries without network latency
//! - Keeping readings stable within their validity window
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`TtlCache`] | Cache with lazy expiry and hit/miss statistics |
//! | [`CacheKey`] | Deterministic key derivation from request parameters |
//! | [`TtlTable`] | Per-content-kind TTL policy |
//! | [`ContentKind`] | Cacheable content categories |
//! | [`Clock`] | Injected time source (swap in a manual clock in tests) |
//!
//! ## Semantics
//!
//! An entry is valid while `now - stored_at < ttl`; a `None` TTL never
//! expires. Expired and undecodable records are removed on the read that
//! finds them — there is no background sweep and no size-based eviction.
//! `put` is an unconditional overwrite. The cache never surfaces an error:
//! absence is its only failure mode.

mod clock;
mod entry;
mod key;
mod policy;
mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use key::{CacheKey, KeyComposer};
pub use policy::{ContentKind, TtlTable};
pub use store::{CacheStats, TtlCache};

pub(crate) use key::normalize_text;
