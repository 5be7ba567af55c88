//! Reading operations.
//!
//! Each operation is a thin method on [`AstrocastClient`] over the shared
//! cached-remote-call template; what varies per module is the key
//! derivation rule and the prompt. Numerology is the exception: its core
//! numbers and the Loshu grid are computed locally, and only their
//! interpretation goes remote.
//!
//! | Module | Operation | Cache identity |
//! |--------|-----------|----------------|
//! | [`horoscope`] | sign + timeframe forecast | sign, timeframe, language (+ date for daily) |
//! | [`natal`] | natal chart | birth fingerprint, language |
//! | [`numerology`] | local profile + interpretation | birth fingerprint, language |
//! | [`palmistry`] | palm photograph reading | image digest, language |
//! | [`matchmaking`] | two-subject compatibility | sorted subject fingerprints, language |
//! | [`geocode`] | birth-place coordinates | normalized place string |
//!
//! [`AstrocastClient`]: crate::client::AstrocastClient

pub mod geocode;
pub mod horoscope;
pub mod matchmaking;
pub mod natal;
pub mod numerology;
pub mod palmistry;

pub use numerology::{LoshuGrid, NumerologyProfile};
