//! Birth data and zodiac signs.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cache::normalize_text;

/// Subject of a reading: the facts every chart is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub name: String,
    pub date: NaiveDate,
    /// Birth time when known; charts fall back to sunrise conventions
    /// without one.
    pub time: Option<NaiveTime>,
    pub place: String,
}

impl BirthData {
    pub fn new(
        name: impl Into<String>,
        date: NaiveDate,
        time: Option<NaiveTime>,
        place: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            time,
            place: place.into(),
        }
    }

    /// Zodiac sign from the birth date.
    pub fn sign(&self) -> ZodiacSign {
        ZodiacSign::from_date(self.date)
    }

    /// Canonical fingerprint for cache keys: every semantic field, with
    /// free-text fields normalized so spelling noise cannot split the
    /// cache.
    pub(crate) fn fingerprint(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            normalize_text(&self.name),
            self.date,
            self.time.map(|t| t.to_string()).unwrap_or_default(),
            normalize_text(&self.place),
        )
    }
}

/// The twelve tropical zodiac signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn all() -> [ZodiacSign; 12] {
        [
            Self::Aries,
            Self::Taurus,
            Self::Gemini,
            Self::Cancer,
            Self::Leo,
            Self::Virgo,
            Self::Libra,
            Self::Scorpio,
            Self::Sagittarius,
            Self::Capricorn,
            Self::Aquarius,
            Self::Pisces,
        ]
    }

    /// Sign for a birth date, by tropical date ranges.
    pub fn from_date(date: NaiveDate) -> Self {
        match (date.month(), date.day()) {
            (3, 21..=31) | (4, 1..=19) => Self::Aries,
            (4, 20..=30) | (5, 1..=20) => Self::Taurus,
            (5, 21..=31) | (6, 1..=20) => Self::Gemini,
            (6, 21..=30) | (7, 1..=22) => Self::Cancer,
            (7, 23..=31) | (8, 1..=22) => Self::Leo,
            (8, 23..=31) | (9, 1..=22) => Self::Virgo,
            (9, 23..=30) | (10, 1..=22) => Self::Libra,
            (10, 23..=31) | (11, 1..=21) => Self::Scorpio,
            (11, 22..=30) | (12, 1..=21) => Self::Sagittarius,
            (12, 22..=31) | (1, 1..=19) => Self::Capricorn,
            (1, 20..=31) | (2, 1..=18) => Self::Aquarius,
            _ => Self::Pisces,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
