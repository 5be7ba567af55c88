//! Typed reading payloads.
//!
//! One explicit struct per content kind: model responses decode into
//! these and nothing else crosses the layer boundary. Fields mirror the
//! JSON shapes the prompts pin down.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cache::ContentKind;

/// Horoscope granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Timeframe {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// The cache category (and thereby TTL) for this granularity.
    pub fn content_kind(&self) -> ContentKind {
        match self {
            Self::Daily => ContentKind::DailyHoroscope,
            Self::Weekly => ContentKind::WeeklyHoroscope,
            Self::Monthly => ContentKind::MonthlyHoroscope,
            Self::Yearly => ContentKind::YearlyHoroscope,
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Output language for generated readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A horoscope for one sign and timeframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoroscopeReading {
    pub summary: String,
    pub love: String,
    pub career: String,
    pub health: String,
    pub lucky_number: u8,
    pub lucky_color: String,
}

/// Natal chart interpretation for one birth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub ascendant: String,
    pub sun_sign: String,
    pub moon_sign: String,
    pub houses: Vec<HousePlacement>,
    pub summary: String,
}

/// One house of a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousePlacement {
    pub house: u8,
    pub sign: String,
    #[serde(default)]
    pub planets: Vec<String>,
    pub theme: String,
}

/// Model interpretation of a locally computed numerology profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologyReading {
    pub life_path: String,
    pub birth_number: String,
    pub expression: String,
    pub loshu_grid: String,
    pub summary: String,
}

/// Palmistry reading derived from a palm photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalmReading {
    pub life_line: String,
    pub head_line: String,
    pub heart_line: String,
    #[serde(default)]
    pub fate_line: Option<String>,
    pub summary: String,
}

/// Compatibility reading for two birth records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// 0–100.
    pub score: u8,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub summary: String,
}

/// Resolved coordinates for a birth-place string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_name: String,
    #[serde(default)]
    pub timezone: Option<String>,
}
