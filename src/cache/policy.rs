//! Per-content-kind TTL policy.

use std::collections::HashMap;
use std::time::Duration;

const fn hours(h: u64) -> Duration {
    Duration::from_secs(h * 3600)
}

/// Cacheable content categories, one per reading operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    DailyHoroscope,
    WeeklyHoroscope,
    MonthlyHoroscope,
    YearlyHoroscope,
    NatalChart,
    Numerology,
    Palmistry,
    Matchmaking,
    Geocode,
}

impl ContentKind {
    /// Key namespace and log label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DailyHoroscope => "horoscope_daily",
            Self::WeeklyHoroscope => "horoscope_weekly",
            Self::MonthlyHoroscope => "horoscope_monthly",
            Self::YearlyHoroscope => "horoscope_yearly",
            Self::NatalChart => "natal_chart",
            Self::Numerology => "numerology",
            Self::Palmistry => "palmistry",
            Self::Matchmaking => "matchmaking",
            Self::Geocode => "geocode",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps content kinds to lifetimes; `None` never expires.
///
/// The defaults keep TTL monotone in content volatility: daily readings
/// are the shortest-lived, readings derived from immutable birth facts
/// live for weeks, and geocoding results never expire. Individual kinds
/// can be overridden through [`TtlTable::with_ttl`].
#[derive(Debug, Clone, Default)]
pub struct TtlTable {
    overrides: HashMap<ContentKind, Option<Duration>>,
}

impl TtlTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the lifetime for one kind (`None` = never expires).
    pub fn with_ttl(mut self, kind: ContentKind, ttl: Option<Duration>) -> Self {
        self.overrides.insert(kind, ttl);
        self
    }

    pub fn ttl_for(&self, kind: ContentKind) -> Option<Duration> {
        if let Some(ttl) = self.overrides.get(&kind) {
            return *ttl;
        }
        match kind {
            ContentKind::DailyHoroscope => Some(hours(12)),
            ContentKind::WeeklyHoroscope => Some(hours(48)),
            ContentKind::MonthlyHoroscope => Some(hours(168)),
            ContentKind::YearlyHoroscope => Some(hours(720)),
            ContentKind::NatalChart => Some(hours(720)),
            ContentKind::Numerology => Some(hours(720)),
            ContentKind::Palmistry => Some(hours(168)),
            ContentKind::Matchmaking => Some(hours(168)),
            ContentKind::Geocode => None,
        }
    }
}
