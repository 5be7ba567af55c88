//! Numerology: the only locally computed readings.
//!
//! Core numbers (life path, birth number, expression, personal year) come
//! from digit-sum reduction of the birth facts; the Loshu grid lays the
//! birth-date digits out on the 3×3 magic square. Only the interpretation
//! of a profile goes to the model.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cache::{CacheKey, ContentKind};
use crate::client::AstrocastClient;
use crate::prompt::{json_system_instruction, Prompt};
use crate::types::birth::BirthData;
use crate::types::reading::NumerologyReading;
use crate::Result;

/// Pythagorean letter values: A J S → 1, B K T → 2, … I R → 9.
static LETTER_VALUES: Lazy<HashMap<char, u32>> = Lazy::new(|| {
    let mut values = HashMap::new();
    for (i, c) in ('a'..='z').enumerate() {
        values.insert(c, (i as u32 % 9) + 1);
    }
    values
});

/// Sum of decimal digits.
fn digit_sum(mut n: u64) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += (n % 10) as u32;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit, preserving the master numbers 11, 22 and 33.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && n != 11 && n != 22 && n != 33 {
        n = digit_sum(n as u64);
    }
    n
}

/// Reduce all the way to 1–9 (personal-year cycles have no masters).
fn reduce_plain(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n as u64);
    }
    n
}

/// Locally computed numerology profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Reduction of every digit of the birth date.
    pub life_path: u32,
    /// Reduction of the day of birth.
    pub birth_number: u32,
    /// Pythagorean reduction of the name.
    pub expression: u32,
    /// Cycle position for the reference year.
    pub personal_year: u32,
    pub loshu: LoshuGrid,
}

impl NumerologyProfile {
    /// Compute the profile; `reference_year` anchors the personal year.
    pub fn compute(birth: &BirthData, reference_year: i32) -> Self {
        let date = birth.date;
        let all_digits = digit_sum(date.day() as u64)
            + digit_sum(date.month() as u64)
            + digit_sum(date.year().unsigned_abs() as u64);

        let name_sum: u32 = birth
            .name
            .to_lowercase()
            .chars()
            .filter_map(|c| LETTER_VALUES.get(&c))
            .sum();

        let year_sum = digit_sum(date.day() as u64)
            + digit_sum(date.month() as u64)
            + digit_sum(reference_year.unsigned_abs() as u64);

        Self {
            life_path: reduce(all_digits),
            birth_number: reduce(digit_sum(date.day() as u64)),
            expression: reduce(name_sum),
            personal_year: reduce_plain(year_sum),
            loshu: LoshuGrid::from_date(date),
        }
    }
}

/// Occurrence counts of the birth-date digits 1–9, laid out on the Loshu
/// magic square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoshuGrid {
    counts: [u8; 9],
}

impl LoshuGrid {
    /// The magic-square placement of the digits.
    pub const LAYOUT: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

    /// Build the grid from the digits of a birth date (zeros have no
    /// cell and are skipped).
    pub fn from_date(date: chrono::NaiveDate) -> Self {
        let mut counts = [0u8; 9];
        let mut tally = |mut n: u64| {
            while n > 0 {
                let digit = (n % 10) as usize;
                if digit > 0 {
                    counts[digit - 1] = counts[digit - 1].saturating_add(1);
                }
                n /= 10;
            }
        };
        tally(date.day() as u64);
        tally(date.month() as u64);
        tally(date.year() as u64);
        Self { counts }
    }

    /// How many times `digit` (1–9) occurs.
    pub fn count(&self, digit: u8) -> u8 {
        match digit {
            1..=9 => self.counts[digit as usize - 1],
            _ => 0,
        }
    }

    /// Digits absent from the grid, ascending.
    pub fn missing_digits(&self) -> Vec<u8> {
        (1..=9).filter(|&d| self.count(d) == 0).collect()
    }

    /// The grid in magic-square layout as `(digit, count)` cells.
    pub fn rows(&self) -> [[(u8, u8); 3]; 3] {
        Self::LAYOUT.map(|row| row.map(|digit| (digit, self.count(digit))))
    }
}

impl AstrocastClient {
    /// Compute the numerology profile locally. No network, no cache.
    pub fn numerology_profile(&self, birth: &BirthData) -> NumerologyProfile {
        NumerologyProfile::compute(birth, Utc::now().year())
    }

    /// Model interpretation of the locally computed profile.
    pub async fn numerology_reading(&self, birth: &BirthData) -> Result<NumerologyReading> {
        let kind = ContentKind::Numerology;
        let key = CacheKey::compose(kind.name())
            .field("subject", birth.fingerprint())
            .field("language", self.language())
            .finish();

        let profile = self.numerology_profile(birth);
        let missing = profile
            .loshu
            .missing_digits()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let system = json_system_instruction(
            "a numerologist",
            r#"{"life_path": string, "birth_number": string, "expression": string, "loshu_grid": string, "summary": string}"#,
        );
        let user = format!(
            "Interpret this numerology profile for {}: life path {}, birth number {}, \
             expression {}, personal year {}. Missing Loshu digits: {}. Answer in {}.",
            birth.name,
            profile.life_path,
            profile.birth_number,
            profile.expression,
            profile.personal_year,
            if missing.is_empty() { "none".to_string() } else { missing },
            self.language()
        );

        self.cached_fetch(kind, key, Prompt::new(system, user))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn birth(name: &str, y: i32, m: u32, d: u32) -> BirthData {
        BirthData::new(name, date(y, m, d), None, "Pune")
    }

    #[test]
    fn digit_sum_basics() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(9), 9);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(123456789), 45);
    }

    #[test]
    fn reduction_preserves_masters() {
        assert_eq!(reduce(7), 7);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
        assert_eq!(reduce(29), 11); // 2+9 = 11, kept
        assert_eq!(reduce(39), 3); // 3+9 = 12 -> 3
    }

    #[test]
    fn life_path_known_values() {
        // 1+5 + 6 + 1+9+9+0 = 31 -> 4
        let profile = NumerologyProfile::compute(&birth("Asha", 1990, 6, 15), 2024);
        assert_eq!(profile.life_path, 4);

        // 2 + 1+1 + 1+9+8+0 = 22, a master number
        let profile = NumerologyProfile::compute(&birth("Asha", 1980, 11, 2), 2024);
        assert_eq!(profile.life_path, 22);
    }

    #[test]
    fn birth_number_keeps_master_days() {
        let profile = NumerologyProfile::compute(&birth("Asha", 1990, 6, 29), 2024);
        assert_eq!(profile.birth_number, 11); // 2+9
        let profile = NumerologyProfile::compute(&birth("Asha", 1990, 6, 15), 2024);
        assert_eq!(profile.birth_number, 6);
    }

    #[test]
    fn expression_uses_pythagorean_values() {
        // a=1 s=1 h=8 a=1 -> 11, kept as a master
        let profile = NumerologyProfile::compute(&birth("Asha", 1990, 6, 15), 2024);
        assert_eq!(profile.expression, 11);
        // Non-alphabetic characters are ignored.
        let with_noise = NumerologyProfile::compute(&birth("A-s h.a!", 1990, 6, 15), 2024);
        assert_eq!(with_noise.expression, 11);
    }

    #[test]
    fn personal_year_cycles_one_to_nine() {
        // day 15 -> 6, month 6 -> 6, 2024 -> 8; 20 -> 2
        let profile = NumerologyProfile::compute(&birth("Asha", 1990, 6, 15), 2024);
        assert_eq!(profile.personal_year, 2);
        assert!((1..=9).contains(&profile.personal_year));
    }

    #[test]
    fn loshu_counts_and_missing() {
        // 15-06-1990: digits 1,5,6,1,9,9 (zeros skipped)
        let grid = LoshuGrid::from_date(date(1990, 6, 15));
        assert_eq!(grid.count(1), 2);
        assert_eq!(grid.count(5), 1);
        assert_eq!(grid.count(6), 1);
        assert_eq!(grid.count(9), 2);
        assert_eq!(grid.missing_digits(), vec![2, 3, 4, 7, 8]);
    }

    #[test]
    fn loshu_layout_is_the_magic_square() {
        let grid = LoshuGrid::from_date(date(1990, 6, 15));
        let rows = grid.rows();
        let digits: Vec<u8> = rows.iter().flatten().map(|(d, _)| *d).collect();
        assert_eq!(digits, vec![4, 9, 2, 3, 5, 7, 8, 1, 6]);
        // Every row, column and diagonal of the layout sums to 15.
        for row in LoshuGrid::LAYOUT {
            assert_eq!(row.iter().map(|&d| d as u32).sum::<u32>(), 15);
        }
        for col in 0..3 {
            let sum: u32 = (0..3).map(|r| LoshuGrid::LAYOUT[r][col] as u32).sum();
            assert_eq!(sum, 15);
        }
    }

    #[test]
    fn profile_round_trips_through_serde() {
        let profile = NumerologyProfile::compute(&birth("Asha", 1990, 6, 15), 2024);
        let json = serde_json::to_string(&profile).expect("serialize");
        let back: NumerologyProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, profile);
    }
}
