//! Local numerology: no API key, no network.

use astrocast::{BirthData, NumerologyProfile};
use chrono::NaiveDate;

fn main() {
    let birth = BirthData::new(
        "Asha Rao",
        NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid date"),
        None,
        "Pune",
    );

    let profile = NumerologyProfile::compute(&birth, 2026);
    println!("life path:     {}", profile.life_path);
    println!("birth number:  {}", profile.birth_number);
    println!("expression:    {}", profile.expression);
    println!("personal year: {}", profile.personal_year);

    println!("loshu grid:");
    for row in profile.loshu.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|(digit, count)| match count {
                0 => "  .  ".to_string(),
                1 => format!("  {}  ", digit),
                n => format!(" {}x{} ", digit, n),
            })
            .collect();
        println!("  {}", cells.join("|"));
    }
    let missing = profile.loshu.missing_digits();
    println!("missing digits: {:?}", missing);
}
