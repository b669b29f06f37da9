//! Display formatting in the Indonesian locale.

use chrono::{Datelike, NaiveDate, Weekday};

/// Label shown for identifiers that are not in the catalog.
pub const UNKNOWN_LABEL: &str = "Unknown";

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// Format an amount as Rupiah, e.g. `Rp 12.345,5`.
///
/// Thousands are grouped with `.`, the decimal separator is `,`, and at most
/// two fraction digits are kept with trailing zeros dropped.
pub fn format_rupiah(amount: f64) -> String {
    format!("Rp {}", format_number(amount, 2))
}

/// Format a number with `.` grouping and up to `decimals` fraction digits.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac_part}")
    }
}

/// Format a fraction as a percentage with one decimal, e.g. `50.0%`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Long Indonesian date, e.g. `Senin, 6 Januari 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(6_240.0), "Rp 6.240");
        assert_eq!(format_rupiah(12_345.5), "Rp 12.345,5");
        assert_eq!(format_rupiah(1_234_567.891), "Rp 1.234.567,89");
        assert_eq!(format_rupiah(999.0), "Rp 999");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_number(-1_500.0, 2), "-1.500");
        assert_eq!(format_number(-0.001, 2), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.0%");
        assert_eq!(format_percent(2.0 / 3.0), "66.7%");
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(format_long_date(date), "Senin, 6 Januari 2025");

        let date = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
        assert_eq!(format_long_date(date), "Sabtu, 17 Agustus 2024");
    }
}
